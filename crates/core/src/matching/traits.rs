//! Scorer trait shared by both strategies.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::candidate::Candidate;
use crate::llm::{LlmError, LlmUsage};
use crate::matching::criteria::MatchCriteria;
use crate::matching::types::MatchScore;

/// Errors that can occur while scoring one candidate.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("No JSON object in response")]
    NoJson,

    #[error("Invalid score JSON: {0}")]
    InvalidJson(String),

    #[error("Scoring timed out after {0:?}")]
    Timeout(Duration),
}

impl ScoringError {
    /// Short label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ScoringError::Llm(_) => "llm",
            ScoringError::NoJson => "no_json",
            ScoringError::InvalidJson(_) => "invalid_json",
            ScoringError::Timeout(_) => "timeout",
        }
    }
}

/// Score plus whatever the scorer spent producing it.
#[derive(Debug, Clone)]
pub struct ScorerOutput {
    pub score: MatchScore,
    pub llm_usage: Option<LlmUsage>,
}

/// Trait for scoring a candidate against a job.
///
/// Implementations may call out to a model or compute locally.
#[async_trait]
pub trait Scorer: Send + Sync {
    /// Name of this scorer for logging.
    fn name(&self) -> &str;

    async fn score(
        &self,
        candidate: &Candidate,
        job_description: &str,
        criteria: &MatchCriteria,
    ) -> Result<ScorerOutput, ScoringError>;
}
