//! Scoring strategy, chosen once at startup.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::candidate::Candidate;
use crate::config::MatchingConfig;
use crate::llm::LlmUsage;
use crate::matching::ai::AiScorer;
use crate::matching::criteria::MatchCriteria;
use crate::matching::deterministic::DeterministicScorer;
use crate::matching::traits::{Scorer, ScoringError};
use crate::matching::types::{MatchScore, ScoringMethod};
use crate::metrics;

/// How candidates get scored for the lifetime of the process.
#[derive(Clone)]
pub enum Strategy {
    /// Delegate to this scorer, falling back per candidate on failure.
    Ai(Arc<dyn Scorer>),
    /// Local scoring only.
    Deterministic,
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Ai(scorer) => f.debug_tuple("Ai").field(&scorer.name()).finish(),
            Strategy::Deterministic => f.write_str("Deterministic"),
        }
    }
}

/// One candidate's score and how it was produced.
#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub score: MatchScore,
    pub method: ScoringMethod,
    pub llm_usage: Option<LlmUsage>,
}

impl Strategy {
    pub fn is_ai(&self) -> bool {
        matches!(self, Strategy::Ai(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Ai(_) => "ai",
            Strategy::Deterministic => "deterministic",
        }
    }

    /// Score one candidate. Never fails: AI errors and timeouts degrade to
    /// the deterministic scorer for this candidate only.
    pub async fn score(
        &self,
        deterministic: &DeterministicScorer,
        candidate: &Candidate,
        job_description: &str,
        criteria: &MatchCriteria,
        timeout: Duration,
    ) -> StrategyOutcome {
        let scorer = match self {
            Strategy::Deterministic => {
                return StrategyOutcome {
                    score: deterministic.score_candidate(candidate, criteria),
                    method: ScoringMethod::Deterministic,
                    llm_usage: None,
                }
            }
            Strategy::Ai(scorer) => scorer,
        };

        let result = tokio::time::timeout(timeout, scorer.score(candidate, job_description, criteria))
            .await
            .unwrap_or(Err(ScoringError::Timeout(timeout)));

        match result {
            Ok(output) => StrategyOutcome {
                score: output.score,
                method: ScoringMethod::Ai,
                llm_usage: output.llm_usage,
            },
            Err(e) => {
                warn!(
                    candidate = %candidate.id,
                    reason = e.reason(),
                    "AI scoring failed, falling back to deterministic: {}",
                    e
                );
                metrics::AI_FALLBACKS.with_label_values(&[e.reason()]).inc();
                StrategyOutcome {
                    score: deterministic.score_candidate(candidate, criteria),
                    method: ScoringMethod::Fallback,
                    llm_usage: None,
                }
            }
        }
    }
}

/// Decides once whether AI scoring is usable.
pub struct StrategySelector;

impl StrategySelector {
    /// Probe the AI scorer's service. Absence, failure or a slow probe all
    /// select deterministic scoring for good.
    pub async fn select(scorer: Option<AiScorer>, config: &MatchingConfig) -> Strategy {
        let Some(scorer) = scorer else {
            info!("No LLM configured, using deterministic scoring");
            return Strategy::Deterministic;
        };

        let provider = scorer.client().provider().to_string();
        let model = scorer.client().model().to_string();
        let budget = Duration::from_secs(config.probe_timeout_secs);

        match tokio::time::timeout(budget, scorer.client().probe()).await {
            Ok(Ok(())) => {
                info!(provider = %provider, model = %model, "AI scoring enabled");
                Strategy::Ai(Arc::new(scorer))
            }
            Ok(Err(e)) => {
                warn!(
                    provider = %provider,
                    "LLM probe failed, using deterministic scoring: {}",
                    e
                );
                Strategy::Deterministic
            }
            Err(_) => {
                warn!(
                    provider = %provider,
                    "LLM probe timed out after {:?}, using deterministic scoring",
                    budget
                );
                Strategy::Deterministic
            }
        }
    }
}
