//! Job analysis result types.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::{LlmError, LlmUsage};

/// Shortest job description worth analysing, in characters after trimming.
pub const MIN_JOB_DESCRIPTION_LEN: usize = 10;

/// Errors from job analysis.
///
/// Only `TooShort` leaves [`JobAnalyzer::analyze`](super::JobAnalyzer::analyze);
/// the others describe a failed AI attempt and end up in
/// [`JobAnalysis::error`] after the keyword fallback runs.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Job description too short or empty")]
    TooShort,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("No JSON object in response")]
    NoJson,

    #[error("Invalid analysis JSON: {0}")]
    InvalidJson(String),

    #[error("Analysis timed out after {0:?}")]
    Timeout(Duration),
}

impl AnalysisError {
    /// Short label for logs.
    pub fn reason(&self) -> &'static str {
        match self {
            AnalysisError::TooShort => "too_short",
            AnalysisError::Llm(_) => "llm",
            AnalysisError::NoJson => "no_json",
            AnalysisError::InvalidJson(_) => "invalid_json",
            AnalysisError::Timeout(_) => "timeout",
        }
    }
}

/// How an analysis was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    /// Answered by the external AI service.
    Ai,
    /// AI was enabled but failed; keyword analysis used instead.
    Fallback,
    /// AI was not enabled.
    Keyword,
}

impl AnalysisMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMethod::Ai => "ai",
            AnalysisMethod::Fallback => "fallback",
            AnalysisMethod::Keyword => "keyword",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub min_experience_years: u32,
    /// "phd", "master", "bachelor" or "not specified".
    pub education_level: String,
    /// "entry", "mid", "senior" or "management".
    pub job_level: String,
}

/// Employment facts about the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetails {
    pub job_type: String,
    pub industry: String,
    /// "remote", "hybrid" or "on-site".
    pub remote_work: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub for_candidates: Vec<String>,
    #[serde(default)]
    pub for_recruiters: Vec<String>,
}

/// Size figures computed locally for every analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub reading_level: String,
    /// Half the word count, capped at 100.
    pub completeness_score: u32,
}

/// Structured reading of a job description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobAnalysis {
    pub requirements: JobRequirements,
    pub analysis: JobDetails,
    pub key_responsibilities: Vec<String>,
    pub recommendations: Recommendations,
    pub metrics: TextMetrics,
    pub method: AnalysisMethod,
    pub ai_powered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Why the AI attempt failed, for fallback results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_usage: Option<LlmUsage>,
}
