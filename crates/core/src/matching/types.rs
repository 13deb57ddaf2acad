//! Scored-candidate and ranking result types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::candidate::Candidate;
use crate::llm::LlmUsage;

/// Errors raised by callers passing malformed input.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),
}

/// Coarse bucket derived from the numeric match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallFit {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl OverallFit {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => OverallFit::Excellent,
            s if s >= 70 => OverallFit::Good,
            s if s >= 50 => OverallFit::Fair,
            _ => OverallFit::Poor,
        }
    }
}

/// Which path produced a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    /// Scored by the external AI service.
    Ai,
    /// AI was active but failed for this candidate.
    Fallback,
    /// AI was not active for this process.
    Deterministic,
}

impl ScoringMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMethod::Ai => "ai",
            ScoringMethod::Fallback => "fallback",
            ScoringMethod::Deterministic => "deterministic",
        }
    }
}

pub const MAX_REASONS: usize = 4;
pub const MAX_CONCERNS: usize = 3;

/// Score fields attached to a candidate. All numbers are 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub match_score: u32,
    pub skill_match: u32,
    pub experience_match: u32,
    pub location_match: u32,
    pub match_reasons: Vec<String>,
    pub concerns: Vec<String>,
    pub overall_fit: OverallFit,
}

impl MatchScore {
    /// Build a score, clamping numbers and trimming the text lists.
    pub fn new(
        match_score: u32,
        skill_match: u32,
        experience_match: u32,
        location_match: u32,
        mut match_reasons: Vec<String>,
        mut concerns: Vec<String>,
    ) -> Self {
        let match_score = match_score.min(100);
        match_reasons.truncate(MAX_REASONS);
        concerns.truncate(MAX_CONCERNS);
        Self {
            match_score,
            skill_match: skill_match.min(100),
            experience_match: experience_match.min(100),
            location_match: location_match.min(100),
            match_reasons,
            concerns,
            overall_fit: OverallFit::from_score(match_score),
        }
    }
}

/// Keys the score writes into the flat record.
const SCORE_KEYS: &[&str] = &[
    "match_score",
    "skill_match",
    "experience_match",
    "location_match",
    "match_reasons",
    "concerns",
    "overall_fit",
    "scoring_method",
];

/// A candidate annotated with its score. Serializes as one flat record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(flatten)]
    pub score: MatchScore,
    pub scoring_method: ScoringMethod,
}

impl ScoredCandidate {
    /// Attach a score, dropping stale score keys carried in the record's
    /// extra fields so each key appears once when serialized.
    pub fn new(mut candidate: Candidate, score: MatchScore, scoring_method: ScoringMethod) -> Self {
        for key in SCORE_KEYS {
            candidate.extra.remove(*key);
        }
        Self {
            candidate,
            score,
            scoring_method,
        }
    }
}

/// Result of one ranking call.
#[derive(Debug, Clone, Serialize)]
pub struct RankingResult {
    /// Ordered best first.
    pub candidates: Vec<ScoredCandidate>,
    pub total: usize,
    /// Whether the AI strategy was active for this call.
    pub ai_enabled: bool,
    /// "ai", "deterministic", or "none" for an empty pool.
    pub method: String,
    pub ai_scored: usize,
    pub fallback_scored: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_usage: Option<LlmUsage>,
    pub duration_ms: u64,
}

impl RankingResult {
    pub fn empty(ai_enabled: bool) -> Self {
        Self {
            candidates: Vec::new(),
            total: 0,
            ai_enabled,
            method: "none".to_string(),
            ai_scored: 0,
            fallback_scored: 0,
            llm_usage: None,
            duration_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_fit_thresholds() {
        assert_eq!(OverallFit::from_score(100), OverallFit::Excellent);
        assert_eq!(OverallFit::from_score(85), OverallFit::Excellent);
        assert_eq!(OverallFit::from_score(84), OverallFit::Good);
        assert_eq!(OverallFit::from_score(70), OverallFit::Good);
        assert_eq!(OverallFit::from_score(69), OverallFit::Fair);
        assert_eq!(OverallFit::from_score(50), OverallFit::Fair);
        assert_eq!(OverallFit::from_score(49), OverallFit::Poor);
        assert_eq!(OverallFit::from_score(0), OverallFit::Poor);
    }

    #[test]
    fn test_match_score_clamps_and_truncates() {
        let reasons = (0..6).map(|i| format!("reason {i}")).collect();
        let concerns = (0..5).map(|i| format!("concern {i}")).collect();
        let score = MatchScore::new(140, 101, 50, 0, reasons, concerns);

        assert_eq!(score.match_score, 100);
        assert_eq!(score.skill_match, 100);
        assert_eq!(score.overall_fit, OverallFit::Excellent);
        assert_eq!(score.match_reasons.len(), MAX_REASONS);
        assert_eq!(score.concerns.len(), MAX_CONCERNS);
        assert_eq!(score.match_reasons[0], "reason 0");
    }

    #[test]
    fn test_scored_candidate_serializes_flat() {
        let scored = ScoredCandidate {
            candidate: Candidate::new("c1", "Ada").with_skills(["Rust"]),
            score: MatchScore::new(72, 80, 60, 100, vec!["Knows Rust".into()], vec![]),
            scoring_method: ScoringMethod::Fallback,
        };

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "c1");
        assert_eq!(value["skills"][0], "Rust");
        assert_eq!(value["match_score"], 72);
        assert_eq!(value["overall_fit"], "good");
        assert_eq!(value["scoring_method"], "fallback");
    }

    #[test]
    fn test_stale_score_keys_are_dropped() {
        let mut candidate = Candidate::new("c1", "Ada");
        candidate.extra.insert("match_score".into(), serde_json::json!(12));
        candidate.extra.insert("overall_fit".into(), serde_json::json!("poor"));
        candidate.extra.insert("uploaded_at".into(), serde_json::json!("2024-01-01"));

        let scored = ScoredCandidate::new(
            candidate,
            MatchScore::new(90, 90, 90, 90, vec![], vec![]),
            ScoringMethod::Ai,
        );
        assert!(!scored.candidate.extra.contains_key("match_score"));

        let json = serde_json::to_string(&scored).unwrap();
        assert_eq!(json.matches("\"match_score\"").count(), 1);
        assert_eq!(json.matches("\"overall_fit\"").count(), 1);
        assert!(json.contains("\"uploaded_at\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["match_score"], 90);
        assert_eq!(value["overall_fit"], "excellent");
    }

    #[test]
    fn test_empty_result() {
        let result = RankingResult::empty(true);
        assert_eq!(result.total, 0);
        assert_eq!(result.method, "none");
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("llm_usage"));
    }
}
