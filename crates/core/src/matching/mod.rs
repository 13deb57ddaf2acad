//! Candidate scoring and ranking.
//!
//! Two interchangeable strategies produce the same `MatchScore` shape:
//! AI-delegated scoring through an [`LlmClient`](crate::llm::LlmClient), and
//! a local multi-factor scorer that also serves as the per-candidate
//! fallback. The strategy is chosen once by [`StrategySelector`] and injected
//! into [`MatchEngine`].

mod ai;
mod criteria;
mod deterministic;
mod engine;
mod filter;
mod json_extract;
mod prompts;
mod ranker;
mod strategy;
mod traits;
mod types;

pub use ai::AiScorer;
pub use criteria::{MatchCriteria, Seniority};
pub use deterministic::{DeterministicScorer, DeterministicScorerConfig};
pub use engine::MatchEngine;
pub use filter::{apply_filters, filters_from_value};
pub use json_extract::extract_json_object;
pub use prompts::{candidate_summary, scoring_prompt, SYSTEM_PROMPT};
pub use ranker::rank;
pub use strategy::{Strategy, StrategyOutcome, StrategySelector};
pub use traits::{Scorer, ScorerOutput, ScoringError};
pub use types::{
    MatchError, MatchScore, OverallFit, RankingResult, ScoredCandidate, ScoringMethod,
    MAX_CONCERNS, MAX_REASONS,
};
