//! Ranking engine: concurrent scoring plus ordering.

use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::candidate::Candidate;
use crate::config::MatchingConfig;
use crate::llm::LlmUsage;
use crate::matching::criteria::MatchCriteria;
use crate::matching::deterministic::DeterministicScorer;
use crate::matching::filter::apply_filters;
use crate::matching::ranker;
use crate::matching::strategy::{Strategy, StrategyOutcome};
use crate::matching::types::{RankingResult, ScoredCandidate, ScoringMethod};
use crate::metrics;
use crate::query::{ParsedQuery, QueryFilters};

/// Scores and orders candidate pools with a fixed strategy.
///
/// The candidate pool is read-only input; nothing is shared mutably while
/// scoring.
pub struct MatchEngine {
    strategy: Strategy,
    deterministic: DeterministicScorer,
    config: MatchingConfig,
}

impl MatchEngine {
    pub fn new(strategy: Strategy, config: MatchingConfig) -> Self {
        Self {
            strategy,
            deterministic: DeterministicScorer::new(),
            config,
        }
    }

    /// Replace the local scorer (used for fallback as well).
    pub fn with_deterministic_scorer(mut self, scorer: DeterministicScorer) -> Self {
        self.deterministic = scorer;
        self
    }

    pub fn ai_enabled(&self) -> bool {
        self.strategy.is_ai()
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Primary path: score the whole pool against a compiled query.
    pub async fn search(&self, parsed: &ParsedQuery, candidates: &[Candidate]) -> RankingResult {
        let criteria = MatchCriteria::from_parsed(parsed);
        self.rank(&parsed.job_description, &criteria, candidates).await
    }

    /// Basic path: hard filters first, then score what is left.
    pub async fn search_filtered(
        &self,
        job_description: &str,
        filters: &QueryFilters,
        candidates: &[Candidate],
    ) -> RankingResult {
        let kept = apply_filters(candidates, filters);
        debug!(
            before = candidates.len(),
            after = kept.len(),
            "Applied hard filters"
        );
        let criteria = MatchCriteria::from_filters(filters);
        self.rank(job_description, &criteria, &kept).await
    }

    /// Score every candidate and order best first.
    pub async fn rank(
        &self,
        job_description: &str,
        criteria: &MatchCriteria,
        candidates: &[Candidate],
    ) -> RankingResult {
        if candidates.is_empty() {
            return RankingResult::empty(self.ai_enabled());
        }

        let start = Instant::now();
        let timeout = Duration::from_secs(self.config.ai_timeout_secs);

        let mut outcomes: Vec<(usize, StrategyOutcome)> = stream::iter(0..candidates.len())
            .map(|idx| {
                let candidate = &candidates[idx];
                async move {
                let outcome = self
                    .strategy
                    .score(&self.deterministic, candidate, job_description, criteria, timeout)
                    .await;
                (idx, outcome)
                }
            })
            .buffer_unordered(self.config.max_concurrency.max(1))
            .collect()
            .await;

        // Completion order is arbitrary; restore input order before ranking
        outcomes.sort_by_key(|(idx, _)| *idx);

        let mut ai_scored = 0;
        let mut fallback_scored = 0;
        let mut usage = LlmUsage::default();

        let scored: Vec<ScoredCandidate> = outcomes
            .into_iter()
            .map(|(idx, outcome)| {
                match outcome.method {
                    ScoringMethod::Ai => ai_scored += 1,
                    ScoringMethod::Fallback => fallback_scored += 1,
                    ScoringMethod::Deterministic => {}
                }
                if let Some(u) = &outcome.llm_usage {
                    usage.add(u);
                }
                metrics::CANDIDATES_SCORED
                    .with_label_values(&[outcome.method.as_str()])
                    .inc();

                ScoredCandidate::new(candidates[idx].clone(), outcome.score, outcome.method)
            })
            .collect();

        let ranked = ranker::rank(scored);
        let elapsed = start.elapsed();

        metrics::RANKING_DURATION
            .with_label_values(&[self.strategy.name()])
            .observe(elapsed.as_secs_f64());

        info!(
            strategy = self.strategy.name(),
            candidates = ranked.len(),
            ai_scored,
            fallback_scored,
            top_score = ranked.first().map(|c| c.score.match_score).unwrap_or(0),
            duration_ms = elapsed.as_millis() as u64,
            "Ranked candidates"
        );

        RankingResult {
            total: ranked.len(),
            candidates: ranked,
            ai_enabled: self.ai_enabled(),
            method: self.strategy.name().to_string(),
            ai_scored,
            fallback_scored,
            llm_usage: if usage.is_empty() { None } else { Some(usage) },
            duration_ms: elapsed.as_millis() as u64,
        }
    }
}
