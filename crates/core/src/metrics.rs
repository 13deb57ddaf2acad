//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Query compilation (confidence distribution)
//! - Ranking (scoring method, AI fallbacks, duration)
//! - Job description analysis
//! - External text-generation service (requests, tokens)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Query Compiler
// =============================================================================

/// Confidence score of compiled queries.
pub static QUERY_CONFIDENCE: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "hiresift_query_confidence",
            "Distribution of query compiler confidence scores",
        )
        .buckets(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]),
        &[],
    )
    .unwrap()
});

// =============================================================================
// Ranking
// =============================================================================

/// Candidates scored, by the method that produced the final score.
pub static CANDIDATES_SCORED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "hiresift_candidates_scored_total",
            "Total candidates scored",
        ),
        &["method"], // "ai", "fallback", "deterministic"
    )
    .unwrap()
});

/// Per-candidate AI failures that fell back to deterministic scoring.
pub static AI_FALLBACKS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "hiresift_ai_fallbacks_total",
            "Total per-candidate fallbacks from AI to deterministic scoring",
        ),
        &["reason"], // "llm", "timeout", "no_json", "invalid_json"
    )
    .unwrap()
});

/// Duration of a full ranking call.
pub static RANKING_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "hiresift_ranking_duration_seconds",
            "Duration of a ranking call",
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["strategy"],
    )
    .unwrap()
});

// =============================================================================
// Job Analysis
// =============================================================================

/// Job descriptions analysed, by how the result was produced.
pub static JOB_ANALYSES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "hiresift_job_analyses_total",
            "Total job descriptions analysed",
        ),
        &["method"], // "ai", "fallback", "keyword"
    )
    .unwrap()
});

// =============================================================================
// External Service Metrics
// =============================================================================

/// LLM requests total.
pub static LLM_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("hiresift_llm_requests_total", "Total LLM requests"),
        &["provider", "status"], // status: "success", "error"
    )
    .unwrap()
});

/// LLM tokens used.
pub static LLM_TOKENS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("hiresift_llm_tokens_total", "Total LLM tokens used"),
        &["provider", "direction"], // direction: "input", "output"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(QUERY_CONFIDENCE.clone()),
        Box::new(CANDIDATES_SCORED.clone()),
        Box::new(AI_FALLBACKS.clone()),
        Box::new(RANKING_DURATION.clone()),
        Box::new(JOB_ANALYSES.clone()),
        Box::new(LLM_REQUESTS.clone()),
        Box::new(LLM_TOKENS.clone()),
    ]
}
