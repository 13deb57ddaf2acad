//! Candidate search API handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use hiresift_core::{
    filters_from_value, parse_query, LlmUsage, ParsedQuery, RankingResult, ScoredCandidate,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::error::ApiError;
use crate::metrics::CANDIDATE_POOL_SIZE;
use crate::state::AppState;

const EMPTY_POOL_MESSAGE: &str = "No candidates found in database";

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct BasicSearchRequest {
    #[serde(default)]
    pub job_description: String,
    /// Decoded strictly by the core so wrong types surface as 400s.
    #[serde(default)]
    pub filters: Value,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<ParsedQuery>,
    pub candidates: Vec<ScoredCandidate>,
    pub total: usize,
    pub ai_enabled: bool,
    pub method: String,
    pub ai_scored: usize,
    pub fallback_scored: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_usage: Option<LlmUsage>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchResponse {
    fn new(result: RankingResult, query: Option<ParsedQuery>, pool_size: usize) -> Self {
        Self {
            success: true,
            query,
            candidates: result.candidates,
            total: result.total,
            ai_enabled: result.ai_enabled,
            method: result.method,
            ai_scored: result.ai_scored,
            fallback_scored: result.fallback_scored,
            llm_usage: result.llm_usage,
            duration_ms: result.duration_ms,
            message: (pool_size == 0).then(|| EMPTY_POOL_MESSAGE.to_string()),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/search
///
/// Compile a natural-language query and rank the whole pool against it.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    if body.query.trim().is_empty() {
        return Err(ApiError::BadRequest("Query is required".to_string()));
    }

    let parsed = parse_query(&body.query);
    let candidates = state.store().load().await?;
    CANDIDATE_POOL_SIZE.set(candidates.len() as i64);

    info!(
        query = %body.query,
        confidence = parsed.confidence_score,
        pool = candidates.len(),
        "Search request"
    );

    let result = state.engine().search(&parsed, &candidates).await;
    Ok(Json(SearchResponse::new(result, Some(parsed), candidates.len())))
}

/// POST /api/v1/search/basic
///
/// Apply hard filters, then rank the remaining candidates against a
/// free-form job description.
pub async fn search_basic(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BasicSearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    if body.job_description.trim().is_empty() {
        return Err(ApiError::BadRequest("Job description is required".to_string()));
    }

    let filters = filters_from_value(body.filters)?;
    let candidates = state.store().load().await?;
    CANDIDATE_POOL_SIZE.set(candidates.len() as i64);

    let result = state
        .engine()
        .search_filtered(&body.job_description, &filters, &candidates)
        .await;
    Ok(Json(SearchResponse::new(result, None, candidates.len())))
}
