use axum::{extract::State, Json};
use hiresift_core::{pool_analytics, PoolAnalytics};
use serde::Serialize;
use std::sync::Arc;

use super::error::ApiError;
use crate::metrics::CANDIDATE_POOL_SIZE;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub analytics: PoolAnalytics,
}

/// GET /api/v1/analytics
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let candidates = state.store().load().await?;
    CANDIDATE_POOL_SIZE.set(candidates.len() as i64);

    Ok(Json(AnalyticsResponse {
        success: true,
        analytics: pool_analytics(&candidates),
    }))
}
