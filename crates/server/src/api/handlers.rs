use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use hiresift_core::SanitizedConfig;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::metrics::{encode_metrics, CANDIDATE_POOL_SIZE};
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub ai_enabled: bool,
    pub total_candidates: usize,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let total_candidates = match state.store().load().await {
        Ok(candidates) => candidates.len(),
        Err(e) => {
            warn!("Health check could not read candidates: {}", e);
            0
        }
    };
    CANDIDATE_POOL_SIZE.set(total_candidates as i64);

    Json(HealthResponse {
        status: "healthy".to_string(),
        ai_enabled: state.engine().ai_enabled(),
        total_candidates,
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

/// GET /metrics
pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
