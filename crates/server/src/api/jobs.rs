//! Job description analysis API handler.

use axum::{extract::State, Json};
use hiresift_core::JobAnalysis;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeJobRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeJobResponse {
    pub success: bool,
    pub analysis: JobAnalysis,
    pub ai_enabled: bool,
}

/// POST /api/v1/jobs/analyze
///
/// An AI failure still answers 200 with the keyword analysis; only blank or
/// too-short descriptions are rejected.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeJobRequest>,
) -> Result<Json<AnalyzeJobResponse>, ApiError> {
    if body.job_description.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Job description is required".to_string(),
        ));
    }

    let analyzer = state.analyzer();
    let analysis = analyzer.analyze(&body.job_description).await?;

    Ok(Json(AnalyzeJobResponse {
        success: true,
        analysis,
        ai_enabled: analyzer.ai_enabled(),
    }))
}
