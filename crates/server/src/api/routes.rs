use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{analytics, handlers, jobs, middleware::metrics_middleware, query, search};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Query compiler
        .route("/query/parse", post(query::parse))
        .route("/query/validate", post(query::validate))
        .route("/query/examples", get(query::examples))
        // Candidate search
        .route("/search", post(search::search))
        .route("/search/basic", post(search::search_basic))
        // Job description analysis
        .route("/jobs/analyze", post(jobs::analyze))
        // Pool analytics
        .route("/analytics", get(analytics::get_analytics))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
