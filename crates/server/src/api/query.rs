//! Query compiler API handlers.

use axum::Json;
use hiresift_core::{parse_query, query_examples, validate_query, ParsedQuery, QueryValidation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<&'static str>,
}

/// POST /api/v1/query/parse
///
/// Compile a natural-language query. Never fails; an empty query yields an
/// empty parse with zero confidence.
pub async fn parse(Json(body): Json<QueryRequest>) -> Json<ParsedQuery> {
    Json(parse_query(&body.query))
}

/// POST /api/v1/query/validate
pub async fn validate(Json(body): Json<QueryRequest>) -> Json<QueryValidation> {
    Json(validate_query(&body.query))
}

/// GET /api/v1/query/examples
pub async fn examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: query_examples().to_vec(),
    })
}
