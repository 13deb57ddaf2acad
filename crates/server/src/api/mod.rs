pub mod analytics;
pub mod error;
pub mod handlers;
pub mod jobs;
pub mod middleware;
pub mod query;
pub mod routes;
pub mod search;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
