//! HTTP route handlers.

pub mod check;
pub mod health;
pub mod metrics;

use crate::error::ApiError;

/// Fallback for every unrecognised path.
pub async fn not_found() -> ApiError {
    ::metrics::counter!("route_not_found_total").increment(1);
    ApiError::NotFound("Not Found".to_string())
}
