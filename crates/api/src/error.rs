//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use update_check::CheckError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Version check error.
    #[error(transparent)]
    Check(#[from] CheckError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Check(err) => check_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn check_error_to_response(err: CheckError) -> (StatusCode, String) {
    match &err {
        CheckError::InvalidRequest => (StatusCode::BAD_REQUEST, err.to_string()),
        CheckError::UpstreamUnavailable(source) => {
            tracing::error!(error = %source, "latest version fetch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use update_check::SourceError;

    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::NotFound("Not Found".into()), StatusCode::NOT_FOUND),
            (
                ApiError::Check(CheckError::InvalidRequest),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Check(CheckError::UpstreamUnavailable(SourceError::Timeout {
                    url: "http://host/version.txt".into(),
                })),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
