//! Version check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use update_check::{CheckResponse, HttpReleaseSource, ReleaseSource, UpdateChecker};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ReleaseSource = HttpReleaseSource> {
    pub checker: UpdateChecker<S>,
}

#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub version: Option<String>,
}

/// GET /check?version=<v> — compare the client version with the latest release.
///
/// Up to date answers with the plain-text sentinel code; otherwise the
/// update metadata is returned as JSON.
#[tracing::instrument(skip(state, params))]
pub async fn check<S: ReleaseSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    params: Result<Query<CheckParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let version = match &params {
        Ok(Query(params)) => params.version.as_deref(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable query string");
            None
        }
    };

    let response = match state.checker.check(version).await? {
        CheckResponse::UpToDate { code } => {
            ([(header::CONTENT_TYPE, "text/plain")], code).into_response()
        }
        CheckResponse::UpdateAvailable(info) => Json(info).into_response(),
    };
    Ok(response)
}
