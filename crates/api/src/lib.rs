//! HTTP server answering update checks, with observability.
//!
//! Exposes `GET /check?version=<v>` backed by an [`UpdateChecker`], plus
//! `/health` and Prometheus `/metrics`, with structured logging (tracing)
//! and permissive CORS for browser clients.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{Method, header};
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use update_check::{
    ConfigError, HttpReleaseSource, ReleaseConfig, ReleaseSource, SourceError, UpdateChecker,
};

use routes::check::AppState;

/// Errors that prevent the server state from being built.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid release configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to create release source: {0}")]
    Source(#[from] SourceError),
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ReleaseSource + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/check", get(routes::check::check::<S>))
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state around an arbitrary release source.
pub fn create_state<S: ReleaseSource>(
    source: S,
    release: impl Into<Arc<ReleaseConfig>>,
) -> Arc<AppState<S>> {
    Arc::new(AppState {
        checker: UpdateChecker::new(source, release),
    })
}

/// Creates the default application state reading releases over HTTP.
///
/// The source and the checker share one configuration, so fetch URLs and
/// the advertised download URL always come from the same base.
pub fn create_default_state(
    release: ReleaseConfig,
) -> Result<Arc<AppState<HttpReleaseSource>>, StartupError> {
    release.validate()?;
    let release = Arc::new(release);
    let source = HttpReleaseSource::new(Arc::clone(&release))?;
    Ok(create_state(source, release))
}
