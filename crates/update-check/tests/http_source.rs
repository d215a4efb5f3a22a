//! Integration tests for the HTTP release source against a local upstream.

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use update_check::{
    CheckResponse, HttpReleaseSource, ReleaseConfig, ReleaseSource, SourceError, UpdateChecker,
};

/// Serves `router` on an ephemeral loopback port and returns its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn source(base: &str, timeout_ms: u64) -> HttpReleaseSource {
    let config = ReleaseConfig {
        timeout_ms,
        ..ReleaseConfig::with_base_url(base)
    };
    HttpReleaseSource::new(config).unwrap()
}

#[tokio::test]
async fn test_fetches_and_trims_version() {
    let base = spawn_upstream(Router::new().route("/version.txt", get(|| async { "  1.1.0\n" })))
        .await;

    let latest = source(&base, 2_000).latest_version().await.unwrap();
    assert_eq!(latest, "1.1.0");
}

#[tokio::test]
async fn test_fetches_and_trims_changelog() {
    let base = spawn_upstream(Router::new().route(
        "/changelog_1.1.0.txt",
        get(|| async { "\nBug fixes\nFaster swinging\n\n" }),
    ))
    .await;

    let text = source(&base, 2_000).changelog("1.1.0").await.unwrap();
    assert_eq!(text, "Bug fixes\nFaster swinging");
}

#[tokio::test]
async fn test_missing_file_is_status_error() {
    let base = spawn_upstream(Router::new()).await;

    let err = source(&base, 2_000).latest_version().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let base = spawn_upstream(Router::new().route(
        "/version.txt",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "1.0.0") }),
    ))
    .await;

    let err = source(&base, 2_000).latest_version().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_blank_version_file_is_fetched_as_empty() {
    let base = spawn_upstream(Router::new().route("/version.txt", get(|| async { " \n" }))).await;

    let latest = source(&base, 2_000).latest_version().await.unwrap();
    assert_eq!(latest, "");
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let base = spawn_upstream(Router::new().route(
        "/version.txt",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "1.0.0"
        }),
    ))
    .await;

    let err = source(&base, 200).latest_version().await.unwrap_err();
    assert!(matches!(err, SourceError::Timeout { .. }));
}

#[tokio::test]
async fn test_checker_over_http() {
    let base = spawn_upstream(
        Router::new()
            .route("/version.txt", get(|| async { "1.1.0\n" }))
            .route("/changelog_1.1.0.txt", get(|| async { "Bug fixes\n" })),
    )
    .await;

    let src = source(&base, 2_000);
    let checker = UpdateChecker::new(src.clone(), src.config().clone());
    assert!(std::ptr::eq(
        checker.config(),
        checker.source().config().as_ref()
    ));

    let response = checker.check(Some("1.0.0")).await.unwrap();
    let CheckResponse::UpdateAvailable(info) = response else {
        panic!("expected update");
    };
    assert_eq!(info.version, "1.1.0");
    assert_eq!(info.changelog, "Bug fixes");
    assert_eq!(
        info.download_url,
        format!("{base}/spiderman_chisti_1.1.0.apk")
    );

    let response = checker.check(Some("1.1.0")).await.unwrap();
    assert_eq!(
        response,
        CheckResponse::UpToDate {
            code: "63887".to_string()
        }
    );
}
