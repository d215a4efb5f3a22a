//! Release source backed by a static file host over HTTP.

use std::sync::Arc;

use async_trait::async_trait;

use super::ReleaseSource;
use crate::config::ReleaseConfig;
use crate::error::SourceError;

/// Fetches release files with a shared `reqwest` client.
///
/// The client pools connections and is cheap to clone, so one instance
/// serves every request. Each fetch is bounded by the configured timeout
/// and uses standard certificate validation.
#[derive(Debug, Clone)]
pub struct HttpReleaseSource {
    client: reqwest::Client,
    config: Arc<ReleaseConfig>,
}

impl HttpReleaseSource {
    /// Builds a source with a client bounded by `config.timeout()`.
    pub fn new(config: impl Into<Arc<ReleaseConfig>>) -> Result<Self, SourceError> {
        let config = config.into();
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("update-check/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Unavailable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Returns the configuration the source was built with.
    pub fn config(&self) -> &Arc<ReleaseConfig> {
        &self.config
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::from_reqwest(url, e))?;
        Ok(body.trim().to_string())
    }
}

#[async_trait]
impl ReleaseSource for HttpReleaseSource {
    #[tracing::instrument(skip(self))]
    async fn latest_version(&self) -> Result<String, SourceError> {
        let url = self.config.version_url();
        let started = std::time::Instant::now();
        let result = self.fetch_text(&url).await;
        metrics::histogram!("upstream_fetch_duration_seconds", "resource" => "version")
            .record(started.elapsed().as_secs_f64());

        let version = result?;
        if version.is_empty() {
            tracing::warn!(%url, "published version file is blank");
        }
        tracing::debug!(%version, "fetched latest version");
        Ok(version)
    }

    #[tracing::instrument(skip(self))]
    async fn changelog(&self, version: &str) -> Result<String, SourceError> {
        let url = self.config.changelog_url(version);
        let started = std::time::Instant::now();
        let result = self.fetch_text(&url).await;
        metrics::histogram!("upstream_fetch_duration_seconds", "resource" => "changelog")
            .record(started.elapsed().as_secs_f64());
        result
    }
}
