//! Update checker comparing a client version with the published release.

use std::sync::Arc;

use common::VersionString;

use crate::config::ReleaseConfig;
use crate::error::CheckError;
use crate::response::{CheckResponse, UpdateInfo};
use crate::source::ReleaseSource;

/// A validated version check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub client_version: VersionString,
}

impl CheckRequest {
    /// Creates a request for an already validated version.
    pub fn new(client_version: VersionString) -> Self {
        Self { client_version }
    }

    /// Builds a request from the raw `version` query parameter.
    ///
    /// The value is taken verbatim: it is not trimmed or normalized. Only
    /// an absent or empty value is rejected.
    pub fn from_query(version: Option<&str>) -> Result<Self, CheckError> {
        version
            .and_then(|raw| VersionString::new(raw).ok())
            .map(Self::new)
            .ok_or(CheckError::InvalidRequest)
    }
}

/// Answers version checks against a [`ReleaseSource`].
///
/// Holds only immutable configuration and the source, so a single instance
/// is shared by every concurrently handled request. When the source is
/// itself configured (as [`HttpReleaseSource`](crate::HttpReleaseSource)
/// is), pass it the same `Arc` so fetch and download URLs come from one
/// configuration.
pub struct UpdateChecker<S: ReleaseSource> {
    source: S,
    config: Arc<ReleaseConfig>,
}

impl<S: ReleaseSource> UpdateChecker<S> {
    /// Creates a checker reading releases from `source`.
    pub fn new(source: S, config: impl Into<Arc<ReleaseConfig>>) -> Self {
        Self {
            source,
            config: config.into(),
        }
    }

    /// Returns a reference to the underlying release source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the configuration the checker answers with.
    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    /// Validates the raw `version` parameter and runs the check.
    ///
    /// Records the `update_checks_total` counter for every outcome,
    /// including rejected requests.
    pub async fn check(&self, version: Option<&str>) -> Result<CheckResponse, CheckError> {
        let result = match CheckRequest::from_query(version) {
            Ok(request) => self.check_version(&request).await,
            Err(err) => Err(err),
        };

        let outcome = match &result {
            Ok(response) => response.outcome(),
            Err(CheckError::InvalidRequest) => "invalid_request",
            Err(CheckError::UpstreamUnavailable(_)) => "upstream_unavailable",
        };
        metrics::counter!("update_checks_total", "outcome" => outcome).increment(1);

        result
    }

    /// Compares the client version with the latest published one.
    ///
    /// Fails only when the latest version cannot be fetched. Any mismatch,
    /// whichever version is "newer", yields an update; that includes a blank
    /// published version, which never equals a validated client version.
    /// The changelog is fetched only on mismatch and falls back to the
    /// configured placeholder when it cannot be fetched.
    #[tracing::instrument(skip(self, request), fields(client_version = %request.client_version))]
    pub async fn check_version(&self, request: &CheckRequest) -> Result<CheckResponse, CheckError> {
        let latest = self.source.latest_version().await?;

        if request.client_version.as_str() == latest {
            tracing::debug!(%latest, "client is up to date");
            return Ok(CheckResponse::UpToDate {
                code: self.config.up_to_date_code.clone(),
            });
        }

        let changelog = match self.source.changelog(&latest).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, %latest, "changelog unavailable, using placeholder");
                metrics::counter!("changelog_fallbacks_total").increment(1);
                self.config.changelog_placeholder.clone()
            }
        };

        tracing::info!(%latest, "update available");
        let download_url = self.config.download_url(&latest);
        Ok(CheckResponse::UpdateAvailable(UpdateInfo::new(
            latest,
            download_url,
            changelog,
        )))
    }
}
