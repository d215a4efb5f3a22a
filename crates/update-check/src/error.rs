//! Update check error types.

use thiserror::Error;

/// Errors raised while fetching a resource from the release source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// The upstream answered with a non-success status.
    #[error("Upstream returned {status} for {url}")]
    Status { url: String, status: u16 },

    /// The source is unreachable for any other reason.
    #[error("Release source unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    /// Wraps a reqwest error, keeping timeouts distinct.
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout {
                url: url.to_string(),
            }
        } else {
            SourceError::Http {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Errors that end a version check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The request did not carry a usable client version.
    #[error("Missing version parameter")]
    InvalidRequest,

    /// The latest version could not be fetched.
    #[error("Could not fetch latest version: {0}")]
    UpstreamUnavailable(#[from] SourceError),
}

/// Errors found while validating a [`ReleaseConfig`](crate::ReleaseConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The base URL is empty or not an http(s) URL.
    #[error("Invalid base URL: {0:?}")]
    InvalidBaseUrl(String),

    /// A file template does not contain the `{version}` placeholder.
    #[error("Template {name} must contain {{version}}: {template:?}")]
    MissingPlaceholder { name: &'static str, template: String },

    /// The version file name is empty.
    #[error("Version file name must not be empty")]
    EmptyVersionFile,

    /// The "up to date" code is empty.
    #[error("Up-to-date code must not be empty")]
    EmptyUpToDateCode,

    /// The fetch timeout is zero.
    #[error("Timeout must be greater than zero")]
    ZeroTimeout,
}

/// Convenience type alias for check results.
pub type Result<T> = std::result::Result<T, CheckError>;
