//! Release source trait and its HTTP and in-memory implementations.

pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::error::SourceError;

pub use http::HttpReleaseSource;
pub use memory::{Fetch, InMemoryReleaseSource};

/// Upstream holding the published release metadata.
///
/// Implementations must be safe to share across concurrently handled
/// requests. Nothing is cached: every call hits the upstream.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the latest published version, trimmed.
    ///
    /// The text is passed through as published, so a blank version file
    /// yields an empty string rather than an error.
    async fn latest_version(&self) -> Result<String, SourceError>;

    /// Fetches the changelog text for `version`, trimmed.
    async fn changelog(&self, version: &str) -> Result<String, SourceError>;
}
