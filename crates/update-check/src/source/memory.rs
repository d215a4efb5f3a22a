//! In-memory release source for tests and benchmarks.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::ReleaseSource;
use crate::error::SourceError;

/// Resource requested from the source, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    LatestVersion,
    Changelog(String),
}

#[derive(Debug, Default)]
struct InMemoryReleaseState {
    latest_version: Option<String>,
    changelogs: HashMap<String, String>,
    fail_latest_version: bool,
    fail_changelog: bool,
    fetches: Vec<Fetch>,
}

/// In-memory release source for testing.
///
/// Stored text is trimmed on read, the same way the HTTP source trims
/// response bodies.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReleaseSource {
    state: Arc<RwLock<InMemoryReleaseState>>,
}

impl InMemoryReleaseSource {
    /// Creates an empty source. Fetching the latest version fails until
    /// one is published.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source publishing `version`.
    pub fn with_latest(version: &str) -> Self {
        let source = Self::new();
        source.publish(version);
        source
    }

    /// Sets the published latest version.
    pub fn publish(&self, version: &str) {
        self.state.write().unwrap().latest_version = Some(version.to_string());
    }

    /// Stores the changelog for `version`.
    pub fn set_changelog(&self, version: &str, text: &str) {
        self.state
            .write()
            .unwrap()
            .changelogs
            .insert(version.to_string(), text.to_string());
    }

    /// Configures latest-version fetches to fail.
    pub fn set_fail_latest_version(&self, fail: bool) {
        self.state.write().unwrap().fail_latest_version = fail;
    }

    /// Configures changelog fetches to fail.
    pub fn set_fail_changelog(&self, fail: bool) {
        self.state.write().unwrap().fail_changelog = fail;
    }

    /// Returns every fetch made so far, in order.
    pub fn fetches(&self) -> Vec<Fetch> {
        self.state.read().unwrap().fetches.clone()
    }

    /// Forgets the fetches recorded so far.
    pub fn clear_fetches(&self) {
        self.state.write().unwrap().fetches.clear();
    }

    /// Returns the number of fetches made so far.
    pub fn fetch_count(&self) -> usize {
        self.state.read().unwrap().fetches.len()
    }
}

#[async_trait]
impl ReleaseSource for InMemoryReleaseSource {
    async fn latest_version(&self) -> Result<String, SourceError> {
        let mut state = self.state.write().unwrap();
        state.fetches.push(Fetch::LatestVersion);

        if state.fail_latest_version {
            return Err(SourceError::Unavailable("version fetch failed".to_string()));
        }

        let raw = state
            .latest_version
            .as_deref()
            .ok_or_else(|| SourceError::Status {
                url: "memory://version.txt".to_string(),
                status: 404,
            })?;
        Ok(raw.trim().to_string())
    }

    async fn changelog(&self, version: &str) -> Result<String, SourceError> {
        let mut state = self.state.write().unwrap();
        state.fetches.push(Fetch::Changelog(version.to_string()));

        if state.fail_changelog {
            return Err(SourceError::Unavailable(
                "changelog fetch failed".to_string(),
            ));
        }

        state
            .changelogs
            .get(version)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| SourceError::Status {
                url: format!("memory://changelog_{version}.txt"),
                status: 404,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_and_fetch() {
        let source = InMemoryReleaseSource::with_latest(" 1.1.0\n");
        source.set_changelog("1.1.0", "Bug fixes\n");

        let latest = source.latest_version().await.unwrap();
        assert_eq!(latest, "1.1.0");
        assert_eq!(source.changelog(&latest).await.unwrap(), "Bug fixes");
        assert_eq!(
            source.fetches(),
            vec![Fetch::LatestVersion, Fetch::Changelog("1.1.0".to_string())]
        );
    }

    #[tokio::test]
    async fn test_unpublished_version_is_an_error() {
        let source = InMemoryReleaseSource::new();
        assert!(matches!(
            source.latest_version().await,
            Err(SourceError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_blank_version_is_passed_through() {
        let source = InMemoryReleaseSource::with_latest("  \n");
        assert_eq!(source.latest_version().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_failure_switches() {
        let source = InMemoryReleaseSource::with_latest("2.0");
        source.set_changelog("2.0", "notes");

        source.set_fail_latest_version(true);
        assert!(source.latest_version().await.is_err());
        source.set_fail_latest_version(false);
        let latest = source.latest_version().await.unwrap();

        source.set_fail_changelog(true);
        assert!(source.changelog(&latest).await.is_err());
        assert_eq!(source.fetch_count(), 3);

        source.clear_fetches();
        assert!(source.fetches().is_empty());
    }
}
