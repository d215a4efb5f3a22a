//! Release source configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Placeholder substituted into file templates.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Where releases are published and how the check answers.
///
/// All URLs are derived from `base_url` joined with a file name. The
/// changelog and download file names are templates containing
/// [`VERSION_PLACEHOLDER`].
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseConfig {
    /// Base URL of the static release host
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// File holding the latest published version
    #[serde(default = "default_version_file")]
    pub version_file: String,

    /// Changelog file name template
    #[serde(default = "default_changelog_template")]
    pub changelog_template: String,

    /// Downloadable artifact file name template
    #[serde(default = "default_download_template")]
    pub download_template: String,

    /// Body returned when the client is already on the latest version
    #[serde(default = "default_up_to_date_code")]
    pub up_to_date_code: String,

    /// Changelog text used when the changelog cannot be fetched
    #[serde(default = "default_changelog_placeholder")]
    pub changelog_placeholder: String,

    /// Timeout for each outbound fetch in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/uzairdeveloper223/spiderman-chisti-update/main".to_string()
}

fn default_version_file() -> String {
    "version.txt".to_string()
}

fn default_changelog_template() -> String {
    "changelog_{version}.txt".to_string()
}

fn default_download_template() -> String {
    "spiderman_chisti_{version}.apk".to_string()
}

fn default_up_to_date_code() -> String {
    "63887".to_string()
}

fn default_changelog_placeholder() -> String {
    "No changelog available".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version_file: default_version_file(),
            changelog_template: default_changelog_template(),
            download_template: default_download_template(),
            up_to_date_code: default_up_to_date_code(),
            changelog_placeholder: default_changelog_placeholder(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ReleaseConfig {
    /// Returns a default configuration pointing at another host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Checks that every URL can be derived and the answers are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() || !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.version_file.trim().is_empty() {
            return Err(ConfigError::EmptyVersionFile);
        }
        for (name, template) in [
            ("changelog", &self.changelog_template),
            ("download", &self.download_template),
        ] {
            if !template.contains(VERSION_PLACEHOLDER) {
                return Err(ConfigError::MissingPlaceholder {
                    name,
                    template: template.clone(),
                });
            }
        }
        if self.up_to_date_code.is_empty() {
            return Err(ConfigError::EmptyUpToDateCode);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Timeout applied to each outbound fetch.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// URL of the latest-version file.
    pub fn version_url(&self) -> String {
        self.join(&self.version_file)
    }

    /// URL of the changelog for `version`.
    pub fn changelog_url(&self, version: &str) -> String {
        self.join(&self.changelog_template.replace(VERSION_PLACEHOLDER, version))
    }

    /// URL of the downloadable artifact for `version`.
    pub fn download_url(&self, version: &str) -> String {
        self.join(&self.download_template.replace(VERSION_PLACEHOLDER, version))
    }

    fn join(&self, file: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            file.trim_start_matches('/')
        )
    }
}
