//! Application configuration loaded from environment variables.

use update_check::ReleaseConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8080`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `pretty` or `json` (default: `pretty`)
/// - `UPDATE_BASE_URL` — base URL of the static release host
/// - `UPDATE_VERSION_FILE` — latest-version file name (default: `version.txt`)
/// - `UPDATE_CHANGELOG_TEMPLATE` — changelog file template (default: `changelog_{version}.txt`)
/// - `UPDATE_DOWNLOAD_TEMPLATE` — artifact file template (default: `spiderman_chisti_{version}.apk`)
/// - `UPDATE_UP_TO_DATE_CODE` — body returned when up to date (default: `63887`)
/// - `UPDATE_CHANGELOG_PLACEHOLDER` — changelog used when it cannot be fetched
/// - `UPDATE_TIMEOUT_MS` — per-fetch timeout (default: `10000`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub release: ReleaseConfig,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ReleaseConfig::default();
        let release = ReleaseConfig {
            base_url: lookup("UPDATE_BASE_URL").unwrap_or(defaults.base_url),
            version_file: lookup("UPDATE_VERSION_FILE").unwrap_or(defaults.version_file),
            changelog_template: lookup("UPDATE_CHANGELOG_TEMPLATE")
                .unwrap_or(defaults.changelog_template),
            download_template: lookup("UPDATE_DOWNLOAD_TEMPLATE")
                .unwrap_or(defaults.download_template),
            up_to_date_code: lookup("UPDATE_UP_TO_DATE_CODE").unwrap_or(defaults.up_to_date_code),
            changelog_placeholder: lookup("UPDATE_CHANGELOG_PLACEHOLDER")
                .unwrap_or(defaults.changelog_placeholder),
            timeout_ms: lookup("UPDATE_TIMEOUT_MS")
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.timeout_ms),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            release,
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            release: ReleaseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.release.up_to_date_code, "63887");
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9090,
            ..Default::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_empty_lookup_matches_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.release.base_url, ReleaseConfig::default().base_url);
        assert_eq!(config.release.timeout_ms, 10_000);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("LOG_FORMAT", "json"),
            ("UPDATE_BASE_URL", "http://mirror.local/app"),
            ("UPDATE_DOWNLOAD_TEMPLATE", "app-{version}.apk"),
            ("UPDATE_UP_TO_DATE_CODE", "OK"),
            ("UPDATE_TIMEOUT_MS", "2500"),
        ]));

        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.release.up_to_date_code, "OK");
        assert_eq!(config.release.timeout_ms, 2500);
        assert_eq!(
            config.release.download_url("2.0"),
            "http://mirror.local/app/app-2.0.apk"
        );
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("UPDATE_TIMEOUT_MS", "-1"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.release.timeout_ms, 10_000);
    }
}
