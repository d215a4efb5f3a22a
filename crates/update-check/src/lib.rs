//! Version check against an upstream static release host.
//!
//! A client reports its installed version; the [`UpdateChecker`] fetches the
//! published latest version from a [`ReleaseSource`] and answers either with
//! the configured "up to date" code or with the update metadata (version,
//! download URL and changelog).
//!
//! The check runs in a fixed order:
//! 1. Fetch the latest version (mandatory, failure aborts the check)
//! 2. Compare it with the client version (exact text equality)
//! 3. On mismatch, fetch the changelog (best-effort, placeholder on failure)
//! 4. Build the update payload

pub mod checker;
pub mod config;
pub mod error;
pub mod response;
pub mod source;

pub use checker::{CheckRequest, UpdateChecker};
pub use common::VersionString;
pub use config::ReleaseConfig;
pub use error::{CheckError, ConfigError, SourceError};
pub use response::{CheckResponse, UpdateInfo};
pub use source::{Fetch, HttpReleaseSource, InMemoryReleaseSource, ReleaseSource};
