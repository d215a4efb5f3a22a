//! Outcome of a version check.

use serde::Serialize;

/// Metadata returned when a newer (or simply different) version is published.
///
/// Serializes to the wire payload, `status` first and always
/// `"update_available"`:
/// `{"status":"update_available","version":..,"download_url":..,"changelog":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateInfo {
    status: &'static str,
    pub version: String,
    pub download_url: String,
    pub changelog: String,
}

impl UpdateInfo {
    /// Value of the `status` field.
    pub const STATUS: &'static str = "update_available";

    pub fn new(
        version: impl Into<String>,
        download_url: impl Into<String>,
        changelog: impl Into<String>,
    ) -> Self {
        Self {
            status: Self::STATUS,
            version: version.into(),
            download_url: download_url.into(),
            changelog: changelog.into(),
        }
    }
}

/// Result of comparing a client version with the published one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResponse {
    /// Client runs the latest version; `code` is the configured sentinel.
    UpToDate { code: String },
    /// A different version is published.
    UpdateAvailable(UpdateInfo),
}

impl CheckResponse {
    /// Label used for the `outcome` metric and log fields.
    pub fn outcome(&self) -> &'static str {
        match self {
            CheckResponse::UpToDate { .. } => "up_to_date",
            CheckResponse::UpdateAvailable(_) => "update_available",
        }
    }
}
