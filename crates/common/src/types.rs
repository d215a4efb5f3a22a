use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a version string would be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("version string must not be empty")]
pub struct EmptyVersion;

/// Opaque version identifier.
///
/// No format is imposed on the text and no ordering is defined: two
/// versions are the same only when their raw text is byte-for-byte equal.
/// The only invariant is that the text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionString(String);

impl VersionString {
    /// Creates a version string, rejecting empty text.
    pub fn new(raw: impl Into<String>) -> Result<Self, EmptyVersion> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(EmptyVersion);
        }
        Ok(Self(raw))
    }

    /// Returns the version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for VersionString {
    type Error = EmptyVersion;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<&str> for VersionString {
    type Error = EmptyVersion;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<VersionString> for String {
    fn from(version: VersionString) -> Self {
        version.0
    }
}

impl AsRef<str> for VersionString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VersionString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
