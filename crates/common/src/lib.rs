//! Shared value types for the update check relay.

pub mod types;

pub use types::{EmptyVersion, VersionString};
