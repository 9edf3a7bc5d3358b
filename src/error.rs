//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for network-mcp operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at orchestration boundaries.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading configuration fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Error returned by the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Profile '{0}' not found")]
    ProfileNotFound(String),
}

/// Error returned for unusable invite codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferralError {
    #[error("Invite code is empty")]
    EmptyCode,
    #[error("Invite code '{0}' must contain only letters and digits")]
    MalformedCode(String),
}
