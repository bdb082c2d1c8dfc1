//! Error types for uniqueness checks and validator configuration.

use docguard_model::{AccessError, SpecError};
use thiserror::Error;

/// Result type for checks.
pub type CheckResult<T> = Result<T, CheckError>;

/// A check that could not reach a decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The spec cannot be evaluated.
    #[error("invalid uniqueness spec: {0}")]
    InvalidSpec(#[from] SpecError),

    /// The peer accessor failed.
    #[error("peer query failed: {0}")]
    PeerQuery(#[from] AccessError),
}

/// Result type for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors while loading a [`ValidatorConfig`](crate::ValidatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid uniqueness spec #{index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: SpecError,
    },
}
