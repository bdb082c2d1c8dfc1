//! Error types shared between stores and the checker.

use thiserror::Error;

/// Result type for peer queries.
pub type AccessResult<T> = Result<T, AccessError>;

/// Errors a [`PeerAccessor`](crate::PeerAccessor) can report.
///
/// These are collaborator failures, never validation failures: the checker
/// passes them through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The backing store cannot serve queries right now.
    #[error("peer store unavailable: {0}")]
    Unavailable(String),

    /// The scope filter cannot be evaluated.
    #[error("invalid scope: {0}")]
    InvalidScope(String),
}

/// A [`UniquenessSpec`](crate::UniquenessSpec) that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("uniqueness spec declares no fields")]
    NoFields,

    #[error("uniqueness spec contains an empty field name")]
    EmptyFieldName,
}
