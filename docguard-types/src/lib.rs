//! Core type definitions for docguard.
//!
//! Only the store-agnostic identity of a document lives here. Documents,
//! constraint specs and peer accessors are defined in `docguard-model`.

mod ids;

pub use ids::DocumentId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid document id: {0}")]
    InvalidId(#[from] uuid::Error),
}
