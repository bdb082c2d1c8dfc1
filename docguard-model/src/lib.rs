//! Document model for docguard.
//!
//! Defines the contracts the uniqueness checker is written against:
//! - [`Document`] — identity, field access and change tracking for one document
//! - [`JsonDocument`] — the stock document type (JSON object fields + dirty tracking)
//! - [`UniquenessSpec`] — declares the key fields, case mode, scope and absence policy
//! - [`PeerAccessor`] — how a store hands candidate peers to the checker
//!
//! Stores implement [`PeerAccessor`]; callers build [`UniquenessSpec`] values
//! once and pass them to every validation call.

mod accessor;
mod constraint;
mod document;
mod error;

pub use accessor::{PeerAccessor, PeerQuery, Peers};
pub use constraint::{AbsencePolicy, CaseMode, UniquenessSpec, fold_case};
pub use docguard_types::DocumentId;
pub use document::{Document, JsonDocument};
pub use error::{AccessError, AccessResult, SpecError};
