//! Uniqueness checking for schemaless documents.
//!
//! [`check`] decides whether one document's key value(s) collide with a peer
//! returned by a [`PeerAccessor`](docguard_model::PeerAccessor). It is a pure
//! decision procedure: no locks, no retries, one peer query per call.
//!
//! [`UniquenessValidator`] runs a fixed list of
//! [`UniquenessSpec`](docguard_model::UniquenessSpec)s, built once or loaded
//! from a [`ValidatorConfig`] file, and merges their outcomes.
//!
//! # Failure classes
//!
//! A conflict is a normal [`Outcome`] carrying field-keyed errors. A store
//! that cannot answer surfaces as [`CheckError::PeerQuery`] and is never
//! turned into a validation error.
//!
//! # Races
//!
//! Two concurrent creations of the same value can both observe no peer and
//! both pass. Atomicity has to come from the store (e.g. a unique index).

mod checker;
mod config;
mod error;
mod outcome;
mod validator;

pub use checker::check;
pub use config::ValidatorConfig;
pub use error::{CheckError, CheckResult, ConfigError, ConfigResult};
pub use outcome::{FieldError, MessageTag, Outcome};
pub use validator::UniquenessValidator;
