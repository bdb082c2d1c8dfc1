//! In-memory peer stores for docguard.
//!
//! Each store implements [`PeerAccessor`](docguard_model::PeerAccessor) for
//! one kind of peer set:
//!
//! - [`Collection`] — top-level documents of one kind, optionally excluding
//!   soft-deleted ones
//! - [`EmbeddedMany`] — the sibling list inside one parent document
//! - [`EmbeddedOne`] — the single child slot of one parent document
//!
//! # Matching
//!
//! Scope entries match exactly. Key entries match exactly in sensitive mode.
//! In insensitive mode both sides go through
//! [`fold_case`](docguard_model::fold_case), the same fold the checker uses,
//! and are compared as whole literal values.

mod collection;
mod embedded;
mod list;
mod matcher;

pub use collection::Collection;
pub use embedded::{EmbeddedMany, EmbeddedOne};
