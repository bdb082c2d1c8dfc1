use docguard_types::DocumentId;
use serde_json::Value;

use crate::{AccessResult, CaseMode, Document};

/// Lazy sequence of peers borrowed from a store.
pub type Peers<'a, D> = Box<dyn Iterator<Item = &'a D> + 'a>;

/// One peer lookup issued by the checker.
///
/// `scope` entries must match exactly. `keys` carry the candidate's key
/// values so a store may narrow the result at the source; doing so is
/// optional, the checker compares every peer it gets back.
#[derive(Debug, Clone, PartialEq)]
pub struct PeerQuery<'a> {
    pub scope: Vec<(&'a str, &'a Value)>,
    pub keys: Vec<(&'a str, &'a Value)>,
    pub case: CaseMode,
    /// Identity of the document under validation, if it has one.
    pub exclude: Option<DocumentId>,
}

/// Supplies candidate peers for a uniqueness check.
///
/// Each call to [`find`](PeerAccessor::find) is a fresh query. Escaping of
/// values that are significant to the store's own matching language is the
/// accessor's job; the checker treats values as opaque literals.
pub trait PeerAccessor {
    type Peer: Document;

    fn find(&self, query: &PeerQuery<'_>) -> AccessResult<Peers<'_, Self::Peer>>;
}

impl<A: PeerAccessor + ?Sized> PeerAccessor for &A {
    type Peer = A::Peer;

    fn find(&self, query: &PeerQuery<'_>) -> AccessResult<Peers<'_, Self::Peer>> {
        (**self).find(query)
    }
}
