//! Peer sets for documents embedded in a parent.

use docguard_model::{
    AccessResult, Document, DocumentId, JsonDocument, PeerAccessor, PeerQuery, Peers,
};
use serde_json::Value;

use crate::list::DocumentList;
use crate::matcher::Matcher;

/// The sibling list of a one-to-many embedding. Uniqueness is only ever
/// decided among children of the same parent.
#[derive(Debug, Clone)]
pub struct EmbeddedMany {
    parent: DocumentId,
    children: DocumentList,
}

impl EmbeddedMany {
    pub fn new(parent: DocumentId) -> Self {
        Self {
            parent,
            children: DocumentList::default(),
        }
    }

    pub fn parent(&self) -> DocumentId {
        self.parent
    }

    /// Persist a child into the list and return its identity.
    pub fn create(&mut self, child: JsonDocument) -> DocumentId {
        self.children.save(child)
    }

    pub fn get(&self, id: DocumentId) -> Option<&JsonDocument> {
        self.children.get(id)
    }

    pub fn find_by(&self, field: &str, value: &Value) -> Option<&JsonDocument> {
        self.children.find_by(field, value)
    }

    pub fn remove(&mut self, id: DocumentId) -> Option<JsonDocument> {
        self.children.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JsonDocument> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.len() == 0
    }
}

impl PeerAccessor for EmbeddedMany {
    type Peer = JsonDocument;

    fn find(&self, query: &PeerQuery<'_>) -> AccessResult<Peers<'_, JsonDocument>> {
        let matcher = Matcher::compile(query)?;
        Ok(Box::new(self.children.matching(matcher)))
    }
}

/// The single child slot of a one-to-one embedding.
///
/// A child validated against the slot is either the occupant itself or the
/// child about to replace it, so the occupant is never a peer. This is what
/// lets a replacement carry the same value as the child it replaces.
#[derive(Debug, Clone)]
pub struct EmbeddedOne {
    parent: DocumentId,
    occupant: Option<JsonDocument>,
}

impl EmbeddedOne {
    pub fn new(parent: DocumentId) -> Self {
        Self {
            parent,
            occupant: None,
        }
    }

    pub fn parent(&self) -> DocumentId {
        self.parent
    }

    /// Persist `child` into the slot, returning the child it displaced.
    pub fn replace(&mut self, mut child: JsonDocument) -> (DocumentId, Option<JsonDocument>) {
        let id = child.id().unwrap_or_default();
        child.mark_persisted(id);
        (id, self.occupant.replace(child))
    }

    pub fn get(&self) -> Option<&JsonDocument> {
        self.occupant.as_ref()
    }

    pub fn clear(&mut self) -> Option<JsonDocument> {
        self.occupant.take()
    }
}

impl PeerAccessor for EmbeddedOne {
    type Peer = JsonDocument;

    fn find(&self, query: &PeerQuery<'_>) -> AccessResult<Peers<'_, JsonDocument>> {
        // Compiled only to reject malformed scopes.
        Matcher::compile(query)?;
        Ok(Box::new(std::iter::empty()))
    }
}
