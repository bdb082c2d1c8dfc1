use docguard_model::{
    AccessError, AccessResult, DocumentId, JsonDocument, PeerAccessor, PeerQuery, Peers,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::list::DocumentList;
use crate::matcher::Matcher;

/// Top-level documents of one kind.
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    docs: DocumentList,
    soft_delete: Option<String>,
    available: bool,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: DocumentList::default(),
            soft_delete: None,
            available: true,
        }
    }

    /// Treat documents with a non-null `field` as deleted: they stay stored
    /// but are never returned as peers.
    pub fn paranoid(mut self, field: impl Into<String>) -> Self {
        self.soft_delete = Some(field.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store a document and return its identity. A document that already has
    /// an identity present in the collection replaces the stored copy.
    pub fn save(&mut self, doc: JsonDocument) -> DocumentId {
        let id = self.docs.save(doc);
        debug!(collection = %self.name, %id, "saved document");
        id
    }

    pub fn get(&self, id: DocumentId) -> Option<&JsonDocument> {
        self.docs.get(id)
    }

    /// First stored document whose `field` equals `value`.
    pub fn find_by(&self, field: &str, value: &Value) -> Option<&JsonDocument> {
        self.docs.find_by(field, value)
    }

    pub fn remove(&mut self, id: DocumentId) -> Option<JsonDocument> {
        self.docs.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JsonDocument> {
        self.docs.iter()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.len() == 0
    }

    /// Take the collection offline (or back online). Queries against an
    /// offline collection fail with [`AccessError::Unavailable`].
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl PeerAccessor for Collection {
    type Peer = JsonDocument;

    fn find(&self, query: &PeerQuery<'_>) -> AccessResult<Peers<'_, JsonDocument>> {
        if !self.available {
            warn!(collection = %self.name, "query against offline collection");
            return Err(AccessError::Unavailable(format!(
                "collection {} is offline",
                self.name
            )));
        }
        let matcher = Matcher::compile(query)?.skipping_deleted(self.soft_delete.as_deref());
        Ok(Box::new(self.docs.matching(matcher)))
    }
}
