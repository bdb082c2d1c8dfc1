#![allow(dead_code)]

use std::cell::Cell;

use docguard_model::{
    AccessError, AccessResult, DocumentId, JsonDocument, PeerAccessor, PeerQuery, Peers,
};
use docguard_store::Collection;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Clone of the stored document, ready to be modified and re-checked.
pub fn load(collection: &Collection, field: &str, value: &str) -> JsonDocument {
    collection
        .find_by(field, &serde_json::json!(value))
        .cloned()
        .unwrap_or_else(|| panic!("no document with {field} = {value}"))
}

pub fn persisted(data: serde_json::Value) -> JsonDocument {
    let mut doc = JsonDocument::new(data);
    doc.mark_persisted(DocumentId::new());
    doc
}

/// Returns every stored document, ignoring the query entirely.
pub struct Unfiltered(pub Vec<JsonDocument>);

impl PeerAccessor for Unfiltered {
    type Peer = JsonDocument;

    fn find(&self, _query: &PeerQuery<'_>) -> AccessResult<Peers<'_, JsonDocument>> {
        Ok(Box::new(self.0.iter()))
    }
}

/// Counts queries issued against a collection.
pub struct Counting {
    pub inner: Collection,
    pub calls: Cell<usize>,
}

impl Counting {
    pub fn new(inner: Collection) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }
}

impl PeerAccessor for Counting {
    type Peer = JsonDocument;

    fn find(&self, query: &PeerQuery<'_>) -> AccessResult<Peers<'_, JsonDocument>> {
        self.calls.set(self.calls.get() + 1);
        self.inner.find(query)
    }
}

/// A store that is always down.
pub struct Down;

impl PeerAccessor for Down {
    type Peer = JsonDocument;

    fn find(&self, _query: &PeerQuery<'_>) -> AccessResult<Peers<'_, JsonDocument>> {
        Err(AccessError::Unavailable("connection refused".into()))
    }
}
