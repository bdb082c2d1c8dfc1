use docguard_model::{Document, DocumentId, JsonDocument};
use serde_json::Value;

use crate::matcher::Matcher;

/// Ordered documents with store-assigned identities.
#[derive(Debug, Clone, Default)]
pub(crate) struct DocumentList {
    docs: Vec<JsonDocument>,
}

impl DocumentList {
    /// Persist `doc`: replaces the stored copy when its identity is already
    /// present, otherwise appends it under its own or a fresh identity.
    pub(crate) fn save(&mut self, mut doc: JsonDocument) -> DocumentId {
        let id = doc.id().unwrap_or_default();
        doc.mark_persisted(id);
        match self.docs.iter_mut().find(|d| d.id() == Some(id)) {
            Some(slot) => *slot = doc,
            None => self.docs.push(doc),
        }
        id
    }

    pub(crate) fn get(&self, id: DocumentId) -> Option<&JsonDocument> {
        self.docs.iter().find(|d| d.id() == Some(id))
    }

    pub(crate) fn find_by(&self, field: &str, value: &Value) -> Option<&JsonDocument> {
        self.docs.iter().find(|d| d.value_of(field) == value)
    }

    pub(crate) fn remove(&mut self, id: DocumentId) -> Option<JsonDocument> {
        let pos = self.docs.iter().position(|d| d.id() == Some(id))?;
        Some(self.docs.remove(pos))
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, JsonDocument> {
        self.docs.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.docs.len()
    }

    pub(crate) fn matching(&self, matcher: Matcher) -> impl Iterator<Item = &JsonDocument> {
        self.docs.iter().filter(move |d| matcher.matches(*d))
    }
}
