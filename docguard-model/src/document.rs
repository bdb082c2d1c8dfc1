use std::collections::BTreeSet;

use docguard_types::DocumentId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static ABSENT: Value = Value::Null;

/// What the uniqueness checker needs to know about a document.
///
/// Implemented per concrete document type; the checker never reflects over
/// documents.
pub trait Document {
    /// Stable identity, present once the document has been persisted.
    fn id(&self) -> Option<DocumentId>;

    /// Current value of a top-level field, `None` when the field is absent.
    fn get(&self, field: &str) -> Option<&Value>;

    /// Fields whose value differs from the last persisted state.
    fn changed_fields(&self) -> BTreeSet<String>;

    /// True while the document has never been persisted.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }

    /// The value used for comparisons: absent fields read as `null`.
    fn value_of(&self, field: &str) -> &Value {
        self.get(field).unwrap_or(&ABSENT)
    }
}

/// A schemaless document backed by a JSON object.
///
/// Keeps a snapshot of the fields as last persisted so it can report which
/// fields changed since then. A document deserialized with an identity is
/// taken to be in its persisted state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredDocument")]
pub struct JsonDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<DocumentId>,
    fields: Map<String, Value>,
    #[serde(skip)]
    persisted: Map<String, Value>,
}

/// Wire form of [`JsonDocument`]; the snapshot is rebuilt on load.
#[derive(Deserialize)]
struct StoredDocument {
    #[serde(default)]
    id: Option<DocumentId>,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl From<StoredDocument> for JsonDocument {
    fn from(stored: StoredDocument) -> Self {
        let persisted = match stored.id {
            Some(_) => stored.fields.clone(),
            None => Map::new(),
        };
        Self {
            id: stored.id,
            fields: stored.fields,
            persisted,
        }
    }
}

impl JsonDocument {
    /// Build a new, unsaved document. Non-object `data` yields a document
    /// with no fields.
    pub fn new(data: Value) -> Self {
        let fields = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            id: None,
            fields,
            persisted: Map::new(),
        }
    }

    /// Set a field. The change is tracked against the persisted snapshot.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Record that a store accepted this document under `id`.
    /// Clears the change set.
    pub fn mark_persisted(&mut self, id: DocumentId) {
        self.id = Some(id);
        self.persisted = self.fields.clone();
    }

    /// All current fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Extract a string field.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|v| v.as_str())
    }
}

impl Document for JsonDocument {
    fn id(&self) -> Option<DocumentId> {
        self.id
    }

    fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    fn changed_fields(&self) -> BTreeSet<String> {
        let mut changed: BTreeSet<String> = self
            .fields
            .iter()
            .filter(|(k, v)| self.persisted.get(*k) != Some(*v))
            .map(|(k, _)| k.clone())
            .collect();
        changed.extend(
            self.persisted
                .keys()
                .filter(|k| !self.fields.contains_key(*k))
                .cloned(),
        );
        changed
    }
}
