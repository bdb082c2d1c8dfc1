//! Compiles a [`PeerQuery`] into a predicate over stored documents.

use docguard_model::{
    AccessError, AccessResult, CaseMode, Document, DocumentId, PeerQuery, fold_case,
};
use serde_json::Value;

#[derive(Debug)]
enum KeyMatch {
    Exact(Value),
    /// Holds the already folded candidate value.
    Folded(Value),
}

impl KeyMatch {
    fn matches(&self, value: &Value) -> bool {
        match self {
            KeyMatch::Exact(expected) => value == expected,
            KeyMatch::Folded(expected) => fold_case(value).as_ref() == expected,
        }
    }
}

/// Owned form of a query, so the peer iterator does not borrow the caller.
#[derive(Debug)]
pub(crate) struct Matcher {
    scope: Vec<(String, Value)>,
    keys: Vec<(String, KeyMatch)>,
    exclude: Option<DocumentId>,
    soft_delete: Option<String>,
}

impl Matcher {
    pub(crate) fn compile(query: &PeerQuery<'_>) -> AccessResult<Self> {
        let mut scope = Vec::with_capacity(query.scope.len());
        for (field, value) in &query.scope {
            if field.is_empty() {
                return Err(AccessError::InvalidScope("empty scope field name".into()));
            }
            scope.push((field.to_string(), (*value).clone()));
        }

        let mut keys = Vec::with_capacity(query.keys.len());
        for (field, value) in &query.keys {
            let key = match query.case {
                CaseMode::Insensitive => KeyMatch::Folded(fold_case(value).into_owned()),
                CaseMode::Sensitive => KeyMatch::Exact((*value).clone()),
            };
            keys.push((field.to_string(), key));
        }

        Ok(Self {
            scope,
            keys,
            exclude: query.exclude,
            soft_delete: None,
        })
    }

    /// Also reject documents whose `field` is set.
    pub(crate) fn skipping_deleted(mut self, field: Option<&str>) -> Self {
        self.soft_delete = field.map(str::to_string);
        self
    }

    pub(crate) fn matches<D: Document>(&self, doc: &D) -> bool {
        if self.exclude.is_some() && doc.id() == self.exclude {
            return false;
        }
        if let Some(field) = &self.soft_delete
            && !doc.value_of(field).is_null()
        {
            return false;
        }
        self.scope
            .iter()
            .all(|(field, value)| doc.value_of(field) == value)
            && self
                .keys
                .iter()
                .all(|(field, key)| key.matches(doc.value_of(field)))
    }
}
