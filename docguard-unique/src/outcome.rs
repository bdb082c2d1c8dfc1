use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which message a conflict is reported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageTag {
    /// The conflicting document has never been persisted.
    AlreadyTaken,
    /// The conflicting document is persisted and being re-validated.
    NotUnique,
}

impl MessageTag {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageTag::AlreadyTaken => "already_taken",
            MessageTag::NotUnique => "not_unique",
        }
    }

    /// Human-readable text used when the spec has no custom message.
    pub fn default_message(self) -> &'static str {
        match self {
            MessageTag::AlreadyTaken => "is already taken",
            MessageTag::NotUnique => "is not unique",
        }
    }
}

impl fmt::Display for MessageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One error attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub tag: MessageTag,
    pub message: String,
}

/// Result of a uniqueness check: pass, or field-keyed errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    errors: BTreeMap<String, Vec<FieldError>>,
}

impl Outcome {
    /// An outcome with no errors.
    pub fn pass() -> Self {
        Self::default()
    }

    /// One error per field, all with the same tag.
    pub(crate) fn conflict(fields: &[&str], tag: MessageTag, message: Option<&str>) -> Self {
        let message = message.unwrap_or(tag.default_message());
        let errors = fields
            .iter()
            .map(|field| {
                let error = FieldError {
                    tag,
                    message: message.to_string(),
                };
                (field.to_string(), vec![error])
            })
            .collect();
        Self { errors }
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors keyed by field name.
    pub fn errors(&self) -> &BTreeMap<String, Vec<FieldError>> {
        &self.errors
    }

    /// Message tags attached to `field`, empty if none.
    pub fn tags(&self, field: &str) -> Vec<MessageTag> {
        self.errors
            .get(field)
            .map(|errs| errs.iter().map(|e| e.tag).collect())
            .unwrap_or_default()
    }

    /// Human-readable messages attached to `field`, empty if none.
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.errors
            .get(field)
            .map(|errs| errs.iter().map(|e| e.message.as_str()).collect())
            .unwrap_or_default()
    }

    /// Field name to tag list, the shape callers usually serialize.
    pub fn tag_map(&self) -> BTreeMap<String, Vec<MessageTag>> {
        self.errors
            .iter()
            .map(|(field, errs)| (field.clone(), errs.iter().map(|e| e.tag).collect()))
            .collect()
    }

    /// Append another outcome's errors after this one's.
    pub fn merge(&mut self, other: Outcome) {
        for (field, errs) in other.errors {
            self.errors.entry(field).or_default().extend(errs);
        }
    }
}
