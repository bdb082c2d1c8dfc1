use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SpecError;

/// Comparison policy for key values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// Values must be equal as stored.
    #[default]
    Sensitive,
    /// String values are compared after [`fold_case`].
    Insensitive,
}

impl CaseMode {
    /// Compare two values under this mode. Non-string values always compare
    /// exactly.
    pub fn equals(self, a: &Value, b: &Value) -> bool {
        match self {
            CaseMode::Sensitive => a == b,
            CaseMode::Insensitive => fold_case(a) == fold_case(b),
        }
    }
}

/// Case-fold a value for insensitive comparison.
///
/// Strings are lowercased one character at a time, so the result does not
/// depend on a character's position (a final `Σ` folds like any other);
/// every other value is returned unchanged. The input is never modified.
pub fn fold_case(value: &Value) -> Cow<'_, Value> {
    match value {
        Value::String(s) => Cow::Owned(Value::String(
            s.chars().flat_map(char::to_lowercase).collect(),
        )),
        other => Cow::Borrowed(other),
    }
}

/// Whether a document lacking the key can conflict with another one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsencePolicy {
    /// Absent (or `null`) key values are compared like any other value, so at
    /// most one document per scope may omit the key.
    #[default]
    Compare,
    /// A document whose key values are all absent always passes.
    Skip,
}

/// Declares one uniqueness constraint: a set of key fields that together
/// must be unique among comparable peers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniquenessSpec {
    /// Field names forming the key. Must be non-empty.
    pub fields: Vec<String>,
    #[serde(default)]
    pub case: CaseMode,
    /// Fields whose values must match before two documents are compared.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
    #[serde(default)]
    pub absence: AbsencePolicy,
    /// Replaces the default human-readable message for this constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UniquenessSpec {
    /// Shorthand for a case-sensitive, unscoped constraint on one field.
    pub fn on(field: &str) -> Self {
        Self::on_fields([field])
    }

    /// Constraint over several fields forming one composite key.
    pub fn on_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: dedup(fields.into_iter().map(Into::into)),
            case: CaseMode::Sensitive,
            scope: Vec::new(),
            absence: AbsencePolicy::Compare,
            message: None,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case = CaseMode::Insensitive;
        self
    }

    /// Add a scope field. Declaring the same field twice has no effect.
    pub fn scoped_to(mut self, field: &str) -> Self {
        if !self.scope.iter().any(|f| f == field) {
            self.scope.push(field.to_string());
        }
        self
    }

    /// Let documents without the key skip the check.
    pub fn allow_absent(mut self) -> Self {
        self.absence = AbsencePolicy::Skip;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Key fields with duplicates collapsed, in declaration order.
    ///
    /// Specs read from configuration may repeat a field; everything that
    /// evaluates a spec goes through this.
    pub fn key_fields(&self) -> Vec<&str> {
        dedup_refs(&self.fields)
    }

    /// Scope fields with duplicates collapsed, in declaration order.
    pub fn scope_fields(&self) -> Vec<&str> {
        dedup_refs(&self.scope)
    }

    /// Reject specs that cannot be evaluated.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.fields.is_empty() {
            return Err(SpecError::NoFields);
        }
        if self.fields.iter().chain(&self.scope).any(|f| f.is_empty()) {
            return Err(SpecError::EmptyFieldName);
        }
        Ok(())
    }
}

fn dedup(fields: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for field in fields {
        if !out.contains(&field) {
            out.push(field);
        }
    }
    out
}

fn dedup_refs(fields: &[String]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for field in fields {
        if !out.contains(&field.as_str()) {
            out.push(field.as_str());
        }
    }
    out
}
