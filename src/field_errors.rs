//! Nested per-field validation errors and the flattened message they render to.
//!
//! The shape is declared by the producer rather than probed at runtime:
//! messages sit on the field itself, on one embedded associated record, or on
//! a has-many association keyed by index. Mixed depth under one field is
//! unrepresentable.

use crate::inflect::humanize;
use serde_json::{Map, Value};

/// Errors reported for a single top-level field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Messages on the field itself.
    Flat(Vec<String>),
    /// Sub-field -> messages, for an embedded single-record association.
    Nested(Vec<(String, Vec<String>)>),
    /// Index -> sub-field -> messages, for a has-many association.
    Collection(Vec<(usize, Vec<(String, Vec<String>)>)>),
}

impl FieldError {
    pub fn flat<S: Into<String>>(messages: impl IntoIterator<Item = S>) -> Self {
        FieldError::Flat(messages.into_iter().map(Into::into).collect())
    }

    fn to_value(&self) -> Value {
        match self {
            FieldError::Flat(messages) => messages_value(messages),
            FieldError::Nested(subs) => Value::Object(sub_map(subs)),
            FieldError::Collection(items) => {
                let mut map = Map::new();
                for (index, subs) in items {
                    map.insert(index.to_string(), Value::Object(sub_map(subs)));
                }
                Value::Object(map)
            }
        }
    }
}

/// Insertion-ordered set of per-field errors, as reported by an entity or
/// form after validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(String, FieldError)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, error: FieldError) {
        self.entries.push((field.into(), error));
    }

    /// Builder shorthand for the common case: messages on the field itself.
    pub fn field<S: Into<String>>(
        mut self,
        name: impl Into<String>,
        messages: impl IntoIterator<Item = S>,
    ) -> Self {
        self.push(name, FieldError::flat(messages));
        self
    }

    /// Builder variant taking any [`FieldError`] shape.
    pub fn with(mut self, name: impl Into<String>, error: FieldError) -> Self {
        self.push(name, error);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, FieldError)> {
        self.entries.iter()
    }

    /// Ordered JSON projection for the `field_errors` output key.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (field, error) in &self.entries {
            map.insert(field.clone(), error.to_value());
        }
        Value::Object(map)
    }

    /// Flatten every message into one human-readable string.
    ///
    /// `None` means no fields reported errors at all. Fields whose message
    /// lists are empty contribute no segment, so `Some("")` means "fields
    /// present, no messages" and is distinct from `None`.
    pub fn message(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let mut out = String::new();
        for (field, error) in &self.entries {
            match error {
                FieldError::Flat(messages) => segment(&mut out, field, messages),
                FieldError::Nested(subs) => {
                    for (sub, messages) in subs {
                        segment(&mut out, &format!("{}.{}", field, sub), messages);
                    }
                }
                FieldError::Collection(items) => {
                    for (index, subs) in items {
                        for (sub, messages) in subs {
                            segment(&mut out, &format!("{}.{}.{}", field, index, sub), messages);
                        }
                    }
                }
            }
        }
        Some(out)
    }
}

impl FromIterator<(String, FieldError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, FieldError)>>(iter: I) -> Self {
        FieldErrors {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Implemented by entities and forms that report per-field validation errors.
pub trait HasFieldErrors {
    fn field_errors(&self) -> FieldErrors;
}

/// One segment per dotted key: "Humanized key: msg1, msg2. "
fn segment(out: &mut String, key: &str, messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    out.push_str(&humanize(key));
    out.push_str(": ");
    out.push_str(&messages.join(", "));
    out.push_str(". ");
}

fn messages_value(messages: &[String]) -> Value {
    Value::Array(messages.iter().map(|m| Value::String(m.clone())).collect())
}

fn sub_map(subs: &[(String, Vec<String>)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (sub, messages) in subs {
        map.insert(sub.clone(), messages_value(messages));
    }
    map
}
