//! The generic document tree handed to the validator.
//!
//! Both YAML and JSON input decode into the same [`serde_json::Value`] tree,
//! so section checks never know which syntax a document was written in.

use serde_json::{Map, Value};

/// A parsed OpenAPIA document: mappings, sequences and scalars.
pub type Document = Value;

/// Look up a top-level section. Non-mapping documents have no sections.
pub fn section<'a>(document: &'a Document, name: &str) -> Option<&'a Value> {
    document.as_object().and_then(|map| map.get(name))
}

/// Borrow a value as a mapping, if it is one.
pub fn as_mapping(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// Borrow a value as a sequence, if it is one.
pub fn as_sequence(value: &Value) -> Option<&Vec<Value>> {
    value.as_array()
}

/// Whether `value` is a string exactly equal to one of `allowed`.
pub fn is_one_of(value: &Value, allowed: &[&str]) -> bool {
    value.as_str().is_some_and(|s| allowed.contains(&s))
}

/// Render a value for inclusion in a finding message.
///
/// Strings are written verbatim; everything else uses compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
