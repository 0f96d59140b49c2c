//! JSON records as pageable items
//!
//! Lets rows decoded from JSON (API payloads, fixture files, document stores)
//! be paged directly. The ordering key is a dotted path into the object:
//! `created_at`, `author.id` or `$.author.id`.

use crate::pagination::ValueProvider;
use crate::types::JsonValue;

impl ValueProvider for JsonValue {
    fn value_for(&self, order: &str) -> String {
        extract_path(self, order).unwrap_or_default()
    }
}

/// Scalar at a dotted path rendered as a string
///
/// Strings come back unquoted, numbers and booleans through their JSON
/// text. Missing fields, nulls, arrays and objects yield `None`.
pub fn extract_path(value: &JsonValue, path: &str) -> Option<String> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            JsonValue::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    match current {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
