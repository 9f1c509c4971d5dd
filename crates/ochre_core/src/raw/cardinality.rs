//! "Single object or array" canonicalization.
//!
//! # Responsibility
//! - Turn every one-or-many raw field into an ordered sequence.
//!
//! # Invariants
//! - Absent and `null` inputs yield an empty sequence.
//! - Source order is preserved; `null` elements inside arrays are skipped.
//! - No other module inspects the raw one-or-many shape directly.

use serde_json::Value;

/// Canonicalizes an optional one-or-many raw value into a sequence.
pub fn as_sequence(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter(|item| !item.is_null()).collect(),
        Some(single) => vec![single],
    }
}

/// Reads a `plural: { singular: one-or-many }` container as a sequence.
///
/// Returns an empty sequence when either level is missing, including an
/// empty `{}` or `""` container. An array is read as the children themselves.
pub fn container_children<'a>(parent: &'a Value, plural: &str, singular: &str) -> Vec<&'a Value> {
    match parent.get(plural) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Object(fields)) => as_sequence(fields.get(singular)),
        Some(Value::String(text)) if text.trim().is_empty() => Vec::new(),
        Some(other) => as_sequence(Some(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::{as_sequence, container_children};
    use serde_json::json;

    #[test]
    fn absent_and_null_yield_empty() {
        assert!(as_sequence(None).is_empty());
        assert!(as_sequence(Some(&json!(null))).is_empty());
    }

    #[test]
    fn container_reads_nested_singular_key() {
        let raw = json!({ "notes": { "note": [{ "noteNo": 1 }, { "noteNo": 2 }] } });
        let notes = container_children(&raw, "notes", "note");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1]["noteNo"], 2);
    }

    #[test]
    fn container_missing_levels_yield_empty() {
        let raw = json!({ "notes": null });
        assert!(container_children(&raw, "notes", "note").is_empty());
        assert!(container_children(&raw, "events", "event").is_empty());
    }

    #[test]
    fn empty_container_yields_no_children() {
        let raw = json!({ "notes": {}, "properties": "", "imagemap": { "width": 10, "height": 10 } });
        assert!(container_children(&raw, "notes", "note").is_empty());
        assert!(container_children(&raw, "properties", "property").is_empty());
        assert!(container_children(&raw, "imagemap", "area").is_empty());
    }
}
