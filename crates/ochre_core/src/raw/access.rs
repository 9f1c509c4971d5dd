//! Typed scalar accessors over the raw tree.
//!
//! Scalars in the raw export are loosely typed: numbers may arrive as strings
//! and flags as `"true"`/`"false"`. These helpers coerce them once, failing
//! with the field name on anything that does not fit.

use crate::error::{NormalizeError, NormalizeResult};
use serde_json::Value;
use uuid::Uuid;

/// Returns the text form of a scalar (string, number, boolean).
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Reads a scalar field as text; non-scalars and `null` read as absent.
pub fn optional_text(parent: &Value, key: &str) -> Option<String> {
    parent.get(key).and_then(scalar_text)
}

/// Reads a required UUID field.
pub fn required_uuid(parent: &Value, key: &'static str) -> NormalizeResult<Uuid> {
    optional_uuid(parent, key)?.ok_or_else(|| NormalizeError::missing_key(key))
}

/// Reads an optional UUID field, rejecting malformed identifiers.
pub fn optional_uuid(parent: &Value, key: &'static str) -> NormalizeResult<Option<Uuid>> {
    match optional_text(parent, key) {
        None => Ok(None),
        Some(text) => Uuid::parse_str(text.trim())
            .map(Some)
            .map_err(|_| NormalizeError::invalid_value(key, text)),
    }
}

/// Reads an optional numeric field; numeric strings are accepted.
pub fn optional_number(parent: &Value, key: &'static str) -> NormalizeResult<Option<f64>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => number_value(value, key).map(Some),
    }
}

/// Reads a required numeric field.
pub fn required_number(parent: &Value, key: &'static str) -> NormalizeResult<f64> {
    optional_number(parent, key)?.ok_or_else(|| NormalizeError::missing_key(key))
}

/// Coerces one scalar into a finite number.
pub fn number_value(value: &Value, field: &'static str) -> NormalizeResult<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(number) if number.is_finite() => Ok(number),
        _ => Err(NormalizeError::invalid_value(
            field,
            scalar_text(value).unwrap_or_else(|| value.to_string()),
        )),
    }
}

/// Reads an optional whole-number field such as `n` or `noteNo`.
pub fn optional_integer(parent: &Value, key: &'static str) -> NormalizeResult<Option<i64>> {
    match optional_number(parent, key)? {
        None => Ok(None),
        Some(number) if number.fract() == 0.0 => Ok(Some(number as i64)),
        Some(number) => Err(NormalizeError::invalid_value(key, number.to_string())),
    }
}

/// Reads an optional flag; `"true"`/`"false"` strings are accepted.
pub fn optional_bool(parent: &Value, key: &'static str) -> NormalizeResult<Option<bool>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => bool_value(value, key).map(Some),
    }
}

/// Coerces one scalar into a flag.
pub fn bool_value(value: &Value, field: &'static str) -> NormalizeResult<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(NormalizeError::invalid_value(field, text.clone())),
        },
        other => Err(NormalizeError::invalid_value(field, other.to_string())),
    }
}

/// Splits a space- or semicolon-separated token list.
pub fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
}
