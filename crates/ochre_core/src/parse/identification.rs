//! Identification parsing with best-effort recovery.
//!
//! # Invariants
//! - This is the only parser that swallows a failure: identification is
//!   advisory metadata, so a malformed block degrades to a blank label and
//!   the cause is logged. Every other parser propagates.

use crate::content::resolver::{optional_content, resolve_content};
use crate::error::{NormalizeError, NormalizeResult};
use crate::logging::sanitize_message;
use crate::model::identification::Identification;
use crate::raw::access::scalar_text;
use log::warn;
use serde_json::Value;

const MAX_CAUSE_CHARS: usize = 200;

/// Parses an identification block, substituting a blank one on failure.
pub fn parse_identification(raw: &Value, languages: &[String]) -> Identification {
    match try_parse_identification(raw, languages) {
        Ok(identification) => identification,
        Err(err) => {
            warn!(
                "event=identification_recovered module=parse status=degraded kind={} cause={}",
                err.kind(),
                sanitize_message(&err.to_string(), MAX_CAUSE_CHARS)
            );
            Identification::blank(languages)
        }
    }
}

/// Parses `parent.identification` when present.
pub fn optional_identification(parent: &Value, languages: &[String]) -> Option<Identification> {
    match parent.get("identification") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(parse_identification(raw, languages)),
    }
}

/// Strict variant used internally and by tests.
pub fn try_parse_identification(
    raw: &Value,
    languages: &[String],
) -> NormalizeResult<Identification> {
    if scalar_text(raw).is_some() {
        return Ok(Identification {
            label: resolve_content(raw, languages, false)?,
            abbreviation: None,
        });
    }
    let label = raw
        .get("label")
        .filter(|label| !label.is_null())
        .ok_or_else(|| NormalizeError::missing_key("label"))?;
    Ok(Identification {
        label: resolve_content(label, languages, false)?,
        abbreviation: optional_content(raw, "abbreviation", languages, false)?,
    })
}
