//! Date and timestamp coercion for raw string fields.

use crate::error::{NormalizeError, NormalizeResult};
use crate::raw::access::optional_text;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a timestamp; zone-less values are read as UTC, bare dates as
/// midnight UTC.
pub fn parse_date_time(raw: &str, field: &'static str) -> NormalizeResult<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, NAIVE_DATE_TIME_FORMAT) {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(NormalizeError::invalid_value(field, raw))
}

/// Parses a calendar date; a full timestamp keeps only its date part.
pub fn parse_date(raw: &str, field: &'static str) -> NormalizeResult<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    parse_date_time(trimmed, field)
        .map(|value| value.date_naive())
        .map_err(|_| NormalizeError::invalid_value(field, raw))
}

pub fn optional_date_time(
    parent: &Value,
    key: &'static str,
) -> NormalizeResult<Option<DateTime<Utc>>> {
    optional_text(parent, key)
        .map(|text| parse_date_time(&text, key))
        .transpose()
}

pub fn optional_date(parent: &Value, key: &'static str) -> NormalizeResult<Option<NaiveDate>> {
    optional_text(parent, key)
        .map(|text| parse_date(&text, key))
        .transpose()
}
