//! Property tree parsing with typed value coercion.
//!
//! # Responsibility
//! - Build [`Property`] trees from raw label/value/property nodes.
//! - Coerce every value according to its declared `dataType`.
//!
//! # Invariants
//! - `dataType` defaults to `string`; values outside the vocabulary fail.
//! - Label names lose a trailing ` ...` and surrounding whitespace.
//! - Nested properties recurse without an artificial depth limit.

use crate::content::resolver::resolve_plain_text;
use crate::error::{NormalizeError, NormalizeResult};
use crate::model::property::{
    Property, PropertyContent, PropertyDataType, PropertyLabel, PropertyValueContent,
};
use crate::raw::access::{
    bool_value, number_value, optional_bool, optional_text, optional_uuid, scalar_text,
};
use crate::raw::time::{optional_date_time, parse_date, parse_date_time};
use crate::raw::{as_sequence, container_children};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static TRAILING_ELLIPSIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" \.\.\.\s*$").expect("valid ellipsis regex"));

/// Parses one property node in `language`.
pub fn parse_property(raw: &Value, language: &str) -> NormalizeResult<Property> {
    let label = raw
        .get("label")
        .filter(|label| !label.is_null())
        .ok_or_else(|| NormalizeError::missing_key("label"))?;

    let values = as_sequence(raw.get("value"))
        .into_iter()
        .map(|value| parse_property_value(value, language))
        .collect::<NormalizeResult<Vec<_>>>()?;

    let comment = match raw.get("comment") {
        None | Some(Value::Null) => None,
        Some(comment) => Some(resolve_plain_text(comment, language)?),
    };

    let properties = as_sequence(raw.get("property"))
        .into_iter()
        .map(|child| parse_property(child, language))
        .collect::<NormalizeResult<Vec<_>>>()?;

    Ok(Property {
        label: PropertyLabel {
            uuid: optional_uuid(label, "uuid")?,
            name: normalize_label(&resolve_plain_text(label, language)?),
        },
        values,
        comment,
        properties,
    })
}

/// Parses the `properties.property` container of an item.
pub fn parse_properties(parent: &Value, language: &str) -> NormalizeResult<Vec<Property>> {
    container_children(parent, "properties", "property")
        .into_iter()
        .map(|raw| parse_property(raw, language))
        .collect()
}

/// Strips a trailing ` ...` and trims.
pub fn normalize_label(raw: &str) -> String {
    TRAILING_ELLIPSIS_RE.replace(raw, "").trim().to_string()
}

fn parse_property_value(raw: &Value, language: &str) -> NormalizeResult<PropertyValueContent> {
    if let Some(text) = scalar_text(raw) {
        return Ok(PropertyValueContent {
            data_type: PropertyDataType::String,
            content: PropertyContent::Text(text.clone()),
            label: Some(text),
            unit: None,
            category: None,
            uuid: None,
            publication_date_time: None,
            is_uncertain: false,
        });
    }

    let data_type = match optional_text(raw, "dataType") {
        None => PropertyDataType::String,
        Some(value) => PropertyDataType::parse(&value)
            .ok_or_else(|| NormalizeError::unknown_vocabulary("dataType", value))?,
    };
    let text = match raw.get("content") {
        None | Some(Value::Null) => None,
        Some(_) => Some(resolve_plain_text(raw, language)?),
    };

    Ok(PropertyValueContent {
        data_type,
        content: coerce_content(raw, data_type, text.as_deref())?,
        label: text,
        unit: optional_text(raw, "unit"),
        category: optional_text(raw, "category"),
        uuid: optional_uuid(raw, "uuid")?,
        publication_date_time: optional_date_time(raw, "publicationDateTime")?,
        is_uncertain: optional_bool(raw, "isUncertain")?.unwrap_or(false),
    })
}

fn coerce_content(
    raw: &Value,
    data_type: PropertyDataType,
    text: Option<&str>,
) -> NormalizeResult<PropertyContent> {
    match data_type {
        PropertyDataType::Integer | PropertyDataType::Decimal => match raw.get("content") {
            Some(content) if content.is_number() => {
                number_value(content, "number").map(PropertyContent::Number)
            }
            _ => match text {
                Some(text) => number_value(&Value::String(text.to_string()), "number")
                    .map(PropertyContent::Number),
                None => Ok(PropertyContent::Empty),
            },
        },
        PropertyDataType::Date => match text {
            Some(text) => parse_date(text, "date").map(PropertyContent::Date),
            None => Ok(PropertyContent::Empty),
        },
        PropertyDataType::DateTime => match text {
            Some(text) => parse_date_time(text, "dateTime").map(PropertyContent::DateTime),
            None => Ok(PropertyContent::Empty),
        },
        PropertyDataType::Coordinate => Ok(PropertyContent::Empty),
        PropertyDataType::Boolean => match raw.get("booleanValue") {
            Some(flag) if !flag.is_null() => {
                bool_value(flag, "booleanValue").map(PropertyContent::Boolean)
            }
            // A label that is not a boolean literal stays the label only.
            _ => match text {
                Some(text) => Ok(bool_value(&Value::String(text.to_string()), "boolean")
                    .map_or(PropertyContent::Empty, PropertyContent::Boolean)),
                None => Err(NormalizeError::missing_key("booleanValue")),
            },
        },
        PropertyDataType::String | PropertyDataType::IdRef | PropertyDataType::Time => {
            let slug = optional_text(raw, "slug");
            Ok(PropertyContent::Text(
                slug.or_else(|| text.map(str::to_string)).unwrap_or_default(),
            ))
        }
    }
}
