//! Property tree model.
//!
//! # Responsibility
//! - Represent label/value/nested-property trees with typed values.
//! - Provide read-only lookups over a parsed tree.
//!
//! # Invariants
//! - `PropertyValueContent::content` always matches `data_type` per the
//!   coercion table in `parse::property`.
//! - Trees are finite and owned; no back references.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Declared data type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyDataType {
    String,
    Integer,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Time,
    Coordinate,
    #[serde(rename = "IDREF")]
    IdRef,
}

impl PropertyDataType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "decimal" => Some(Self::Decimal),
            "boolean" => Some(Self::Boolean),
            "date" => Some(Self::Date),
            "dateTime" => Some(Self::DateTime),
            "time" => Some(Self::Time),
            "coordinate" => Some(Self::Coordinate),
            "IDREF" => Some(Self::IdRef),
            _ => None,
        }
    }
}

/// Typed payload of one property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyContent {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    /// Coordinates are not embedded as property content.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValueContent {
    pub data_type: PropertyDataType,
    pub content: PropertyContent,
    /// Human-readable text of the value; for booleans this is the raw
    /// content shown next to the flag.
    pub label: Option<String>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub uuid: Option<Uuid>,
    pub publication_date_time: Option<DateTime<Utc>>,
    pub is_uncertain: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyLabel {
    pub uuid: Option<Uuid>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub label: PropertyLabel,
    pub values: Vec<PropertyValueContent>,
    pub comment: Option<String>,
    pub properties: Vec<Property>,
}

impl Property {
    /// Depth-first search for the first property whose label matches.
    pub fn find<'a>(properties: &'a [Property], label: &str) -> Option<&'a Property> {
        properties.iter().find_map(|property| {
            if property.label.name == label {
                Some(property)
            } else {
                Property::find(&property.properties, label)
            }
        })
    }

    /// Values of the first property labelled `label`, or an empty slice.
    pub fn values_by_label<'a>(
        properties: &'a [Property],
        label: &str,
    ) -> &'a [PropertyValueContent] {
        Property::find(properties, label)
            .map(|property| property.values.as_slice())
            .unwrap_or(&[])
    }

    /// Pre-order flattening of a property forest.
    pub fn flatten(properties: &[Property]) -> Vec<&Property> {
        let mut flattened = Vec::new();
        let mut stack: Vec<&Property> = properties.iter().rev().collect();
        while let Some(property) = stack.pop() {
            flattened.push(property);
            stack.extend(property.properties.iter().rev());
        }
        flattened
    }
}
