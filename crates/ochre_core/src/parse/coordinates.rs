//! Coordinate parsing.

use crate::content::resolver::optional_plain_text;
use crate::error::{NormalizeError, NormalizeResult};
use crate::model::geo::{Coordinate, CoordinateSource, LatLng};
use crate::raw::access::{optional_number, optional_text, required_number};
use crate::raw::container_children;
use serde_json::Value;

/// Parses the `coordinates.coord` container of an item.
pub fn parse_coordinates(parent: &Value, language: &str) -> NormalizeResult<Vec<Coordinate>> {
    container_children(parent, "coordinates", "coord")
        .into_iter()
        .map(|raw| parse_coordinate(raw, language))
        .collect()
}

fn parse_coordinate(raw: &Value, language: &str) -> NormalizeResult<Coordinate> {
    let source = match raw.get("source") {
        None | Some(Value::Null) => None,
        Some(source) => Some(CoordinateSource {
            context: optional_text(source, "context"),
            label: optional_plain_text(source, "label", language)?.unwrap_or_default(),
        }),
    };

    let kind = optional_text(raw, "type").unwrap_or_else(|| "point".to_string());
    match kind.as_str() {
        "point" => Ok(Coordinate::Point {
            latitude: required_number(raw, "latitude")?,
            longitude: required_number(raw, "longitude")?,
            altitude: optional_number(raw, "altitude")?,
            source,
        }),
        "plane" => Ok(Coordinate::Plane {
            minimum: parse_corner(raw, "minimum")?,
            maximum: parse_corner(raw, "maximum")?,
            source,
        }),
        _ => Err(NormalizeError::unknown_vocabulary("coordinate type", kind)),
    }
}

fn parse_corner(raw: &Value, key: &'static str) -> NormalizeResult<LatLng> {
    let corner = raw
        .get(key)
        .filter(|corner| !corner.is_null())
        .ok_or_else(|| NormalizeError::missing_key(key))?;
    Ok(LatLng {
        latitude: required_number(corner, "latitude")?,
        longitude: required_number(corner, "longitude")?,
    })
}
