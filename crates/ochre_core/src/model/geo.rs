use serde::Serialize;

/// Geographic position attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Coordinate {
    Point {
        latitude: f64,
        longitude: f64,
        altitude: Option<f64>,
        source: Option<CoordinateSource>,
    },
    /// Axis-aligned bounding box.
    Plane {
        minimum: LatLng,
        maximum: LatLng,
        source: Option<CoordinateSource>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where a coordinate was taken from (survey, gazetteer, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSource {
    pub context: Option<String>,
    pub label: String,
}
