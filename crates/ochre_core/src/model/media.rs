//! Image, image map and license metadata.

use crate::model::identification::Identification;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub publication_date_time: Option<DateTime<Utc>>,
    pub identification: Option<Identification>,
    pub href: Option<String>,
    /// Prefix the renderer prepends to build `<img src>` for derived sizes.
    pub html_img_src_prefix: Option<String>,
    pub content: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMap {
    pub width: f64,
    pub height: f64,
    pub areas: Vec<ImageMapArea>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMapArea {
    pub uuid: Uuid,
    pub publication_date_time: Option<DateTime<Utc>>,
    /// Category of the item the area points at, as exported.
    #[serde(rename = "type")]
    pub area_type: Option<String>,
    pub title: Option<String>,
    pub shape: ImageMapShape,
    pub coords: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageMapShape {
    Rectangle,
    Circle,
    Polygon,
}

impl ImageMapShape {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "rect" | "rectangle" => Some(Self::Rectangle),
            "circle" => Some(Self::Circle),
            "poly" | "polygon" => Some(Self::Polygon),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub content: String,
    pub url: Option<String>,
}
