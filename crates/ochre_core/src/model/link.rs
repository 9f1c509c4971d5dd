//! Cross-reference records.
//!
//! # Responsibility
//! - Describe references captured from the export without resolving them.
//!
//! # Invariants
//! - A reference is identified by `uuid` + `category`; the target item is
//!   never fetched or embedded here.

use crate::model::category::ItemCategory;
use crate::model::identification::Identification;
use crate::model::text::MultilingualText;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Normalized item-level link (one per referenced target).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub uuid: Uuid,
    pub category: ItemCategory,
    pub identification: Option<Identification>,
    /// Free-form target type as exported (`image`, `webpage`, ...).
    #[serde(rename = "type")]
    pub link_type: Option<String>,
    pub publication_date_time: Option<DateTime<Utc>>,
    pub content: Option<MultilingualText>,
    pub href: Option<String>,
    /// Present only for `ItemCategory::Resource` targets.
    pub image: Option<LinkImage>,
}

/// Rendering hints carried by resource links.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkImage {
    pub is_inline: bool,
    pub is_primary: bool,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub file_size: Option<f64>,
}

/// Explicit type of a link embedded inside rich text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmbeddedLinkType {
    Image,
    ExternalDocument,
    Webpage,
}

impl EmbeddedLinkType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "image" => Some(Self::Image),
            "externalDocument" => Some(Self::ExternalDocument),
            "webpage" => Some(Self::Webpage),
            _ => None,
        }
    }
}

/// Link descriptor found inside an annotated span, already resolved for
/// the language of its branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedLink {
    pub uuid: Uuid,
    pub category: ItemCategory,
    pub link_type: Option<EmbeddedLinkType>,
    /// `rend="inline"` on the descriptor.
    pub is_inline: bool,
    pub publication_date_time: Option<DateTime<Utc>>,
    pub href: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Tooltip body; the target's own label when no content is given.
    pub content: Option<String>,
}
