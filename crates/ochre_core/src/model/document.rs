//! Document envelope: one item plus the metadata it was published with.

use crate::model::identification::Identification;
use crate::model::item::Item;
use crate::model::text::MultilingualText;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDocument {
    pub uuid: Option<Uuid>,
    pub publication_date_time: Option<DateTime<Utc>>,
    /// Languages the item was resolved in; the first is the default.
    pub languages: Vec<String>,
    pub metadata: Option<Metadata>,
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub project: Option<Identification>,
    pub dataset: Option<String>,
    pub publisher: Option<String>,
    pub identifier: Option<String>,
    pub description: Option<MultilingualText>,
}
