//! Hierarchical placement of an item (project → tree → spatial units).

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub nodes: Vec<ContextNode>,
    /// Human-readable breadcrumb as exported.
    pub display_path: String,
}

/// One placement path of the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextNode {
    pub tree: Option<ContextItem>,
    pub project: Option<ContextItem>,
    pub spatial_units: Vec<ContextItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextItem {
    pub uuid: Uuid,
    pub publication_date_time: Option<DateTime<Utc>>,
    pub number: Option<i64>,
    pub content: String,
}
