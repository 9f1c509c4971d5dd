//! Normalized item model.
//!
//! # Responsibility
//! - Define the common envelope shared by every category and the ten
//!   category-specific item types.
//! - Expose [`Item`], the tagged union produced by the dispatcher.
//!
//! # Invariants
//! - `BaseItem::category` always equals the variant holding it.
//! - Items are built once and never mutated afterwards.
//! - Cross-references are kept as [`Link`] values, never as nested items.

use crate::model::category::ItemCategory;
use crate::model::context::Context;
use crate::model::geo::Coordinate;
use crate::model::identification::Identification;
use crate::model::link::Link;
use crate::model::media::{Image, ImageMap, License};
use crate::model::property::Property;
use crate::model::record::{Event, Interpretation, Note, Observation};
use crate::model::text::MultilingualText;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Fields every category carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseItem {
    pub uuid: Uuid,
    pub category: ItemCategory,
    pub publication_date_time: Option<DateTime<Utc>>,
    pub context: Option<Context>,
    pub date: Option<NaiveDate>,
    pub license: Option<License>,
    pub identification: Identification,
    pub creators: Vec<Person>,
    pub description: Option<MultilingualText>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(flatten)]
    pub base: BaseItem,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub number: Option<i64>,
    pub href: Option<String>,
    pub file_format: Option<String>,
    pub document: Option<MultilingualText>,
    pub image: Option<Image>,
    pub image_map: Option<ImageMap>,
    pub coordinates: Vec<Coordinate>,
    pub periods: Vec<Period>,
    pub links: Vec<Link>,
    pub reverse_links: Vec<Link>,
    pub properties: Vec<Property>,
    pub notes: Vec<Note>,
    pub bibliographies: Vec<Bibliography>,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialUnit {
    #[serde(flatten)]
    pub base: BaseItem,
    pub number: Option<i64>,
    pub image: Option<Image>,
    pub coordinates: Vec<Coordinate>,
    pub observations: Vec<Observation>,
    pub periods: Vec<Period>,
    pub links: Vec<Link>,
    pub properties: Vec<Property>,
    pub bibliographies: Vec<Bibliography>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    #[serde(flatten)]
    pub base: BaseItem,
    pub number: Option<i64>,
    pub image: Option<Image>,
    pub interpretations: Vec<Interpretation>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(flatten)]
    pub base: BaseItem,
    #[serde(rename = "type")]
    pub period_type: Option<String>,
    pub number: Option<i64>,
    pub coordinates: Vec<Coordinate>,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bibliography {
    #[serde(flatten)]
    pub base: BaseItem,
    #[serde(rename = "type")]
    pub bibliography_type: Option<String>,
    pub number: Option<i64>,
    pub zotero_id: Option<String>,
    pub citation: Citation,
    pub publication_info: Option<PublicationInfo>,
    pub entry_info: Option<EntryInfo>,
    pub authors: Vec<Person>,
    /// Resources this entry was cited from.
    pub source_resources: Vec<Link>,
    pub periods: Vec<Period>,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub short: Option<String>,
    pub long: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationInfo {
    pub publishers: Vec<Person>,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInfo {
    pub start_issue: Option<String>,
    pub start_volume: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(flatten)]
    pub base: BaseItem,
    #[serde(rename = "type")]
    pub person_type: Option<String>,
    pub number: Option<i64>,
    pub address: Option<Address>,
    pub coordinates: Vec<Coordinate>,
    pub content: Option<MultilingualText>,
    pub periods: Vec<Period>,
    pub properties: Vec<Property>,
    pub bibliographies: Vec<Bibliography>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub country: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    #[serde(flatten)]
    pub base: BaseItem,
    pub number: Option<i64>,
    pub notes: Vec<Note>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyVariable {
    #[serde(flatten)]
    pub base: BaseItem,
    #[serde(rename = "type")]
    pub variable_type: Option<String>,
    pub number: Option<i64>,
    pub notes: Vec<Note>,
    pub links: Vec<Link>,
}

/// Flat collection of items of one child category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    #[serde(flatten)]
    pub base: BaseItem,
    #[serde(rename = "type")]
    pub set_type: Option<String>,
    pub number: Option<i64>,
    pub is_suppressed: bool,
    pub is_tabular_structure: bool,
    /// `None` only when the set declares no category and holds no items.
    pub item_category: Option<ItemCategory>,
    pub items: Vec<Item>,
}

/// Hierarchy root holding items of one child category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    #[serde(flatten)]
    pub base: BaseItem,
    #[serde(rename = "type")]
    pub tree_type: Option<String>,
    pub number: Option<i64>,
    pub item_category: Option<ItemCategory>,
    pub items: Vec<Item>,
    pub properties: Vec<Property>,
}

/// Any normalized item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Resource(Resource),
    SpatialUnit(SpatialUnit),
    Concept(Concept),
    Period(Period),
    Bibliography(Bibliography),
    Person(Person),
    PropertyValue(PropertyValue),
    PropertyVariable(PropertyVariable),
    Set(Set),
    Tree(Tree),
}

impl Item {
    pub fn base(&self) -> &BaseItem {
        match self {
            Self::Resource(item) => &item.base,
            Self::SpatialUnit(item) => &item.base,
            Self::Concept(item) => &item.base,
            Self::Period(item) => &item.base,
            Self::Bibliography(item) => &item.base,
            Self::Person(item) => &item.base,
            Self::PropertyValue(item) => &item.base,
            Self::PropertyVariable(item) => &item.base,
            Self::Set(item) => &item.base,
            Self::Tree(item) => &item.base,
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.base().category
    }

    pub fn uuid(&self) -> Uuid {
        self.base().uuid
    }
}
