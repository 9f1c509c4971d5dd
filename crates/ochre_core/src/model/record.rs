//! Small records owned by items: notes, observations, events and
//! interpretations.

use crate::model::item::Person;
use crate::model::link::Link;
use crate::model::property::Property;
use crate::model::text::MultilingualText;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub number: Option<i64>,
    pub title: Option<String>,
    /// Rich text when the options request it.
    pub content: MultilingualText,
    pub authors: Vec<Person>,
}

/// One recorded visit to a spatial unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub number: Option<i64>,
    pub date: Option<NaiveDate>,
    pub observers: Vec<String>,
    pub notes: Vec<Note>,
    pub links: Vec<Link>,
    pub properties: Vec<Property>,
}

/// Editorial or lifecycle event recorded against an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub date_time: Option<DateTime<Utc>>,
    pub agent: Option<EventAgent>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAgent {
    pub uuid: Option<Uuid>,
    pub content: String,
}

/// Dated reading of a concept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub number: Option<i64>,
    pub date: Option<NaiveDate>,
    pub properties: Vec<Property>,
}
