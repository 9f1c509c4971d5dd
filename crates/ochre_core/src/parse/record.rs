//! Notes, observations, events and interpretations.

use crate::config::NormalizeOptions;
use crate::content::resolver::{own_content, resolve_content};
use crate::error::NormalizeResult;
use crate::model::item::Person;
use crate::model::record::{Event, EventAgent, Interpretation, Note, Observation};
use crate::model::text::MultilingualText;
use crate::normalize::items::parse_person;
use crate::parse::link::parse_links_field;
use crate::parse::property::parse_properties;
use crate::raw::access::{optional_integer, optional_text, optional_uuid, scalar_text};
use crate::raw::time::{optional_date, optional_date_time};
use crate::raw::{as_sequence, container_children};
use serde_json::Value;

/// Parses the `notes.note` container of an item.
pub fn parse_notes(parent: &Value, options: &NormalizeOptions) -> NormalizeResult<Vec<Note>> {
    container_children(parent, "notes", "note")
        .into_iter()
        .map(|raw| parse_note(raw, options))
        .collect()
}

fn parse_note(raw: &Value, options: &NormalizeOptions) -> NormalizeResult<Note> {
    let languages = options.languages();
    if scalar_text(raw).is_some() {
        return Ok(Note {
            number: None,
            title: None,
            content: resolve_content(raw, languages, options.rich_text)?,
            authors: Vec::new(),
        });
    }
    let content = own_content(raw, languages, options.rich_text)?
        .unwrap_or_else(|| MultilingualText::empty(languages));
    Ok(Note {
        number: optional_integer(raw, "noteNo")?,
        title: optional_text(raw, "title"),
        content,
        authors: parse_people(raw, "authors", "author", options)?,
    })
}

/// Parses the `observations.observation` container of a spatial unit.
pub fn parse_observations(
    parent: &Value,
    options: &NormalizeOptions,
) -> NormalizeResult<Vec<Observation>> {
    container_children(parent, "observations", "observation")
        .into_iter()
        .map(|raw| {
            let number = match optional_integer(raw, "observationNo")? {
                Some(number) => Some(number),
                None => optional_integer(raw, "n")?,
            };
            Ok(Observation {
                number,
                date: optional_date(raw, "date")?,
                observers: parse_observers(raw.get("observers")),
                notes: parse_notes(raw, options)?,
                links: parse_links_field(raw, "links", options)?,
                properties: parse_properties(raw, options.default_language())?,
            })
        })
        .collect()
}

/// Parses the `events.event` container of an item.
pub fn parse_events(parent: &Value) -> NormalizeResult<Vec<Event>> {
    container_children(parent, "events", "event")
        .into_iter()
        .map(|raw| {
            let agent = match raw.get("agent") {
                None | Some(Value::Null) => None,
                Some(agent) => Some(EventAgent {
                    uuid: optional_uuid(agent, "uuid")?,
                    content: scalar_text(agent)
                        .or_else(|| optional_text(agent, "content"))
                        .unwrap_or_default(),
                }),
            };
            Ok(Event {
                date_time: optional_date_time(raw, "dateTime")?,
                agent,
                label: scalar_text(raw)
                    .or_else(|| optional_text(raw, "label"))
                    .unwrap_or_default(),
            })
        })
        .collect()
}

/// Parses the `interpretations.interpretation` container of a concept.
pub fn parse_interpretations(
    parent: &Value,
    language: &str,
) -> NormalizeResult<Vec<Interpretation>> {
    container_children(parent, "interpretations", "interpretation")
        .into_iter()
        .map(|raw| {
            Ok(Interpretation {
                number: optional_integer(raw, "interpretationNo")?,
                date: optional_date(raw, "date")?,
                properties: parse_properties(raw, language)?,
            })
        })
        .collect()
}

/// Parses a `plural.singular` container of person records.
pub fn parse_people(
    parent: &Value,
    plural: &str,
    singular: &str,
    options: &NormalizeOptions,
) -> NormalizeResult<Vec<Person>> {
    container_children(parent, plural, singular)
        .into_iter()
        .map(|raw| parse_person(raw, options))
        .collect()
}

fn parse_observers(raw: Option<&Value>) -> Vec<String> {
    as_sequence(raw)
        .into_iter()
        .flat_map(|observer| match observer {
            Value::String(text) if text.contains(';') => text
                .split(';')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>(),
            other => scalar_text(other)
                .or_else(|| optional_text(other, "content"))
                .into_iter()
                .collect(),
        })
        .collect()
}
