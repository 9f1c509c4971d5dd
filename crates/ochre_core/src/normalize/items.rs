//! Category-specific item parsers.
//!
//! Each parser receives the payload found under its category key and
//! composes the envelope from [`parse_base`] with its own fields.

use crate::config::NormalizeOptions;
use crate::content::resolver::{optional_content, optional_plain_text, own_content};
use crate::error::NormalizeResult;
use crate::model::category::ItemCategory;
use crate::model::item::{
    Address, Bibliography, Citation, Concept, EntryInfo, Period, Person, PropertyValue,
    PropertyVariable, PublicationInfo, Resource, Set, SpatialUnit, Tree,
};
use crate::normalize::base::parse_base;
use crate::normalize::child_items;
use crate::parse::coordinates::parse_coordinates;
use crate::parse::link::parse_links_field;
use crate::parse::media::{parse_image, parse_image_map};
use crate::parse::property::parse_properties;
use crate::parse::record::{
    parse_interpretations, parse_notes, parse_observations, parse_people,
};
use crate::raw::access::{optional_bool, optional_integer, optional_text};
use crate::raw::time::optional_date;
use crate::raw::{as_sequence, container_children};
use serde_json::Value;

pub fn parse_resource(raw: &Value, options: &NormalizeOptions) -> NormalizeResult<Resource> {
    let language = options.default_language();
    let resources = as_sequence(raw.get("resource"))
        .into_iter()
        .map(|nested| parse_resource(nested, options))
        .collect::<NormalizeResult<Vec<_>>>()?;
    Ok(Resource {
        base: parse_base(raw, ItemCategory::Resource, options)?,
        resource_type: optional_text(raw, "type"),
        number: optional_integer(raw, "n")?,
        href: optional_text(raw, "href"),
        file_format: optional_text(raw, "format"),
        document: optional_content(raw, "document", options.languages(), options.rich_text)?,
        image: parse_image(raw, options.languages())?,
        image_map: parse_image_map(raw)?,
        coordinates: parse_coordinates(raw, language)?,
        periods: parse_periods(raw, options)?,
        links: parse_links_field(raw, "links", options)?,
        reverse_links: parse_links_field(raw, "reverseLinks", options)?,
        properties: parse_properties(raw, language)?,
        notes: parse_notes(raw, options)?,
        bibliographies: parse_bibliographies(raw, options)?,
        resources,
    })
}

pub fn parse_spatial_unit(
    raw: &Value,
    options: &NormalizeOptions,
) -> NormalizeResult<SpatialUnit> {
    let language = options.default_language();
    Ok(SpatialUnit {
        base: parse_base(raw, ItemCategory::SpatialUnit, options)?,
        number: optional_integer(raw, "n")?,
        image: parse_image(raw, options.languages())?,
        coordinates: parse_coordinates(raw, language)?,
        observations: parse_observations(raw, options)?,
        periods: parse_periods(raw, options)?,
        links: parse_links_field(raw, "links", options)?,
        properties: parse_properties(raw, language)?,
        bibliographies: parse_bibliographies(raw, options)?,
    })
}

pub fn parse_concept(raw: &Value, options: &NormalizeOptions) -> NormalizeResult<Concept> {
    Ok(Concept {
        base: parse_base(raw, ItemCategory::Concept, options)?,
        number: optional_integer(raw, "n")?,
        image: parse_image(raw, options.languages())?,
        interpretations: parse_interpretations(raw, options.default_language())?,
        links: parse_links_field(raw, "links", options)?,
    })
}

pub fn parse_period(raw: &Value, options: &NormalizeOptions) -> NormalizeResult<Period> {
    let language = options.default_language();
    Ok(Period {
        base: parse_base(raw, ItemCategory::Period, options)?,
        period_type: optional_text(raw, "type"),
        number: optional_integer(raw, "n")?,
        coordinates: parse_coordinates(raw, language)?,
        properties: parse_properties(raw, language)?,
    })
}

pub fn parse_bibliography(
    raw: &Value,
    options: &NormalizeOptions,
) -> NormalizeResult<Bibliography> {
    let language = options.default_language();
    let publication_info = match raw.get("publicationInfo") {
        None | Some(Value::Null) => None,
        Some(info) => Some(PublicationInfo {
            publishers: parse_people(info, "publishers", "person", options)?,
            start_date: optional_date(info, "startDate")?,
        }),
    };
    let entry_info = match raw.get("entryInfo") {
        None | Some(Value::Null) => None,
        Some(info) => Some(EntryInfo {
            start_issue: optional_text(info, "startIssue"),
            start_volume: optional_text(info, "startVolume"),
        }),
    };
    Ok(Bibliography {
        base: parse_base(raw, ItemCategory::Bibliography, options)?,
        bibliography_type: optional_text(raw, "type"),
        number: optional_integer(raw, "n")?,
        zotero_id: optional_text(raw, "zoteroId"),
        citation: Citation {
            short: optional_plain_text(raw, "citationFormatSpan", language)?,
            long: optional_plain_text(raw, "citationFormat", language)?,
        },
        publication_info,
        entry_info,
        authors: parse_people(raw, "authors", "person", options)?,
        source_resources: parse_links_field(raw, "source", options)?,
        periods: parse_periods(raw, options)?,
        properties: parse_properties(raw, language)?,
    })
}

pub fn parse_person(raw: &Value, options: &NormalizeOptions) -> NormalizeResult<Person> {
    let language = options.default_language();
    let address = match raw.get("address") {
        None | Some(Value::Null) => None,
        Some(address) => Some(Address {
            country: optional_text(address, "country"),
            city: optional_text(address, "city"),
            state: optional_text(address, "state"),
        }),
    };
    Ok(Person {
        base: parse_base(raw, ItemCategory::Person, options)?,
        person_type: optional_text(raw, "type"),
        number: optional_integer(raw, "n")?,
        address,
        coordinates: parse_coordinates(raw, language)?,
        content: own_content(raw, options.languages(), options.rich_text)?,
        periods: parse_periods(raw, options)?,
        properties: parse_properties(raw, language)?,
        bibliographies: parse_bibliographies(raw, options)?,
    })
}

pub fn parse_property_value(
    raw: &Value,
    options: &NormalizeOptions,
) -> NormalizeResult<PropertyValue> {
    Ok(PropertyValue {
        base: parse_base(raw, ItemCategory::PropertyValue, options)?,
        number: optional_integer(raw, "n")?,
        notes: parse_notes(raw, options)?,
        links: parse_links_field(raw, "links", options)?,
    })
}

pub fn parse_property_variable(
    raw: &Value,
    options: &NormalizeOptions,
) -> NormalizeResult<PropertyVariable> {
    Ok(PropertyVariable {
        base: parse_base(raw, ItemCategory::PropertyVariable, options)?,
        variable_type: optional_text(raw, "type"),
        number: optional_integer(raw, "n")?,
        notes: parse_notes(raw, options)?,
        links: parse_links_field(raw, "links", options)?,
    })
}

/// Parses a set; `child_category` overrides the set's own `itemCategory`.
pub fn parse_set(
    raw: &Value,
    child_category: Option<ItemCategory>,
    options: &NormalizeOptions,
) -> NormalizeResult<Set> {
    let (item_category, items) = child_items(raw, child_category, options)?;
    Ok(Set {
        base: parse_base(raw, ItemCategory::Set, options)?,
        set_type: optional_text(raw, "type"),
        number: optional_integer(raw, "n")?,
        is_suppressed: optional_bool(raw, "isSuppressed")?.unwrap_or(false),
        is_tabular_structure: optional_bool(raw, "isTabularStructure")?.unwrap_or(false),
        item_category,
        items,
    })
}

/// Parses a tree; `child_category` overrides the tree's own `itemCategory`.
pub fn parse_tree(
    raw: &Value,
    child_category: Option<ItemCategory>,
    options: &NormalizeOptions,
) -> NormalizeResult<Tree> {
    let (item_category, items) = child_items(raw, child_category, options)?;
    Ok(Tree {
        base: parse_base(raw, ItemCategory::Tree, options)?,
        tree_type: optional_text(raw, "type"),
        number: optional_integer(raw, "n")?,
        item_category,
        items,
        properties: parse_properties(raw, options.default_language())?,
    })
}

fn parse_periods(raw: &Value, options: &NormalizeOptions) -> NormalizeResult<Vec<Period>> {
    container_children(raw, "periods", "period")
        .into_iter()
        .map(|period| parse_period(period, options))
        .collect()
}

fn parse_bibliographies(
    raw: &Value,
    options: &NormalizeOptions,
) -> NormalizeResult<Vec<Bibliography>> {
    container_children(raw, "bibliographies", "bibliography")
        .into_iter()
        .map(|entry| parse_bibliography(entry, options))
        .collect()
}
