//! Link descriptor parsing.
//!
//! # Responsibility
//! - Parse descriptors embedded in annotated spans into [`EmbeddedLink`].
//! - Parse item-level `links` blocks into one [`Link`] per target.
//!
//! # Invariants
//! - Keys of a links block must be item categories; anything else fails.
//! - Targets are emitted in canonical category order, then source order.
//! - Explicit embedded link types outside `image|externalDocument|webpage`
//!   fail here, before fragment resolution.

use crate::config::NormalizeOptions;
use crate::content::resolver::resolve_content;
use crate::error::{NormalizeError, NormalizeResult};
use crate::model::category::ItemCategory;
use crate::model::link::{EmbeddedLink, EmbeddedLinkType, Link, LinkImage};
use crate::parse::identification::optional_identification;
use crate::raw::access::{
    optional_bool, optional_number, optional_text, required_uuid, tokens,
};
use crate::raw::as_sequence;
use crate::raw::time::optional_date_time;
use serde_json::Value;

/// Parses the `links` block of an annotated span for one language.
pub fn parse_embedded_links(
    raw: &Value,
    language: &str,
    languages: &[String],
) -> NormalizeResult<Vec<EmbeddedLink>> {
    let preferred = prefer_language(language, languages);
    let mut links = Vec::new();
    for (category, descriptor) in categorized_descriptors(raw)? {
        let link_type = match optional_text(descriptor, "type") {
            None => None,
            Some(value) => Some(
                EmbeddedLinkType::parse(&value)
                    .ok_or_else(|| NormalizeError::unknown_vocabulary("link type", value))?,
            ),
        };
        links.push(EmbeddedLink {
            uuid: required_uuid(descriptor, "uuid")?,
            category,
            link_type,
            is_inline: is_inline(descriptor),
            publication_date_time: optional_date_time(descriptor, "publicationDateTime")?,
            href: optional_text(descriptor, "href"),
            width: optional_number(descriptor, "width")?,
            height: optional_number(descriptor, "height")?,
            content: tooltip_content(descriptor, language, &preferred)?,
        });
    }
    Ok(links)
}

/// Parses an item-level links block.
pub fn parse_links(raw: &Value, options: &NormalizeOptions) -> NormalizeResult<Vec<Link>> {
    let languages = options.languages();
    let mut links = Vec::new();
    for (category, descriptor) in categorized_descriptors(raw)? {
        let content = if has_value(descriptor, "content") {
            Some(resolve_content(descriptor, languages, false)?)
        } else {
            None
        };
        let image = if category == ItemCategory::Resource {
            Some(LinkImage {
                is_inline: is_inline(descriptor),
                is_primary: optional_bool(descriptor, "isPrimary")?.unwrap_or(false),
                height: optional_number(descriptor, "height")?,
                width: optional_number(descriptor, "width")?,
                file_size: optional_number(descriptor, "fileSize")?,
            })
        } else {
            None
        };
        links.push(Link {
            uuid: required_uuid(descriptor, "uuid")?,
            category,
            identification: optional_identification(descriptor, languages),
            link_type: optional_text(descriptor, "type"),
            publication_date_time: optional_date_time(descriptor, "publicationDateTime")?,
            content,
            href: optional_text(descriptor, "href"),
            image,
        });
    }
    Ok(links)
}

/// Parses `parent[key]` as a links block; absent means no links.
pub fn parse_links_field(
    parent: &Value,
    key: &str,
    options: &NormalizeOptions,
) -> NormalizeResult<Vec<Link>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(raw) => parse_links(raw, options),
    }
}

fn categorized_descriptors(raw: &Value) -> NormalizeResult<Vec<(ItemCategory, &Value)>> {
    let fields = raw
        .as_object()
        .ok_or_else(|| NormalizeError::unexpected_shape("links", "object keyed by category"))?;
    if let Some(unknown) = fields
        .keys()
        .find(|key| ItemCategory::from_key(key).is_none())
    {
        return Err(NormalizeError::unknown_vocabulary(
            "link category",
            unknown.clone(),
        ));
    }

    let mut descriptors = Vec::new();
    for category in ItemCategory::ALL {
        for descriptor in as_sequence(fields.get(category.key())) {
            descriptors.push((category, descriptor));
        }
    }
    Ok(descriptors)
}

fn tooltip_content(
    descriptor: &Value,
    language: &str,
    preferred: &[String],
) -> NormalizeResult<Option<String>> {
    if has_value(descriptor, "content") {
        let content = resolve_content(descriptor, preferred, false)?;
        return Ok(Some(content.get_text(Some(language)).to_string()));
    }
    Ok(optional_identification(descriptor, preferred)
        .map(|identification| identification.label.get_text(Some(language)).to_string()))
}

fn is_inline(descriptor: &Value) -> bool {
    optional_text(descriptor, "rend")
        .map(|rend| tokens(&rend).any(|token| token == "inline"))
        .unwrap_or(false)
}

fn has_value(parent: &Value, key: &str) -> bool {
    parent.get(key).is_some_and(|value| !value.is_null())
}

/// `language` first, then the remaining request languages as fallbacks.
fn prefer_language(language: &str, languages: &[String]) -> Vec<String> {
    let mut preferred = vec![language.to_string()];
    preferred.extend(
        languages
            .iter()
            .filter(|candidate| candidate.as_str() != language)
            .cloned(),
    );
    preferred
}
