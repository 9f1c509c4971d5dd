//! Document envelope normalization.

use crate::config::NormalizeOptions;
use crate::content::resolver::{optional_content, optional_plain_text};
use crate::error::{NormalizeError, NormalizeResult};
use crate::model::category::ItemCategory;
use crate::model::document::{Metadata, NormalizedDocument};
use crate::normalize::normalize_item;
use crate::parse::identification::optional_identification;
use crate::raw::access::{optional_text, optional_uuid};
use crate::raw::time::optional_date_time;
use log::info;
use serde_json::Value;

/// Normalizes a full `{ "ochre": { ... } }` document.
///
/// Without explicit `options`, the request languages come from the
/// envelope's `languages` attribute and rich text is enabled.
pub fn normalize_document(
    raw: &Value,
    expected: Option<ItemCategory>,
    options: Option<NormalizeOptions>,
) -> NormalizeResult<NormalizedDocument> {
    let envelope = raw
        .get("ochre")
        .filter(|envelope| envelope.is_object())
        .ok_or_else(|| NormalizeError::missing_key("ochre"))?;

    let options = match options {
        Some(options) => options,
        None => match optional_text(envelope, "languages") {
            Some(list) => NormalizeOptions::from_language_list(&list),
            None => NormalizeOptions::default(),
        },
    };

    let item = normalize_item(envelope, expected, &options)?;
    let metadata = match envelope.get("metadata") {
        None | Some(Value::Null) => None,
        Some(metadata) => Some(parse_metadata(metadata, &options)?),
    };

    info!(
        "event=document_normalized module=normalize status=ok category={} languages={}",
        item.category(),
        options.languages().join(";")
    );
    Ok(NormalizedDocument {
        uuid: optional_uuid(envelope, "uuid")?,
        publication_date_time: optional_date_time(envelope, "publicationDateTime")?,
        languages: options.languages().to_vec(),
        metadata,
        item,
    })
}

fn parse_metadata(raw: &Value, options: &NormalizeOptions) -> NormalizeResult<Metadata> {
    let language = options.default_language();
    let project = match raw.get("project") {
        None | Some(Value::Null) => None,
        Some(project) => optional_identification(project, options.languages()),
    };
    Ok(Metadata {
        project,
        dataset: optional_plain_text(raw, "dataset", language)?,
        publisher: optional_plain_text(raw, "publisher", language)?,
        identifier: optional_plain_text(raw, "identifier", language)?,
        description: optional_content(raw, "description", options.languages(), options.rich_text)?,
    })
}
