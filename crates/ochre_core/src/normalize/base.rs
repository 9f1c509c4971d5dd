//! Common envelope shared by every category.

use crate::config::NormalizeOptions;
use crate::content::resolver::optional_content;
use crate::error::NormalizeResult;
use crate::model::category::ItemCategory;
use crate::model::identification::Identification;
use crate::model::item::BaseItem;
use crate::parse::context::parse_context;
use crate::parse::identification::optional_identification;
use crate::parse::media::parse_license;
use crate::parse::record::{parse_events, parse_people};
use crate::raw::access::required_uuid;
use crate::raw::time::{optional_date, optional_date_time};
use serde_json::Value;

/// Builds the envelope of `raw` for `category`.
///
/// A missing identification block yields a blank label.
pub fn parse_base(
    raw: &Value,
    category: ItemCategory,
    options: &NormalizeOptions,
) -> NormalizeResult<BaseItem> {
    let languages = options.languages();
    let context = match raw.get("context") {
        None | Some(Value::Null) => None,
        Some(context) => Some(parse_context(context, options.default_language())?),
    };
    Ok(BaseItem {
        uuid: required_uuid(raw, "uuid")?,
        category,
        publication_date_time: optional_date_time(raw, "publicationDateTime")?,
        context,
        date: optional_date(raw, "date")?,
        license: parse_license(raw),
        identification: optional_identification(raw, languages)
            .unwrap_or_else(|| Identification::blank(languages)),
        creators: parse_people(raw, "creators", "creator", options)?,
        description: optional_content(raw, "description", languages, options.rich_text)?,
        events: parse_events(raw)?,
    })
}
