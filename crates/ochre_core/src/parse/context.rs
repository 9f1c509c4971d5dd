//! Context (placement path) parsing.

use crate::content::resolver::own_content;
use crate::error::NormalizeResult;
use crate::model::context::{Context, ContextItem, ContextNode};
use crate::raw::access::{optional_integer, optional_text, required_uuid};
use crate::raw::as_sequence;
use crate::raw::time::optional_date_time;
use serde_json::Value;

/// Parses `raw` = `{ "context": node | [node], "displayPath": "..." }`.
pub fn parse_context(raw: &Value, language: &str) -> NormalizeResult<Context> {
    let nodes = as_sequence(raw.get("context"))
        .into_iter()
        .map(|node| parse_context_node(node, language))
        .collect::<NormalizeResult<Vec<_>>>()?;
    Ok(Context {
        nodes,
        display_path: optional_text(raw, "displayPath").unwrap_or_default(),
    })
}

fn parse_context_node(raw: &Value, language: &str) -> NormalizeResult<ContextNode> {
    let tree = match raw.get("tree") {
        None | Some(Value::Null) => None,
        Some(tree) => Some(parse_context_item(tree, language)?),
    };
    let project = match raw.get("project") {
        None | Some(Value::Null) => None,
        Some(project) => Some(parse_context_item(project, language)?),
    };
    let spatial_units = as_sequence(raw.get("spatialUnit"))
        .into_iter()
        .map(|unit| parse_context_item(unit, language))
        .collect::<NormalizeResult<Vec<_>>>()?;
    Ok(ContextNode {
        tree,
        project,
        spatial_units,
    })
}

fn parse_context_item(raw: &Value, language: &str) -> NormalizeResult<ContextItem> {
    let languages = [language.to_string()];
    let content = own_content(raw, &languages, false)?
        .map(|text| text.get_text(Some(language)).to_string())
        .unwrap_or_default();
    Ok(ContextItem {
        uuid: required_uuid(raw, "uuid")?,
        publication_date_time: optional_date_time(raw, "publicationDateTime")?,
        number: optional_integer(raw, "n")?,
        content,
    })
}
