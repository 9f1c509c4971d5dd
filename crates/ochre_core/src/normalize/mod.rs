//! Category dispatch.
//!
//! # Responsibility
//! - Select the category branch of a raw item envelope and build the
//!   matching typed [`Item`].
//! - Resolve the child category of sets and trees and normalize their
//!   children through the same dispatcher.
//!
//! # Invariants
//! - A requested category whose key is absent always fails; a partial
//!   item is never returned.
//! - Only category keys take part in dispatch; sibling envelope fields
//!   such as `uuid` or `languages` are ignored here.
//! - Without an explicit request, exactly one category key must be present.

pub mod base;
pub mod document;
pub mod items;

use crate::config::NormalizeOptions;
use crate::error::{NormalizeError, NormalizeResult};
use crate::model::category::ItemCategory;
use crate::model::item::Item;
use crate::raw::access::optional_text;
use crate::raw::as_sequence;
use log::debug;
use serde_json::Value;

pub use document::normalize_document;

/// Normalizes the single item held by `raw`.
///
/// `expected` forces the category branch; otherwise the one category key
/// present in `raw` decides.
pub fn normalize_item(
    raw: &Value,
    expected: Option<ItemCategory>,
    options: &NormalizeOptions,
) -> NormalizeResult<Item> {
    normalize_item_with_children(raw, expected, None, options)
}

/// Like [`normalize_item`], additionally forcing the child category of a
/// set or tree. `child_category` is ignored for other categories.
pub fn normalize_item_with_children(
    raw: &Value,
    expected: Option<ItemCategory>,
    child_category: Option<ItemCategory>,
    options: &NormalizeOptions,
) -> NormalizeResult<Item> {
    if !raw.is_object() {
        return Err(NormalizeError::unexpected_shape(
            "item",
            "object keyed by item category",
        ));
    }
    let category = match expected {
        Some(category) => category,
        None => single_category(raw, "item", "exactly one item category key")?,
    };
    let payload = raw
        .get(category.key())
        .filter(|payload| !payload.is_null())
        .ok_or_else(|| NormalizeError::missing_key(category.key()))?;

    let item = match category {
        ItemCategory::Set => Item::Set(items::parse_set(payload, child_category, options)?),
        ItemCategory::Tree => Item::Tree(items::parse_tree(payload, child_category, options)?),
        other => normalize_category(payload, other, options)?,
    };
    debug!(
        "event=item_normalized module=normalize status=ok category={} uuid={}",
        item.category(),
        item.uuid()
    );
    Ok(item)
}

/// Builds the item for a payload already unwrapped from its category key.
pub fn normalize_category(
    raw_item: &Value,
    category: ItemCategory,
    options: &NormalizeOptions,
) -> NormalizeResult<Item> {
    Ok(match category {
        ItemCategory::Resource => Item::Resource(items::parse_resource(raw_item, options)?),
        ItemCategory::SpatialUnit => {
            Item::SpatialUnit(items::parse_spatial_unit(raw_item, options)?)
        }
        ItemCategory::Concept => Item::Concept(items::parse_concept(raw_item, options)?),
        ItemCategory::Period => Item::Period(items::parse_period(raw_item, options)?),
        ItemCategory::Bibliography => {
            Item::Bibliography(items::parse_bibliography(raw_item, options)?)
        }
        ItemCategory::Person => Item::Person(items::parse_person(raw_item, options)?),
        ItemCategory::PropertyValue => {
            Item::PropertyValue(items::parse_property_value(raw_item, options)?)
        }
        ItemCategory::PropertyVariable => {
            Item::PropertyVariable(items::parse_property_variable(raw_item, options)?)
        }
        ItemCategory::Set => Item::Set(items::parse_set(raw_item, None, options)?),
        ItemCategory::Tree => Item::Tree(items::parse_tree(raw_item, None, options)?),
    })
}

/// Resolves the child category of a set or tree and normalizes its items.
///
/// The category comes from `forced`, then the container's own
/// `itemCategory`, then the single key present under `items`. A declared
/// category without matching items fails with its key.
pub(crate) fn child_items(
    container: &Value,
    forced: Option<ItemCategory>,
    options: &NormalizeOptions,
) -> NormalizeResult<(Option<ItemCategory>, Vec<Item>)> {
    let declared = match forced {
        Some(category) => Some(category),
        None => match optional_text(container, "itemCategory") {
            None => None,
            Some(key) => Some(
                ItemCategory::from_key(&key)
                    .ok_or_else(|| NormalizeError::unknown_vocabulary("itemCategory", key))?,
            ),
        },
    };

    let items = match (container.get("items"), declared) {
        (None | Some(Value::Null), Some(category)) => {
            return Err(NormalizeError::missing_key(category.key()))
        }
        (None | Some(Value::Null), None) => return Ok((None, Vec::new())),
        (Some(items), _) => items,
    };
    let fields = items
        .as_object()
        .ok_or_else(|| NormalizeError::unexpected_shape("items", "object keyed by item category"))?;
    if let Some(unknown) = fields
        .keys()
        .find(|key| ItemCategory::from_key(key).is_none())
    {
        return Err(NormalizeError::unknown_vocabulary("item category", unknown.clone()));
    }

    let category = match declared {
        Some(category) if fields.contains_key(category.key()) => category,
        Some(category) => return Err(NormalizeError::missing_key(category.key())),
        None => single_category(items, "items", "exactly one child item category")?,
    };
    let children = as_sequence(items.get(category.key()))
        .into_iter()
        .map(|child| normalize_category(child, category, options))
        .collect::<NormalizeResult<Vec<_>>>()?;
    Ok((Some(category), children))
}

fn single_category(
    raw: &Value,
    field: &'static str,
    expected: &'static str,
) -> NormalizeResult<ItemCategory> {
    let mut present = ItemCategory::ALL
        .iter()
        .copied()
        .filter(|category| raw.get(category.key()).is_some_and(|value| !value.is_null()));
    match (present.next(), present.next()) {
        (Some(category), None) => Ok(category),
        (None, _) => Err(NormalizeError::missing_key("item category")),
        (Some(_), Some(_)) => Err(NormalizeError::unexpected_shape(field, expected)),
    }
}
