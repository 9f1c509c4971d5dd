//! Item category vocabulary.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// One of the mutually exclusive top-level record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCategory {
    Resource,
    SpatialUnit,
    Concept,
    Period,
    Bibliography,
    Person,
    PropertyValue,
    PropertyVariable,
    Set,
    Tree,
}

impl ItemCategory {
    /// Canonical order used when several category keys are scanned.
    pub const ALL: [ItemCategory; 10] = [
        ItemCategory::Resource,
        ItemCategory::SpatialUnit,
        ItemCategory::Concept,
        ItemCategory::Period,
        ItemCategory::Bibliography,
        ItemCategory::Person,
        ItemCategory::PropertyValue,
        ItemCategory::PropertyVariable,
        ItemCategory::Set,
        ItemCategory::Tree,
    ];

    /// Raw key naming this category in the export.
    pub fn key(self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::SpatialUnit => "spatialUnit",
            Self::Concept => "concept",
            Self::Period => "period",
            Self::Bibliography => "bibliography",
            Self::Person => "person",
            Self::PropertyValue => "propertyValue",
            Self::PropertyVariable => "propertyVariable",
            Self::Set => "set",
            Self::Tree => "tree",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == key)
    }
}

impl Display for ItemCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::ItemCategory;

    #[test]
    fn keys_round_trip_for_every_category() {
        for category in ItemCategory::ALL {
            assert_eq!(ItemCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(ItemCategory::from_key("Resource"), None);
    }

    #[test]
    fn serializes_as_raw_key() {
        let json = serde_json::to_value(ItemCategory::PropertyVariable).unwrap();
        assert_eq!(json, "propertyVariable");
    }
}
