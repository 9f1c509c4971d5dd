use crate::model::text::MultilingualText;
use serde::Serialize;

/// Human-readable name of an item or sub-entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub label: MultilingualText,
    pub abbreviation: Option<MultilingualText>,
}

impl Identification {
    /// Placeholder used when identification cannot be extracted.
    pub fn blank(languages: &[String]) -> Self {
        let language = languages.first().map(String::as_str).unwrap_or_default();
        Self {
            label: MultilingualText::create(language, "", languages),
            abbreviation: Some(MultilingualText::create(language, "", languages)),
        }
    }
}
