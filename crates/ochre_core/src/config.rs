//! Caller-facing normalization options.
//!
//! # Responsibility
//! - Carry the requested language set and rich-text switch into every parser.
//!
//! # Invariants
//! - `languages` is never empty; its first entry is the default language.
//! - Language codes are trimmed and deduplicated, keeping first occurrence.

use serde::{Deserialize, Serialize};

/// Language used when a caller or a document supplies none.
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Options shared by every normalization call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeOptions {
    languages: Vec<String>,
    /// When `false`, fields that support rich text are assembled in plain mode.
    pub rich_text: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            languages: vec![DEFAULT_LANGUAGE.to_string()],
            rich_text: true,
        }
    }
}

impl NormalizeOptions {
    /// Builds options for an explicit language list.
    ///
    /// Falls back to [`DEFAULT_LANGUAGE`] when the list is empty after
    /// normalization.
    pub fn with_languages<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            languages: normalize_languages(languages),
            rich_text: true,
        }
    }

    /// Parses the archive's semicolon-separated language attribute
    /// (`"eng;fra"`).
    pub fn from_language_list(list: &str) -> Self {
        Self::with_languages(list.split(';'))
    }

    /// Switches rich-text assembly on or off.
    pub fn with_rich_text(mut self, enabled: bool) -> Self {
        self.rich_text = enabled;
        self
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn default_language(&self) -> &str {
        self.languages
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}

fn normalize_languages<I, S>(languages: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for language in languages {
        let trimmed = language.as_ref().trim();
        if trimmed.is_empty() || normalized.iter().any(|known| known == trimmed) {
            continue;
        }
        normalized.push(trimmed.to_string());
    }
    if normalized.is_empty() {
        normalized.push(DEFAULT_LANGUAGE.to_string());
    }
    normalized
}
