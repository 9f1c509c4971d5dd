//! Multilingual text value.
//!
//! # Responsibility
//! - Hold per-language text with a deterministic fallback chain.
//!
//! # Invariants
//! - Values are immutable; every mutator returns a new value.
//! - The default language is always one of `languages`.
//! - When any entry exists, the default language has an entry: it is the
//!   first available language that carries text, re-derived on every change.
//! - Fallback order for [`MultilingualText::get_text`] is exact match,
//!   default language, first available entry, then the empty string.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Immutable language-code → text container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultilingualText {
    texts: BTreeMap<String, String>,
    languages: Vec<String>,
    default_language: Option<String>,
}

impl MultilingualText {
    /// Creates a value holding `text` for `language`.
    ///
    /// `available` declares the language set of the surrounding document;
    /// `language` is appended to it when missing.
    pub fn create(
        language: impl Into<String>,
        text: impl Into<String>,
        available: &[String],
    ) -> Self {
        Self::empty(available).with_text(language, text)
    }

    /// Creates a value with a declared language set but no text yet.
    pub fn empty(available: &[String]) -> Self {
        let mut languages: Vec<String> = Vec::with_capacity(available.len());
        for language in available {
            if !languages.contains(language) {
                languages.push(language.clone());
            }
        }
        Self::rebuild(BTreeMap::new(), languages)
    }

    /// Returns a copy with `text` stored for `language`.
    pub fn with_text(&self, language: impl Into<String>, text: impl Into<String>) -> Self {
        let language = language.into();
        let mut texts = self.texts.clone();
        let mut languages = self.languages.clone();
        if !languages.contains(&language) {
            languages.push(language.clone());
        }
        texts.insert(language, text.into());
        Self::rebuild(texts, languages)
    }

    /// Returns a copy with `language` removed from both entries and the
    /// available set.
    pub fn without_language(&self, language: &str) -> Self {
        let mut texts = self.texts.clone();
        texts.remove(language);
        let languages = self
            .languages
            .iter()
            .filter(|known| known.as_str() != language)
            .cloned()
            .collect();
        Self::rebuild(texts, languages)
    }

    /// Resolves text through the fallback chain.
    pub fn get_text(&self, language: Option<&str>) -> &str {
        language
            .and_then(|language| self.get_exact_text(language))
            .or_else(|| {
                self.default_language
                    .as_deref()
                    .and_then(|language| self.get_exact_text(language))
            })
            .or_else(|| self.entries().next().map(|(_, text)| text))
            .unwrap_or("")
    }

    /// Returns text for `language` only, without any fallback.
    pub fn get_exact_text(&self, language: &str) -> Option<&str> {
        self.texts.get(language).map(String::as_str)
    }

    /// Returns whether any language carries non-blank text.
    pub fn has_content(&self) -> bool {
        self.texts.values().any(|text| !text.trim().is_empty())
    }

    /// Applies `transform(language, text)` to every entry.
    pub fn map<F>(&self, transform: F) -> Self
    where
        F: Fn(&str, &str) -> String,
    {
        let texts = self
            .texts
            .iter()
            .map(|(language, text)| (language.clone(), transform(language.as_str(), text.as_str())))
            .collect();
        Self::rebuild(texts, self.languages.clone())
    }

    /// Keeps only entries accepted by `predicate(language, text)`; languages
    /// of dropped entries leave the available set.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&str, &str) -> bool,
    {
        let (kept, dropped): (BTreeMap<String, String>, BTreeMap<String, String>) = self
            .texts
            .iter()
            .map(|(language, text)| (language.clone(), text.clone()))
            .partition(|(language, text)| predicate(language.as_str(), text.as_str()));
        let languages = self
            .languages
            .iter()
            .filter(|language| !dropped.contains_key(language.as_str()))
            .cloned()
            .collect();
        Self::rebuild(kept, languages)
    }

    /// Declared languages in document order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Entries in declared language order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.languages.iter().filter_map(|language| {
            self.texts
                .get(language)
                .map(|text| (language.as_str(), text.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    fn rebuild(texts: BTreeMap<String, String>, languages: Vec<String>) -> Self {
        let default_language = languages
            .iter()
            .find(|language| texts.contains_key(language.as_str()))
            .or_else(|| languages.first())
            .cloned();
        Self {
            texts,
            languages,
            default_language,
        }
    }
}

impl Serialize for MultilingualText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.texts.len()))?;
        for (language, text) in self.entries() {
            map.serialize_entry(language, text)?;
        }
        map.end()
    }
}
