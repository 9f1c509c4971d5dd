//! Per-language assembly of content trees.
//!
//! # Responsibility
//! - Select the language branch of a content tree for every requested
//!   language and fold its runs into one markup string.
//!
//! # Invariants
//! - Runs are appended strictly in source order; each step sees everything
//!   appended before it.
//! - The accumulator is threaded through the walk by value; no state is
//!   shared between languages or calls.
//! - Scalar fields bypass run assembly entirely.
//! - At least one requested language must have a branch, otherwise the call
//!   fails with `ContentNotFound`.

use crate::content::link::resolve_link_fragment;
use crate::content::markup::{
    apply_render, decode_apostrophe, escape_text, PLAIN_LINE_BREAK, RICH_LINE_BREAK,
};
use crate::content::run::{parse_runs, ContentRun, Whitespace};
use crate::error::{NormalizeError, NormalizeResult};
use crate::model::text::MultilingualText;
use crate::raw::access::scalar_text;
use crate::raw::as_sequence;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Rich,
    Plain,
}

impl Mode {
    fn from_flag(rich_text: bool) -> Self {
        if rich_text {
            Self::Rich
        } else {
            Self::Plain
        }
    }

    fn line_break(self) -> &'static str {
        match self {
            Self::Rich => RICH_LINE_BREAK,
            Self::Plain => PLAIN_LINE_BREAK,
        }
    }
}

/// Resolves a multilingual raw field for every requested language.
///
/// `languages[0]` is the default language: scalar shortcuts and branches
/// without `lang` are stored under it.
pub fn resolve_content(
    raw: &Value,
    languages: &[String],
    rich_text: bool,
) -> NormalizeResult<MultilingualText> {
    let default_language = languages.first().map(String::as_str).unwrap_or_default();

    if let Some(text) = scalar_text(raw) {
        return Ok(MultilingualText::create(default_language, text, languages));
    }

    let branches: Vec<&Value> = match raw.get("content") {
        Some(content) => as_sequence(Some(content)),
        None if raw.get("string").is_some() || raw.get("lang").is_some() => vec![raw],
        None => {
            return Err(NormalizeError::unexpected_shape(
                "content",
                "text or language-tagged content tree",
            ))
        }
    };

    let mode = Mode::from_flag(rich_text);
    let mut resolved = MultilingualText::empty(languages);
    let mut found = false;
    for language in languages {
        let branch = branches
            .iter()
            .find(|branch| branch_language(branch, default_language) == language.as_str());
        if let Some(branch) = branch {
            let runs = branch_runs(branch, language, languages)?;
            resolved = resolved.with_text(language.clone(), resolve_runs(&runs, mode));
            found = true;
        }
    }

    if !found {
        return Err(NormalizeError::ContentNotFound {
            languages: languages.to_vec(),
        });
    }
    Ok(resolved)
}

/// Resolves a field for exactly one language in plain mode.
pub fn resolve_plain_text(raw: &Value, language: &str) -> NormalizeResult<String> {
    let languages = [language.to_string()];
    let resolved = resolve_content(raw, &languages, false)?;
    Ok(resolved.get_text(Some(language)).to_string())
}

/// Resolves `parent[key]` when present and not `null`.
pub fn optional_content(
    parent: &Value,
    key: &str,
    languages: &[String],
    rich_text: bool,
) -> NormalizeResult<Option<MultilingualText>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => resolve_content(raw, languages, rich_text).map(Some),
    }
}

/// Resolves an element that carries its own `content` child, such as a
/// person or a note.
pub fn own_content(
    element: &Value,
    languages: &[String],
    rich_text: bool,
) -> NormalizeResult<Option<MultilingualText>> {
    match element.get("content") {
        None | Some(Value::Null) => Ok(None),
        Some(_) => resolve_content(element, languages, rich_text).map(Some),
    }
}

/// Resolves `parent[key]` for one language in plain mode, when present.
pub fn optional_plain_text(
    parent: &Value,
    key: &str,
    language: &str,
) -> NormalizeResult<Option<String>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => resolve_plain_text(raw, language).map(Some),
    }
}

/// Folds a parsed run sequence into one string.
pub fn assemble_runs(runs: &[ContentRun], rich_text: bool) -> String {
    resolve_runs(runs, Mode::from_flag(rich_text))
}

fn branch_language<'a>(branch: &'a Value, default_language: &'a str) -> &'a str {
    branch
        .get("lang")
        .and_then(Value::as_str)
        .unwrap_or(default_language)
}

fn branch_runs(
    branch: &Value,
    language: &str,
    languages: &[String],
) -> NormalizeResult<Vec<ContentRun>> {
    match scalar_text(branch) {
        Some(text) => Ok(vec![ContentRun::text(text)]),
        None => parse_runs(branch.get("string"), language, languages),
    }
}

fn resolve_runs(runs: &[ContentRun], mode: Mode) -> String {
    runs.iter()
        .fold(String::new(), |accumulated, run| append_run(accumulated, run, mode))
}

fn append_run(mut accumulated: String, run: &ContentRun, mode: Mode) -> String {
    match run {
        ContentRun::Text { text, whitespace } => {
            let piece = leaf_text(text, mode);
            accumulated.push_str(&decorate(piece, *whitespace, mode));
            accumulated
        }
        ContentRun::Formatted {
            render,
            whitespace,
            runs,
        } => {
            let inner = resolve_runs(runs, mode);
            let piece = match mode {
                Mode::Rich => apply_render(inner, *render),
                Mode::Plain => inner,
            };
            accumulated.push_str(&decorate(piece, *whitespace, mode));
            accumulated
        }
        ContentRun::Whitespace(whitespace) => append_whitespace(accumulated, *whitespace, mode),
        ContentRun::Annotated {
            links,
            whitespace,
            runs,
        } => {
            let label = label_text(runs, mode);
            let piece = if mode == Mode::Rich && !links.is_empty() {
                links
                    .iter()
                    .map(|link| resolve_link_fragment(link, &label).render())
                    .collect::<String>()
            } else {
                label
            };
            accumulated.push_str(&decorate(piece, *whitespace, mode));
            accumulated
        }
    }
}

fn leaf_text(text: &str, mode: Mode) -> String {
    match mode {
        Mode::Rich => escape_text(text),
        Mode::Plain => decode_apostrophe(text),
    }
}

/// Leaf text of an annotated span; nested links are not expanded.
fn label_text(runs: &[ContentRun], mode: Mode) -> String {
    runs.iter().fold(String::new(), |mut label, run| {
        match run {
            ContentRun::Text { text, .. } => label.push_str(&leaf_text(text, mode)),
            ContentRun::Formatted { runs, .. } | ContentRun::Annotated { runs, .. } => {
                label.push_str(&label_text(runs, mode))
            }
            ContentRun::Whitespace(_) => {}
        }
        label
    })
}

fn decorate(piece: String, whitespace: Whitespace, mode: Mode) -> String {
    let mut decorated = piece;
    if whitespace.leading {
        decorated.insert(0, ' ');
    }
    if whitespace.trailing {
        decorated.push(' ');
    }
    if whitespace.newline {
        decorated.insert_str(0, mode.line_break());
    }
    decorated
}

fn append_whitespace(mut accumulated: String, whitespace: Whitespace, mode: Mode) -> String {
    if whitespace.newline {
        accumulated.push_str(mode.line_break());
    }
    let wants_space = whitespace.leading || whitespace.trailing;
    if wants_space && !accumulated.is_empty() && !accumulated.ends_with(char::is_whitespace) {
        accumulated.push(' ');
    }
    accumulated
}
