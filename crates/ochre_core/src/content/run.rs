//! Content run tree and its raw parser.
//!
//! # Invariants
//! - A run with `links` is always an annotated span, whatever else it holds.
//! - A run with only `whitespace` is a whitespace-only run.
//! - Render and whitespace tokens outside their vocabularies are rejected.

use crate::error::{NormalizeError, NormalizeResult};
use crate::model::link::EmbeddedLink;
use crate::parse::link::parse_embedded_links;
use crate::raw::access::{scalar_text, tokens};
use crate::raw::as_sequence;
use serde_json::Value;

/// Whitespace directive attached to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Whitespace {
    pub newline: bool,
    pub leading: bool,
    pub trailing: bool,
}

impl Whitespace {
    pub fn parse(raw: &str) -> NormalizeResult<Self> {
        let mut whitespace = Self::default();
        for token in tokens(raw) {
            match token {
                "newline" => whitespace.newline = true,
                "leading" => whitespace.leading = true,
                "trailing" => whitespace.trailing = true,
                other => return Err(NormalizeError::unknown_vocabulary("whitespace", other)),
            }
        }
        Ok(whitespace)
    }

    pub fn is_none(self) -> bool {
        self == Self::default()
    }
}

/// Formatting directive attached to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Render {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Render {
    pub fn parse(raw: &str) -> NormalizeResult<Self> {
        let mut render = Self::default();
        for token in tokens(raw) {
            match token {
                "bold" => render.bold = true,
                "italic" => render.italic = true,
                "underline" => render.underline = true,
                other => return Err(NormalizeError::unknown_vocabulary("rend", other)),
            }
        }
        Ok(render)
    }
}

/// One node of a content tree, already bound to a single language.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRun {
    Text {
        text: String,
        whitespace: Whitespace,
    },
    Formatted {
        render: Render,
        whitespace: Whitespace,
        runs: Vec<ContentRun>,
    },
    Whitespace(Whitespace),
    Annotated {
        links: Vec<EmbeddedLink>,
        whitespace: Whitespace,
        runs: Vec<ContentRun>,
    },
}

impl ContentRun {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            whitespace: Whitespace::default(),
        }
    }
}

/// Parses a raw run sequence for `language`.
///
/// `languages` is the caller's request set, forwarded to link descriptors so
/// their identification resolves consistently with the surrounding item.
pub fn parse_runs(
    raw: Option<&Value>,
    language: &str,
    languages: &[String],
) -> NormalizeResult<Vec<ContentRun>> {
    as_sequence(raw)
        .into_iter()
        .map(|node| parse_run(node, language, languages))
        .collect()
}

fn parse_run(raw: &Value, language: &str, languages: &[String]) -> NormalizeResult<ContentRun> {
    if let Some(text) = scalar_text(raw) {
        return Ok(ContentRun::text(text));
    }
    if !raw.is_object() {
        return Err(NormalizeError::unexpected_shape(
            "string",
            "text, run object or run list",
        ));
    }

    let whitespace = match raw.get("whitespace").and_then(Value::as_str) {
        Some(value) => Whitespace::parse(value)?,
        None => Whitespace::default(),
    };
    let inner = raw.get("string");

    if let Some(links) = raw.get("links").filter(|links| !links.is_null()) {
        return Ok(ContentRun::Annotated {
            links: parse_embedded_links(links, language, languages)?,
            whitespace,
            runs: parse_runs(inner, language, languages)?,
        });
    }

    if let Some(rend) = raw.get("rend").and_then(Value::as_str) {
        return Ok(ContentRun::Formatted {
            render: Render::parse(rend)?,
            whitespace,
            runs: parse_runs(inner, language, languages)?,
        });
    }

    match inner {
        None | Some(Value::Null) if !whitespace.is_none() => Ok(ContentRun::Whitespace(whitespace)),
        None | Some(Value::Null) => Ok(ContentRun::text("")),
        Some(value) => match scalar_text(value) {
            Some(text) => Ok(ContentRun::Text { text, whitespace }),
            None => Ok(ContentRun::Formatted {
                render: Render::default(),
                whitespace,
                runs: parse_runs(Some(value), language, languages)?,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_runs, ContentRun, Render, Whitespace};
    use crate::error::NormalizeError;
    use serde_json::json;

    fn eng() -> Vec<String> {
        vec!["eng".to_string()]
    }

    #[test]
    fn scalars_and_objects_become_runs() {
        let raw = json!(["A", { "whitespace": "newline" }, { "string": "B", "rend": "bold" }]);
        let runs = parse_runs(Some(&raw), "eng", &eng()).unwrap();
        assert_eq!(runs[0], ContentRun::text("A"));
        assert_eq!(
            runs[1],
            ContentRun::Whitespace(Whitespace {
                newline: true,
                ..Whitespace::default()
            })
        );
        assert!(matches!(
            &runs[2],
            ContentRun::Formatted { render: Render { bold: true, .. }, runs, .. }
                if runs == &vec![ContentRun::text("B")]
        ));
    }

    #[test]
    fn unknown_render_token_is_rejected() {
        let raw = json!({ "string": "x", "rend": "blink" });
        let err = parse_runs(Some(&raw), "eng", &eng()).unwrap_err();
        assert_eq!(err, NormalizeError::unknown_vocabulary("rend", "blink"));
    }

    #[test]
    fn unknown_whitespace_token_is_rejected() {
        let raw = json!({ "whitespace": "tab" });
        let err = parse_runs(Some(&raw), "eng", &eng()).unwrap_err();
        assert!(err.to_string().contains("`tab`"));
    }

    #[test]
    fn nested_run_list_without_rend_is_a_plain_group() {
        let raw = json!({ "string": [{ "string": "x" }, "y"] });
        let runs = parse_runs(Some(&raw), "eng", &eng()).unwrap();
        match &runs[0] {
            ContentRun::Formatted { render, runs, .. } => {
                assert_eq!(*render, Render::default());
                assert_eq!(runs.len(), 2);
            }
            other => panic!("unexpected run: {other:?}"),
        }
    }
}
