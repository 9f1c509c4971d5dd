//! Inline markup vocabulary emitted by the content resolver.
//!
//! This is the only textual wire format the crate produces. Renderers must
//! recognize exactly the five fragment tags below.
//!
//! # Invariants
//! - Rich-mode text escapes `<` and `{`; plain-mode text is never parsed as
//!   markup, so it keeps both characters verbatim.

use crate::content::run::Render;
use uuid::Uuid;

/// Canonical item page used by document links.
pub const ITEM_URL_PREFIX: &str = "https://ochre.lib.uchicago.edu/ochre?uuid=";
/// Href used by webpage links that carry none.
pub const PLACEHOLDER_HREF: &str = "#";

pub const RICH_LINE_BREAK: &str = "<br />\n";
pub const PLAIN_LINE_BREAK: &str = "\n";

const APOSTROPHE_ENTITY: &str = "&#39;";

/// One inline markup fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    InlineImage {
        uuid: Uuid,
        href: String,
        width: Option<f64>,
        height: Option<f64>,
        label: String,
    },
    InternalLink {
        uuid: Uuid,
        label: String,
    },
    ExternalLink {
        href: String,
        label: String,
    },
    DocumentLink {
        uuid: Uuid,
        label: String,
    },
    Tooltip {
        label: String,
        content: String,
    },
}

impl Fragment {
    /// Tag name, as renderers see it.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::InlineImage { .. } => "InlineImage",
            Self::InternalLink { .. } => "InternalLink",
            Self::ExternalLink { .. } => "ExternalLink",
            Self::DocumentLink { .. } => "DocumentLink",
            Self::Tooltip { .. } => "TooltipSpan",
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::InlineImage {
                uuid,
                href,
                width,
                height,
                label,
            } => format!(
                r#"<InlineImage uuid="{uuid}" href="{}" width="{}" height="{}" content="{}" />"#,
                attribute(href),
                dimension(*width),
                dimension(*height),
                attribute(label)
            ),
            Self::InternalLink { uuid, label } => {
                format!(r#"<InternalLink uuid="{uuid}">{label}</InternalLink>"#)
            }
            Self::ExternalLink { href, label } => format!(
                r#"<ExternalLink href="{}">{label}</ExternalLink>"#,
                attribute(href)
            ),
            Self::DocumentLink { uuid, label } => format!(
                r#"<DocumentLink href="{}" uuid="{uuid}">{label}</DocumentLink>"#,
                item_url(*uuid)
            ),
            Self::Tooltip { label, content } => format!(
                r#"<TooltipSpan content="{}">{label}</TooltipSpan>"#,
                attribute(content)
            ),
        }
    }
}

/// Canonical page URL for an item.
pub fn item_url(uuid: Uuid) -> String {
    format!("{ITEM_URL_PREFIX}{uuid}")
}

/// Escapes the two characters reserved by the markup dialect.
pub fn escape_text(text: &str) -> String {
    text.replace('<', r"\<").replace('{', r"\{")
}

/// Decodes the apostrophe entity left behind by the XML export.
pub fn decode_apostrophe(text: &str) -> String {
    text.replace(APOSTROPHE_ENTITY, "'")
}

/// Wraps text in bold, italic and underline markup (underline innermost).
pub fn apply_render(text: String, render: Render) -> String {
    if text.is_empty() {
        return text;
    }
    let mut wrapped = text;
    if render.underline {
        wrapped = format!("<u>{wrapped}</u>");
    }
    if render.italic {
        wrapped = format!("*{wrapped}*");
    }
    if render.bold {
        wrapped = format!("**{wrapped}**");
    }
    wrapped
}

fn attribute(value: &str) -> String {
    value.replace('"', "&quot;")
}

fn dimension(value: Option<f64>) -> String {
    value.map(|number| number.to_string()).unwrap_or_default()
}
