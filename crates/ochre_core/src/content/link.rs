//! Embedded link → inline fragment.

use crate::content::markup::{item_url, Fragment, PLACEHOLDER_HREF};
use crate::model::link::{EmbeddedLink, EmbeddedLinkType};

/// Chooses the fragment for one embedded link and its resolved label.
///
/// Unknown explicit link types never reach this point: they are rejected
/// while the descriptor is parsed.
pub fn resolve_link_fragment(link: &EmbeddedLink, label: &str) -> Fragment {
    let label = label.to_string();
    match link.link_type {
        Some(EmbeddedLinkType::Image) if link.is_inline => Fragment::InlineImage {
            uuid: link.uuid,
            href: link.href.clone().unwrap_or_else(|| item_url(link.uuid)),
            width: link.width,
            height: link.height,
            label,
        },
        Some(EmbeddedLinkType::Image) => Fragment::InternalLink {
            uuid: link.uuid,
            label,
        },
        Some(EmbeddedLinkType::ExternalDocument) => Fragment::DocumentLink {
            uuid: link.uuid,
            label,
        },
        Some(EmbeddedLinkType::Webpage) => Fragment::ExternalLink {
            href: link
                .href
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_HREF.to_string()),
            label,
        },
        None if link.publication_date_time.is_some() => Fragment::InternalLink {
            uuid: link.uuid,
            label,
        },
        None => Fragment::Tooltip {
            label,
            content: link.content.clone().unwrap_or_default(),
        },
    }
}
