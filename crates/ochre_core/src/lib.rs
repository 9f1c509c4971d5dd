//! Normalization core for OCHRE archival records.
//!
//! Takes the loosely-typed tree produced from an OCHRE XML export and builds
//! strongly-typed, multilingual items with rich-text markup resolved per
//! language. Every entry point is a pure function over its input.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod parse;
pub mod raw;

pub use config::{NormalizeOptions, DEFAULT_LANGUAGE};
pub use content::{parse_runs, resolve_content, resolve_link_fragment, ContentRun, Fragment};
pub use error::{NormalizeError, NormalizeResult};
pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::category::ItemCategory;
pub use model::document::{Metadata, NormalizedDocument};
pub use model::item::{BaseItem, Item};
pub use model::link::{EmbeddedLink, EmbeddedLinkType, Link};
pub use model::property::{Property, PropertyContent, PropertyDataType, PropertyValueContent};
pub use model::text::MultilingualText;
pub use normalize::{normalize_category, normalize_document, normalize_item};
pub use parse::{parse_identification, parse_links, parse_properties, parse_property};
pub use raw::{as_sequence, container_children};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
