//! Sub-structure parsers shared by every item category.
//!
//! # Responsibility
//! - Turn raw blocks (identification, links, properties, coordinates,
//!   media, notes and the like) into model values.
//!
//! # Invariants
//! - Parsers only read; the raw tree is never modified.
//! - Failures propagate as [`crate::error::NormalizeError`]; only
//!   identification recovers locally.

pub mod context;
pub mod coordinates;
pub mod identification;
pub mod link;
pub mod media;
pub mod property;
pub mod record;

pub use identification::parse_identification;
pub use link::{parse_embedded_links, parse_links};
pub use property::{parse_properties, parse_property};
