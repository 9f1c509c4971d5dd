//! Strongly-typed output model.
//!
//! # Responsibility
//! - Define the immutable values the normalizer produces.
//! - Keep every type `Serialize` so callers can hand results to renderers.
//!
//! # Invariants
//! - No type here parses raw input; parsing lives in `parse` and
//!   `normalize`.
//! - Recursive structures (properties, items, runs) own their children.

pub mod category;
pub mod context;
pub mod document;
pub mod geo;
pub mod identification;
pub mod item;
pub mod link;
pub mod media;
pub mod property;
pub mod record;
pub mod text;
