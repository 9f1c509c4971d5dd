//! Helpers over the validated raw tree.
//!
//! # Responsibility
//! - Isolate the raw export's loose typing (one-or-many fields, stringly
//!   numbers and flags, zone-less timestamps) from the parsers above.
//!
//! # Invariants
//! - Parsers never match on `Value::Array` vs `Value::Object` for
//!   one-or-many fields themselves; they call [`as_sequence`] or
//!   [`container_children`].

pub mod access;
pub mod cardinality;
pub mod time;

pub use cardinality::{as_sequence, container_children};
