//! Rich content resolution.
//!
//! # Responsibility
//! - Parse language-tagged run trees (`run`).
//! - Fold runs into per-language markup strings (`resolver`).
//! - Turn embedded links into inline fragments (`link`, `markup`).
//!
//! # Invariants
//! - Output markup only uses the fragment tags defined in `markup`.
//! - Resolution is a pure function of its input; nothing is cached.

pub mod link;
pub mod markup;
pub mod resolver;
pub mod run;

pub use link::resolve_link_fragment;
pub use markup::Fragment;
pub use resolver::{
    assemble_runs, optional_content, optional_plain_text, own_content, resolve_content,
    resolve_plain_text,
};
pub use run::{parse_runs, ContentRun, Render, Whitespace};
