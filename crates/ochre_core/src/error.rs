//! Normalization failure taxonomy.
//!
//! # Responsibility
//! - Give every failure of the normalization pipeline one concrete type.
//! - Name the offending key, field or raw value in the message.
//!
//! # Invariants
//! - Errors propagate to the caller unchanged; the core never substitutes
//!   defaults, except for identification recovery (see
//!   `parse::identification`).

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Error raised while turning a validated raw tree into typed items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A required key (category key, child container) is absent.
    MissingKey { key: String },
    /// A raw node has the wrong JSON kind for its position.
    UnexpectedShape {
        field: &'static str,
        expected: &'static str,
    },
    /// An enumerated field holds a value outside its vocabulary.
    UnknownVocabulary { field: &'static str, value: String },
    /// A scalar cannot be coerced into its declared type.
    InvalidValue { field: &'static str, value: String },
    /// None of the requested languages has a content branch.
    ContentNotFound { languages: Vec<String> },
}

impl NormalizeError {
    pub(crate) fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub(crate) fn unexpected_shape(field: &'static str, expected: &'static str) -> Self {
        Self::UnexpectedShape { field, expected }
    }

    pub(crate) fn unknown_vocabulary(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVocabulary {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }

    /// Short machine-friendly kind, used in structured log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingKey { .. } | Self::UnexpectedShape { .. } => "shape",
            Self::UnknownVocabulary { .. } | Self::InvalidValue { .. } => "value",
            Self::ContentNotFound { .. } => "language",
        }
    }
}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey { key } => write!(f, "missing required key `{key}`"),
            Self::UnexpectedShape { field, expected } => {
                write!(f, "unexpected shape for `{field}`: expected {expected}")
            }
            Self::UnknownVocabulary { field, value } => {
                write!(f, "unknown {field} value `{value}`")
            }
            Self::InvalidValue { field, value } => {
                write!(f, "invalid {field} value `{value}`")
            }
            Self::ContentNotFound { languages } => write!(
                f,
                "content not found for any requested language ({})",
                languages.join(", ")
            ),
        }
    }
}

impl Error for NormalizeError {}
