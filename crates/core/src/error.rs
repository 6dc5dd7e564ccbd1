//! Error types for folio text-flow construction.

use thiserror::Error;

/// Errors raised while building a text flow.
///
/// Traversal and text reconstruction never fail; only the construction of
/// the underlying flow validates its input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("invalid rotation code {0}: expected 0, 1, 2 or 3")]
    InvalidRotation(i32),

    #[error("word {text:?} has {got} edges, expected {expected}")]
    EdgeCount {
        text: String,
        expected: usize,
        got: usize,
    },

    #[error("unknown font: {0}")]
    UnknownFont(String),

    #[error("{child} added without an open {parent}")]
    NoOpenContainer {
        child: &'static str,
        parent: &'static str,
    },

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("invalid font size {0}: expected a finite, non-negative value")]
    InvalidFontSize(f64),
}

/// Convenience Result type alias for FlowError.
pub type Result<T> = std::result::Result<T, FlowError>;
