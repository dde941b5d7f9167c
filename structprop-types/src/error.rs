//! Error types for URN parsing.

use thiserror::Error;

/// Result type for URN operations.
pub type UrnResult<T> = Result<T, UrnParseError>;

/// Reasons a string is not a well-formed URN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrnParseError {
    /// The string does not start with `urn:`.
    #[error("missing 'urn:' prefix: {0:?}")]
    MissingPrefix(String),

    /// A required `:`-separated segment is absent.
    #[error("missing {segment} segment: {urn:?}")]
    MissingSegment { segment: &'static str, urn: String },

    /// A segment is present but empty.
    #[error("empty {segment} segment: {urn:?}")]
    EmptySegment { segment: &'static str, urn: String },

    /// A tuple id has mismatched parentheses.
    #[error("unbalanced tuple id: {0:?}")]
    UnbalancedTuple(String),

    /// A tuple id contains an empty element.
    #[error("empty tuple element: {0:?}")]
    EmptyTuplePart(String),
}
