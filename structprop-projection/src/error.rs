//! Error types for the projection layer.

use thiserror::Error;

/// Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors surfaced by the projection layer.
///
/// Projection itself never fails on stored data. These cover callers handing
/// in a malformed entity identifier and configuration loading.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The entity identifier supplied by the caller is not a URN.
    #[error("invalid entity urn: {0}")]
    InvalidUrn(#[from] structprop_types::UrnParseError),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for [`crate::ProjectionConfig`].
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
