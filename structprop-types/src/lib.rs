//! Core identifier types for structured property projection.
//!
//! Every property definition, entity and reference value in the projection
//! layer is named by a [`Urn`]. Parsing is cheap and side-effect free so it
//! can be attempted speculatively on arbitrary text.

mod error;
mod urn;

pub use error::{UrnParseError, UrnResult};
pub use urn::Urn;
