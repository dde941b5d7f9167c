//! Projection settings, read from a `projection.toml` when one is supplied.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::ProjectionResult;

/// Tunables for [`crate::Projector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Parse text values as URNs and resolve the ones that parse.
    pub resolve_references: bool,
    /// Append entries for assignments whose property is missing from the
    /// catalog, after the catalog-ordered entries. Off by default: the catalog
    /// is treated as authoritative and such assignments are omitted.
    pub include_unlisted_assignments: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            resolve_references: true,
            include_unlisted_assignments: false,
        }
    }
}

impl ProjectionConfig {
    /// Parses a config from TOML. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> ProjectionResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a config file.
    pub fn try_load_from(path: &Path) -> ProjectionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads a config file, falling back to defaults when it is missing or
    /// cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No projection config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded projection config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load projection config {:?}: {}. Falling back to defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }
}
