//! Structured property projection.
//!
//! Reconciles the structured properties actually assigned to an entity with
//! the catalog of properties that could apply to it, producing a view that
//! always has one row per catalog property:
//!
//! - **Basic projection** ([`Projector::project`]) maps only assigned properties.
//! - **Full projection** ([`Projector::project_all`]) walks the catalog in order
//!   and fills gaps with placeholder entries.
//! - **Value classification** ([`Projector::classify`]) splits numeric values from
//!   text, and enriches text that parses as a URN with a resolved entity.
//!
//! # Example
//!
//! ```
//! use structprop_model::{PrimitiveValue, PropertyDefinition, ValueAssignment};
//! use structprop_projection::project_all;
//! use structprop_types::Urn;
//!
//! let owner = Urn::parse("urn:li:structuredProperty:owner").unwrap();
//! let tier = Urn::parse("urn:li:structuredProperty:tier").unwrap();
//! let entity = Urn::parse("urn:li:corpuser:alice").unwrap();
//!
//! let catalog = vec![PropertyDefinition::reference(owner.clone()), PropertyDefinition::string(tier)];
//! let assignments = vec![ValueAssignment::new(owner, [PrimitiveValue::from("urn:li:corpuser:bob")])];
//!
//! let entries = project_all(&assignments, &entity, &catalog);
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].value_entities.len(), 1);
//! assert!(entries[1].is_placeholder());
//! ```

mod config;
mod error;
mod projector;

pub use config::ProjectionConfig;
pub use error::{ProjectionError, ProjectionResult};
pub use projector::{classify, project, project_all, Projector};
