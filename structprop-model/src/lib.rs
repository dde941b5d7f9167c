//! Structured property model.
//!
//! Defines the types shared by everything that reads or renders structured
//! properties:
//! - [`PropertyDefinition`] — a property type from the definition catalog
//! - [`ValueAssignment`] / [`StructuredProperties`] — the values stored on one entity
//! - [`ProjectedEntry`] / [`ProjectedProperties`] — the unified, render-ready view
//! - [`ResolvedEntity`] / [`EntityType`] — a text value enriched as an entity reference
//! - [`ReferenceResolver`] — the seam through which reference values are resolved
//!
//! The projection logic itself lives in `structprop-projection`.

mod assignment;
mod definition;
mod entity;
mod projected;
mod resolver;

pub use assignment::{PrimitiveValue, StructuredProperties, ValueAssignment};
pub use definition::{Cardinality, PropertyDefinition, ValueType};
pub use entity::{EntityType, ResolvedEntity};
pub use projected::{ProjectedEntry, ProjectedProperties, ProjectedValue, StructuredPropertyRef};
pub use resolver::{QueryContext, ReferenceResolver, UrnEntityResolver};
