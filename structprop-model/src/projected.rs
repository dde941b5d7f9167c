//! The render-ready view of an entity's structured properties.

use serde::{Deserialize, Serialize};
use structprop_types::Urn;

use crate::entity::{EntityType, ResolvedEntity};

/// A projected scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ProjectedValue {
    /// Serializes as: {"type": "String", "value": "text"}
    #[serde(rename = "String")]
    Text(String),
    /// Serializes as: {"type": "Number", "value": 42.5}
    Number(f64),
}

impl ProjectedValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

/// Names the structured property an entry belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPropertyRef {
    pub urn: String,
    /// Always [`EntityType::StructuredProperty`].
    #[serde(rename = "type")]
    pub kind: EntityType,
}

impl StructuredPropertyRef {
    pub fn new(property_urn: &Urn) -> Self {
        Self {
            urn: property_urn.to_string(),
            kind: EntityType::StructuredProperty,
        }
    }
}

/// One row of the projected view.
///
/// `values` and `value_entities` are always present. `value_entities` holds
/// one entry per text value that resolved as a reference, so it is not
/// index-aligned with `values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedEntry {
    pub structured_property: StructuredPropertyRef,
    pub values: Vec<ProjectedValue>,
    pub value_entities: Vec<ResolvedEntity>,
    pub associated_urn: String,
}

impl ProjectedEntry {
    /// An entry for a property the entity has no value for.
    pub fn placeholder(property_urn: &Urn, entity_urn: &Urn) -> Self {
        Self {
            structured_property: StructuredPropertyRef::new(property_urn),
            values: Vec::new(),
            value_entities: Vec::new(),
            associated_urn: entity_urn.to_string(),
        }
    }

    pub fn property_urn(&self) -> &str {
        &self.structured_property.urn
    }

    /// Returns true when the entry carries no values.
    pub fn is_placeholder(&self) -> bool {
        self.values.is_empty() && self.value_entities.is_empty()
    }
}

/// The projected structured properties of one entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedProperties {
    pub properties: Vec<ProjectedEntry>,
}

impl ProjectedProperties {
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The first entry for `property_urn`, if any.
    pub fn get(&self, property_urn: &str) -> Option<&ProjectedEntry> {
        self.properties.iter().find(|e| e.property_urn() == property_urn)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectedEntry> {
        self.properties.iter()
    }
}

impl From<Vec<ProjectedEntry>> for ProjectedProperties {
    fn from(properties: Vec<ProjectedEntry>) -> Self {
        Self { properties }
    }
}
