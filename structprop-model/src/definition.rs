use serde::{Deserialize, Serialize};
use structprop_types::Urn;

/// A structured property type from the definition catalog.
///
/// Only `urn` takes part in projection; the remaining fields describe the
/// property for callers that render or validate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub urn: Urn,
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub value_type: ValueType,
    #[serde(default)]
    pub cardinality: Cardinality,
    /// Entity type URNs this property may be attached to. Empty means any.
    #[serde(default)]
    pub entity_types: Vec<String>,
}

impl PropertyDefinition {
    /// Creates a single-valued definition whose qualified name is the URN id.
    pub fn new(urn: Urn, value_type: ValueType) -> Self {
        Self {
            qualified_name: urn.id().to_string(),
            urn,
            display_name: None,
            value_type,
            cardinality: Cardinality::Single,
            entity_types: Vec::new(),
        }
    }

    /// Shorthand for a string-valued property.
    pub fn string(urn: Urn) -> Self {
        Self::new(urn, ValueType::String)
    }

    /// Shorthand for a numeric property.
    pub fn number(urn: Urn) -> Self {
        Self::new(urn, ValueType::Number)
    }

    /// Shorthand for a property whose values reference other entities.
    pub fn reference(urn: Urn) -> Self {
        Self::new(urn, ValueType::Urn)
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Allows more than one value per entity.
    pub fn multiple(mut self) -> Self {
        self.cardinality = Cardinality::Multiple;
        self
    }

    /// Restricts the property to the given entity type URN.
    pub fn applies_to(mut self, entity_type_urn: impl Into<String>) -> Self {
        self.entity_types.push(entity_type_urn.into());
        self
    }

    /// Returns true if the property may be attached to `entity_type_urn`.
    pub fn is_applicable_to(&self, entity_type_urn: &str) -> bool {
        self.entity_types.is_empty() || self.entity_types.iter().any(|t| t == entity_type_urn)
    }

    /// Name for display, falling back to the qualified name.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.qualified_name)
    }
}

/// The logical type of a property's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    String,
    RichText,
    Number,
    Urn,
    Date,
}

/// How many values an entity may hold for one property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cardinality {
    #[default]
    Single,
    Multiple,
}
