use serde::{Deserialize, Serialize};
use structprop_types::Urn;

/// A single stored value: either text or a number.
///
/// Serialized untagged so stored values read as plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Double(f64),
    String(String),
}

impl PrimitiveValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Double(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            Self::String(_) => None,
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for PrimitiveValue {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

/// The values one entity holds for one structured property, in stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAssignment {
    pub property_urn: Urn,
    pub values: Vec<PrimitiveValue>,
}

impl ValueAssignment {
    pub fn new(property_urn: Urn, values: impl IntoIterator<Item = PrimitiveValue>) -> Self {
        Self {
            property_urn,
            values: values.into_iter().collect(),
        }
    }
}

/// The structured properties aspect stored on an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredProperties {
    #[serde(default)]
    pub properties: Vec<ValueAssignment>,
}

impl StructuredProperties {
    pub fn new(properties: Vec<ValueAssignment>) -> Self {
        Self { properties }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
