use serde::{Deserialize, Serialize};
use std::fmt;
use structprop_types::Urn;

/// An entity reference resolved from a URN value.
///
/// Carries just enough for a consumer to fetch or link the entity; the
/// surrounding request layer fills in anything richer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedEntity {
    pub urn: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

impl ResolvedEntity {
    /// Builds the entity from the URN's entity type segment.
    pub fn from_urn(urn: &Urn) -> Self {
        Self {
            urn: urn.to_string(),
            entity_type: EntityType::from_urn_entity_type(urn.entity_type()),
        }
    }
}

/// Kinds of entity the view layer knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Dataset,
    Chart,
    Dashboard,
    DataFlow,
    DataJob,
    DataPlatform,
    CorpUser,
    CorpGroup,
    Domain,
    GlossaryTerm,
    GlossaryNode,
    Tag,
    Container,
    DataProduct,
    MlModel,
    Notebook,
    StructuredProperty,
    /// A well-formed URN whose entity type is not recognized.
    Other,
}

impl EntityType {
    /// Maps the entity type segment of a URN (`corpuser`, `dataset`, ...).
    pub fn from_urn_entity_type(segment: &str) -> Self {
        match segment {
            "dataset" => Self::Dataset,
            "chart" => Self::Chart,
            "dashboard" => Self::Dashboard,
            "dataFlow" => Self::DataFlow,
            "dataJob" => Self::DataJob,
            "dataPlatform" => Self::DataPlatform,
            "corpuser" => Self::CorpUser,
            "corpGroup" => Self::CorpGroup,
            "domain" => Self::Domain,
            "glossaryTerm" => Self::GlossaryTerm,
            "glossaryNode" => Self::GlossaryNode,
            "tag" => Self::Tag,
            "container" => Self::Container,
            "dataProduct" => Self::DataProduct,
            "mlModel" => Self::MlModel,
            "notebook" => Self::Notebook,
            "structuredProperty" => Self::StructuredProperty,
            _ => Self::Other,
        }
    }

    /// The URN entity type segment, or `None` for [`EntityType::Other`].
    pub fn urn_entity_type(&self) -> Option<&'static str> {
        let segment = match self {
            Self::Dataset => "dataset",
            Self::Chart => "chart",
            Self::Dashboard => "dashboard",
            Self::DataFlow => "dataFlow",
            Self::DataJob => "dataJob",
            Self::DataPlatform => "dataPlatform",
            Self::CorpUser => "corpuser",
            Self::CorpGroup => "corpGroup",
            Self::Domain => "domain",
            Self::GlossaryTerm => "glossaryTerm",
            Self::GlossaryNode => "glossaryNode",
            Self::Tag => "tag",
            Self::Container => "container",
            Self::DataProduct => "dataProduct",
            Self::MlModel => "mlModel",
            Self::Notebook => "notebook",
            Self::StructuredProperty => "structuredProperty",
            Self::Other => return None,
        };
        Some(segment)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.urn_entity_type().unwrap_or("other"))
    }
}
