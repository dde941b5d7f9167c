//! URN identifiers used throughout the projection layer.
//!
//! A URN has the shape `urn:<namespace>:<entity type>:<id>`. The id is either
//! a plain string (which may itself contain `:`) or a parenthesized tuple such
//! as `(urn:li:dataPlatform:hive,db.table,PROD)`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{UrnParseError, UrnResult};

const URN_PREFIX: &str = "urn:";

/// A parsed, well-formed URN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Urn {
    namespace: String,
    entity_type: String,
    id: String,
    id_parts: Vec<String>,
}

impl Urn {
    /// Parses a URN from a string.
    pub fn parse(s: &str) -> UrnResult<Self> {
        let rest = s
            .strip_prefix(URN_PREFIX)
            .ok_or_else(|| UrnParseError::MissingPrefix(s.to_string()))?;

        let (namespace, rest) = rest.split_once(':').ok_or_else(|| UrnParseError::MissingSegment {
            segment: "entity type",
            urn: s.to_string(),
        })?;
        let (entity_type, id) = rest.split_once(':').ok_or_else(|| UrnParseError::MissingSegment {
            segment: "id",
            urn: s.to_string(),
        })?;

        for (segment, value) in [("namespace", namespace), ("entity type", entity_type), ("id", id)] {
            if value.is_empty() {
                return Err(UrnParseError::EmptySegment {
                    segment,
                    urn: s.to_string(),
                });
            }
        }

        let id_parts = if id.starts_with('(') {
            split_tuple(s, id)?
        } else {
            vec![id.to_string()]
        };

        Ok(Self {
            namespace: namespace.to_string(),
            entity_type: entity_type.to_string(),
            id: id.to_string(),
            id_parts,
        })
    }

    /// Builds a URN from its segments, validating the result.
    pub fn from_parts(namespace: &str, entity_type: &str, id: &str) -> UrnResult<Self> {
        Self::parse(&format!("{URN_PREFIX}{namespace}:{entity_type}:{id}"))
    }

    /// The namespace segment (`li` in `urn:li:corpuser:bob`).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The entity type segment (`corpuser` in `urn:li:corpuser:bob`).
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// The raw id segment, parentheses included for tuple ids.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The id split into its tuple parts. A plain id yields a single part.
    pub fn id_parts(&self) -> &[String] {
        &self.id_parts
    }

    /// Returns true when the id is a parenthesized tuple.
    pub fn is_tuple(&self) -> bool {
        self.id.starts_with('(')
    }
}

/// Splits `(a,b,(c,d))` on top-level commas.
fn split_tuple(urn: &str, id: &str) -> UrnResult<Vec<String>> {
    let unbalanced = || UrnParseError::UnbalancedTuple(urn.to_string());
    let inner = id
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(unbalanced)?;

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or_else(unbalanced)?,
            ',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(unbalanced());
    }
    parts.push(&inner[start..]);

    if parts.iter().any(|p| p.is_empty()) {
        return Err(UrnParseError::EmptyTuplePart(urn.to_string()));
    }
    Ok(parts.into_iter().map(str::to_string).collect())
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{URN_PREFIX}{}:{}:{}", self.namespace, self.entity_type, self.id)
    }
}

impl FromStr for Urn {
    type Err = UrnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Urn {
    type Error = UrnParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for Urn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Urn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
