//! Projector - maps an entity's structured property assignments into
//! render-ready entries.
//!
//! Two views are offered: [`Projector::project`] maps only what is assigned,
//! [`Projector::project_all`] emits one entry per catalog definition in
//! catalog order, using placeholders for unassigned properties.

use std::collections::{HashMap, HashSet};

use structprop_model::{
    PrimitiveValue, ProjectedEntry, ProjectedProperties, ProjectedValue, PropertyDefinition,
    QueryContext, ReferenceResolver, ResolvedEntity, StructuredProperties, StructuredPropertyRef,
    UrnEntityResolver, ValueAssignment,
};
use structprop_types::Urn;
use tracing::{debug, Level};

use crate::config::ProjectionConfig;
use crate::error::ProjectionResult;

static DEFAULT_RESOLVER: UrnEntityResolver = UrnEntityResolver;

/// Projects structured property assignments for one caller.
///
/// Holds no mutable state; build one per request (or share one) and call it
/// for as many entities as needed.
#[derive(Clone)]
pub struct Projector<'a> {
    resolver: &'a dyn ReferenceResolver,
    context: Option<&'a QueryContext>,
    config: ProjectionConfig,
}

impl Default for Projector<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_RESOLVER)
    }
}

impl<'a> Projector<'a> {
    /// Creates a projector for an anonymous caller with default settings.
    pub fn new(resolver: &'a dyn ReferenceResolver) -> Self {
        Self {
            resolver,
            context: None,
            config: ProjectionConfig::default(),
        }
    }

    /// Resolves reference values on behalf of `context`.
    pub fn with_context(mut self, context: &'a QueryContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_config(mut self, config: ProjectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Maps each assignment to an entry, in input order.
    pub fn project(&self, assignments: &[ValueAssignment], entity: &Urn) -> Vec<ProjectedEntry> {
        assignments
            .iter()
            .map(|a| self.project_assignment(a, entity))
            .collect()
    }

    /// [`Projector::project`] over a stored aspect.
    pub fn project_aspect(&self, aspect: &StructuredProperties, entity: &Urn) -> ProjectedProperties {
        self.project(&aspect.properties, entity).into()
    }

    /// [`Projector::project`] for a caller holding the entity URN as text.
    pub fn project_str(
        &self,
        assignments: &[ValueAssignment],
        entity: &str,
    ) -> ProjectionResult<Vec<ProjectedEntry>> {
        let entity = Urn::parse(entity)?;
        Ok(self.project(assignments, &entity))
    }

    /// Emits exactly one entry per catalog definition, in catalog order.
    ///
    /// Definitions with an assignment are mapped from it; the rest become
    /// placeholders with empty value lists. When an assignment's property
    /// appears more than once, the last one wins.
    pub fn project_all(
        &self,
        assignments: &[ValueAssignment],
        entity: &Urn,
        catalog: &[PropertyDefinition],
    ) -> Vec<ProjectedEntry> {
        let by_urn: HashMap<&Urn, &ValueAssignment> =
            assignments.iter().map(|a| (&a.property_urn, a)).collect();

        let mut entries: Vec<ProjectedEntry> = catalog
            .iter()
            .map(|definition| match by_urn.get(&definition.urn) {
                Some(assignment) => self.project_assignment(assignment, entity),
                None => ProjectedEntry::placeholder(&definition.urn, entity),
            })
            .collect();

        // Unlisted assignments only matter when appended or logged.
        if !self.config.include_unlisted_assignments && !tracing::enabled!(Level::DEBUG) {
            return entries;
        }
        let unlisted = unlisted_assignments(assignments, catalog, &by_urn);
        if unlisted.is_empty() {
            return entries;
        }

        if self.config.include_unlisted_assignments {
            for assignment in unlisted {
                debug!(
                    entity = %entity,
                    property = %assignment.property_urn,
                    "Appending assignment without a catalog definition"
                );
                entries.push(self.project_assignment(assignment, entity));
            }
        } else {
            debug!(
                entity = %entity,
                omitted = unlisted.len(),
                "Omitting assignments without a catalog definition"
            );
        }
        entries
    }

    /// [`Projector::project_all`] over a stored aspect.
    pub fn project_all_aspect(
        &self,
        aspect: &StructuredProperties,
        entity: &Urn,
        catalog: &[PropertyDefinition],
    ) -> ProjectedProperties {
        self.project_all(&aspect.properties, entity, catalog).into()
    }

    /// [`Projector::project_all`] for a caller holding the entity URN as text.
    pub fn project_all_str(
        &self,
        assignments: &[ValueAssignment],
        entity: &str,
        catalog: &[PropertyDefinition],
    ) -> ProjectionResult<Vec<ProjectedEntry>> {
        let entity = Urn::parse(entity)?;
        Ok(self.project_all(assignments, &entity, catalog))
    }

    /// Maps a single assignment, classifying each of its values in order.
    pub fn project_assignment(&self, assignment: &ValueAssignment, entity: &Urn) -> ProjectedEntry {
        let (values, resolved): (Vec<ProjectedValue>, Vec<Option<ResolvedEntity>>) =
            assignment.values.iter().map(|v| self.classify(v)).unzip();

        ProjectedEntry {
            structured_property: StructuredPropertyRef::new(&assignment.property_urn),
            values,
            value_entities: resolved.into_iter().flatten().collect(),
            associated_urn: entity.to_string(),
        }
    }

    /// Classifies one stored value.
    ///
    /// Numbers pass through. Text is always emitted as text; if it also parses
    /// as a URN, the resolved entity is returned alongside it.
    pub fn classify(&self, value: &PrimitiveValue) -> (ProjectedValue, Option<ResolvedEntity>) {
        match value {
            PrimitiveValue::Double(n) => (ProjectedValue::Number(*n), None),
            PrimitiveValue::String(text) => (ProjectedValue::Text(text.clone()), self.resolve_text(text)),
        }
    }

    fn resolve_text(&self, text: &str) -> Option<ResolvedEntity> {
        if !self.config.resolve_references {
            return None;
        }
        match Urn::parse(text) {
            Ok(urn) => Some(self.resolver.resolve(self.context, &urn)),
            Err(e) => {
                debug!(error = %e, "String value is not a urn for this structured property entry");
                None
            }
        }
    }
}

/// Assignments whose property is absent from the catalog, once per property
/// in first-seen order, each taken from the winning (last) assignment.
fn unlisted_assignments<'v>(
    assignments: &'v [ValueAssignment],
    catalog: &[PropertyDefinition],
    by_urn: &HashMap<&Urn, &'v ValueAssignment>,
) -> Vec<&'v ValueAssignment> {
    let listed: HashSet<&Urn> = catalog.iter().map(|d| &d.urn).collect();
    let mut seen = HashSet::new();
    assignments
        .iter()
        .filter(|a| !listed.contains(&a.property_urn) && seen.insert(&a.property_urn))
        .filter_map(|a| by_urn.get(&a.property_urn).copied())
        .collect()
}

/// Maps assigned properties using the default resolver and settings.
pub fn project(assignments: &[ValueAssignment], entity: &Urn) -> Vec<ProjectedEntry> {
    Projector::default().project(assignments, entity)
}

/// Projects the full catalog using the default resolver and settings.
pub fn project_all(
    assignments: &[ValueAssignment],
    entity: &Urn,
    catalog: &[PropertyDefinition],
) -> Vec<ProjectedEntry> {
    Projector::default().project_all(assignments, entity, catalog)
}

/// Classifies one value using the default resolver and settings.
pub fn classify(value: &PrimitiveValue) -> (ProjectedValue, Option<ResolvedEntity>) {
    Projector::default().classify(value)
}
