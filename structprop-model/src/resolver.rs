use structprop_types::Urn;

use crate::ResolvedEntity;

/// Caller identity passed through to reference resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    actor: Urn,
}

impl QueryContext {
    pub fn new(actor: Urn) -> Self {
        Self { actor }
    }

    /// The URN of the user or service issuing the request.
    pub fn actor(&self) -> &Urn {
        &self.actor
    }
}

/// Turns a URN found in a text value into a [`ResolvedEntity`].
///
/// The default implementation derives the entity type from the URN itself,
/// which is all the projection needs. Implement this to attach richer data or
/// to apply per-caller visibility rules using the `context`; `None` means an
/// anonymous caller.
///
/// Resolution must not fail the projection. Implementations that can fail
/// should fall back to [`ResolvedEntity::from_urn`].
pub trait ReferenceResolver: Send + Sync {
    fn resolve(&self, context: Option<&QueryContext>, urn: &Urn) -> ResolvedEntity {
        let _ = context;
        ResolvedEntity::from_urn(urn)
    }
}

/// Resolver that maps a URN to an entity purely from its entity type segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrnEntityResolver;

impl ReferenceResolver for UrnEntityResolver {}
