//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// In this domain, identifiers are caller-supplied case-sensitive strings
/// (product names) or generated record ids (ratings). Either way, two
/// entities with the same id are the same entity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
