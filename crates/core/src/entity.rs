//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same `id()` are the same entity, whatever their other
/// attributes say. Use [`impl_entity_identity!`](crate::impl_entity_identity)
/// to derive `PartialEq`, `Eq` and `Hash` from the identifier alone.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Implements key-based equality and hashing for an [`Entity`].
///
/// Structural `#[derive(PartialEq)]` would compare every field; entities in
/// this domain compare by key only.
#[macro_export]
macro_rules! impl_entity_identity {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::id(self) == $crate::Entity::id(other)
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash($crate::Entity::id(self), state);
            }
        }
    };
}
