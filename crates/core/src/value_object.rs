//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity; two instances with the same attribute
/// values are interchangeable. They are immutable once built, so "changing"
/// one means constructing a new value.
///
/// - **Value Object**: `DateRange { start: 2024-01-01, end: 2024-01-05 }`
/// - **Entity**: `Room { number: "101", .. }` (see [`Entity`](crate::Entity))
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
