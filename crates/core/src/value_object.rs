//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity** — they are defined entirely by their
/// attribute values, and two value objects with the same values are equal.
/// They are immutable: to "modify" one, build a new one.
///
/// The bounds reflect how value objects are used: cheap to copy around
/// (`Clone`), compared by value (`PartialEq`), and printable in logs and
/// test failures (`Debug`). `Eq` is deliberately not required so that
/// views carrying floating-point aggregates can still be value objects.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
