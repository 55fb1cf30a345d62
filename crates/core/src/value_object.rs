//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable once built and compared by their attributes.
/// A recorded stock movement is one: it is never edited after creation, only
/// dropped when the bounded history evicts it.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
