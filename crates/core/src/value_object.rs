//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; to
/// "modify" one, build a new one. They must be `Clone` (cheap to copy),
/// `PartialEq` (compared by value) and `Debug` (loggable in tests).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
