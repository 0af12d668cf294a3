//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// flavor table or a form field descriptor is a value object; a rep identity
/// is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct FieldDescriptor {
///     name: String,
///     label: String,
/// }
///
/// impl ValueObject for FieldDescriptor {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
