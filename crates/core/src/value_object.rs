//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; two instances with the same attribute
/// values are interchangeable. A person's `Address` is one: it is derived from
/// the person's fields on every read and compared field by field.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Address {
///     street: Option<String>,
///     city: Option<String>,
/// }
///
/// impl ValueObject for Address {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
