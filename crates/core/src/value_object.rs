//! Value object trait: equality by value, not identity.
//!
//! Catalog records, filter criteria and form states have **no identity**: two
//! of them with the same attribute values are the same thing.

/// Marker trait for value objects.
///
/// Value objects are **immutable** (or replaced wholesale) and **compared by
/// value**. To "modify" one, build a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct FilterCriteria {
///     category: CategoryFilter,
///     search_text: String,
/// }
///
/// impl ValueObject for FilterCriteria {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
