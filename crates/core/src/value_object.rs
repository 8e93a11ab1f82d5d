//! Value object trait: equality by value, not identity.
//!
//! Prices and variations are value objects: a `₱25.00` price is equal to any
//! other `₱25.00` price, and a variation has no identity beyond its fields.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ## Value Object vs identified record
///
/// - **Value Object**: no identity (two values with the same fields are equal)
/// - **Product**: has identity (two records with the same id are the same entry)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money(u64);
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money(2500), Money(2500));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
