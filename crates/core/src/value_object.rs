//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Every value object in
/// this crate validates its input in its constructor, so holding one is proof the
/// value is well-formed.
///
/// ## Immutability
///
/// Once created a value object never changes. Operations that "modify" one
/// (`Money::add`, `Money::multiply`, ...) return a new instance and leave the
/// operands untouched.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: value objects are passed around as values, not references
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (logging, testing)
///
/// ## Usage Pattern
///
/// ```ignore
/// let a = Money::new(Decimal::from(100), Currency::new("USD")?)?;
/// let b = Money::new(Decimal::from(100), Currency::new("USD")?)?;
/// assert_eq!(a, b); // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
