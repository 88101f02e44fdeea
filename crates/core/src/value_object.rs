//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects with **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values
//! are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A derived
/// account status `{balance, tax_paid, tax_to_pay, as_of}` is a value object:
/// re-deriving it over the same log prefix must produce an equal value, and
/// "modifying" one means deriving a new one at a different `as_of`.
///
/// The trait bounds keep value objects cheap to copy, comparable by their
/// attributes, and debuggable in logs and tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
