//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! For partial functions `combine` is `or_else`, so associativity is read
//! behaviourally: both groupings accept the same inputs and produce the same
//! results.

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use partiality::partial;
/// use partiality::typeclass::Semigroup;
///
/// let one = partial::of(|value: &i32| *value == 1, |_| "one");
/// let two = partial::of(|value: &i32| *value == 2, |_| "two");
/// let either = one.combine(two);
///
/// assert_eq!(either.apply(&2), "two");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}
