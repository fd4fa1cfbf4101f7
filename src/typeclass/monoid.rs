//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! The partial function defined nowhere is the identity of `or_else`:
//!
//! ```rust
//! use partiality::partial::PartialFunction;
//! use partiality::typeclass::{Monoid, Semigroup};
//!
//! let one = PartialFunction::new(|value: &i32| *value == 1, |_| "one");
//! let combined = <PartialFunction<i32, &str> as Monoid>::empty().combine(one.clone());
//! assert!(combined.ptr_eq(&one));
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial::PartialFunction;
    /// use partiality::typeclass::Monoid;
    ///
    /// let cases = (1..=3).map(|expected| {
    ///     PartialFunction::new(move |value: &i32| *value == expected, move |_| expected * 10)
    /// });
    /// let all = PartialFunction::combine_all(cases);
    ///
    /// assert_eq!(all.apply(&3), 30);
    /// assert!(<PartialFunction<i32, i32> as Monoid>::combine_all(Vec::new()).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}
