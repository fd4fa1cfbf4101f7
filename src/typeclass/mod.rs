//! Algebraic type classes.
//!
//! - [`Semigroup`]: Types with an associative binary operation (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//!
//! Partial functions form a monoid under `or_else` with the function defined
//! nowhere as identity, which lets a collection of cases be folded into one
//! function with [`Monoid::combine_all`].
//!
//! # Examples
//!
//! ```rust
//! use partiality::partial::PartialFunction;
//! use partiality::typeclass::Monoid;
//!
//! let small = PartialFunction::new(|value: &u8| *value < 10, |_| "small");
//! let large = PartialFunction::new(|value: &u8| *value >= 10, |_| "large");
//! let size = PartialFunction::combine_all(vec![small, large]);
//! assert_eq!(size.apply(&42), "large");
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
