//! # partiality
//!
//! Partial functions for Rust: functions whose domain is a dynamically
//! testable subset of their input type, together with an algebra for
//! composing them.
//!
//! ## Overview
//!
//! - **Partial Functions**: [`PartialFunction`](partial::PartialFunction)
//!   with `is_defined_at`, `apply` and the single-pass `apply_or_else`
//! - **Fallback Chains**: `or_else` chains of any length, evaluated in a loop
//! - **Composition**: `and_then` with total or partial second stages, and
//!   `compose`
//! - **Lifting**: conversions to and from `Fn(&A) -> Option<B>`
//! - **Type Classes**: `Semigroup` and `Monoid`; partial functions form a
//!   monoid under `or_else`
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` and `Monoid`
//! - `compose`: Combinator helpers (`constant`, `always`, `never`)
//! - `control`: The `Either` container
//! - `partial`: The partial-function algebra
//! - `tracing`: Diagnostic events through the `tracing` crate
//! - `serde`: `Serialize`/`Deserialize` for `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use partiality::prelude::*;
//!
//! let fizz_buzz = partial::from(|value: &u32| (value % 15 == 0).then_some("FizzBuzz"))
//!     .or_else_from(|value: &u32| (value % 3 == 0).then_some("Fizz"))
//!     .or_else_from(|value: &u32| (value % 5 == 0).then_some("Buzz"));
//!
//! let words: Vec<_> = (1..=15).filter_map(|value| fizz_buzz.lift().call(&value)).collect();
//! assert_eq!(words, vec!["Fizz", "Buzz", "Fizz", "Fizz", "Buzz", "Fizz", "FizzBuzz"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the commonly used types and traits, plus the `partial` module
/// itself for its constructor functions.
///
/// # Usage
///
/// ```rust
/// use partiality::prelude::*;
///
/// let positive = partial::of(|value: &i32| *value > 0, |value: &i32| *value);
/// assert!(positive.is_defined_at(&1));
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "partial")]
    pub use crate::partial::{self, Lifted, PartialFunction, UndefinedDomainError, Unlift};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "partial")]
pub mod partial;
