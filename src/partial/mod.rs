//! Partial functions and their composition algebra.
//!
//! A partial function is a function whose domain is a dynamically testable
//! subset of its input type. This module provides [`PartialFunction`], the
//! combinators that build new partial functions from existing ones, and the
//! conversions to and from total functions returning `Option`.
//!
//! # Overview
//!
//! - **Construction**: [`of`], [`from`], [`from_all`], [`empty`] and the
//!   `*_with_end` variants
//! - **Evaluation**: [`PartialFunction::is_defined_at`],
//!   [`PartialFunction::apply_or_else`], [`PartialFunction::apply`],
//!   [`PartialFunction::try_apply`], [`PartialFunction::apply_either`]
//! - **Fallback chains**: [`PartialFunction::or_else`] and its builder forms
//!   `or_else_of`, `or_else_from`, `end`, `or_end_with`, `or_default`
//! - **Composition**: [`PartialFunction::and_then`],
//!   [`PartialFunction::and_then_partial`], [`PartialFunction::compose`]
//! - **Lifting**: [`lift`], [`unlift`], [`Lifted`], [`cond`], [`cond_opt`]
//!
//! # Evaluation Without Double Work
//!
//! Composite functions never ask a nested function whether an input is in its
//! domain and then apply it in a second step. They call the nested function
//! once with an internal fallback that returns a unique marker, then check by
//! address whether the marker came back. Every guard and mapper therefore runs
//! at most once per call to [`PartialFunction::apply_or_else`], and no panic
//! or error value is used to signal an ordinary miss.
//!
//! # Examples
//!
//! ## Fallback Chains
//!
//! ```rust
//! use partiality::partial;
//!
//! let label = partial::of(|value: &i32| *value < 3, |_| "lt3")
//!     .or_else_of(|value| *value > 3, |_| "gt3")
//!     .or_end_with("eq3");
//!
//! let labels: Vec<_> = (1..=5).map(|value| label.apply(&value)).collect();
//! assert_eq!(labels, vec!["lt3", "lt3", "eq3", "gt3", "gt3"]);
//! ```
//!
//! ## Incomplete Coverage
//!
//! ```rust
//! use partiality::partial;
//!
//! let sign = partial::of(|value: &i32| *value > 0, |_| 1)
//!     .or_else_of(|value| *value < 0, |_| -1)
//!     .end();
//!
//! assert_eq!(sign.apply(&5), 1);
//! assert_eq!(sign.apply(&-5), -1);
//! assert!(sign.try_apply(&0).is_err());
//! ```
//!
//! ## Composition
//!
//! ```rust
//! use partiality::partial;
//!
//! let one = partial::of(|value: &i32| *value == 1, |_| "one");
//! let parity = partial::of(|_: &i32| true, |value: &i32| value % 2);
//!
//! assert_eq!(one.compose(parity).apply(&3), "one");
//! ```
//!
//! ## Lift and Unlift
//!
//! ```rust
//! use partiality::partial;
//!
//! let reciprocal = partial::of(|value: &f64| *value != 0.0, |value: &f64| 1.0 / value);
//! let lifted = reciprocal.lift();
//!
//! assert_eq!(lifted.call(&4.0), Some(0.25));
//! assert_eq!(lifted.call(&0.0), None);
//! assert!(partial::unlift(lifted).ptr_eq(&reciprocal));
//! ```

mod and_then;
mod error;
mod factory;
mod function;
mod lift;
mod or_else;
mod sentinel;

pub use error::UndefinedDomainError;
pub use factory::{empty, from, from_all, from_all_with_end, from_with_end, of, with_end};
pub use function::PartialFunction;
pub use lift::{Lifted, Unlift, cond, cond_opt, lift, unlift};
