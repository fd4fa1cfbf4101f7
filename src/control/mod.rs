//! Control containers.
//!
//! - [`Either`]: A value that is one of two types; the target of
//!   [`apply_either`](crate::partial::PartialFunction::apply_either)
//!
//! # Examples
//!
//! ```rust
//! use partiality::control::Either;
//!
//! let parsed: Either<String, i32> = "42".parse::<i32>().map_err(|error| error.to_string()).into();
//! assert!(parsed.contains(&42));
//! ```

mod either;

pub use either::Either;
