//! Small function combinators.
//!
//! The partial-function algebra is built from guards (`Fn(&A) -> bool`) and
//! mappers (`Fn(&A) -> B`). This module provides the generic ones that recur
//! when assembling them:
//!
//! - [`constant`]: A mapper that always returns the same value
//! - [`always`]: A guard that accepts every input
//! - [`never`]: A guard that rejects every input
//!
//! # Examples
//!
//! ```
//! use partiality::compose::{always, constant};
//! use partiality::partial;
//!
//! let catch_all = partial::of(always, constant::<_, u8>("anything"));
//! assert_eq!(catch_all.apply(&200), "anything");
//! ```

mod utils;

pub use utils::{always, constant, never};
