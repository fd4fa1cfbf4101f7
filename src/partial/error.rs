//! Error type for partial functions applied outside their domain.

use std::any::type_name;
use std::fmt;

/// Represents an input that lies outside a partial function's domain.
///
/// Returned by [`PartialFunction::try_apply`](super::PartialFunction::try_apply)
/// when no branch of the function accepts the input and no fallback was
/// supplied, and used as the panic payload of
/// [`PartialFunction::apply`](super::PartialFunction::apply). The offending
/// input is kept for diagnostics.
///
/// # Examples
///
/// ```rust
/// use partiality::partial::{self, UndefinedDomainError};
///
/// let positive = partial::of(|value: &i32| *value > 0, |value: &i32| value * 10);
/// let error: UndefinedDomainError<i32> = positive.try_apply(&-3).unwrap_err();
///
/// assert_eq!(*error.input(), -3);
/// assert_eq!(format!("{error}"), "partial function is not defined at -3");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UndefinedDomainError<A> {
    input: A,
}

impl<A> UndefinedDomainError<A> {
    /// Creates an error for the given offending input.
    #[inline]
    pub const fn new(input: A) -> Self {
        Self { input }
    }

    /// Returns the input that was outside the domain.
    #[inline]
    pub const fn input(&self) -> &A {
        &self.input
    }

    /// Consumes the error and returns the offending input.
    #[inline]
    pub fn into_input(self) -> A {
        self.input
    }

    /// Returns the name of the input type, for messages that cannot format
    /// the input itself.
    #[inline]
    pub fn input_type_name(&self) -> &'static str {
        type_name::<A>()
    }
}

impl<A: fmt::Debug> fmt::Debug for UndefinedDomainError<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UndefinedDomainError")
            .field("input", &self.input)
            .field("input_type", &type_name::<A>())
            .finish()
    }
}

impl<A: fmt::Debug> fmt::Display for UndefinedDomainError<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "partial function is not defined at {:?}",
            self.input
        )
    }
}

impl<A: fmt::Debug> std::error::Error for UndefinedDomainError<A> {}

/// Panics with an [`UndefinedDomainError`] payload holding a clone of
/// `input`.
#[cold]
#[track_caller]
pub(crate) fn undefined_at<A>(input: &A) -> !
where
    A: Clone + Send + 'static,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(
        input_type = type_name::<A>(),
        "partial function applied outside its domain"
    );
    std::panic::panic_any(UndefinedDomainError::new(input.clone()))
}
