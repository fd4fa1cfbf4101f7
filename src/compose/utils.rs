//! Combinators used to build guards and mappers.
//!
//! - [`constant`]: The K combinator over a borrowed input
//! - [`always`] and [`never`]: Guards accepting every input or none

/// Creates a function that ignores its borrowed input and returns a clone of
/// `value`.
///
/// Also known as the K combinator. The returned closure has the mapper shape
/// `Fn(&U) -> T` so it can complete a chain of cases directly.
///
/// # Examples
///
/// ```
/// use partiality::compose::{always, constant};
/// use partiality::partial::PartialFunction;
///
/// let zero = constant::<_, str>(0);
/// assert_eq!(zero("ignored"), 0);
///
/// let fallback = PartialFunction::new(always, constant::<_, i32>("other"));
/// assert_eq!(fallback.apply(&7), "other");
/// ```
#[inline]
pub fn constant<T: Clone, U: ?Sized>(value: T) -> impl Fn(&U) -> T {
    move |_| value.clone()
}

/// A guard that accepts every input.
///
/// # Examples
///
/// ```
/// use partiality::compose::always;
///
/// assert!(always(&0));
/// assert!(always("text"));
/// ```
#[inline]
pub const fn always<T: ?Sized>(_: &T) -> bool {
    true
}

/// A guard that rejects every input.
#[inline]
pub const fn never<T: ?Sized>(_: &T) -> bool {
    false
}
