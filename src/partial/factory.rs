//! Constructors for partial functions.

use super::function::PartialFunction;
use super::lift::Unlift;
use crate::typeclass::Monoid;

/// Creates a partial function from a domain guard and a mapper.
///
/// Equivalent to [`PartialFunction::new`].
///
/// # Examples
///
/// ```rust
/// use partiality::partial;
///
/// let describe = partial::of(|value: &i32| *value < 3, |_| "elem less than 3")
///     .or_else_of(|value| *value >= 3, |_| "elem larger than / equal 3")
///     .end();
///
/// assert_eq!(describe.apply(&1), "elem less than 3");
/// assert_eq!(describe.apply(&5), "elem larger than / equal 3");
/// ```
pub fn of<A, B, P, F>(guard: P, mapper: F) -> PartialFunction<A, B>
where
    P: Fn(&A) -> bool + Send + Sync + 'static,
    F: Fn(&A) -> B + Send + Sync + 'static,
{
    PartialFunction::new(guard, mapper)
}

/// Creates a partial function from an `Option`-returning function.
///
/// Equivalent to [`unlift`](super::unlift).
pub fn from<A, B, U>(function: U) -> PartialFunction<A, B>
where
    U: Unlift<A, B>,
{
    function.unlift()
}

/// Combines `Option`-returning functions into one partial function.
///
/// The result is defined wherever any input function returns `Some`; the
/// first such function in iteration order wins. An empty iterator yields
/// [`empty`].
///
/// # Examples
///
/// ```rust
/// use partiality::partial;
///
/// let rules: Vec<fn(&u32) -> Option<&'static str>> = vec![
///     |value| (value % 15 == 0).then_some("FizzBuzz"),
///     |value| (value % 3 == 0).then_some("Fizz"),
///     |value| (value % 5 == 0).then_some("Buzz"),
/// ];
/// let fizz_buzz = partial::from_all(rules);
///
/// assert_eq!(fizz_buzz.apply(&30), "FizzBuzz");
/// assert_eq!(fizz_buzz.apply(&9), "Fizz");
/// assert_eq!(fizz_buzz.apply(&10), "Buzz");
/// assert!(!fizz_buzz.is_defined_at(&7));
/// ```
pub fn from_all<A, B, I>(functions: I) -> PartialFunction<A, B>
where
    I: IntoIterator,
    I::Item: Unlift<A, B>,
{
    PartialFunction::combine_all(functions.into_iter().map(|function| function.unlift()))
}

/// Creates a closed partial function from a guard and a mapper.
///
/// Equivalent to `of(guard, mapper).end()`.
pub fn with_end<A, B, P, F>(guard: P, mapper: F) -> PartialFunction<A, B>
where
    P: Fn(&A) -> bool + Send + Sync + 'static,
    F: Fn(&A) -> B + Send + Sync + 'static,
{
    of(guard, mapper).end()
}

/// Creates a closed partial function from an `Option`-returning function.
///
/// Equivalent to `from(function).end()`.
pub fn from_with_end<A, B, U>(function: U) -> PartialFunction<A, B>
where
    U: Unlift<A, B>,
{
    from(function).end()
}

/// Combines `Option`-returning functions into one closed partial function.
///
/// Equivalent to `from_all(functions).end()`.
pub fn from_all_with_end<A, B, I>(functions: I) -> PartialFunction<A, B>
where
    I: IntoIterator,
    I::Item: Unlift<A, B>,
{
    from_all(functions).end()
}

/// Creates the partial function that is defined nowhere.
#[inline]
pub const fn empty<A, B>() -> PartialFunction<A, B> {
    PartialFunction::empty()
}
