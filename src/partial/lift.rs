//! Conversions between partial functions and total functions returning
//! `Option`.
//!
//! [`lift`] turns a partial function into a total function returning
//! `Some(value)` inside the domain and `None` outside it. [`unlift`] goes the
//! other way: the domain of the result is "the function returned `Some`".
//!
//! # Laws
//!
//! - **Lift**: `lift(&f).call(a).is_some() == f.is_defined_at(a)`, and
//!   `lift(&f).call(a) == Some(f.apply(a))` where defined
//! - **Round trip**: `unlift(lift(&f))` is `f` itself, not a wrapper around it

use std::fmt;
use std::sync::Arc;

use super::function::{OptionalFunction, PartialFunction, Variant};
use super::sentinel::check_fallback;
use crate::compose::never;

/// A total function backed by a partial function.
///
/// Produced by [`PartialFunction::lift`]. Calling it never fails: inputs
/// outside the domain yield `None`.
///
/// # Examples
///
/// ```rust
/// use partiality::partial;
///
/// let halve = partial::of(|value: &i32| value % 2 == 0, |value: &i32| value / 2).lift();
///
/// assert_eq!(halve.call(&10), Some(5));
/// assert_eq!(halve.call(&11), None);
///
/// let halves: Vec<_> = [1, 2, 3, 4].iter().filter_map(halve.as_fn()).collect();
/// assert_eq!(halves, vec![1, 2]);
/// ```
pub struct Lifted<A, B> {
    function: PartialFunction<A, B>,
}

impl<A, B> Lifted<A, B> {
    /// Wraps a partial function.
    #[inline]
    pub const fn new(function: PartialFunction<A, B>) -> Self {
        Self { function }
    }

    /// Returns `Some(value)` where the partial function is defined and `None`
    /// elsewhere.
    ///
    /// Each guard and mapper on the path runs at most once. A function built
    /// with [`unlift`] is called directly.
    #[inline]
    pub fn call(&self, input: &A) -> Option<B> {
        match &self.function.variant {
            Variant::Unlifted(function) => function(input),
            _ => self
                .function
                .apply_or_probe(input, &check_fallback::<A, B>)
                .into_value(),
        }
    }

    /// Borrows this value as a plain closure.
    #[inline]
    pub fn as_fn(&self) -> impl Fn(&A) -> Option<B> + '_ {
        move |input| self.call(input)
    }

    /// Converts this value into a plain closure.
    #[inline]
    pub fn into_fn(self) -> impl Fn(&A) -> Option<B> {
        move |input| self.call(input)
    }

    /// Returns the partial function this value was lifted from.
    #[inline]
    pub const fn partial_function(&self) -> &PartialFunction<A, B> {
        &self.function
    }

    /// Returns the partial function this value was lifted from, without
    /// adding another adapter layer.
    #[inline]
    pub fn unlift(self) -> PartialFunction<A, B> {
        self.function
    }
}

impl<A, B> Clone for Lifted<A, B> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.function.clone())
    }
}

impl<A, B> fmt::Debug for Lifted<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Lifted")
            .field(&self.function)
            .finish()
    }
}

impl<A, B> From<Lifted<A, B>> for PartialFunction<A, B> {
    #[inline]
    fn from(lifted: Lifted<A, B>) -> Self {
        lifted.function
    }
}

/// Values that can be viewed as a partial function through an
/// `Option`-returning function.
///
/// Implemented for every `Fn(&A) -> Option<B>` closure and for [`Lifted`].
/// Unlifting a [`Lifted`] returns the original partial function, so repeated
/// lift/unlift cycles never accumulate layers.
pub trait Unlift<A, B> {
    /// Converts `self` into a partial function defined where it returns
    /// `Some`.
    fn unlift(self) -> PartialFunction<A, B>;
}

impl<A, B, F> Unlift<A, B> for F
where
    F: Fn(&A) -> Option<B> + Send + Sync + 'static,
{
    fn unlift(self) -> PartialFunction<A, B> {
        let function: OptionalFunction<A, B> = Arc::new(self);
        PartialFunction::from_variant(Variant::Unlifted(function))
    }
}

impl<A, B> Unlift<A, B> for Lifted<A, B> {
    #[inline]
    fn unlift(self) -> PartialFunction<A, B> {
        self.function
    }
}

impl<A, B> PartialFunction<A, B> {
    /// Turns this partial function into a total function returning `Option`.
    ///
    /// Lifting a function built with [`unlift`] hands back the wrapped
    /// `Option`-returning function without another evaluation layer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let positive = partial::of(|value: &i32| *value > 0, |value: &i32| value * 3);
    /// let lifted = positive.lift();
    ///
    /// assert_eq!(lifted.call(&2), Some(6));
    /// assert_eq!(lifted.call(&-2), None);
    /// ```
    #[inline]
    pub fn lift(&self) -> Lifted<A, B> {
        Lifted::new(self.clone())
    }
}

/// Turns a partial function into a total function returning `Option`.
///
/// Equivalent to [`PartialFunction::lift`].
#[inline]
pub fn lift<A, B>(function: &PartialFunction<A, B>) -> Lifted<A, B> {
    function.lift()
}

/// Turns an `Option`-returning function into a partial function.
///
/// Unlifting a [`Lifted`] value returns the partial function it was built
/// from.
///
/// # Examples
///
/// ```rust
/// use partiality::partial;
///
/// let first_char = partial::unlift(|text: &String| text.chars().next());
/// assert!(first_char.is_defined_at(&"abc".to_string()));
/// assert!(!first_char.is_defined_at(&String::new()));
///
/// let round_trip = partial::unlift(partial::lift(&first_char));
/// assert!(round_trip.ptr_eq(&first_char));
/// ```
#[inline]
pub fn unlift<A, B, U>(function: U) -> PartialFunction<A, B>
where
    U: Unlift<A, B>,
{
    function.unlift()
}

/// Tests `input` against a boolean-valued partial function, treating inputs
/// outside the domain as `false`.
///
/// # Examples
///
/// ```rust
/// use partiality::partial;
///
/// let is_even_positive = partial::of(|value: &i32| *value > 0, |value: &i32| value % 2 == 0);
/// assert!(partial::cond(&4, &is_even_positive));
/// assert!(!partial::cond(&3, &is_even_positive));
/// assert!(!partial::cond(&-4, &is_even_positive));
/// ```
#[inline]
pub fn cond<T>(input: &T, function: &PartialFunction<T, bool>) -> bool {
    function.apply_or_else(input, never)
}

/// Applies a partial function to `input`, returning `None` outside its
/// domain.
///
/// Equivalent to `function.lift().call(input)`.
#[inline]
pub fn cond_opt<T, U>(input: &T, function: &PartialFunction<T, U>) -> Option<U> {
    function.lift().call(input)
}
