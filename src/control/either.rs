//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is the disjoint union a partial function evaluates into with
//! [`apply_either`](crate::partial::PartialFunction::apply_either): `Right`
//! holds the result and `Left` holds the input the function was not defined
//! at. Operations are right-biased.
//!
//! # Examples
//!
//! ```rust
//! use partiality::control::Either;
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! let described = right.fold(
//!     |number| format!("Number: {number}"),
//!     |text| format!("String: {text}"),
//! );
//! assert_eq!(described, "String: hello");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Examples
///
/// ```rust
/// use partiality::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map(|value| value * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::control::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::Left(1).left(), Some(1));
    /// assert_eq!(Either::<i32, &str>::Right("r").left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns the right value or the one produced by `zero`.
    ///
    /// `zero` only runs for `Left`.
    #[inline]
    pub fn get_or_else<F>(self, zero: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => zero(),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Maps the right value.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps the left value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::control::Either;
    ///
    /// let half = |value: i32| {
    ///     if value % 2 == 0 { Either::Right(value / 2) } else { Either::Left("odd") }
    /// };
    /// assert_eq!(Either::Right(8).flat_map(half), Either::Right(4));
    /// assert_eq!(Either::Right(7).flat_map(half), Either::Left("odd"));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Keeps a `Right` whose value satisfies `predicate`; turns any other
    /// `Right` into `Left(zero())`. A `Left` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::control::Either;
    ///
    /// let positive = |value: &i32| *value > 0;
    /// assert_eq!(Either::<&str, i32>::Right(3).filter_or_else(positive, || "neg"), Either::Right(3));
    /// assert_eq!(Either::<&str, i32>::Right(-3).filter_or_else(positive, || "neg"), Either::Left("neg"));
    /// assert_eq!(Either::<&str, i32>::Left("x").filter_or_else(positive, || "neg"), Either::Left("x"));
    /// ```
    pub fn filter_or_else<P, Z>(self, predicate: P, zero: Z) -> Self
    where
        P: FnOnce(&R) -> bool,
        Z: FnOnce() -> L,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(zero())
                }
            }
            left @ Self::Left(_) => left,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` for a `Right` whose value satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(value) => predicate(value),
        }
    }

    /// Returns `true` for a `Left` or for a `Right` whose value satisfies
    /// `predicate`.
    #[inline]
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => true,
            Self::Right(value) => predicate(value),
        }
    }

    /// Returns `true` for a `Right` equal to `expected`.
    #[inline]
    pub fn contains(&self, expected: &R) -> bool
    where
        R: PartialEq,
    {
        self.exists(|value| value == expected)
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into `Some(right)` or `None`.
    #[inline]
    pub fn into_option(self) -> Option<R> {
        self.right()
    }

    /// Converts into `Ok(right)` or `Err(left)`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L, R> Either<Either<L, R>, R> {
    /// Flattens a nested `Either` on the left side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::control::Either;
    ///
    /// let nested: Either<Either<&str, i32>, i32> = Either::Left(Either::Right(1));
    /// assert_eq!(nested.join_left(), Either::Right(1));
    /// ```
    pub fn join_left(self) -> Either<L, R> {
        match self {
            Self::Left(inner) => inner,
            Self::Right(value) => Either::Right(value),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flattens a nested `Either` on the right side.
    pub fn join_right(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(inner) => inner,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}
