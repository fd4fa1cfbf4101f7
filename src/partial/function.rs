//! The `PartialFunction<A, B>` type and its evaluation protocol.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use super::and_then::Chain;
use super::error::{UndefinedDomainError, undefined_at};
use super::or_else::probe_branches;
use super::sentinel::{Probe, check_fallback};
use crate::control::Either;

pub(crate) type Guard<A> = Arc<dyn Fn(&A) -> bool + Send + Sync>;
pub(crate) type Mapper<A, B> = Arc<dyn Fn(&A) -> B + Send + Sync>;
pub(crate) type OptionalFunction<A, B> = Arc<dyn Fn(&A) -> Option<B> + Send + Sync>;

/// Number of `or_else` branches stored inline before spilling to the heap.
pub(crate) const INLINE_BRANCHES: usize = 4;

pub(crate) type Branches<A, B> = SmallVec<[PartialFunction<A, B>; INLINE_BRANCHES]>;

/// The closed set of partial-function shapes.
pub(crate) enum Variant<A, B> {
    /// Defined nowhere.
    Empty,
    /// A guard and a mapper evaluated independently.
    Cases { guard: Guard<A>, mapper: Mapper<A, B> },
    /// Backed by a total function returning `Option<B>`.
    Unlifted(OptionalFunction<A, B>),
    /// Branches tried in order; never contains another `OrElse` or `Empty`.
    OrElse(Arc<Branches<A, B>>),
    /// A partial function followed by a second stage.
    AndThen(Arc<dyn Chain<A, B>>),
}

impl<A, B> Clone for Variant<A, B> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cases { guard, mapper } => Self::Cases {
                guard: Arc::clone(guard),
                mapper: Arc::clone(mapper),
            },
            Self::Unlifted(function) => Self::Unlifted(Arc::clone(function)),
            Self::OrElse(branches) => Self::OrElse(Arc::clone(branches)),
            Self::AndThen(chain) => Self::AndThen(Arc::clone(chain)),
        }
    }
}

/// A function from `A` to `B` whose domain is a dynamically testable subset
/// of `A`.
///
/// A partial function answers two questions about an input: whether it is
/// in the domain ([`is_defined_at`](Self::is_defined_at)) and, if so, what
/// it maps to. The primary entry point is
/// [`apply_or_else`](Self::apply_or_else), which produces the mapped value
/// when the input is in the domain and defers to a caller-supplied fallback
/// otherwise. Each guard and mapper on the path is evaluated at most once per
/// call, no matter how deeply the function is composed.
///
/// Partial functions are immutable. Every combinator consumes its operands
/// and returns a new value; the closures inside are shared through `Arc`, so
/// cloning is cheap and a composed function may be used from several threads
/// at once.
///
/// # Type Parameters
///
/// * `A` - The input type; inputs are always borrowed
/// * `B` - The output type
///
/// # Examples
///
/// ```rust
/// use partiality::partial;
///
/// let sign = partial::of(|value: &i32| *value < 3, |_| "lt3")
///     .or_else_of(|value| *value > 3, |_| "gt3")
///     .or_end_with("eq3");
///
/// let labels: Vec<_> = [1, 2, 3, 4, 5].iter().map(|value| sign.apply(value)).collect();
/// assert_eq!(labels, vec!["lt3", "lt3", "eq3", "gt3", "gt3"]);
/// ```
pub struct PartialFunction<A, B> {
    pub(crate) variant: Variant<A, B>,
}

impl<A, B> PartialFunction<A, B> {
    #[inline]
    pub(crate) const fn from_variant(variant: Variant<A, B>) -> Self {
        Self { variant }
    }

    /// Creates the partial function that is defined nowhere.
    ///
    /// `empty` is the identity of [`or_else`](Self::or_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial::PartialFunction;
    ///
    /// let nothing: PartialFunction<i32, i32> = PartialFunction::empty();
    /// assert!(!nothing.is_defined_at(&0));
    /// assert_eq!(nothing.apply_or_else(&5, |value| value + 1), 6);
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::from_variant(Variant::Empty)
    }

    /// Creates a partial function from a domain guard and a mapper.
    ///
    /// The mapper is only ever called for inputs accepted by the guard.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial::PartialFunction;
    ///
    /// let half = PartialFunction::new(|value: &u32| value % 2 == 0, |value: &u32| value / 2);
    /// assert!(half.is_defined_at(&4));
    /// assert!(!half.is_defined_at(&5));
    /// assert_eq!(half.apply(&4), 2);
    /// ```
    pub fn new<P, F>(guard: P, mapper: F) -> Self
    where
        P: Fn(&A) -> bool + Send + Sync + 'static,
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        let guard: Guard<A> = Arc::new(guard);
        let mapper: Mapper<A, B> = Arc::new(mapper);
        Self::from_variant(Variant::Cases { guard, mapper })
    }

    // =========================================================================
    // Evaluation Protocol
    // =========================================================================

    /// Returns `true` if `input` is in the domain of this function.
    ///
    /// Guards are evaluated, mappers are not, except for functions built with
    /// [`and_then_partial`](Self::and_then_partial) or
    /// [`compose`](Self::compose), whose second-stage domain depends on the
    /// first stage's output.
    pub fn is_defined_at(&self, input: &A) -> bool {
        match &self.variant {
            Variant::Empty => false,
            Variant::Cases { guard, .. } => guard(input),
            Variant::Unlifted(function) => function(input).is_some(),
            Variant::OrElse(branches) => branches.iter().any(|branch| branch.is_defined_at(input)),
            Variant::AndThen(chain) => chain.is_defined_at(input),
        }
    }

    /// Evaluates this function with an internal fallback.
    ///
    /// Composites call their operands with the check fallback and inspect
    /// the returned probe instead of asking `is_defined_at` first.
    pub(crate) fn apply_or_probe(&self, input: &A, fallback: &dyn Fn(&A) -> Probe<B>) -> Probe<B> {
        match &self.variant {
            Variant::Empty => fallback(input),
            Variant::Cases { guard, mapper } => {
                if guard(input) {
                    Probe::Value(mapper(input))
                } else {
                    fallback(input)
                }
            }
            Variant::Unlifted(function) => {
                function(input).map_or_else(|| fallback(input), Probe::Value)
            }
            Variant::OrElse(branches) => probe_branches(branches, input, fallback),
            Variant::AndThen(chain) => chain.apply_or_probe(input, fallback),
        }
    }

    /// Applies this function where it is defined and `zero` everywhere else.
    ///
    /// This is the primary evaluation entry point: each guard and mapper on
    /// the path is evaluated at most once, and `zero` is called only when no
    /// branch accepts the input. It never fails on its own account; panics
    /// raised by the supplied closures propagate unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let positive = partial::of(|value: &i32| *value > 0, |value: &i32| value * 2);
    /// assert_eq!(positive.apply_or_else(&4, |_| 0), 8);
    /// assert_eq!(positive.apply_or_else(&-4, |value| -value), 4);
    /// ```
    pub fn apply_or_else<F>(&self, input: &A, zero: F) -> B
    where
        F: FnOnce(&A) -> B,
    {
        match self.apply_or_probe(input, &check_fallback::<A, B>).into_value() {
            Some(value) => value,
            None => zero(input),
        }
    }

    /// Applies this function to an input that must be in its domain.
    ///
    /// # Panics
    ///
    /// Panics if `input` is outside the domain. An uncovered input means the
    /// chain of cases is incomplete; use [`try_apply`](Self::try_apply),
    /// [`apply_or_else`](Self::apply_or_else) or [`lift`](Self::lift) where
    /// a miss is expected.
    ///
    /// The panic payload is an [`UndefinedDomainError<A>`] holding a clone
    /// of `input`, so a caller that catches the unwind can recover it with
    /// `downcast_ref`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let sign = partial::of(|value: &i32| *value > 0, |_| 1)
    ///     .or_else_of(|value| *value < 0, |_| -1)
    ///     .end();
    ///
    /// assert_eq!(sign.apply(&5), 1);
    /// assert_eq!(sign.apply(&-5), -1);
    /// ```
    ///
    /// ```rust,should_panic
    /// use partiality::partial;
    ///
    /// let sign = partial::of(|value: &i32| *value > 0, |_| 1)
    ///     .or_else_of(|value| *value < 0, |_| -1)
    ///     .end();
    ///
    /// sign.apply(&0);
    /// ```
    #[track_caller]
    pub fn apply(&self, input: &A) -> B
    where
        A: Clone + Send + 'static,
    {
        self.apply_or_else(input, |input| undefined_at(input))
    }

    /// Applies this function, reporting an input outside the domain as an
    /// error that carries the input.
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedDomainError`] when no branch accepts `input`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let even = partial::of(|value: &i32| value % 2 == 0, |value: &i32| value / 2);
    /// assert_eq!(even.try_apply(&8), Ok(4));
    /// assert_eq!(even.try_apply(&7).unwrap_err().into_input(), 7);
    /// ```
    pub fn try_apply(&self, input: &A) -> Result<B, UndefinedDomainError<A>>
    where
        A: Clone,
    {
        self.apply_or_probe(input, &check_fallback::<A, B>)
            .into_value()
            .ok_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    input_type = std::any::type_name::<A>(),
                    "partial function is not defined at input"
                );
                UndefinedDomainError::new(input.clone())
            })
    }

    /// Applies this function, returning `Right(value)` where it is defined and
    /// `Left(input)` where it is not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::control::Either;
    /// use partiality::partial;
    ///
    /// let small = partial::of(|value: &u8| *value < 10, |value: &u8| u32::from(*value));
    /// assert_eq!(small.apply_either(&3), Either::Right(3));
    /// assert_eq!(small.apply_either(&30), Either::Left(30));
    /// ```
    pub fn apply_either(&self, input: &A) -> Either<A, B>
    where
        A: Clone,
    {
        match self.apply_or_probe(input, &check_fallback::<A, B>).into_value() {
            Some(value) => Either::Right(value),
            None => Either::Left(input.clone()),
        }
    }

    /// Returns a total function that runs `action` on the result where this
    /// function is defined, and reports whether it did.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    /// use std::sync::Mutex;
    ///
    /// let seen = Mutex::new(Vec::new());
    /// let double_even = partial::of(|value: &i32| value % 2 == 0, |value: &i32| value * 2);
    /// let record = double_even.run_with(|value| seen.lock().unwrap().push(value));
    ///
    /// assert!(record(&2));
    /// assert!(!record(&3));
    /// assert_eq!(*seen.lock().unwrap(), vec![4]);
    /// ```
    pub fn run_with<U, F>(&self, action: F) -> impl Fn(&A) -> bool + use<A, B, U, F>
    where
        F: Fn(B) -> U,
    {
        let function = self.clone();
        move |input| match function
            .apply_or_probe(input, &check_fallback::<A, B>)
            .into_value()
        {
            Some(value) => {
                action(value);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Returns `true` if this is the function defined nowhere.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.variant, Variant::Empty)
    }

    /// Returns the number of top-level `or_else` branches.
    ///
    /// `0` for [`empty`](Self::empty), `1` for any single function, and the
    /// length of the flattened chain otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let chain = partial::of(|value: &i32| *value == 1, |_| "one")
    ///     .or_else_of(|value| *value == 2, |_| "two")
    ///     .or_else_of(|value| *value == 3, |_| "three");
    /// assert_eq!(chain.branch_count(), 3);
    /// ```
    pub fn branch_count(&self) -> usize {
        match &self.variant {
            Variant::Empty => 0,
            Variant::OrElse(branches) => branches.len(),
            Variant::Cases { .. } | Variant::Unlifted(_) | Variant::AndThen(_) => 1,
        }
    }

    /// Returns `true` if both values share the same underlying function.
    ///
    /// Clones are `ptr_eq` to their source; separately built functions are
    /// not, even when they behave identically.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.variant, &other.variant) {
            (Variant::Empty, Variant::Empty) => true,
            (
                Variant::Cases { guard, mapper },
                Variant::Cases {
                    guard: other_guard,
                    mapper: other_mapper,
                },
            ) => Arc::ptr_eq(guard, other_guard) && Arc::ptr_eq(mapper, other_mapper),
            (Variant::Unlifted(function), Variant::Unlifted(other_function)) => {
                Arc::ptr_eq(function, other_function)
            }
            (Variant::OrElse(branches), Variant::OrElse(other_branches)) => {
                Arc::ptr_eq(branches, other_branches)
            }
            (Variant::AndThen(chain), Variant::AndThen(other_chain)) => {
                Arc::ptr_eq(chain, other_chain)
            }
            _ => false,
        }
    }
}

impl<A, B> Clone for PartialFunction<A, B> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_variant(self.variant.clone())
    }
}

impl<A, B> Default for PartialFunction<A, B> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<A, B> fmt::Debug for PartialFunction<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Variant::Empty => formatter.write_str("PartialFunction::Empty"),
            Variant::Cases { .. } => formatter.write_str("PartialFunction::Cases"),
            Variant::Unlifted(_) => formatter.write_str("PartialFunction::Unlifted"),
            Variant::OrElse(branches) => formatter
                .debug_tuple("PartialFunction::OrElse")
                .field(&branches.len())
                .finish(),
            Variant::AndThen(_) => formatter.write_str("PartialFunction::AndThen"),
        }
    }
}

static_assertions::assert_impl_all!(PartialFunction<i32, String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn less_than_three() -> PartialFunction<i32, &'static str> {
        PartialFunction::new(|value: &i32| *value < 3, |_| "lt3")
    }

    #[rstest]
    #[case(1, true)]
    #[case(2, true)]
    #[case(3, false)]
    fn cases_domain_follows_guard(#[case] input: i32, #[case] expected: bool) {
        assert_eq!(less_than_three().is_defined_at(&input), expected);
    }

    #[rstest]
    fn apply_or_else_uses_zero_outside_domain() {
        let function = less_than_three();
        assert_eq!(function.apply_or_else(&1, |_| "zero"), "lt3");
        assert_eq!(function.apply_or_else(&5, |_| "zero"), "zero");
    }

    #[rstest]
    fn apply_panics_with_the_input_outside_domain() {
        let function = less_than_three();
        let payload =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| function.apply(&10)))
                .unwrap_err();
        let error = payload
            .downcast_ref::<UndefinedDomainError<i32>>()
            .expect("payload should be an UndefinedDomainError");
        assert_eq!(*error.input(), 10);
    }

    #[rstest]
    fn empty_is_defined_nowhere() {
        let function: PartialFunction<i32, i32> = PartialFunction::empty();
        assert!(function.is_empty());
        assert!(!function.is_defined_at(&0));
        assert_eq!(function.apply_or_else(&3, |value| *value), 3);
        assert_eq!(function.branch_count(), 0);
    }

    #[rstest]
    fn apply_or_else_evaluates_guard_and_mapper_once() {
        let guard_calls = Arc::new(AtomicUsize::new(0));
        let mapper_calls = Arc::new(AtomicUsize::new(0));
        let guard_counter = Arc::clone(&guard_calls);
        let mapper_counter = Arc::clone(&mapper_calls);
        let function = PartialFunction::new(
            move |value: &i32| {
                guard_counter.fetch_add(1, Ordering::SeqCst);
                *value > 0
            },
            move |value: &i32| {
                mapper_counter.fetch_add(1, Ordering::SeqCst);
                value + 1
            },
        );

        assert_eq!(function.apply_or_else(&1, |_| 0), 2);
        assert_eq!(guard_calls.load(Ordering::SeqCst), 1);
        assert_eq!(mapper_calls.load(Ordering::SeqCst), 1);

        assert_eq!(function.apply_or_else(&-1, |_| 0), 0);
        assert_eq!(guard_calls.load(Ordering::SeqCst), 2);
        assert_eq!(mapper_calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn try_apply_reports_input() {
        let function = less_than_three();
        assert_eq!(function.try_apply(&2), Ok("lt3"));
        let error = function.try_apply(&9).unwrap_err();
        assert_eq!(*error.input(), 9);
    }

    #[rstest]
    fn apply_either_puts_miss_on_the_left() {
        let function = less_than_three();
        assert_eq!(function.apply_either(&0), Either::Right("lt3"));
        assert_eq!(function.apply_either(&7), Either::Left(7));
    }

    #[rstest]
    fn run_with_reports_whether_action_ran() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let runner = less_than_three().run_with(move |_| counter.fetch_add(1, Ordering::SeqCst));

        assert!(runner(&1));
        assert!(!runner(&4));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn clones_share_the_underlying_function() {
        let function = less_than_three();
        let copy = function.clone();
        assert!(function.ptr_eq(&copy));
        assert!(!function.ptr_eq(&less_than_three()));
    }

    #[rstest]
    fn debug_names_the_variant() {
        assert_eq!(format!("{:?}", less_than_three()), "PartialFunction::Cases");
        let empty: PartialFunction<i32, i32> = PartialFunction::default();
        assert_eq!(format!("{empty:?}"), "PartialFunction::Empty");
    }
}
