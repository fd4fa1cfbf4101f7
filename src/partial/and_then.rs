//! Post- and pre-composition of partial functions.
//!
//! `f.and_then(k)` keeps the domain of `f` and maps its results through the
//! total function `k`. `f.and_then_partial(g)` feeds the results of `f` into
//! another partial function with [`apply`](PartialFunction::apply); its
//! domain is still the domain of `f`. [`compose`](PartialFunction::compose)
//! is `and_then_partial` with the operands swapped, so `f.compose(g)` is
//! gated by the domain of `g`.
//!
//! The first stage is evaluated through the fallback marker, and the second
//! stage only runs when the marker did not come back. A miss in the first
//! stage hands the original input to the caller's fallback.
//!
//! # Laws
//!
//! - **Domain preservation**: `f.and_then(k).is_defined_at(a) == f.is_defined_at(a)`
//! - **Composition**: `f.and_then(k).apply(a) == k(f.apply(a))` where defined
//! - **Fusion**: `f.and_then(k1).and_then(k2)` behaves as `f.and_then(|b| k2(k1(b)))`
//! - **Compose**: `f.compose(g).apply(c) == f.apply(&g.apply(c))`, and
//!   `f.compose(g).is_defined_at(c) == g.is_defined_at(c)`

use std::sync::Arc;

use super::function::{Branches, PartialFunction, Variant};
use super::lift::Unlift;
use super::sentinel::{Probe, check_fallback};
use crate::compose::always;

/// Evaluation interface for the composite variant whose intermediate type is
/// hidden.
pub(crate) trait Chain<A, B>: Send + Sync {
    fn is_defined_at(&self, input: &A) -> bool;

    fn apply_or_probe(&self, input: &A, fallback: &dyn Fn(&A) -> Probe<B>) -> Probe<B>;
}

type After<B, C> = Arc<dyn Fn(B) -> C + Send + Sync>;

/// A partial function followed by a total transform.
struct AndThen<A, B, C> {
    function: PartialFunction<A, B>,
    after: After<B, C>,
}

impl<A, B, C> Chain<A, C> for AndThen<A, B, C> {
    fn is_defined_at(&self, input: &A) -> bool {
        self.function.is_defined_at(input)
    }

    fn apply_or_probe(&self, input: &A, fallback: &dyn Fn(&A) -> Probe<C>) -> Probe<C> {
        let probe = self.function.apply_or_probe(input, &check_fallback::<A, B>);
        if probe.fallback_occurred() {
            fallback(input)
        } else {
            probe.map(|value| (self.after)(value))
        }
    }
}

/// A partial function whose results are applied to a second partial
/// function. Only the first stage gates the domain.
struct Chained<A, B, C> {
    first: PartialFunction<A, B>,
    second: PartialFunction<B, C>,
}

impl<A, B, C> Chain<A, C> for Chained<A, B, C>
where
    B: Clone + Send + 'static,
{
    fn is_defined_at(&self, input: &A) -> bool {
        self.first.is_defined_at(input)
    }

    fn apply_or_probe(&self, input: &A, fallback: &dyn Fn(&A) -> Probe<C>) -> Probe<C> {
        match self
            .first
            .apply_or_probe(input, &check_fallback::<A, B>)
            .into_value()
        {
            Some(middle) => Probe::Value(self.second.apply(&middle)),
            None => fallback(input),
        }
    }
}

impl<A: 'static, B: 'static> PartialFunction<A, B> {
    /// Maps the results of this function through the total function `after`.
    ///
    /// The domain is unchanged. `after` only runs on genuine results: inputs
    /// outside the domain go straight to the caller's fallback. Applied to
    /// a chain built with [`or_else`](Self::or_else), the transform is pushed
    /// into every branch so the chain stays flat.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let length = partial::of(|text: &&str| !text.is_empty(), |text: &&str| text.len())
    ///     .and_then(|length| length * 2);
    ///
    /// assert_eq!(length.apply(&"abc"), 6);
    /// assert!(!length.is_defined_at(&""));
    /// ```
    #[must_use]
    pub fn and_then<C, K>(self, after: K) -> PartialFunction<A, C>
    where
        C: 'static,
        K: Fn(B) -> C + Send + Sync + 'static,
    {
        let after: After<B, C> = Arc::new(after);
        self.and_then_shared(&after)
    }

    fn and_then_shared<C: 'static>(self, after: &After<B, C>) -> PartialFunction<A, C> {
        let variant = match self.variant {
            Variant::Empty => Variant::Empty,
            Variant::OrElse(branches) => {
                let branches: Branches<A, C> = Arc::unwrap_or_clone(branches)
                    .into_iter()
                    .map(|branch| branch.and_then_shared(after))
                    .collect();
                Variant::OrElse(Arc::new(branches))
            }
            variant => Variant::AndThen(Arc::new(AndThen {
                function: Self::from_variant(variant),
                after: Arc::clone(after),
            })),
        };
        PartialFunction::from_variant(variant)
    }

    /// Feeds the results of this function into the partial function `after`.
    ///
    /// The result has the domain of this function. Inputs outside it go to
    /// the caller's fallback; results of this function are passed to
    /// [`apply`](Self::apply) on `after`.
    ///
    /// # Panics
    ///
    /// Evaluating the result panics with an [`UndefinedDomainError<B>`]
    /// payload when this function produces a value outside the domain of
    /// `after`, even through [`apply_or_else`](Self::apply_or_else).
    ///
    /// [`UndefinedDomainError<B>`]: super::UndefinedDomainError
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let sign = partial::of(|value: &i32| *value > 0, |_| 1)
    ///     .or_else_of(|value| *value < 0, |_| -1);
    /// let name = partial::of(|value: &i32| *value == 1, |_| "positive")
    ///     .or_else_of(|value| *value == -1, |_| "negative");
    /// let named = sign.and_then_partial(name);
    ///
    /// assert_eq!(named.apply(&42), "positive");
    /// assert_eq!(named.apply(&-42), "negative");
    /// assert!(!named.is_defined_at(&0));
    /// assert_eq!(named.apply_or_else(&0, |_| "zero"), "zero");
    /// ```
    #[must_use]
    pub fn and_then_partial<C: 'static>(self, after: PartialFunction<B, C>) -> PartialFunction<A, C>
    where
        B: Clone + Send,
    {
        if self.is_empty() {
            return PartialFunction::empty();
        }
        PartialFunction::from_variant(Variant::AndThen(Arc::new(Chained {
            first: self,
            second: after,
        })))
    }

    /// Feeds the results of this function into a partial function built from
    /// a guard and a mapper over `B`.
    ///
    /// The domain stays the domain of this function; see
    /// [`and_then_partial`](Self::and_then_partial).
    #[must_use]
    pub fn and_then_of<C, P, F>(self, guard: P, mapper: F) -> PartialFunction<A, C>
    where
        B: Clone + Send,
        C: 'static,
        P: Fn(&B) -> bool + Send + Sync + 'static,
        F: Fn(&B) -> C + Send + Sync + 'static,
    {
        self.and_then_partial(PartialFunction::new(guard, mapper))
    }

    /// Feeds the results of this function into an `Option`-returning
    /// function through [`unlift`](super::unlift).
    ///
    /// The domain stays the domain of this function; a `None` from
    /// `function` panics like [`apply`](Self::apply).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let digits = partial::of(|text: &&str| text.starts_with('#'), |text: &&str| text[1..].to_string())
    ///     .and_then_from(|digits: &String| digits.parse::<u32>().ok());
    ///
    /// assert_eq!(digits.apply(&"#17"), 17);
    /// assert!(digits.is_defined_at(&"#x"));
    /// assert!(!digits.is_defined_at(&"17"));
    /// ```
    #[must_use]
    pub fn and_then_from<C, U>(self, function: U) -> PartialFunction<A, C>
    where
        B: Clone + Send,
        C: 'static,
        U: Unlift<B, C>,
    {
        self.and_then_partial(function.unlift())
    }

    /// Runs `before` first and feeds its results into this function.
    ///
    /// `f.compose(g).apply(c) == f.apply(&g.apply(c))`; the result is defined
    /// where `before` is defined.
    ///
    /// # Panics
    ///
    /// Evaluating the result panics with an `UndefinedDomainError<A>` payload
    /// when `before` produces a value outside the domain of this function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let one = partial::of(|value: &i32| *value == 1, |_| "one");
    /// let parity = partial::of(|_: &i32| true, |value: &i32| value % 2);
    /// let odd_is_one = one.compose(parity);
    ///
    /// assert_eq!(odd_is_one.apply(&3), "one");
    /// assert!(odd_is_one.is_defined_at(&4));
    /// ```
    #[must_use]
    pub fn compose<C: 'static>(self, before: PartialFunction<C, A>) -> PartialFunction<C, B>
    where
        A: Clone + Send,
    {
        before.and_then_partial(self)
    }

    /// Runs the total function `before` first and feeds its results into this
    /// function.
    ///
    /// The result is defined everywhere, like `before`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let short = partial::of(|length: &usize| *length < 4, |length: &usize| format!("short:{length}"))
    ///     .or_end_with(String::from("long"));
    /// let by_length = short.compose_fn(|text: &String| text.len());
    ///
    /// assert_eq!(by_length.apply(&"abc".to_string()), "short:3");
    /// assert_eq!(by_length.apply(&"abcdef".to_string()), "long");
    /// ```
    #[must_use]
    pub fn compose_fn<C, G>(self, before: G) -> PartialFunction<C, B>
    where
        A: Clone + Send,
        C: 'static,
        G: Fn(&C) -> A + Send + Sync + 'static,
    {
        PartialFunction::new(always, before).and_then_partial(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partial::UndefinedDomainError;
    use rstest::rstest;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn panic_input<T: 'static + Copy>(action: impl FnOnce()) -> T {
        let payload = panic::catch_unwind(AssertUnwindSafe(action)).unwrap_err();
        *payload
            .downcast_ref::<UndefinedDomainError<T>>()
            .expect("payload should be an UndefinedDomainError")
            .input()
    }

    fn sign() -> PartialFunction<i32, i32> {
        PartialFunction::new(|value: &i32| *value > 0, |_| 1)
            .or_else_of(|value| *value < 0, |_| -1)
            .end()
    }

    fn sign_name() -> PartialFunction<i32, &'static str> {
        PartialFunction::new(|value: &i32| *value == 1, |_| "elem is 1")
            .or_else_of(|value| *value == -1, |_| "elem is -1")
            .end()
    }

    #[rstest]
    #[case(5, true)]
    #[case(0, false)]
    #[case(-5, true)]
    fn and_then_keeps_the_domain(#[case] input: i32, #[case] expected: bool) {
        let scaled = sign().and_then(|value| value * 100);
        assert_eq!(scaled.is_defined_at(&input), expected);
    }

    #[rstest]
    fn and_then_maps_results() {
        let scaled = sign().and_then(|value| value * 100);
        assert_eq!(scaled.apply(&7), 100);
        assert_eq!(scaled.apply(&-7), -100);
    }

    #[rstest]
    fn and_then_distributes_over_or_else() {
        let scaled = sign().and_then(|value| value.to_string());
        assert_eq!(scaled.branch_count(), 2);
    }

    #[rstest]
    fn and_then_on_empty_stays_empty() {
        let empty: PartialFunction<i32, i32> = PartialFunction::empty();
        assert!(empty.and_then(|value| value + 1).is_empty());
    }

    #[rstest]
    fn after_is_skipped_outside_the_domain() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let scaled = PartialFunction::new(|value: &i32| *value > 0, |value: &i32| *value).and_then(
            move |value| {
                counter.fetch_add(1, Ordering::SeqCst);
                value * 2
            },
        );

        assert_eq!(scaled.apply_or_else(&-1, |_| 0), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(scaled.apply_or_else(&4, |_| 0), 8);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn and_then_partial_chains_two_partial_functions() {
        let chained = sign().and_then_partial(sign_name());
        assert_eq!(chained.apply(&42), "elem is 1");
        assert_eq!(chained.apply(&-42), "elem is -1");
        assert!(!chained.is_defined_at(&0));
    }

    #[rstest]
    fn and_then_partial_domain_is_the_first_stage() {
        let only_one = PartialFunction::new(|value: &i32| *value == 1, |_| "one");
        let chained = sign().and_then_partial(only_one);
        assert!(chained.is_defined_at(&-3));
        assert!(!chained.is_defined_at(&0));
        assert_eq!(chained.apply_or_else(&0, |_| "fallback"), "fallback");
    }

    #[rstest]
    fn second_stage_miss_panics_with_the_intermediate_value() {
        let only_one = PartialFunction::new(|value: &i32| *value == 1, |_| "one");
        let chained = sign().and_then_partial(only_one);
        let middle: i32 = panic_input(|| {
            chained.apply_or_else(&-3, |_| "fallback");
        });
        assert_eq!(middle, -1);
    }

    #[rstest]
    fn and_then_partial_with_empty_second_stage_keeps_the_domain() {
        let chained = sign().and_then_partial(PartialFunction::<i32, i32>::empty());
        assert!(chained.is_defined_at(&5));
        let middle = panic_input::<i32>(|| {
            chained.apply(&5);
        });
        assert_eq!(middle, 1);
    }

    #[rstest]
    fn is_defined_at_does_not_run_the_first_mapper() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let first = PartialFunction::new(
            |value: &i32| *value > 0,
            move |value: &i32| {
                counter.fetch_add(1, Ordering::SeqCst);
                *value
            },
        );
        let chained = first.and_then_partial(sign_name());

        assert!(chained.is_defined_at(&7));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn compose_runs_before_first() {
        let composed = sign_name().compose(sign());
        assert_eq!(composed.apply(&42), "elem is 1");
        assert_eq!(composed.apply(&-42), "elem is -1");
    }

    #[rstest]
    #[case(3)]
    #[case(4)]
    fn compose_is_gated_by_the_inner_domain_only(#[case] input: i32) {
        let one = PartialFunction::new(|value: &i32| *value == 1, |_| "one");
        let parity = PartialFunction::new(|_: &i32| true, |value: &i32| value % 2);
        assert!(one.compose(parity).is_defined_at(&input));
    }

    #[rstest]
    fn compose_raises_when_the_outer_stage_misses() {
        let one = PartialFunction::new(|value: &i32| *value == 1, |_| "one");
        let parity = PartialFunction::new(|_: &i32| true, |value: &i32| value % 2);
        let composed = one.compose(parity);
        let middle = panic_input::<i32>(|| {
            composed.apply_or_else(&4, |_| "zero");
        });
        assert_eq!(middle, 0);
    }

    #[rstest]
    fn and_then_of_and_and_then_from_keep_the_first_domain() {
        let scaled = PartialFunction::new(|value: &i32| *value > 0, |value: &i32| *value)
            .and_then_of(|value| *value > 5, |value| value * 10);
        assert!(scaled.is_defined_at(&3));
        assert!(!scaled.is_defined_at(&-3));
        assert_eq!(scaled.apply(&6), 60);
        let middle = panic_input::<i32>(|| {
            scaled.apply(&3);
        });
        assert_eq!(middle, 3);

        let positive = sign().and_then_from(|value: &i32| (*value > 0).then_some("up"));
        assert_eq!(positive.apply(&3), "up");
        assert!(positive.is_defined_at(&-3));
        let middle = panic_input::<i32>(|| {
            positive.apply(&-3);
        });
        assert_eq!(middle, -1);
    }

    #[rstest]
    fn compose_fn_applies_a_total_function_first() {
        let composed = sign().compose_fn(|text: &&str| i32::try_from(text.len()).unwrap() - 2);
        assert_eq!(composed.apply(&"abcd"), 1);
        assert_eq!(composed.apply(&"a"), -1);
        assert!(composed.is_defined_at(&"ab"));
        let middle = panic_input::<i32>(|| {
            composed.apply(&"ab");
        });
        assert_eq!(middle, 0);
    }
}
