//! Fallback chaining: `or_else` and its terminal forms.
//!
//! `f.or_else(g)` is defined where either operand is defined and prefers `f`.
//! Chains are kept right-leaning: appending to an existing chain extends its
//! branch sequence instead of wrapping it in another node, so a chain of `n`
//! branches is one node with `n` entries. Evaluation walks that sequence with
//! a loop, trying each branch once with the check fallback, which keeps the
//! cost proportional to the number of branches tried and the stack depth
//! constant regardless of chain length.
//!
//! # Laws
//!
//! - **Left identity**: `empty().or_else(f)` behaves as `f`
//! - **Right identity**: `f.or_else(empty())` behaves as `f`
//! - **Associativity**: `f.or_else(g).or_else(h)` behaves as `f.or_else(g.or_else(h))`

use std::sync::Arc;

use smallvec::smallvec;

use super::function::{Branches, PartialFunction, Variant};
use super::lift::Unlift;
use super::sentinel::{Probe, check_fallback};
use crate::compose::{always, constant};
use crate::typeclass::{Monoid, Semigroup};

/// Tries each branch in order and returns the first defined result.
pub(crate) fn probe_branches<A, B>(
    branches: &[PartialFunction<A, B>],
    input: &A,
    fallback: &dyn Fn(&A) -> Probe<B>,
) -> Probe<B> {
    for branch in branches {
        let probe = branch.apply_or_probe(input, &check_fallback::<A, B>);
        if !probe.fallback_occurred() {
            return probe;
        }
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(
        branches = branches.len(),
        "every or_else branch missed, using fallback"
    );
    fallback(input)
}

impl<A, B> PartialFunction<A, B> {
    /// Composes this function with a fallback that is used where this
    /// function is not defined.
    ///
    /// The result is defined on the union of both domains. Where both are
    /// defined, this function wins.
    ///
    /// Chaining onto an existing chain appends a branch in amortized constant
    /// time; neither operand is observably modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let small = partial::of(|value: &i32| *value < 10, |_| "small");
    /// let large = partial::of(|value: &i32| *value >= 100, |_| "large");
    /// let sized = small.or_else(large);
    ///
    /// assert_eq!(sized.apply(&3), "small");
    /// assert_eq!(sized.apply(&500), "large");
    /// assert!(!sized.is_defined_at(&50));
    /// ```
    #[must_use]
    pub fn or_else(self, that: Self) -> Self {
        let variant = match (self.variant, that.variant) {
            (Variant::Empty, variant) | (variant, Variant::Empty) => variant,
            (Variant::OrElse(mut branches), Variant::OrElse(tail)) => {
                Arc::make_mut(&mut branches).extend(Arc::unwrap_or_clone(tail));
                Variant::OrElse(branches)
            }
            (Variant::OrElse(mut branches), variant) => {
                Arc::make_mut(&mut branches).push(Self::from_variant(variant));
                Variant::OrElse(branches)
            }
            (variant, Variant::OrElse(tail)) => {
                let tail = Arc::unwrap_or_clone(tail);
                let mut branches = Branches::with_capacity(tail.len() + 1);
                branches.push(Self::from_variant(variant));
                branches.extend(tail);
                Variant::OrElse(Arc::new(branches))
            }
            (head, last) => Variant::OrElse(Arc::new(smallvec![
                Self::from_variant(head),
                Self::from_variant(last),
            ])),
        };
        Self::from_variant(variant)
    }

    /// Closes a chain of cases.
    ///
    /// The result behaves exactly like `self`; inputs that no case accepts
    /// still make [`apply`](Self::apply) panic with a domain error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let sign = partial::of(|value: &i32| *value > 0, |_| 1)
    ///     .or_else_of(|value| *value < 0, |_| -1)
    ///     .end();
    /// assert!(sign.try_apply(&0).is_err());
    /// ```
    #[must_use]
    pub fn end(self) -> Self {
        self.or_else(Self::empty())
    }
}

impl<A: 'static, B: 'static> PartialFunction<A, B> {
    /// Appends a branch built from a guard and a mapper.
    ///
    /// Equivalent to `self.or_else(partial::of(guard, mapper))`.
    #[must_use]
    pub fn or_else_of<P, F>(self, guard: P, mapper: F) -> Self
    where
        P: Fn(&A) -> bool + Send + Sync + 'static,
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        self.or_else(Self::new(guard, mapper))
    }

    /// Appends a branch built from an `Option`-returning function.
    ///
    /// Equivalent to `self.or_else(partial::unlift(function))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let parse = partial::from(|text: &String| text.parse::<i64>().ok())
    ///     .or_else_from(|text: &String| text.strip_prefix("0x").and_then(|hex| i64::from_str_radix(hex, 16).ok()));
    ///
    /// assert_eq!(parse.apply(&"42".to_string()), 42);
    /// assert_eq!(parse.apply(&"0x2a".to_string()), 42);
    /// assert!(!parse.is_defined_at(&"forty-two".to_string()));
    /// ```
    #[must_use]
    pub fn or_else_from<U>(self, function: U) -> Self
    where
        U: Unlift<A, B>,
    {
        self.or_else(function.unlift())
    }

    /// Appends a final branch that accepts every input and returns `value`.
    ///
    /// The result never reports a domain error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let label = partial::of(|value: &i32| *value < 3, |_| "lt3")
    ///     .or_else_of(|value| *value > 3, |_| "gt3")
    ///     .or_end_with("eq3");
    ///
    /// assert_eq!(label.apply(&3), "eq3");
    /// ```
    #[must_use]
    pub fn or_end_with(self, value: B) -> Self
    where
        B: Clone + Send + Sync,
    {
        self.or_else(Self::new(always, constant(value)))
    }

    /// Appends a final branch that accepts every input and returns the value
    /// produced by `supplier`.
    ///
    /// `supplier` runs only when no earlier branch accepts the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use partiality::partial;
    ///
    /// let names = partial::of(|value: &u8| *value == 0, |_| String::from("zero"))
    ///     .or_default(|| String::from("other"));
    ///
    /// assert_eq!(names.apply(&0), "zero");
    /// assert_eq!(names.apply(&9), "other");
    /// ```
    #[must_use]
    pub fn or_default<S>(self, supplier: S) -> Self
    where
        S: Fn() -> B + Send + Sync + 'static,
    {
        self.or_else(Self::new(always, move |_: &A| supplier()))
    }
}

impl<A, B> Semigroup for PartialFunction<A, B> {
    fn combine(self, other: Self) -> Self {
        self.or_else(other)
    }
}

impl<A, B> Monoid for PartialFunction<A, B> {
    fn empty() -> Self {
        Self::from_variant(Variant::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn equals(expected: i32) -> PartialFunction<i32, i32> {
        PartialFunction::new(move |value: &i32| *value == expected, move |_| expected * 10)
    }

    #[rstest]
    fn or_else_prefers_the_first_branch() {
        let first = PartialFunction::new(|value: &i32| *value > 0, |_| "first");
        let second = PartialFunction::new(|value: &i32| *value > -10, |_| "second");
        let combined = first.or_else(second);

        assert_eq!(combined.apply(&5), "first");
        assert_eq!(combined.apply(&-5), "second");
        assert!(!combined.is_defined_at(&-50));
    }

    #[rstest]
    fn repeated_or_else_builds_one_flat_chain() {
        let chain = equals(1).or_else(equals(2)).or_else(equals(3)).or_else(equals(4));
        assert_eq!(chain.branch_count(), 4);
        assert!(matches!(chain.variant, Variant::OrElse(_)));
    }

    #[rstest]
    fn or_else_splices_a_chain_operand() {
        let left = equals(1).or_else(equals(2));
        let right = equals(3).or_else(equals(4)).or_else(equals(5));
        let chain = left.or_else(right);

        assert_eq!(chain.branch_count(), 5);
        assert_eq!(chain.apply(&5), 50);
    }

    #[rstest]
    fn or_else_with_single_on_left_and_chain_on_right() {
        let chain = equals(1).or_else(equals(2).or_else(equals(3)));
        assert_eq!(chain.branch_count(), 3);
        assert_eq!(chain.apply(&1), 10);
        assert_eq!(chain.apply(&3), 30);
    }

    #[rstest]
    fn appending_to_a_shared_chain_leaves_the_original_untouched() {
        let base = equals(1).or_else(equals(2));
        let extended = base.clone().or_else(equals(3));

        assert_eq!(base.branch_count(), 2);
        assert!(!base.is_defined_at(&3));
        assert_eq!(extended.branch_count(), 3);
        assert_eq!(extended.apply(&3), 30);
    }

    #[rstest]
    fn empty_is_an_identity_on_both_sides() {
        let function = equals(7);
        assert!(PartialFunction::empty().or_else(function.clone()).ptr_eq(&function));
        assert!(function.clone().or_else(PartialFunction::empty()).ptr_eq(&function));
        assert!(function.clone().end().ptr_eq(&function));
    }

    #[rstest]
    #[case(1, "lt3")]
    #[case(2, "lt3")]
    #[case(3, "eq3")]
    #[case(4, "gt3")]
    #[case(5, "gt3")]
    fn or_end_with_covers_the_remaining_inputs(#[case] input: i32, #[case] expected: &str) {
        let label = PartialFunction::new(|value: &i32| *value < 3, |_| "lt3")
            .or_else_of(|value| *value > 3, |_| "gt3")
            .or_end_with("eq3");
        assert_eq!(label.apply(&input), expected);
    }

    #[rstest]
    fn or_default_supplier_runs_only_on_miss() {
        let supplied = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&supplied);
        let function = equals(1).or_default(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            -1
        });

        assert_eq!(function.apply(&1), 10);
        assert_eq!(supplied.load(Ordering::SeqCst), 0);
        assert_eq!(function.apply(&2), -1);
        assert_eq!(supplied.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn each_branch_guard_runs_once_per_application() {
        let guard_calls = Arc::new(AtomicUsize::new(0));
        let chain = (0..8).fold(PartialFunction::empty(), |chain, expected| {
            let counter = Arc::clone(&guard_calls);
            chain.or_else_of(
                move |value: &i32| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    *value == expected
                },
                |value| *value,
            )
        });

        assert_eq!(chain.apply_or_else(&7, |_| -1), 7);
        assert_eq!(guard_calls.load(Ordering::SeqCst), 8);

        guard_calls.store(0, Ordering::SeqCst);
        assert_eq!(chain.apply_or_else(&100, |_| -1), -1);
        assert_eq!(guard_calls.load(Ordering::SeqCst), 8);
    }

    #[rstest]
    fn semigroup_combine_is_or_else() {
        let combined = equals(1).combine(equals(2));
        assert_eq!(combined.apply(&2), 20);
        let all = PartialFunction::combine_all(vec![equals(1), equals(2), equals(3)]);
        assert_eq!(all.branch_count(), 3);
    }
}
