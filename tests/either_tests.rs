#![cfg(feature = "control")]
//! Integration tests for `Either<L, R>`.
//!
//! `Either` is the container `apply_either` evaluates into: `Right` carries the
//! result and `Left` the input that was outside the domain.

use partiality::control::Either;
use rstest::rstest;

// =============================================================================
// Type Checking and Extraction
// =============================================================================

#[rstest]
#[case(Either::Left(1), true, Some(1), None)]
#[case(Either::Right("r"), false, None, Some("r"))]
fn sides_and_extraction(
    #[case] either: Either<i32, &str>,
    #[case] is_left: bool,
    #[case] left: Option<i32>,
    #[case] right: Option<&str>,
) {
    assert_eq!(either.is_left(), is_left);
    assert_eq!(either.is_right(), !is_left);
    assert_eq!(either.left(), left);
    assert_eq!(either.right(), right);
    assert_eq!(either.into_option(), right);
}

#[rstest]
fn as_ref_borrows_without_consuming() {
    let either: Either<String, String> = Either::Right(String::from("kept"));
    assert_eq!(either.as_ref().map(String::len), Either::Right(4));
    assert_eq!(either, Either::Right(String::from("kept")));
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_touches_only_the_right_side() {
    let right: Either<&str, i32> = Either::Right(2);
    let left: Either<&str, i32> = Either::Left("l");
    assert_eq!(right.map(|value| value + 1), Either::Right(3));
    assert_eq!(left.map(|value| value + 1), Either::Left("l"));
}

#[rstest]
fn map_left_touches_only_the_left_side() {
    let left: Either<&str, i32> = Either::Left("left");
    let right: Either<&str, i32> = Either::Right(2);
    assert_eq!(left.map_left(str::len), Either::Left(4));
    assert_eq!(right.map_left(str::len), Either::Right(2));
}

#[rstest]
fn flat_map_short_circuits_on_left() {
    let checked_half = |value: i32| -> Either<String, i32> {
        if value % 2 == 0 {
            Either::Right(value / 2)
        } else {
            Either::Left(format!("{value} is odd"))
        }
    };

    assert_eq!(Either::Right(12).flat_map(checked_half).flat_map(checked_half), Either::Right(3));
    assert_eq!(
        Either::Right(6).flat_map(checked_half).flat_map(checked_half),
        Either::Left(String::from("3 is odd"))
    );
}

#[rstest]
fn fold_eliminates_either_side() {
    let describe = |either: Either<i32, &str>| {
        either.fold(|number| format!("number {number}"), |text| format!("text {text}"))
    };
    assert_eq!(describe(Either::Left(3)), "number 3");
    assert_eq!(describe(Either::Right("x")), "text x");
}

#[rstest]
#[case(Either::Right(4), Either::Right(4))]
#[case(Either::Right(-4), Either::Left("negative"))]
#[case(Either::Left("kept"), Either::Left("kept"))]
fn filter_or_else_turns_rejected_right_into_left(
    #[case] either: Either<&str, i32>,
    #[case] expected: Either<&str, i32>,
) {
    assert_eq!(either.filter_or_else(|value| *value >= 0, || "negative"), expected);
}

#[rstest]
fn joins_flatten_nested_eithers() {
    let left_nested: Either<Either<&str, i32>, i32> = Either::Left(Either::Left("inner"));
    assert_eq!(left_nested.join_left(), Either::Left("inner"));

    let right_nested: Either<&str, Either<&str, i32>> = Either::Right(Either::Right(5));
    assert_eq!(right_nested.join_right(), Either::Right(5));
}

// =============================================================================
// Conversion
// =============================================================================

#[rstest]
fn result_round_trip() {
    let parsed: Either<String, i32> = "17"
        .parse::<i32>()
        .map_err(|error| error.to_string())
        .into();
    assert!(parsed.contains(&17));
    assert_eq!(parsed.clone().into_result(), Ok(17));

    let failed: Either<String, i32> = "x".parse::<i32>().map_err(|error| error.to_string()).into();
    assert!(failed.is_left());
    assert!(Result::<i32, String>::from(failed).is_err());
}

#[cfg(feature = "partial")]
#[rstest]
fn apply_either_splits_inputs_by_domain() {
    use partiality::partial;

    let half = partial::of(|value: &i32| value % 2 == 0, |value: &i32| value / 2);
    let (misses, hits): (Vec<_>, Vec<_>) = (1..=6)
        .map(|value| half.apply_either(&value))
        .partition(Either::is_left);

    assert_eq!(misses, vec![Either::Left(1), Either::Left(3), Either::Left(5)]);
    assert_eq!(hits, vec![Either::Right(1), Either::Right(2), Either::Right(3)]);
}
