//! Unit tests for the Either<L, R> type.
//!
//! Either represents a value that can be one of two types:
//! - `Left(L)`: conventionally the failure channel
//! - `Right(R)`: conventionally the success channel
//!
//! The type is right-biased: `map` and `flat_map` act on `Right` only.

#![cfg(feature = "control")]

use monads::control::{Either, MonadError};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<&str, i32> = Either::left("Error Message");
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<&str, i32> = Either::right(42);
    assert!(value.is_right());
    assert!(!value.is_left());
}

#[rstest]
fn either_constructors_match_variants() {
    assert_eq!(Either::<i32, ()>::left(1), Either::Left(1));
    assert_eq!(Either::<(), i32>::right(1), Either::Right(1));
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn either_fold_left_on_left() {
    let value = Either::<&str, &str>::left("A").fold(|l| format!("{l}-"), |r| format!("{r}+"));
    assert_eq!(value, "A-");
}

#[rstest]
fn either_fold_right_on_right() {
    let value = Either::<&str, &str>::right("A").fold(|l| format!("{l}-"), |r| format!("{r}+"));
    assert_eq!(value, "A+");
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn either_map_left() {
    let a: Either<String, i32> = Either::left("A".to_string());
    let result = a.map_left(|i| i + "B");
    assert!(result.is_left());
    result.fold(|l| assert_eq!(l, "AB"), |_| panic!("Unexpected right"));
}

#[rstest]
fn either_map_right() {
    let a: Either<i32, String> = Either::right("B".to_string());
    let result = a.map(|i| i + "B");
    assert!(result.is_right());
    result.fold(|_| panic!("Unexpected left"), |r| assert_eq!(r, "BB"));
}

#[rstest]
fn either_map_on_left_is_identity_and_lazy() {
    let calls = Cell::new(0);
    let a: Either<&str, i32> = Either::left("error");
    let result = a.map(|v| {
        calls.set(calls.get() + 1);
        v * 2
    });
    assert_eq!(result, Either::left("error"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn either_map_left_on_right_is_identity_and_lazy() {
    let calls = Cell::new(0);
    let a: Either<&str, i32> = Either::right(3);
    let result = a.map_left(|v| {
        calls.set(calls.get() + 1);
        v.len()
    });
    assert_eq!(result, Either::right(3));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn either_map_changes_right_type() {
    let a: Either<&str, i32> = Either::right(3);
    assert_eq!(a.map(|n| n.to_string()), Either::right("3".to_string()));
}

// =============================================================================
// FlatMap
// =============================================================================

#[rstest]
fn either_flat_map_right() {
    let either: Either<&str, i32> = Either::right(42);
    either
        .flat_map(|_| Either::right("ok"))
        .fold(|_| panic!("Unexpected left"), |r| assert_eq!(r, "ok"));
}

#[rstest]
fn either_flat_map_left() {
    let either: Either<&str, i32> = Either::left("error");
    either
        .flat_map(|_| Either::right("ok"))
        .fold(|l| assert_eq!(l, "error"), |_| panic!("Unexpected right"));
}

#[rstest]
fn either_flat_map_left_fold_identity() {
    let either: Either<&str, i32> = Either::left("error");
    let value = either.flat_map(|_| Either::right("ok")).fold(|l| l, |r| r);
    assert_eq!(value, "error");
}

#[rstest]
fn either_flat_map_left_never_calls_mapper() {
    let calls = Cell::new(0);
    let either: Either<&str, i32> = Either::left("error");
    let result: Either<&str, i32> = either.flat_map(|v| {
        calls.set(calls.get() + 1);
        Either::right(v)
    });
    assert_eq!(result, Either::left("error"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn either_flat_map_can_switch_to_left() {
    let either: Either<&str, i32> = Either::right(-1);
    let result = either.flat_map(|v| if v < 0 { Either::left("negative") } else { Either::right(v) });
    assert_eq!(result, Either::left("negative"));
}

// =============================================================================
// Checked Combinators (asymmetric validation)
// =============================================================================

#[rstest]
fn either_try_map_left_path_tolerates_absent_mapper() {
    let either: Either<&str, i32> = Either::left("error");
    assert_eq!(either.try_map(None::<fn(i32) -> i32>), Ok(Either::left("error")));
}

#[rstest]
fn either_try_map_right_path_rejects_absent_mapper() {
    let either: Either<&str, i32> = Either::right(1);
    assert_eq!(
        either.try_map(None::<fn(i32) -> i32>),
        Err(MonadError::NullArgument { argument: "mapper" })
    );
}

#[rstest]
fn either_try_map_left_right_path_tolerates_absent_mapper() {
    let either: Either<&str, i32> = Either::right(1);
    assert_eq!(either.try_map_left(None::<fn(&str) -> usize>), Ok(Either::right(1)));
}

#[rstest]
fn either_try_flat_map_right_path_rejects_absent_mapper() {
    let either: Either<&str, i32> = Either::right(1);
    assert_eq!(
        either.try_flat_map(None::<fn(i32) -> Either<&'static str, i32>>),
        Err(MonadError::NullArgument { argument: "mapper" })
    );
}

#[rstest]
fn either_try_flat_map_applies_present_mapper() {
    let either: Either<&str, i32> = Either::right(1);
    let result = either.try_flat_map(Some(|v: i32| Either::<&str, i32>::right(v + 1)));
    assert_eq!(result, Ok(Either::right(2)));
}

// =============================================================================
// Other Operations
// =============================================================================

#[rstest]
fn either_swap() {
    let either: Either<i32, &str> = Either::left(1);
    assert_eq!(either.swap(), Either::right(1));
}

#[rstest]
fn either_bimap_acts_on_active_side() {
    let either: Either<i32, &str> = Either::right("abc");
    assert_eq!(either.bimap(|l| l + 1, str::len), Either::right(3));
}

#[rstest]
fn either_from_result() {
    let parsed: Either<String, i32> = "7".parse::<i32>().map_err(|e| e.to_string()).into();
    assert_eq!(parsed, Either::right(7));
}
