#![cfg(feature = "control")]
//! Property-based tests for Maybe laws.
//!
//! - **Functor Identity**: `m.map(|x| x) == m`
//! - **Functor Composition**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
//! - **Monad Left Identity**: `some(a).flat_map(f) == f(a)`
//! - **Monad Right Identity**: `m.flat_map(Maybe::some) == m`
//! - **Monad Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - **Absence Propagation**: no mapper runs on `none()`
//! - **Fold Totality**: exactly one branch of `fold` runs
//! - **Option Conversion**: `Maybe::of(o)` and back is `o`

use monads::control::{Either, Maybe};
use proptest::prelude::*;
use std::cell::Cell;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::of)
}

fn half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
}

fn positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::some(n) } else { Maybe::none() }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_functor_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.map(|x| x), maybe);
    }

    #[test]
    fn prop_maybe_functor_composition(maybe in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = maybe.map(function1).map(function2);
        let right = maybe.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::some(value).flat_map(half), half(value));
    }

    #[test]
    fn prop_maybe_monad_right_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.flat_map(Maybe::some), maybe);
    }

    #[test]
    fn prop_maybe_monad_associativity(maybe in maybe_strategy()) {
        let left = maybe.flat_map(half).flat_map(positive);
        let right = maybe.flat_map(|x| half(x).flat_map(positive));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Absence, Fold and Conversion
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_none_never_invokes_mapper(replacement in any::<i32>()) {
        let calls = Cell::new(0);

        let mapped = Maybe::<i32>::none().map(|_| {
            calls.set(calls.get() + 1);
            replacement
        });
        let chained = Maybe::<i32>::none().flat_map(|_| {
            calls.set(calls.get() + 1);
            Maybe::some(replacement)
        });

        prop_assert!(mapped.is_empty());
        prop_assert!(chained.is_empty());
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn prop_maybe_fold_runs_exactly_one_branch(maybe in maybe_strategy()) {
        let calls = Cell::new(0);

        let folded = maybe.fold(
            || {
                calls.set(calls.get() + 1);
                None
            },
            |value| {
                calls.set(calls.get() + 1);
                Some(value)
            },
        );

        prop_assert_eq!(calls.get(), 1);
        prop_assert_eq!(folded, Option::<i32>::from(maybe));
    }

    #[test]
    fn prop_maybe_to_either_matches_presence(maybe in maybe_strategy()) {
        let either: Either<&str, i32> = maybe.to_either(|| "No Value");

        prop_assert_eq!(either.is_right(), maybe.is_some());
        prop_assert_eq!(either.fold(|_| None, Some), Option::<i32>::from(maybe));
    }

    #[test]
    fn prop_maybe_option_conversion(option in any::<Option<i32>>()) {
        let maybe = Maybe::of(option);

        prop_assert_eq!(maybe.is_empty(), option.is_none());
        prop_assert_eq!(Option::<i32>::from(maybe), option);
    }
}
