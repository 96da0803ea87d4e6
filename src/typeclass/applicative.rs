//! Applicative type class - lifting values and combining contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine two applicative values using a function (`map2`)
//! - Create tuples of applicative values (`product`)
//!
//! Combination is fail-fast: the first `None` or `Left` wins and nothing is
//! accumulated.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(()).map2(v, |_, x| x) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(x).map2(pure(y), f) == pure(f(x, y))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monads::control::Maybe;
//! use monads::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::some(42));
//!
//! let sum = Maybe::some(1).map2(Maybe::some(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::some(3));
//! ```

use super::functor::Functor;

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A type class for types that support lifting values and combining contexts.
///
/// # Examples
///
/// ```rust
/// use monads::control::Either;
/// use monads::typeclass::Applicative;
///
/// let a: Either<String, i32> = Either::right(3);
/// let b: Either<String, i32> = Either::left("missing".to_string());
/// assert_eq!(a.map2(b, |x, y| x + y), Either::left("missing".to_string()));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is empty (or a `Left`), the result is the first such
    /// side and `function` is not called.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    /// use monads::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::some(1).product(Maybe::some("hello")), Maybe::some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::some(function(a, b)),
            _ => Maybe::none(),
        }
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::left(error),
        }
    }
}
