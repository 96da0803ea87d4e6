//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. It is right-biased:
//!
//! - [`Either::map`] and [`Either::flat_map`] act on `Right` only
//! - [`Either::map_left`] acts on `Left` only
//! - the inactive side always passes through unchanged
//!
//! By convention `Left` carries the failure and `Right` the success, but a
//! `Left` is data, not an error: [`Either::fold`] is how both sides are read.
//!
//! # Examples
//!
//! ```rust
//! use monads::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let message = parse("error")
//!     .flat_map(|_| Either::right("ok".to_string()))
//!     .fold(|l| l, |r| r);
//! assert_eq!(message, "invalid digit found in string");
//! ```

use std::fmt;

use super::error::{MonadError, require};

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` represents failure or the alternate outcome
/// - `Right` represents success
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use monads::control::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// let failure: Either<String, i32> = Either::left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let value: Either<&str, i32> = Either::left("Error Message");
    /// assert!(value.is_left());
    /// ```
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let value: Either<&str, i32> = Either::right(42);
    /// assert!(value.is_right());
    /// ```
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

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
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(mapper(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("B".to_string());
    /// assert_eq!(right.map(|s| s + "B"), Either::Right("BB".to_string()));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(mapper(value)),
        }
    }

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(mapper(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let left: Either<String, i32> = Either::Left("A".to_string());
    /// assert_eq!(left.map_left(|s| s + "B"), Either::Left("AB".to_string()));
    /// ```
    #[inline]
    pub fn map_left<U, F>(self, mapper: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(mapper(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation that may itself produce a `Left`.
    ///
    /// On `Right(r)` returns `mapper(r)` as is. On `Left(l)` the same
    /// `Left(l)` is returned under the new right type and `mapper` is never
    /// called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.flat_map(|_| Either::Right("ok")), Either::Right("ok"));
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(
    ///     left.flat_map(|_| Either::Right("ok")),
    ///     Either::Left("error".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => mapper(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.bimap(|x| x * 2, |s: String| s.len());
    /// assert_eq!(result, Either::Left(84));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_mapper: F, right_mapper: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_mapper(value)),
            Self::Right(value) => Either::Right(right_mapper(value)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying the function matching its side.
    ///
    /// This is the only way to read the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let left: Either<&str, &str> = Either::Left("A");
    /// assert_eq!(left.fold(|l| format!("{l}-"), |r| format!("{r}+")), "A-");
    ///
    /// let right: Either<&str, &str> = Either::Right("A");
    /// assert_eq!(right.fold(|l| format!("{l}-"), |r| format!("{r}+")), "A+");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_mapper: F, right_mapper: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_mapper(value),
            Self::Right(value) => right_mapper(value),
        }
    }

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Checked Operations
    //
    // A slot is only inspected on the side that would call it: an empty slot
    // on the inactive side is never rejected.
    // =========================================================================

    /// [`Either::map`] over a function slot that may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::NullArgument`] when this is `Right` and
    /// `mapper` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Either, MonadError};
    ///
    /// let left: Either<&str, i32> = Either::left("error");
    /// assert_eq!(left.try_map(None::<fn(i32) -> i32>), Ok(Either::Left("error")));
    ///
    /// let right: Either<&str, i32> = Either::right(1);
    /// assert_eq!(
    ///     right.try_map(None::<fn(i32) -> i32>),
    ///     Err(MonadError::NullArgument { argument: "mapper" })
    /// );
    /// ```
    pub fn try_map<U, F>(self, mapper: Option<F>) -> Result<Either<L, U>, MonadError>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Ok(Either::Left(value)),
            Self::Right(value) => {
                let mapper = require(mapper, "Either::try_map", "mapper")?;
                Ok(Either::Right(mapper(value)))
            }
        }
    }

    /// [`Either::map_left`] over a function slot that may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::NullArgument`] when this is `Left` and
    /// `mapper` is `None`.
    pub fn try_map_left<U, F>(self, mapper: Option<F>) -> Result<Either<U, R>, MonadError>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::Left(value) => {
                let mapper = require(mapper, "Either::try_map_left", "mapper")?;
                Ok(Either::Left(mapper(value)))
            }
            Self::Right(value) => Ok(Either::Right(value)),
        }
    }

    /// [`Either::flat_map`] over a function slot that may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::NullArgument`] when this is `Right` and
    /// `mapper` is `None`.
    pub fn try_flat_map<U, F>(self, mapper: Option<F>) -> Result<Either<L, U>, MonadError>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(value) => Ok(Either::Left(value)),
            Self::Right(value) => {
                let mapper = require(mapper, "Either::try_flat_map", "mapper")?;
                Ok(mapper(value))
            }
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}
