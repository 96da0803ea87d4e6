//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Some(T)` or
//! `None`. Absence is ordinary data: combinators such as [`Maybe::map`] and
//! [`Maybe::flat_map`] skip the missing case, and [`Maybe::fold`] is the
//! sanctioned way to leave the `Maybe` context.
//!
//! # Absence is a type-level fact
//!
//! `Maybe::some` always produces `Some`. Code that holds a possibly missing
//! value as an `Option<T>` goes through [`Maybe::of`] (or `From<Option<T>>`),
//! which normalizes `None` to `Maybe::none()`.
//!
//! # Examples
//!
//! ```rust
//! use monads::control::{Either, Maybe};
//!
//! let port: Maybe<u16> = Maybe::of("8080".parse().ok());
//! let described = port
//!     .map(|port| port + 1)
//!     .fold(|| "no port".to_string(), |port| format!("port {port}"));
//! assert_eq!(described, "port 8081");
//!
//! let missing: Maybe<u16> = Maybe::of(None);
//! let either: Either<&str, u16> = missing.to_either(|| "No Value");
//! assert_eq!(either, Either::Left("No Value"));
//! ```

use std::fmt;

use super::Either;
use super::error::{MonadError, require};

/// An optional value: either `Some(T)` or `None`.
///
/// `None` carries no data, so all `None` values of the same type are equal.
/// Equality, ordering and hashing are structural.
///
/// # Examples
///
/// ```rust
/// use monads::control::Maybe;
///
/// let value = Maybe::some(42).map(|v| v * 42);
/// assert_eq!(value, Maybe::some(1764));
///
/// assert_eq!(Maybe::<i32>::of(None), Maybe::none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// No value.
    None,
    /// Exactly one present value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Returns the empty `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// let value: Maybe<i32> = Maybe::none();
    /// assert!(value.is_empty());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// assert!(!Maybe::some(42).is_empty());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Builds a `Maybe` from a possibly absent value.
    ///
    /// `None` becomes [`Maybe::none`], `Some(v)` becomes [`Maybe::some`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some(1)), Maybe::some(1));
    /// assert_eq!(Maybe::<i32>::of(None), Maybe::none());
    /// ```
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this holds a value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Borrows the contained value, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns the contained value, failing on `None`.
    ///
    /// Kept inside the crate: callers leave the context through
    /// [`Maybe::fold`] instead. The `Option` conversion is built on it, so
    /// an empty value maps to `None` without being logged.
    pub(crate) fn get(self) -> Result<T, MonadError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(MonadError::EmptyValueAccessed),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `mapper` to the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|x| x * 10), Maybe::some(20));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 10), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(mapper(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies a mapper whose result may be absent; an absent result
    /// collapses to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// let parsed = Maybe::some("12").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::some(12));
    ///
    /// let parsed = Maybe::some("x").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::none());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.flat_map(|value| Maybe::of(mapper(value)))
    }

    /// Applies `mapper` to the contained value and returns its result
    /// without re-wrapping. `None` is returned unchanged and `mapper` is
    /// never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).flat_map(halve), Maybe::some(4));
    /// assert_eq!(Maybe::some(7).flat_map(halve), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => mapper(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `fallback`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => fallback(),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Leaves the `Maybe` context: evaluates `if_none` when empty, otherwise
    /// `mapper` on the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).fold(|| 100, |v| v * 100), 4200);
    /// assert_eq!(Maybe::<i32>::none().fold(|| 100, |v| v * 100), 100);
    /// ```
    #[inline]
    pub fn fold<U, N, F>(self, if_none: N, mapper: F) -> U
    where
        N: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => mapper(value),
            Self::None => if_none(),
        }
    }

    /// Returns the contained value, or the one produced by `default`.
    #[inline]
    pub fn get_or_else<N>(self, default: N) -> T
    where
        N: FnOnce() -> T,
    {
        self.fold(default, |value| value)
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Either`: `Some(v)` becomes `Right(v)`, `None`
    /// becomes `Left(left_supplier())`.
    ///
    /// The supplier only runs for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Either, Maybe};
    ///
    /// let present: Either<&str, i32> = Maybe::some(1).to_either(|| "No Value");
    /// assert_eq!(present, Either::Right(1));
    ///
    /// let absent: Either<&str, i32> = Maybe::none().to_either(|| "No Value");
    /// assert_eq!(absent, Either::Left("No Value"));
    /// ```
    #[inline]
    pub fn to_either<L, S>(self, left_supplier: S) -> Either<L, T>
    where
        S: FnOnce() -> L,
    {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left_supplier()),
        }
    }

    // =========================================================================
    // Checked Operations
    //
    // These accept function slots that may be empty and reject an empty slot
    // before looking at the variant.
    // =========================================================================

    /// [`Maybe::map`] over a function slot that may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::NullArgument`] when `mapper` is `None`, for
    /// both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Maybe, MonadError};
    ///
    /// let doubled = Maybe::some(21).try_map(Some(|x: i32| x * 2));
    /// assert_eq!(doubled, Ok(Maybe::some(42)));
    ///
    /// let rejected = Maybe::<i32>::none().try_map(None::<fn(i32) -> i32>);
    /// assert_eq!(rejected, Err(MonadError::NullArgument { argument: "mapper" }));
    /// ```
    pub fn try_map<U, F>(self, mapper: Option<F>) -> Result<Maybe<U>, MonadError>
    where
        F: FnOnce(T) -> U,
    {
        let mapper = require(mapper, "Maybe::try_map", "mapper")?;
        Ok(self.map(mapper))
    }

    /// [`Maybe::flat_map`] over a function slot that may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::NullArgument`] when `mapper` is `None`, for
    /// both variants.
    pub fn try_flat_map<U, F>(self, mapper: Option<F>) -> Result<Maybe<U>, MonadError>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        let mapper = require(mapper, "Maybe::try_flat_map", "mapper")?;
        Ok(self.flat_map(mapper))
    }

    /// [`Maybe::fold`] over function slots that may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::NullArgument`] when either slot is `None`;
    /// `if_none` is checked first.
    pub fn try_fold<U, N, F>(self, if_none: Option<N>, mapper: Option<F>) -> Result<U, MonadError>
    where
        N: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        let if_none = require(if_none, "Maybe::try_fold", "supplier")?;
        let mapper = require(mapper, "Maybe::try_fold", "mapper")?;
        Ok(self.fold(if_none, mapper))
    }

    /// [`Maybe::to_either`] over a supplier slot that may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::NullArgument`] when `left_supplier` is `None`,
    /// for both variants.
    pub fn try_to_either<L, S>(self, left_supplier: Option<S>) -> Result<Either<L, T>, MonadError>
    where
        S: FnOnce() -> L,
    {
        let left_supplier = require(left_supplier, "Maybe::try_to_either", "supplier")?;
        Ok(self.to_either(left_supplier))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.get().ok()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => write!(formatter, "None"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::of)
    }
}
