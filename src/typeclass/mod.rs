//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes that `Maybe` and `Either` are
//! instances of:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining contexts (fail-fast)
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over both sides of a two-parameter type
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing the traits above to be written generically.
//!
//! `Reader` is not an instance: see [`crate::effect`].
//!
//! # Examples
//!
//! ```rust
//! use monads::control::{Either, Maybe};
//! use monads::typeclass::Functor;
//!
//! fn describe<M>(m: M) -> M::WithType<String>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     m.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::some(1)), Maybe::some("#1".to_string()));
//! let right: Either<(), i32> = Either::right(2);
//! assert_eq!(describe(right), Either::right("#2".to_string()));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
