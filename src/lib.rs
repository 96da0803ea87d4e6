//! # monads
//!
//! Three small algebraic data types for writing code without null checks
//! or exceptions for control flow.
//!
//! ## Overview
//!
//! - **Maybe**: a value of type `T` or nothing ([`control::Maybe`])
//! - **Either**: a left (failure) or right (success) value, right-biased
//!   ([`control::Either`])
//! - **Reader**: a deferred computation `A -> B` whose stages share one
//!   environment ([`effect::Reader`])
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` and `Bifunctor`
//!   instances for `Maybe` and `Either`
//!
//! A computation boundary produces a `Maybe` or `Either`; `map`/`flat_map`
//! transform the contained value without testing for absence or failure at
//! every step; `fold` leaves the context with a plain value.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe`, `Either` and `MonadError`
//! - `effect`: `Reader`
//! - `serde`: Serialization for `Maybe` and `Either`
//! - `arc`: Thread-safe `Reader` (`Arc` instead of `Rc`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monads::prelude::*;
//!
//! let result = Maybe::some(42)
//!     .map(|v| v * 42)
//!     .to_either(|| "No Value")
//!     .fold(|l| l.to_string(), |r| r.to_string());
//! assert_eq!(result, "1764");
//!
//! let reader = Reader::unit(|n: i32| n.to_string())
//!     .flat_map(|s| Reader::unit(move |n: i32| format!("{s}/{}", n + 1)));
//! assert_eq!(reader.apply(1), "1/2");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monads::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
