//! Control structures for absence and branching.
//!
//! This module provides the two closed sum types of the crate:
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: a value that is one of two types, right-biased
//! - [`MonadError`]: the failures reported by the checked (`try_*`) combinators
//!
//! # Examples
//!
//! ## Exiting through fold
//!
//! ```rust
//! use monads::control::Maybe;
//!
//! let greeting = Maybe::some("world")
//!     .map(|name| format!("hello, {name}"))
//!     .fold(|| "nobody here".to_string(), |message| message);
//! assert_eq!(greeting, "hello, world");
//! ```
//!
//! ## From absence to failure
//!
//! ```rust
//! use monads::control::{Either, Maybe};
//!
//! let lookup: Maybe<i32> = Maybe::none();
//! let outcome = lookup
//!     .to_either(|| "No Value")
//!     .fold(|l| l.to_string(), |_| "unexpected".to_string());
//! assert_eq!(outcome, "No Value");
//! ```

mod either;
mod error;
mod maybe;

pub use either::Either;
pub use error::MonadError;
pub use maybe::Maybe;
