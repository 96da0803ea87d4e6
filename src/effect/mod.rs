//! Environment-passing computations.
//!
//! This module provides [`Reader`], a deferred computation `A -> B` that
//! is built up compositionally before its input is supplied.
//!
//! ```rust
//! use monads::effect::Reader;
//!
//! let greeting = Reader::unit(|name: String| name.len())
//!     .flat_map(|length| Reader::unit(move |name: String| format!("{name} ({length})")));
//! assert_eq!(greeting.apply("reader".to_string()), "reader (6)");
//! ```

mod reader;

pub use reader::{Reader, ReaderFunction, Shareable};
