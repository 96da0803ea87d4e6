//! Error types raised by the `Maybe` and `Either` combinators.
//!
//! Absence (`Maybe::None`) and the alternate branch (`Either::Left`) are
//! ordinary data and never show up here. Only two situations are errors:
//! reading the value out of an empty `Maybe` through the crate-private
//! accessor, and handing a combinator an absent function slot.

use thiserror::Error;

/// Represents the failures that the `try_*` combinators can report.
///
/// Both kinds are detected eagerly, before any user function runs, and are
/// returned to the direct caller unchanged.
///
/// # Examples
///
/// ```rust
/// use monads::control::MonadError;
///
/// let error = MonadError::NullArgument { argument: "mapper" };
/// assert_eq!(format!("{error}"), "null argument: mapper is absent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MonadError {
    /// The value of an empty `Maybe` was requested.
    #[error("empty value accessed: no value present")]
    EmptyValueAccessed,
    /// A required function argument was absent.
    #[error("null argument: {argument} is absent")]
    NullArgument {
        /// The name of the missing argument (`"mapper"`, `"supplier"`, ...).
        argument: &'static str,
    },
}

/// Unwraps a function slot, logging and reporting `NullArgument` when it is empty.
pub(crate) fn require<F>(
    function: Option<F>,
    operation: &'static str,
    argument: &'static str,
) -> Result<F, MonadError> {
    function.ok_or_else(|| {
        log::debug!("{operation} rejected: {argument} is absent");
        MonadError::NullArgument { argument }
    })
}
