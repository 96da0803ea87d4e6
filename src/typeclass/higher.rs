//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Either<L, _>` as type
//! constructors directly. [`TypeConstructor`] uses a GAT to name "the same
//! constructor applied to another type", which is what the `Functor`,
//! `Applicative` and `Monad` traits need to describe their results.
//!
//! # Example
//!
//! ```rust
//! use monads::control::Maybe;
//! use monads::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Maybe<String> = transform_type(Maybe::some(42));
//! assert_eq!(none_string, Maybe::none());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is `F` itself.
///
/// For the right-biased `Either<L, R>`, `Inner` is `R` and the left type is
/// carried along unchanged.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(feature = "control")]
impl<A> TypeConstructor for crate::control::Maybe<A> {
    type Inner = A;
    type WithType<B> = crate::control::Maybe<B>;
}

#[cfg(feature = "control")]
impl<L, R> TypeConstructor for crate::control::Either<L, R> {
    type Inner = R;
    type WithType<B> = crate::control::Either<L, B>;
}
