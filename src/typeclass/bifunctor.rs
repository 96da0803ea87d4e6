//! Bifunctor type class - mapping over two type parameters.
//!
//! `Bifunctor` generalizes `Functor` to types with two type parameters.
//! While `Functor` transforms `F<A>` to `F<B>`, `Bifunctor` transforms
//! `F<A, B>` to `F<C, D>`.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! bf.bimap(f, g) == bf.first(f).second(g)
//! ```
//!
//! For the right-biased `Either`, `second` agrees with `Functor::fmap` and
//! `first` agrees with `Either::map_left`.
//!
//! # Examples
//!
//! ```rust
//! use monads::control::Either;
//! use monads::typeclass::Bifunctor;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! assert_eq!(left.first(|x| x * 2), Either::Left(84));
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! assert_eq!(right.second(|s| s.len()), Either::Right(5));
//! ```

/// A type class for types with two type parameters that can have functions
/// mapped over both.
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}

#[cfg(feature = "control")]
impl<L, R> Bifunctor<L, R> for crate::control::Either<L, R> {
    type Target<C, D> = crate::control::Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::Either;
    use rstest::rstest;

    #[rstest]
    fn first_agrees_with_map_left() {
        let left: Either<i32, String> = Either::left(21);
        assert_eq!(left.clone().first(|x| x * 2), left.map_left(|x| x * 2));
    }

    #[rstest]
    fn second_agrees_with_map() {
        let right: Either<i32, String> = Either::right("ab".to_string());
        assert_eq!(right.clone().second(|s| s.len()), right.map(|s| s.len()));
    }

    #[rstest]
    fn bimap_identity() {
        let right: Either<i32, &str> = Either::right("same");
        assert_eq!(Bifunctor::bimap(right, |x| x, |y| y), right);
    }
}
