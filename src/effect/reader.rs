//! Reader Monad - environment reading computation.
//!
//! The Reader monad represents computations that depend on an environment.
//! It is useful for dependency injection, configuration access, and other
//! patterns where computations need read-only access to some shared context.
//!
//! # Overview
//!
//! A `Reader<A, B>` encapsulates a function `A -> B`, where `A` is the
//! environment type and `B` is the result type. Composing readers never
//! fails; only the wrapped functions themselves can fail, and only when the
//! reader is finally applied.
//!
//! What separates `flat_map` from plain function composition is that both
//! stages see the *same* environment: the first stage's result picks the
//! next reader, which is then applied to the original input.
//!
//! # Note on Type Classes
//!
//! Reader provides its own `map`, `flat_map`, `map2`, etc. methods directly
//! on the type, rather than implementing the Functor/Applicative/Monad traits.
//! The shared function requires `'static` bounds that the type class traits
//! don't have.
//!
//! # Laws
//!
//! - Identity: `reader.map(|x| x) == reader`
//! - Composition: `reader.map(f).map(g) == reader.map(|x| g(f(x)))`
//! - Left Identity: `Reader::constant(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Reader::constant) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Sharing
//!
//! The wrapped function is reference counted. With the `arc` feature it
//! lives behind `Arc` and every captured function and value must be
//! `Send + Sync` (see [`Shareable`]), which makes readers usable from
//! several threads at once. Without it `Rc` is used.
//!
//! # Examples
//!
//! ```rust
//! use monads::effect::Reader;
//!
//! let reader: Reader<i32, String> = Reader::unit(|n: i32| n.to_string());
//! let result = reader.flat_map(|s| Reader::unit(move |q: i32| format!("{q}{s}")));
//! assert_eq!(result.apply(42), "4242");
//! ```
//!
//! Dependency injection pattern:
//!
//! ```rust
//! use monads::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! fn get_port() -> Reader<Config, u16> {
//!     Reader::asks(|config: Config| config.port)
//! }
//!
//! fn get_host() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//! }
//!
//! fn get_address() -> Reader<Config, String> {
//!     get_host().map2(get_port(), |host, port| format!("{host}:{port}"))
//! }
//!
//! let config = Config {
//!     port: 8080,
//!     host: "localhost".to_string(),
//! };
//!
//! assert_eq!(get_address().apply(config), "localhost:8080");
//! ```

#![forbid(unsafe_code)]

use std::fmt;

#[cfg(feature = "arc")]
type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
type ReferenceCounter<T> = std::rc::Rc<T>;

/// Values and functions that a [`Reader`] may capture.
///
/// With the `arc` feature this is `Send + Sync`; otherwise every type
/// qualifies.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Values and functions that a [`Reader`] may capture.
///
/// With the `arc` feature this is `Send + Sync`; otherwise every type
/// qualifies.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}

/// The function type stored inside a [`Reader`].
pub trait ReaderFunction<A, B>: Fn(A) -> B + Shareable {}

impl<A, B, F> ReaderFunction<A, B> for F where F: Fn(A) -> B + Shareable + ?Sized {}

/// A monad for computations that read from an environment.
///
/// `Reader<A, B>` represents a computation that, given an environment of type `A`,
/// produces a value of type `B`. The environment is never modified, and it is
/// shared by all composed computations.
///
/// # Type Parameters
///
/// - `A`: The environment type (read-only context)
/// - `B`: The result type
///
/// # Examples
///
/// ```rust
/// use monads::effect::Reader;
///
/// let computation: Reader<i32, i32> = Reader::ask()
///     .flat_map(|environment| Reader::constant(environment * 2));
///
/// assert_eq!(computation.apply(21), 42);
/// ```
pub struct Reader<A, B>
where
    A: 'static,
    B: 'static,
{
    function: ReferenceCounter<dyn ReaderFunction<A, B>>,
}

impl<A, B> Reader<A, B>
where
    A: 'static,
    B: 'static,
{
    /// Wraps a function into a Reader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// let reader: Reader<i32, String> = Reader::unit(|n: i32| n.to_string());
    /// assert_eq!(reader.apply(10), "10");
    /// ```
    pub fn unit<F>(function: F) -> Self
    where
        F: Fn(A) -> B + Shareable + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
        }
    }

    /// Creates a Reader that returns a constant value, ignoring the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// let reader: Reader<i32, &str> = Reader::constant("constant");
    /// assert_eq!(reader.apply(0), "constant");
    /// assert_eq!(reader.apply(100), "constant");
    /// ```
    pub fn constant(value: B) -> Self
    where
        B: Clone + Shareable,
    {
        Self::unit(move |_| value.clone())
    }

    /// Runs the wrapped function on `environment`.
    ///
    /// A Reader can be applied any number of times. Whatever the wrapped
    /// function does on failure (a panic, for instance) propagates as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::unit(|environment| environment + 1);
    /// assert_eq!(reader.apply(41), 42);
    /// assert_eq!(reader.apply(0), 1);
    /// ```
    pub fn apply(&self, environment: A) -> B {
        (self.function)(environment)
    }

    /// Maps a function over the result of this Reader.
    ///
    /// The new Reader applies the wrapped function, then `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// let reader: Reader<i32, String> = Reader::unit(|n: i32| n.to_string());
    /// let mapped = reader.map(|s| s + "A");
    /// assert_eq!(mapped.apply(1), "1A");
    /// ```
    pub fn map<C, F>(self, function: F) -> Reader<A, C>
    where
        F: Fn(B) -> C + Shareable + 'static,
        C: 'static,
    {
        let original_function = self.function;
        Reader::unit(move |environment| function((original_function)(environment)))
    }

    /// Chains this Reader with a function that produces another Reader.
    ///
    /// The produced Reader is applied to the same environment the first
    /// stage received.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// let reader: Reader<i32, String> = Reader::unit(|n: i32| n.to_string());
    /// let chained = reader.flat_map(|_| Reader::unit(|q: i32| format!("AA{q}")));
    /// assert_eq!(chained.apply(42), "AA42");
    /// ```
    pub fn flat_map<C, F>(self, function: F) -> Reader<A, C>
    where
        F: Fn(B) -> Reader<A, C> + Shareable + 'static,
        C: 'static,
        A: Clone,
    {
        let original_function = self.function;
        Reader::unit(move |environment: A| {
            let value = (original_function)(environment.clone());
            function(value).apply(environment)
        })
    }

    /// Alias for [`Reader::flat_map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::unit(|environment| environment);
    /// let chained = reader.bind(|value| Reader::unit(move |environment| value + environment));
    /// assert_eq!(chained.apply(10), 20);
    /// ```
    pub fn bind<C, F>(self, function: F) -> Reader<A, C>
    where
        F: Fn(B) -> Reader<A, C> + Shareable + 'static,
        C: 'static,
        A: Clone,
    {
        self.flat_map(function)
    }

    /// Combines two Readers over the same environment using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// let reader1: Reader<i32, i32> = Reader::unit(|environment| environment);
    /// let reader2: Reader<i32, i32> = Reader::unit(|environment| environment * 2);
    /// let combined = reader1.map2(reader2, |a, b| a + b);
    /// assert_eq!(combined.apply(10), 30);
    /// ```
    pub fn map2<C, D, F>(self, other: Reader<A, C>, function: F) -> Reader<A, D>
    where
        F: Fn(B, C) -> D + Shareable + 'static,
        C: 'static,
        D: 'static,
        A: Clone,
    {
        let self_function = self.function;
        let other_function = other.function;
        Reader::unit(move |environment: A| {
            let b = (self_function)(environment.clone());
            let c = (other_function)(environment);
            function(b, c)
        })
    }

    /// Creates a Reader that projects a value from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// #[derive(Clone)]
    /// struct Config { port: u16 }
    ///
    /// let reader: Reader<Config, u16> = Reader::asks(|config: Config| config.port);
    /// assert_eq!(reader.apply(Config { port: 8080 }), 8080);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(A) -> B + Shareable + 'static,
    {
        Self::unit(projection)
    }

    /// Runs a computation with a modified environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::unit(|environment| environment * 2);
    /// let local_reader = Reader::local(|environment| environment + 10, reader);
    /// assert_eq!(local_reader.apply(5), 30); // (5 + 10) * 2
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(A) -> A + Shareable + 'static,
    {
        let computation_function = computation.function;
        Self::unit(move |environment| (computation_function)(modifier(environment)))
    }
}

impl<A> Reader<A, A>
where
    A: 'static,
{
    /// Creates a Reader that returns the entire environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(reader.apply(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::unit(|environment| environment)
    }
}

impl<A, B> Clone for Reader<A, B>
where
    A: 'static,
    B: 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
        }
    }
}

impl<A, B> fmt::Display for Reader<A, B>
where
    A: 'static,
    B: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Reader>")
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Reader<i32, String>: Send, Sync, Clone);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Reader<i32, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_reader() {
        let reader: Reader<i32, i32> = Reader::unit(|environment| environment * 2);
        assert_eq!(format!("{reader}"), "<Reader>");
    }

    #[rstest]
    fn reader_unit_and_apply() {
        let reader: Reader<i32, String> = Reader::unit(|n: i32| n.to_string());
        assert_eq!(reader.apply(10), "10");
    }

    #[rstest]
    fn reader_flat_map_reuses_environment() {
        let reader: Reader<i32, String> = Reader::unit(|n: i32| n.to_string());
        let result = reader.flat_map(|_| Reader::unit(|q: i32| format!("AA{q}")));
        assert_eq!(result.apply(42), "AA42");
    }

    #[rstest]
    fn reader_local_modifies_environment() {
        let reader: Reader<i32, i32> = Reader::unit(|environment| environment * 2);
        let local_reader = Reader::local(|environment| environment + 10, reader);
        assert_eq!(local_reader.apply(5), 30);
    }

    #[rstest]
    fn reader_clone_shares_function() {
        let reader: Reader<i32, i32> = Reader::unit(|environment| environment * 2);
        let cloned = reader.clone();
        assert_eq!(reader.apply(21), 42);
        assert_eq!(cloned.apply(21), 42);
    }

    #[cfg(not(feature = "arc"))]
    #[rstest]
    fn reader_composition_is_deferred_until_apply() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let reader: Reader<i32, i32> = Reader::unit(move |environment| {
            counter.set(counter.get() + 1);
            environment
        });
        let composed = reader.map(|value| value + 1).map(|value| value * 2);
        assert_eq!(calls.get(), 0);
        assert_eq!(composed.apply(1), 4);
        assert_eq!(calls.get(), 1);
    }
}
