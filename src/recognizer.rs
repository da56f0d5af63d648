//! The [`Recognizer`] trait and its combinators.
//!
//! A recognizer is a pure function of `(input, position)`. On success it
//! returns the value it built and the offset just past the consumed text; on
//! failure it returns an [`Error`]. Positions are passed by value, so a failed
//! attempt can never move the caller's position and the next alternative is
//! retried from the same offset.
//!
//! Recognizers compose with three combinators:
//!
//! - [`Recognizer::or`]: ordered alternation, left first
//! - [`Recognizer::then`]: sequencing, yielding both values
//! - [`Recognizer::map`]: value construction
//!
//! ```rust
//! use glossy_atoms::{IntegerRecognizer, Recognizer, StringRecognizer, Value};
//!
//! let int_or_word = IntegerRecognizer.or(StringRecognizer::new().map(Value::Text));
//!
//! assert_eq!(int_or_word.parse_all("42").unwrap(), Value::Integer(42));
//! assert_eq!(int_or_word.parse_all("water").unwrap(), Value::from("water"));
//! ```

use crate::{Error, Result};
use tracing::trace;

/// A successful recognition: the value and the end offset of the token.
#[derive(Clone, Debug, PartialEq)]
pub struct Match<T> {
    pub value: T,
    pub end: usize,
}

impl<T> Match<T> {
    #[inline]
    pub fn new(value: T, end: usize) -> Self {
        Match { value, end }
    }
}

/// A composable rule that attempts to match a grammar shape at an input position.
pub trait Recognizer {
    type Output;

    /// Name used in `NoMatch` errors.
    fn name(&self) -> &str;

    /// Attempts to recognize a token starting at byte offset `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] when the input does not have the expected shape.
    /// Recognizers for structures with an explicit terminator may return a hard
    /// error (such as [`Error::UnterminatedBlock`]) once the opening has matched.
    fn recognize(&self, input: &str, pos: usize) -> Result<Match<Self::Output>>;

    /// Recognizes the whole input, allowing surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Fails like [`Recognizer::recognize`], and with [`Error::NoMatch`] at the
    /// first unconsumed offset when input remains after the token.
    fn parse_all(&self, input: &str) -> Result<Self::Output> {
        let Match { value, end } = self.recognize(input, 0)?;
        let rest = skip_whitespace(input, end);
        if rest < input.len() {
            return Err(Error::no_match(input, rest, "end of input"));
        }
        Ok(value)
    }

    /// Ordered alternation: tries `self`, and `other` only if `self` fails with a
    /// recoverable error.
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        Self: Sized,
        R: Recognizer<Output = Self::Output>,
    {
        let name = format!("{} or {}", self.name(), other.name());
        Or {
            first: self,
            second: other,
            name,
        }
    }

    /// Sequencing: `self` then `other` starting where `self` ended.
    fn then<R>(self, other: R) -> Then<Self, R>
    where
        Self: Sized,
        R: Recognizer,
    {
        Then {
            first: self,
            second: other,
        }
    }

    /// Transforms the recognized value.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { inner: self, f }
    }
}

impl<R: Recognizer + ?Sized> Recognizer for &R {
    type Output = R::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<Self::Output>> {
        (**self).recognize(input, pos)
    }
}

impl<T> Recognizer for Box<dyn Recognizer<Output = T> + Send + Sync> {
    type Output = T;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<T>> {
        (**self).recognize(input, pos)
    }
}

/// See [`Recognizer::or`].
#[derive(Clone, Debug)]
pub struct Or<A, B> {
    first: A,
    second: B,
    name: String,
}

impl<A, B> Recognizer for Or<A, B>
where
    A: Recognizer,
    B: Recognizer<Output = A::Output>,
{
    type Output = A::Output;

    fn name(&self) -> &str {
        &self.name
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<Self::Output>> {
        match self.first.recognize(input, pos) {
            Err(err) if err.is_recoverable() => {
                trace!(
                    failed = self.first.name(),
                    next = self.second.name(),
                    pos,
                    "alternative did not match"
                );
                self.second
                    .recognize(input, pos)
                    .map_err(|err| match err {
                        Error::NoMatch { .. } => Error::no_match(input, pos, &self.name),
                        hard => hard,
                    })
            }
            other => other,
        }
    }
}

/// See [`Recognizer::then`].
#[derive(Clone, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Recognizer for Then<A, B>
where
    A: Recognizer,
    B: Recognizer,
{
    type Output = (A::Output, B::Output);

    fn name(&self) -> &str {
        self.first.name()
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<Self::Output>> {
        let left = self.first.recognize(input, pos)?;
        let right = self.second.recognize(input, left.end)?;
        Ok(Match::new((left.value, right.value), right.end))
    }
}

/// See [`Recognizer::map`].
#[derive(Clone, Debug)]
pub struct Map<R, F> {
    inner: R,
    f: F,
}

impl<R, F, U> Recognizer for Map<R, F>
where
    R: Recognizer,
    F: Fn(R::Output) -> U,
{
    type Output = U;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<U>> {
        self.inner
            .recognize(input, pos)
            .map(|m| Match::new((self.f)(m.value), m.end))
    }
}

/// Skips spaces, tabs, and line breaks starting at `pos`.
pub(crate) fn skip_whitespace(input: &str, pos: usize) -> usize {
    let bytes = input.as_bytes();
    let mut pos = pos;
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'\r') {
        pos += 1;
    }
    pos
}

/// Advances past ASCII digits starting at `pos`.
pub(crate) fn skip_digits(input: &str, pos: usize) -> usize {
    let bytes = input.as_bytes();
    let mut pos = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// `true` when `pos` is not directly followed by an identifier character.
pub(crate) fn at_word_boundary(input: &str, pos: usize) -> bool {
    match input.as_bytes().get(pos) {
        Some(b) => !(b.is_ascii_alphanumeric() || *b == b'_'),
        None => true,
    }
}
