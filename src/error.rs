//! Error types for literal recognition and the complex-number codec.
//!
//! ## Error Categories
//!
//! - **No match**: the input at a position does not have the shape a recognizer
//!   expects. Alternation catches this and tries the next branch.
//! - **Unterminated block**: a `$name` opening was found but `$end` never was.
//!   This is a hard error and is never retried.
//! - **Malformed complex**: a JSON object carries the `__complex__` tag with a
//!   payload that is not a two-element numeric sequence.
//! - **Ambiguous grammar**: the boolean vocabularies overlap. Reported when a
//!   grammar is built, never while parsing.
//!
//! ## Examples
//!
//! ```rust
//! use glossy_atoms::{parse_raw_data, Error};
//!
//! let err = parse_raw_data("$geometry\nH 0.0 0.0 0.0\n").unwrap_err();
//! assert!(matches!(err, Error::UnterminatedBlock { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the recognizers and the codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input at `offset` does not satisfy the recognizer's grammar.
    #[error("Expected {expected} at line {line}, column {col}")]
    NoMatch {
        expected: String,
        offset: usize,
        line: usize,
        col: usize,
    },

    /// A raw data block was opened but never closed with `$end`.
    #[error("Unterminated data block '${name}' opened at line {line}, column {col}\nHelp: close the block with $end")]
    UnterminatedBlock {
        name: String,
        offset: usize,
        line: usize,
        col: usize,
    },

    /// The `__complex__` tag was present with a malformed payload.
    #[error("Malformed complex number: {0}")]
    MalformedComplex(String),

    /// A literal appears in both the truthy and the falsey vocabulary.
    #[error("Ambiguous grammar: '{literal}' is both truthy and falsey")]
    AmbiguousGrammar { literal: String },

    /// JSON text could not be read or written
    #[error("JSON error: {0}")]
    Json(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a no-match error, computing line and column from `offset`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glossy_atoms::Error;
    ///
    /// let err = Error::no_match("a\nbc", 3, "integer");
    /// assert!(err.to_string().contains("line 2, column 2"));
    /// ```
    pub fn no_match(input: &str, offset: usize, expected: &str) -> Self {
        let (line, col) = line_col(input, offset);
        Error::NoMatch {
            expected: expected.to_string(),
            offset,
            line,
            col,
        }
    }

    /// Creates an unterminated block error for the block opened at `offset`.
    pub fn unterminated_block(input: &str, offset: usize, name: &str) -> Self {
        let (line, col) = line_col(input, offset);
        Error::UnterminatedBlock {
            name: name.to_string(),
            offset,
            line,
            col,
        }
    }

    pub fn malformed_complex<T: fmt::Display>(msg: T) -> Self {
        Error::MalformedComplex(msg.to_string())
    }

    pub fn ambiguous_grammar(literal: &str) -> Self {
        Error::AmbiguousGrammar {
            literal: literal.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for errors that alternation may recover from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glossy_atoms::Error;
    ///
    /// assert!(Error::no_match("x", 0, "integer").is_recoverable());
    /// assert!(!Error::unterminated_block("$a", 0, "a").is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Error::NoMatch { .. })
    }

    /// Byte offset of the failure, when the error is tied to a position.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Error::NoMatch { offset, .. } | Error::UnterminatedBlock { offset, .. } => {
                Some(*offset)
            }
            _ => None,
        }
    }
}

/// 1-based line and column (in characters) of a byte offset.
fn line_col(input: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(input.len());
    let before = input.get(..offset).unwrap_or(input);
    let line = before.matches('\n').count() + 1;
    let col = match before.rfind('\n') {
        Some(nl) => before[nl + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, col)
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
