//! # glossy_atoms
//!
//! The atomic literal grammar of a scientific-computing input language, and a
//! lossless JSON convention for complex numbers.
//!
//! ## What is recognized?
//!
//! | Literal | Examples | Value |
//! |---------|----------|-------|
//! | Boolean | `yes`, `OFF`, `True`, `n` | [`Value::Bool`] |
//! | Integer | `42`, `-7`, `+100000000000000000000` | [`Value::Integer`] / [`Value::BigInt`] |
//! | Float | `12.`, `1.5e-3`, `-2E2` | [`Value::Float`] |
//! | Complex | `3*j`, `1 2*i`, `0.5-0.25*J` | [`Value::Complex`] |
//! | String | `"hello world"`, `'x'`, `H2O` | [`Value::Text`] |
//! | Raw data | `$coords ... $end` | [`Value::RawData`] |
//!
//! Each literal has its own recognizer type implementing [`Recognizer`]. The
//! recognizers are building blocks: a document grammar embeds them (for example
//! as the value side of a `key = value` rule) and composes them with
//! [`Recognizer::or`], [`Recognizer::then`] and [`Recognizer::map`].
//!
//! ## Quick Start
//!
//! ```rust
//! use glossy_atoms::{parse_literal, parse_numeric, Complex, Value};
//!
//! assert_eq!(parse_literal("on").unwrap(), Value::Bool(true));
//! assert_eq!(parse_numeric("12").unwrap(), Value::Integer(12));
//! assert_eq!(parse_numeric("3 -4*j").unwrap(), Value::Complex(Complex::new(3.0, -4.0)));
//! ```
//!
//! ### Composing recognizers
//!
//! ```rust
//! use glossy_atoms::{IntegerRecognizer, Recognizer, StringRecognizer, Value};
//!
//! // A "name count" pair such as `water 3`
//! let entry = StringRecognizer::new().then(IntegerRecognizer);
//! let (name, count) = entry.parse_all("water 3").unwrap();
//! assert_eq!(name, "water");
//! assert_eq!(count, Value::Integer(3));
//!
//! // Integer, or any word
//! let int_or_word = IntegerRecognizer.or(StringRecognizer::new().map(Value::Text));
//! assert_eq!(int_or_word.parse_all("auto").unwrap(), Value::from("auto"));
//! ```
//!
//! ### Complex numbers in JSON
//!
//! ```rust
//! use glossy_atoms::{from_json_str, to_json_string, Complex, Structured};
//!
//! let json = to_json_string(&Complex::new(1.0, 2.0)).unwrap();
//! assert_eq!(json, r#"{"__complex__":[1.0,2.0]}"#);
//! assert_eq!(from_json_str(&json).unwrap(), Structured::Complex(Complex::new(1.0, 2.0)));
//! ```
//!
//! ## Guarantees
//!
//! - Recognizers are pure functions of `(input, position)`; a failed attempt
//!   never consumes input
//! - Only [`Error::NoMatch`] is retried by alternation
//! - Integers never wrap: literals past `i64` become [`Value::BigInt`]
//! - No `unsafe` code
//!
//! See [`syntax`] for the complete literal syntax.

pub mod boolean;
pub mod codec;
pub mod error;
pub mod grammar;
pub mod map;
pub mod number;
pub mod options;
pub mod raw_data;
pub mod recognizer;
pub mod string;
pub mod syntax;
pub mod value;

pub use boolean::{BoolRecognizer, BoolVocabulary};
pub use codec::{decode, encode, from_json_str, to_json_string, Structured, COMPLEX_TAG};
pub use error::{Error, Result};
pub use grammar::Grammar;
pub use map::StructuredMap;
pub use number::{ComplexRecognizer, FloatRecognizer, IntegerRecognizer, NumericRecognizer};
pub use options::GrammarOptions;
pub use raw_data::RawDataRecognizer;
pub use recognizer::{Match, Recognizer};
pub use string::StringRecognizer;
pub use value::{Complex, RawData, Value};

/// Parses a boolean literal.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::parse_bool;
///
/// assert_eq!(parse_bool("YES").unwrap(), true);
/// assert_eq!(parse_bool(" n ").unwrap(), false);
/// ```
///
/// # Errors
///
/// Returns [`Error::NoMatch`] if the input is not exactly one boolean literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_bool(s: &str) -> Result<bool> {
    BoolRecognizer::default().parse_all(s)
}

/// Parses an integer literal into [`Value::Integer`] or [`Value::BigInt`].
///
/// # Errors
///
/// Returns [`Error::NoMatch`] if the input is not exactly one integer literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_int(s: &str) -> Result<Value> {
    IntegerRecognizer.parse_all(s)
}

/// Parses a float literal. Integer-shaped input is accepted.
///
/// # Errors
///
/// Returns [`Error::NoMatch`] if the input is not exactly one float literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_float(s: &str) -> Result<f64> {
    FloatRecognizer::new().parse_all(s)
}

/// Parses a complex literal such as `3*j` or `1.5 -2*i`.
///
/// # Errors
///
/// Returns [`Error::NoMatch`] if the input is not exactly one complex literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_complex(s: &str) -> Result<Complex> {
    ComplexRecognizer.parse_all(s)
}

/// Parses any numeric literal, trying complex, then float, then integer.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{parse_numeric, Value};
///
/// assert_eq!(parse_numeric("12").unwrap(), Value::Integer(12));
/// assert_eq!(parse_numeric("12.5").unwrap(), Value::Float(12.5));
/// ```
///
/// # Errors
///
/// Returns [`Error::NoMatch`] if the input is not exactly one numeric literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_numeric(s: &str) -> Result<Value> {
    NumericRecognizer::new().parse_all(s)
}

/// Parses a quoted string or a bare word.
///
/// # Errors
///
/// Returns [`Error::NoMatch`] if the input is not exactly one string literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(s: &str) -> Result<String> {
    StringRecognizer::new().parse_all(s)
}

/// Parses a `$name ... $end` block.
///
/// # Errors
///
/// Returns [`Error::NoMatch`] without an opening `$name`, and
/// [`Error::UnterminatedBlock`] when `$end` is missing.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_raw_data(s: &str) -> Result<RawData> {
    RawDataRecognizer.parse_all(s)
}

/// Parses any single literal with the default [`Grammar`].
///
/// # Errors
///
/// Returns [`Error::NoMatch`] if no literal matches the whole input, and
/// [`Error::UnterminatedBlock`] for an unclosed raw data block.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_literal(s: &str) -> Result<Value> {
    Grammar::default().parse_all(s)
}
