//! Numeric literals: integers, floats, complex numbers, and the numeric dispatch.
//!
//! | Literal | Shape | Value |
//! |---------|-------|-------|
//! | Integer | `[+-]?\d+` | `Integer(i64)`, or `BigInt` past the `i64` range |
//! | Float | `[+-]?\d+\.?\d*([eE][+-]?\d+)?` | `f64` |
//! | Complex | one or two floats, then `*i` / `*j` | [`Complex`] |
//!
//! The numeric dispatch tries complex, then float, then integer. Its float
//! branch is strict (a `.` or an exponent is required) so that integer-shaped
//! input such as `12` resolves to an integer.

use crate::recognizer::{skip_digits, skip_whitespace, Map, Match, Or, Recognizer};
use crate::{Complex, Error, Result, Value};
use num_bigint::BigInt;
use std::str::FromStr;

/// Shape of a float-like literal found by [`scan_number`].
#[derive(Clone, Copy, Debug, PartialEq)]
struct NumberShape {
    end: usize,
    /// `true` if a fractional part or an exponent was consumed.
    real: bool,
}

/// Scans `[+-]?\d+\.?\d*([eE][+-]?\d+)?` at `start`.
///
/// An exponent marker that is not followed by digits is left unconsumed.
fn scan_number(input: &str, start: usize) -> Option<NumberShape> {
    let bytes = input.as_bytes();
    let mut pos = start;

    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }

    let digits_end = skip_digits(input, pos);
    if digits_end == pos {
        return None;
    }
    pos = digits_end;

    let mut real = false;
    if bytes.get(pos) == Some(&b'.') {
        real = true;
        pos = skip_digits(input, pos + 1);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(input, exp);
        if exp_end > exp {
            real = true;
            pos = exp_end;
        }
    }

    Some(NumberShape { end: pos, real })
}

/// Recognizes a signed integer literal.
///
/// Literals that overflow `i64` become [`Value::BigInt`] rather than wrapping.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{IntegerRecognizer, Recognizer, Value};
///
/// assert_eq!(IntegerRecognizer.parse_all("+42").unwrap(), Value::Integer(42));
/// assert!(IntegerRecognizer.parse_all("4.2").is_err());
/// assert!(IntegerRecognizer.parse_all("99999999999999999999").unwrap().as_i64().is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntegerRecognizer;

impl Recognizer for IntegerRecognizer {
    type Output = Value;

    fn name(&self) -> &str {
        "integer"
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<Value>> {
        let start = skip_whitespace(input, pos);
        let shape = match scan_number(input, start) {
            Some(shape) if !shape.real => shape,
            _ => return Err(Error::no_match(input, pos, self.name())),
        };

        let text = &input[start..shape.end];
        let digits = text.strip_prefix('+').unwrap_or(text);
        let value = match digits.parse::<i64>() {
            Ok(i) => Value::Integer(i),
            Err(_) => BigInt::from_str(digits)
                .map(Value::BigInt)
                .map_err(|_| Error::no_match(input, pos, self.name()))?,
        };
        Ok(Match::new(value, shape.end))
    }
}

/// Recognizes a decimal floating-point literal.
///
/// The default recognizer also accepts integer-shaped input (`12` is `12.0`).
/// [`FloatRecognizer::strict`] requires a `.` or an exponent.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{FloatRecognizer, Recognizer};
///
/// let float = FloatRecognizer::new();
/// assert_eq!(float.parse_all("12").unwrap(), 12.0);
/// assert_eq!(float.parse_all("12.").unwrap(), 12.0);
/// assert_eq!(float.parse_all("1.5e-3").unwrap(), 0.0015);
/// assert!(float.parse_all(".5").is_err());
/// assert!(FloatRecognizer::strict().parse_all("12").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatRecognizer {
    strict: bool,
}

impl FloatRecognizer {
    #[must_use]
    pub const fn new() -> Self {
        FloatRecognizer { strict: false }
    }

    /// A float recognizer that rejects integer-shaped literals.
    #[must_use]
    pub const fn strict() -> Self {
        FloatRecognizer { strict: true }
    }

    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Recognizer for FloatRecognizer {
    type Output = f64;

    fn name(&self) -> &str {
        "float"
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<f64>> {
        let start = skip_whitespace(input, pos);
        let shape = match scan_number(input, start) {
            Some(shape) if shape.real || !self.strict => shape,
            _ => return Err(Error::no_match(input, pos, self.name())),
        };

        input[start..shape.end]
            .parse::<f64>()
            .map(|f| Match::new(f, shape.end))
            .map_err(|_| Error::no_match(input, pos, self.name()))
    }
}

/// Recognizes a complex literal: one or two numbers followed by `*i` or `*j`.
///
/// One number is the imaginary part; two numbers are the real and imaginary
/// parts. A sign in front of the second number belongs to it, so `3-4*j` and
/// `3 -4*j` are both `3 - 4i`.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{Complex, ComplexRecognizer, Recognizer};
///
/// assert_eq!(ComplexRecognizer.parse_all("3*j").unwrap(), Complex::new(0.0, 3.0));
/// assert_eq!(ComplexRecognizer.parse_all("3 4*J").unwrap(), Complex::new(3.0, 4.0));
/// assert_eq!(ComplexRecognizer.parse_all("3+4*i").unwrap(), Complex::new(3.0, 4.0));
/// assert!(ComplexRecognizer.parse_all("1 2 3*j").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComplexRecognizer;

impl Recognizer for ComplexRecognizer {
    type Output = Complex;

    fn name(&self) -> &str {
        "complex"
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<Complex>> {
        let float = FloatRecognizer::new();
        let mut parts = Vec::with_capacity(2);
        let mut cursor = pos;

        // Greedy: take every adjacent number before looking for the unit.
        while let Ok(m) = float.recognize(input, cursor) {
            parts.push(m.value);
            cursor = m.end;
        }

        let unit = skip_whitespace(input, cursor);
        let has_unit = input
            .get(unit..unit + 2)
            .is_some_and(|s| matches!(s, "*i" | "*I" | "*j" | "*J"));
        if !has_unit {
            return Err(Error::no_match(input, pos, self.name()));
        }

        let value = match parts.as_slice() {
            [im] => Complex::imaginary(*im),
            [re, im] => Complex::new(*re, *im),
            _ => return Err(Error::no_match(input, pos, self.name())),
        };
        Ok(Match::new(value, unit + 2))
    }
}

type NumericChain = Or<
    Or<Map<ComplexRecognizer, fn(Complex) -> Value>, Map<FloatRecognizer, fn(f64) -> Value>>,
    IntegerRecognizer,
>;

/// Recognizes any numeric literal: complex, then float, then integer.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{Complex, NumericRecognizer, Recognizer, Value};
///
/// let numeric = NumericRecognizer::new();
/// assert_eq!(numeric.parse_all("12").unwrap(), Value::Integer(12));
/// assert_eq!(numeric.parse_all("12.0").unwrap(), Value::Float(12.0));
/// assert_eq!(numeric.parse_all("12*j").unwrap(), Value::Complex(Complex::new(0.0, 12.0)));
/// ```
#[derive(Clone, Debug)]
pub struct NumericRecognizer {
    chain: NumericChain,
}

impl NumericRecognizer {
    pub fn new() -> Self {
        let complex: Map<ComplexRecognizer, fn(Complex) -> Value> =
            ComplexRecognizer.map(Value::Complex as fn(Complex) -> Value);
        let float: Map<FloatRecognizer, fn(f64) -> Value> =
            FloatRecognizer::strict().map(Value::Float as fn(f64) -> Value);
        NumericRecognizer {
            chain: complex.or(float).or(IntegerRecognizer),
        }
    }
}

impl Default for NumericRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for NumericRecognizer {
    type Output = Value;

    fn name(&self) -> &str {
        "numeric"
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<Value>> {
        self.chain.recognize(input, pos).map_err(|err| match err {
            Error::NoMatch { .. } => Error::no_match(input, pos, self.name()),
            hard => hard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_number_shapes() {
        let shape = |s: &str| scan_number(s, 0).map(|n| (n.end, n.real));
        assert_eq!(shape("12"), Some((2, false)));
        assert_eq!(shape("-12."), Some((4, true)));
        assert_eq!(shape("12.5"), Some((4, true)));
        assert_eq!(shape("1e10"), Some((4, true)));
        assert_eq!(shape("1.5E-3"), Some((6, true)));
        assert_eq!(shape("3e"), Some((1, false)));
        assert_eq!(shape("3e+"), Some((1, false)));
        assert_eq!(shape(".5"), None);
        assert_eq!(shape("-"), None);
        assert_eq!(shape("abc"), None);
    }

    #[test]
    fn test_integer() {
        assert_eq!(IntegerRecognizer.parse_all("0").unwrap(), Value::Integer(0));
        assert_eq!(IntegerRecognizer.parse_all("-17").unwrap(), Value::Integer(-17));
        assert_eq!(IntegerRecognizer.parse_all(" +8 ").unwrap(), Value::Integer(8));
        assert!(IntegerRecognizer.parse_all("1e3").is_err());
        assert!(IntegerRecognizer.parse_all("x").is_err());
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(
            IntegerRecognizer.parse_all(&i64::MAX.to_string()).unwrap(),
            Value::Integer(i64::MAX)
        );
        assert_eq!(
            IntegerRecognizer.parse_all(&i64::MIN.to_string()).unwrap(),
            Value::Integer(i64::MIN)
        );
    }

    #[test]
    fn test_integer_overflow_promotes() {
        let past_max = "9223372036854775808";
        let expected: BigInt = past_max.parse().unwrap();
        assert_eq!(
            IntegerRecognizer.parse_all(past_max).unwrap(),
            Value::BigInt(expected)
        );

        let past_min = "-9223372036854775809";
        let expected: BigInt = past_min.parse().unwrap();
        assert_eq!(
            IntegerRecognizer.parse_all(past_min).unwrap(),
            Value::BigInt(expected)
        );

        let expected: BigInt = "100000000000000000000".parse().unwrap();
        assert_eq!(
            IntegerRecognizer.parse_all("+100000000000000000000").unwrap(),
            Value::BigInt(expected)
        );
    }

    #[test]
    fn test_float() {
        let float = FloatRecognizer::new();
        assert_eq!(float.parse_all("12.5").unwrap(), 12.5);
        assert_eq!(float.parse_all("-2e2").unwrap(), -200.0);
        assert_eq!(float.parse_all("+0.25").unwrap(), 0.25);
        assert!(float.parse_all(".5").is_err());
        assert!(float.parse_all("3e").is_err());
        assert_eq!(float.recognize("3e", 0).unwrap(), Match::new(3.0, 1));
    }

    #[test]
    fn test_float_strict() {
        let strict = FloatRecognizer::strict();
        assert!(strict.is_strict());
        assert!(strict.recognize("12", 0).is_err());
        assert_eq!(strict.parse_all("12.").unwrap(), 12.0);
        assert_eq!(strict.parse_all("12e1").unwrap(), 120.0);
    }

    #[test]
    fn test_complex_single_part() {
        assert_eq!(
            ComplexRecognizer.parse_all("3*j").unwrap(),
            Complex::new(0.0, 3.0)
        );
        assert_eq!(
            ComplexRecognizer.parse_all("-2.5e1*I").unwrap(),
            Complex::new(0.0, -25.0)
        );
    }

    #[test]
    fn test_complex_two_parts() {
        assert_eq!(
            ComplexRecognizer.parse_all("3 4*j").unwrap(),
            Complex::new(3.0, 4.0)
        );
        assert_eq!(
            ComplexRecognizer.parse_all("3 -4*j").unwrap(),
            Complex::new(3.0, -4.0)
        );
        assert_eq!(
            ComplexRecognizer.parse_all("3-4*j").unwrap(),
            Complex::new(3.0, -4.0)
        );
        assert_eq!(
            ComplexRecognizer.parse_all("1.5 +2 *j").unwrap(),
            Complex::new(1.5, 2.0)
        );
    }

    #[test]
    fn test_complex_unit_spellings() {
        let expected = Complex::new(0.0, 3.0);
        for literal in ["3*i", "3*I", "3*j", "3*J"] {
            assert_eq!(ComplexRecognizer.parse_all(literal).unwrap(), expected);
        }
    }

    #[test]
    fn test_complex_failures() {
        assert!(ComplexRecognizer.recognize("*j", 0).is_err());
        assert!(ComplexRecognizer.recognize("3", 0).is_err());
        assert!(ComplexRecognizer.recognize("3 4", 0).is_err());
        assert!(ComplexRecognizer.recognize("3j", 0).is_err());
        assert!(ComplexRecognizer.recognize("1 2 3*j", 0).is_err());
        assert!(ComplexRecognizer.recognize("3*k", 0).is_err());
    }

    #[test]
    fn test_numeric_priority() {
        let numeric = NumericRecognizer::new();
        assert_eq!(numeric.parse_all("12").unwrap(), Value::Integer(12));
        assert_eq!(numeric.parse_all("-12").unwrap(), Value::Integer(-12));
        assert_eq!(numeric.parse_all("12.").unwrap(), Value::Float(12.0));
        assert_eq!(numeric.parse_all("1e2").unwrap(), Value::Float(100.0));
        assert_eq!(
            numeric.parse_all("3 4*j").unwrap(),
            Value::Complex(Complex::new(3.0, 4.0))
        );
    }

    #[test]
    fn test_numeric_no_match_is_non_consuming() {
        let numeric = NumericRecognizer::new();
        match numeric.recognize("  abc", 0).unwrap_err() {
            Error::NoMatch {
                expected, offset, ..
            } => {
                assert_eq!(expected, "numeric");
                assert_eq!(offset, 0);
            }
            other => panic!("Expected NoMatch, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_leaves_trailing_text() {
        let numeric = NumericRecognizer::new();
        let m = numeric.recognize("3 4 H", 0).unwrap();
        assert_eq!(m, Match::new(Value::Integer(3), 1));
    }
}
