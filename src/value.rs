//! Typed values produced by the literal recognizers.
//!
//! ## Core Types
//!
//! - [`Value`]: any recognized literal (bool, integer, big integer, float,
//!   complex, text, raw data)
//! - [`Complex`]: a pair of `f64` components, always fully resolved
//! - [`RawData`]: the name and unparsed body of a `$name ... $end` block
//!
//! ## Serialization
//!
//! `Value` implements `Serialize` so values can be written to any serde format.
//! Complex numbers use the tagged form `{"__complex__": [re, im]}` described in
//! [`crate::codec`]; big integers are written as decimal strings and raw data
//! blocks as `[name, body]`.
//!
//! ```rust
//! use glossy_atoms::{Complex, Value};
//!
//! let value = Value::from(Complex::new(1.0, -2.0));
//! let json = serde_json::to_string(&value).unwrap();
//! assert_eq!(json, r#"{"__complex__":[1.0,-2.0]}"#);
//! ```

use crate::codec::COMPLEX_TAG;
use num_bigint::BigInt;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use num_traits::ToPrimitive;
use serde::ser::{self, SerializeMap, SerializeTuple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A literal recognized by the grammar.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{parse_literal, Complex, Value};
///
/// assert_eq!(parse_literal("yes").unwrap(), Value::Bool(true));
/// assert_eq!(parse_literal("-7").unwrap(), Value::Integer(-7));
/// assert_eq!(parse_literal("2.5e1").unwrap(), Value::Float(25.0));
/// assert_eq!(parse_literal("1 2*j").unwrap(), Value::Complex(Complex::new(1.0, 2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    /// Integer literal outside the `i64` range.
    BigInt(BigInt),
    Float(f64),
    Complex(Complex),
    Text(String),
    RawData(RawData),
}

/// A complex number with double-precision components.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::Complex;
///
/// let z = Complex::imaginary(3.0);
/// assert_eq!(z, Complex::new(0.0, 3.0));
/// assert_eq!(z.to_string(), "0+3j");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[inline]
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// A pure imaginary number.
    #[inline]
    #[must_use]
    pub const fn imaginary(im: f64) -> Self {
        Complex { re: 0.0, im }
    }

    /// Returns `true` when both components are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}j", self.re, -self.im)
        } else {
            write!(f, "{}+{}j", self.re, self.im)
        }
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex { re, im }
    }
}

/// The contents of a `$name ... $end` block. The body is never re-parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawData {
    pub name: String,
    pub body: String,
}

impl RawData {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        RawData {
            name: name.into(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.name, self.body)
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` for every numeric variant, complex included.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            Value::Integer(_) | Value::BigInt(_) | Value::Float(_) | Value::Complex(_)
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self, Value::Complex(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_raw_data(&self) -> bool {
        matches!(self, Value::RawData(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Converts any real numeric value to `f64`. Big integers may lose precision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glossy_atoms::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
    /// assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
    /// assert_eq!(Value::from("x").as_f64(), None);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::BigInt(bi) => bi.to_f64(),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Widens any numeric value to a complex number.
    #[must_use]
    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            Value::Complex(z) => Some(*z),
            other => other.as_f64().map(|re| Complex::new(re, 0.0)),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_raw_data(&self) -> Option<&RawData> {
        match self {
            Value::RawData(data) => Some(data),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::BigInt(bi) => write!(f, "{}", bi),
            Value::Float(fl) => write!(f, "{:?}", fl),
            Value::Complex(z) => write!(f, "{}", z),
            Value::Text(s) => write!(f, "{}", s),
            Value::RawData(data) => write!(f, "${}{}$end", data.name, data.body),
        }
    }
}

/// Fails for non-finite components, which JSON cannot carry.
impl Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.is_finite() {
            return Err(ser::Error::custom(format!(
                "complex number {} has a non-finite component",
                self
            )));
        }
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(COMPLEX_TAG, &[self.re, self.im])?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Complex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ComplexVisitor;

        impl<'de> Visitor<'de> for ComplexVisitor {
            type Value = Complex;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an object with a \"{}\" key", COMPLEX_TAG)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Complex, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut parts: Option<(f64, f64)> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == COMPLEX_TAG {
                        parts = Some(map.next_value()?);
                    } else {
                        map.next_value::<de::IgnoredAny>()?;
                    }
                }
                parts
                    .map(Complex::from)
                    .ok_or_else(|| de::Error::missing_field(COMPLEX_TAG))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Complex, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let re = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let im = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Complex::new(re, im))
            }
        }

        deserializer.deserialize_any(ComplexVisitor)
    }
}

impl Serialize for RawData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.body)?;
        tuple.end()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::BigInt(bi) => serializer.serialize_str(&bi.to_string()),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Complex(z) => z.serialize(serializer),
            Value::Text(s) => serializer.serialize_str(s),
            Value::RawData(data) => data.serialize(serializer),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            Value::BigInt(bi) => Err(crate::Error::custom(format!(
                "integer {} does not fit in i64",
                bi
            ))),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {:?}", value)))
    }
}

impl TryFrom<Value> for Complex {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_complex()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {:?}", value)))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected text, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

/// Narrows to `Integer` when the value fits in `i64`.
impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::BigInt(value),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Complex> for Value {
    fn from(value: Complex) -> Self {
        Value::Complex(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<RawData> for Value {
    fn from(value: RawData) -> Self {
        Value::RawData(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bigint_narrowing() {
        assert_eq!(Value::from(BigInt::from(5)), Value::Integer(5));
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(Value::from(big.clone()), Value::BigInt(big));
    }

    #[test]
    fn test_bigint_as_f64() {
        let big: BigInt = "100000000000000000000".parse().unwrap();
        assert_eq!(Value::BigInt(big.clone()).as_f64(), Some(1e20));
        assert_eq!(Value::BigInt(-big).as_complex(), Some(Complex::new(-1e20, 0.0)));
    }

    #[test]
    fn test_non_finite_complex_is_not_serialized() {
        assert!(serde_json::to_string(&Complex::imaginary(f64::INFINITY)).is_err());
        assert!(serde_json::to_value(Value::Complex(Complex::new(f64::NAN, 0.0))).is_err());
    }

    #[test]
    fn test_complex_display() {
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5-2j");
        assert_eq!(Complex::imaginary(4.0).to_string(), "0+4j");
    }

    #[test]
    fn test_serialize_variants() {
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::Integer(-3)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&Value::Float(0.5)).unwrap(), "0.5");
        assert_eq!(
            serde_json::to_string(&Value::from("H2O")).unwrap(),
            "\"H2O\""
        );
        assert_eq!(
            serde_json::to_string(&Value::from(RawData::new("xyz", "\n1 2\n"))).unwrap(),
            "[\"xyz\",\"\\n1 2\\n\"]"
        );
        let big: BigInt = "99999999999999999999".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&Value::BigInt(big)).unwrap(),
            "\"99999999999999999999\""
        );
    }

    #[test]
    fn test_complex_deserialize_from_tagged_object() {
        let z: Complex = serde_json::from_str(r#"{"__complex__": [1, -2.5]}"#).unwrap();
        assert_eq!(z, Complex::new(1.0, -2.5));
    }

    #[test]
    fn test_complex_deserialize_missing_tag() {
        let result: Result<Complex, _> = serde_json::from_str(r#"{"re": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_tryfrom() {
        assert!(bool::try_from(Value::Bool(false)).is_ok());
        assert_eq!(i64::try_from(Value::Integer(9)).unwrap(), 9);
        assert!(i64::try_from(Value::Float(9.0)).is_err());
        assert_eq!(f64::try_from(Value::Integer(2)).unwrap(), 2.0);
        assert_eq!(
            Complex::try_from(Value::Float(2.0)).unwrap(),
            Complex::new(2.0, 0.0)
        );
        assert_eq!(String::try_from(Value::from("a")).unwrap(), "a");
        assert!(String::try_from(Value::Integer(1)).is_err());
    }

    #[test]
    fn test_const_is_methods() {
        let value = Value::Complex(Complex::imaginary(1.0));
        assert!(value.is_number());
        assert!(value.is_complex());
        assert!(!value.is_text());
        assert!(Value::from(RawData::new("a", "")).is_raw_data());
    }
}
