//! Lossless JSON convention for complex numbers.
//!
//! JSON has no complex type. A complex number is written as an object with a
//! single reserved key whose value is the pair of components:
//!
//! ```text
//! {"__complex__": [1.0, -2.0]}
//! ```
//!
//! [`encode`] turns any `Serialize` value into a JSON tree; only [`Complex`]
//! values are special-cased (through their `Serialize` impl). [`decode`] walks a
//! JSON tree bottom-up and replaces every object carrying the reserved key with
//! [`Structured::Complex`]; all other objects pass through unchanged.
//!
//! ## Tag collisions
//!
//! Any object with a `"__complex__"` key is read as a complex number, even one
//! written for an unrelated purpose. Keys next to the tag are discarded. The
//! convention cannot tell the two apart without a richer tagging scheme.
//!
//! ## Non-finite components
//!
//! JSON has no infinity or NaN. A literal such as `1e400*j` parses to an
//! infinite imaginary part; encoding it fails with [`Error::Json`] instead of
//! writing a `null` that [`decode`] would later reject.
//!
//! ## Examples
//!
//! ```rust
//! use glossy_atoms::codec::{decode, encode};
//! use glossy_atoms::{Complex, Structured};
//!
//! let json = encode(&Complex::new(3.0, 4.0)).unwrap();
//! assert_eq!(json, serde_json::json!({"__complex__": [3.0, 4.0]}));
//! assert_eq!(decode(json).unwrap(), Structured::Complex(Complex::new(3.0, 4.0)));
//! ```

use crate::{Complex, Error, Result, StructuredMap};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number};
use std::fmt;

/// Reserved key marking an encoded complex number.
pub const COMPLEX_TAG: &str = "__complex__";

/// A decoded JSON value in which tagged objects became complex numbers.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Structured {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Structured>),
    Object(StructuredMap),
    Complex(Complex),
}

impl Structured {
    #[inline]
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self, Structured::Complex(_))
    }

    #[inline]
    #[must_use]
    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            Structured::Complex(z) => Some(*z),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&StructuredMap> {
        match self {
            Structured::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Structured>> {
        match self {
            Structured::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Structured::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Structured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

impl Serialize for Structured {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Structured::Null => serializer.serialize_unit(),
            Structured::Bool(b) => serializer.serialize_bool(*b),
            Structured::Number(n) => n.serialize(serializer),
            Structured::String(s) => serializer.serialize_str(s),
            Structured::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Structured::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Structured::Complex(z) => z.serialize(serializer),
        }
    }
}

impl From<bool> for Structured {
    fn from(value: bool) -> Self {
        Structured::Bool(value)
    }
}

impl From<i32> for Structured {
    fn from(value: i32) -> Self {
        Structured::Number(Number::from(value))
    }
}

impl From<i64> for Structured {
    fn from(value: i64) -> Self {
        Structured::Number(Number::from(value))
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for Structured {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Structured::Null, Structured::Number)
    }
}

impl From<&str> for Structured {
    fn from(value: &str) -> Self {
        Structured::String(value.to_string())
    }
}

impl From<String> for Structured {
    fn from(value: String) -> Self {
        Structured::String(value)
    }
}

impl From<Complex> for Structured {
    fn from(value: Complex) -> Self {
        Structured::Complex(value)
    }
}

/// Encodes any serializable value as a JSON tree.
///
/// Complex numbers become `{"__complex__": [re, im]}`; every other value keeps
/// the encoding serde gives it.
///
/// # Errors
///
/// Returns [`Error::Json`] if the value cannot be represented as JSON (for
/// instance a map with non-string keys).
pub fn encode<T>(value: &T) -> Result<serde_json::Value>
where
    T: ?Sized + Serialize,
{
    Ok(serde_json::to_value(value)?)
}

/// Decodes a JSON tree, reconstructing every tagged complex number.
///
/// # Errors
///
/// Returns [`Error::MalformedComplex`] if an object carries the reserved key but
/// its value is not a two-element sequence of numbers.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::codec::decode;
/// use glossy_atoms::{Complex, Structured};
/// use serde_json::json;
///
/// let doc = decode(json!({"omega": {"__complex__": [0.0, 0.1]}, "n": 2})).unwrap();
/// let obj = doc.as_object().unwrap();
/// assert_eq!(obj.get("omega"), Some(&Structured::Complex(Complex::new(0.0, 0.1))));
/// assert_eq!(obj.get("n"), Some(&Structured::from(2)));
/// ```
pub fn decode(value: serde_json::Value) -> Result<Structured> {
    Ok(match value {
        serde_json::Value::Null => Structured::Null,
        serde_json::Value::Bool(b) => Structured::Bool(b),
        serde_json::Value::Number(n) => Structured::Number(n),
        serde_json::Value::String(s) => Structured::String(s),
        serde_json::Value::Array(arr) => Structured::Array(
            arr.into_iter()
                .map(decode)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_json::Value::Object(obj) => decode_object(obj)?,
    })
}

/// The object hook: decodes a single JSON object whose members are decoded too.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_object(mut obj: Map<String, serde_json::Value>) -> Result<Structured> {
    if let Some(payload) = obj.remove(COMPLEX_TAG) {
        return complex_from_payload(&payload).map(Structured::Complex);
    }
    let mut map = StructuredMap::with_capacity(obj.len());
    for (key, value) in obj {
        map.insert(key, decode(value)?);
    }
    Ok(Structured::Object(map))
}

fn complex_from_payload(payload: &serde_json::Value) -> Result<Complex> {
    let parts = payload.as_array().ok_or_else(|| {
        Error::malformed_complex(format!("expected [re, im], found {}", payload))
    })?;
    match parts.as_slice() {
        [re, im] => {
            let re = component(re, "real")?;
            let im = component(im, "imaginary")?;
            Ok(Complex::new(re, im))
        }
        _ => Err(Error::malformed_complex(format!(
            "expected 2 components, found {}",
            parts.len()
        ))),
    }
}

fn component(value: &serde_json::Value, which: &str) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        Error::malformed_complex(format!("{} part is not a number: {}", which, value))
    })
}

/// Serializes a value to JSON text using the complex convention.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(serde_json::to_string(value)?)
}

/// Reads JSON text and decodes it, reconstructing complex numbers.
///
/// # Errors
///
/// Returns [`Error::Json`] for invalid JSON and [`Error::MalformedComplex`] for a
/// bad tagged payload.
pub fn from_json_str(s: &str) -> Result<Structured> {
    decode(serde_json::from_str(s)?)
}
