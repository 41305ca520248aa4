//! Type-checked extraction of payloads out of a [`Value`].
//!
//! ```
//! use yamlite_core::parse;
//!
//! let doc = parse("port: 8080\nhosts: [a, b]").unwrap();
//! let port: i64 = doc.get("port").unwrap().extract().unwrap();
//! let hosts: Vec<String> = doc.get("hosts").unwrap().extract().unwrap();
//! assert_eq!(port, 8080);
//! assert_eq!(hosts, ["a", "b"]);
//!
//! // A shape that does not match the stored tag is an error, never a reinterpretation.
//! assert!(doc.get("port").unwrap().extract::<String>().is_err());
//! ```

use crate::error::{Error, Result};
use crate::types::{Mapping, Value};

/// A Rust type that can be read out of a [`Value`] of a matching kind.
pub trait Extract<'a>: Sized {
    fn extract_from(value: &'a Value) -> Result<Self>;
}

impl Value {
    /// Reads the payload as `T`, failing with [`Error::TypeMismatch`] when the
    /// stored kind does not have that shape.
    pub fn extract<'a, T: Extract<'a>>(&'a self) -> Result<T> {
        T::extract_from(self)
    }
}

impl<'a> Extract<'a> for i64 {
    fn extract_from(value: &'a Value) -> Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| Error::mismatch("integer", value.kind()))
    }
}

/// Floats; integers are widened as well.
impl<'a> Extract<'a> for f64 {
    fn extract_from(value: &'a Value) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Integer(n) => Ok(*n as f64),
            other => Err(Error::mismatch("float", other.kind())),
        }
    }
}

impl<'a> Extract<'a> for bool {
    fn extract_from(value: &'a Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::mismatch("boolean", value.kind()))
    }
}

impl<'a> Extract<'a> for &'a str {
    fn extract_from(value: &'a Value) -> Result<Self> {
        value
            .as_str()
            .ok_or_else(|| Error::mismatch("text", value.kind()))
    }
}

impl<'a> Extract<'a> for String {
    fn extract_from(value: &'a Value) -> Result<Self> {
        <&str>::extract_from(value).map(str::to_string)
    }
}

impl<'a> Extract<'a> for &'a [Value] {
    fn extract_from(value: &'a Value) -> Result<Self> {
        value
            .as_sequence()
            .ok_or_else(|| Error::mismatch("sequence", value.kind()))
    }
}

impl<'a> Extract<'a> for &'a Mapping {
    fn extract_from(value: &'a Value) -> Result<Self> {
        value
            .as_mapping()
            .ok_or_else(|| Error::mismatch("mapping", value.kind()))
    }
}

/// Element-wise extraction; the first element of the wrong kind fails the whole.
impl<'a, T: Extract<'a>> Extract<'a> for Vec<T> {
    fn extract_from(value: &'a Value) -> Result<Self> {
        <&[Value]>::extract_from(value)?
            .iter()
            .map(T::extract_from)
            .collect()
    }
}
