//! The tagged value tree produced by the parser.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered mapping from text keys to owned values.
pub type Mapping = IndexMap<String, Value>;

/// A node of the document tree. Containers own their children; the tree is
/// built by a forward scan so it can never share or cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A key with no value text (only ever produced transiently by the
    /// classifier, or inside a sequence built by hand).
    #[default]
    Absent,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Sequence(Vec<Value>),
    /// Key-value pairs in insertion order.
    Mapping(Mapping),
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Absent,
    Integer,
    Float,
    Text,
    Boolean,
    Sequence,
    Mapping,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Absent => "absent",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Text => "text",
            Kind::Boolean => "boolean",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Absent => Kind::Absent,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Text(_) => Kind::Text,
            Value::Boolean(_) => Kind::Boolean,
            Value::Sequence(_) => Kind::Sequence,
            Value::Mapping(_) => Kind::Mapping,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Number of children of a sequence or mapping.
    ///
    /// Scalars have no size; asking for one is a [`Error::TypeMismatch`].
    pub fn len(&self) -> Result<usize> {
        match self {
            Value::Sequence(items) => Ok(items.len()),
            Value::Mapping(map) => Ok(map.len()),
            other => Err(Error::mismatch("sequence or mapping", other.kind())),
        }
    }

    /// Looks up `key` in a mapping.
    pub fn get(&self, key: &str) -> Result<&Value> {
        match self {
            Value::Mapping(map) => map.get(key).ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            }),
            other => Err(Error::mismatch("mapping", other.kind())),
        }
    }

    /// Looks up position `index` in a sequence.
    pub fn at(&self, index: usize) -> Result<&Value> {
        match self {
            Value::Sequence(items) => items.get(index).ok_or(Error::IndexOutOfBounds {
                index,
                len: items.len(),
            }),
            other => Err(Error::mismatch("sequence", other.kind())),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}
