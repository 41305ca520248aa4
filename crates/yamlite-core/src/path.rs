//! Dotted path lookup into a document.
//!
//! # Path syntax
//!
//! - `"server"` -- the top-level key `server`
//! - `"server.port"` -- `port` inside the mapping under `server`
//! - `"hosts.0"` -- the first element of the sequence under `hosts`
//!
//! A segment indexes a mapping by key and a sequence by decimal position.
//! Keys containing `.` cannot be reached this way; use [`Value::get`].
//!
//! ```
//! use yamlite_core::parse;
//!
//! let doc = parse("server:\n  hosts: [a, [b, c]]").unwrap();
//! let host = doc.pointer("server.hosts.1.0").unwrap();
//! assert_eq!(host.as_str(), Some("b"));
//! ```

use crate::document::Document;
use crate::error::{Error, Result};
use crate::types::Value;

/// A path split into its segments.
#[derive(Debug, Clone)]
struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    fn parse(path: &'a str) -> Result<Self> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(Error::InvalidPath {
                path: path.to_string(),
            });
        }
        Ok(Self { segments })
    }
}

/// Resolves one segment against a container value.
fn step<'v>(value: &'v Value, segment: &str) -> Result<&'v Value> {
    match value {
        Value::Sequence(_) => match segment.parse::<usize>() {
            Ok(index) => value.at(index),
            Err(_) => Err(Error::KeyNotFound {
                key: segment.to_string(),
            }),
        },
        _ => value.get(segment),
    }
}

impl Document {
    /// Follows a dotted path from the root.
    pub fn pointer(&self, path: &str) -> Result<&Value> {
        let path = Path::parse(path)?;
        let (first, rest) = path
            .segments
            .split_first()
            .ok_or_else(|| Error::InvalidPath {
                path: String::new(),
            })?;
        rest.iter()
            .try_fold(self.get(first)?, |value, segment| step(value, segment))
    }
}

impl Value {
    /// Follows a dotted path from this value.
    pub fn pointer(&self, path: &str) -> Result<&Value> {
        Path::parse(path)?
            .segments
            .iter()
            .try_fold(self, |value, segment| step(value, segment))
    }
}
