//! The parsed document: a root mapping that owns the whole tree.

use crate::error::{Error, Result};
use crate::types::{Mapping, Value};

/// The root mapping produced by one parse.
///
/// Dropping a document releases every node exactly once. Teardown walks the
/// tree with an explicit work list, so depth is bounded by heap, not by the
/// call stack.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// An empty document, as produced for an unreadable source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Looks up a top-level key.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.root.get(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Top-level entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.root.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    /// Takes the root mapping out, leaving this document empty.
    ///
    /// The returned mapping no longer has the document's iterative teardown:
    /// dropping it recurses once per nesting level. Pass very deep trees to
    /// [`release`] instead of dropping them.
    pub fn into_mapping(mut self) -> Mapping {
        std::mem::take(&mut self.root)
    }
}

impl From<Mapping> for Document {
    fn from(root: Mapping) -> Self {
        Self { root }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Drop for Document {
    fn drop(&mut self) {
        release(std::mem::take(&mut self.root));
    }
}

/// Drops a mapping and everything under it with an explicit work list, so
/// depth is bounded by heap, not by the call stack.
pub fn release(mapping: Mapping) {
    let mut pending: Vec<Value> = mapping.into_values().collect();
    while let Some(value) = pending.pop() {
        match value {
            Value::Sequence(items) => pending.extend(items),
            Value::Mapping(entries) => pending.extend(entries.into_values()),
            _ => {}
        }
    }
}
