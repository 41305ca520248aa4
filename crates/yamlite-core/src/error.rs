//! Error types for loading, parsing, and querying documents.

use crate::types::Kind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a document or reading values out of it.
///
/// Malformed input does not appear here in lenient mode: the parser absorbs
/// irregular indentation, stray continuation lines, and unmatched brackets
/// into the shape of the resulting tree.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A typed extraction or container operation hit a value of another kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: Kind },

    /// A mapping lookup for a key that is not present.
    #[error("key not found: {key:?}")]
    KeyNotFound { key: String },

    /// A sequence lookup past the end.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Irregular indentation, reported only in strict mode.
    /// `line` is the 1-based physical line the offending statement starts on.
    #[error("indentation error at line {line}: expected {expected} columns, found {found}")]
    Indentation {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A dotted lookup path with an empty segment.
    #[error("invalid path: {path:?}")]
    InvalidPath { path: String },
}

impl Error {
    pub(crate) fn mismatch(expected: &'static str, found: Kind) -> Self {
        Error::TypeMismatch { expected, found }
    }
}

/// Convenience alias used throughout yamlite-core.
pub type Result<T> = std::result::Result<T, Error>;
