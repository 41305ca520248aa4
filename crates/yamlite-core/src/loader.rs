//! Reading documents from files.
//!
//! The file is read line by line through a buffered reader that is closed
//! when it goes out of scope, whether the read finishes or fails part way.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::normalize::Normalizer;
use crate::options::ParseOptions;
use crate::parser::parse_lines;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads and parses the file at `path` with default options.
///
/// An unreadable source is reported through `tracing` and yields an empty
/// document; use [`try_load`] to handle the error yourself.
pub fn load(path: impl AsRef<Path>) -> Document {
    load_with_options(path, &ParseOptions::default())
}

/// Like [`load`], with explicit options. A strict-mode indentation error is
/// reported and degrades to an empty document the same way.
pub fn load_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> Document {
    match try_load(path, options) {
        Ok(document) => document,
        Err(err) => {
            tracing::error!(error = %err, "failed to load document");
            Document::new()
        }
    }
}

/// Loads and parses the file at `path`, surfacing every failure.
pub fn try_load(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Document> {
    let path = path.as_ref();
    let unavailable = |source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(unavailable)?);
    let mut normalizer = Normalizer::new(options);
    for line in reader.lines() {
        normalizer.push(&line.map_err(unavailable)?);
    }

    tracing::debug!(path = %path.display(), "read source");
    parse_lines(&normalizer.finish(), options)
}
