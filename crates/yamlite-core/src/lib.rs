//! # yamlite-core
//!
//! A small parser for an indentation-structured subset of YAML: `key: value`
//! pairs, mappings nested by indentation, inline `[...]` arrays (nestable),
//! `#` comments, and schema-free inference of integers, floats, booleans and
//! text.
//!
//! ## Quick start
//!
//! ```rust
//! use yamlite_core::{parse, Value};
//!
//! let doc = parse(
//!     "name: demo   # project name\n\
//!      server:\n  \
//!        port: 8080\n  \
//!        ratio: 0.75\n\
//!      tags: [a, b, [1, 2]]\n",
//! )
//! .unwrap();
//!
//! assert_eq!(doc.get("name").unwrap().as_str(), Some("demo"));
//! assert_eq!(doc.pointer("server.port").unwrap(), &Value::Integer(8080));
//! assert_eq!(doc.pointer("tags.2.1").unwrap().extract::<i64>().unwrap(), 2);
//! ```
//!
//! ## Not supported
//!
//! Block scalars, anchors and aliases, flow mappings (`{a: 1}`), and lists
//! of mappings (`- key: value`) are not interpreted; they end up as text or
//! in whatever place the indentation rules put them.
//!
//! ## Modules
//!
//! - [`normalize`] -- comment stripping, continuation folding, whitespace collapse
//! - [`indent`] -- indentation unit and depth
//! - [`classify`] -- value type inference and inline array splitting
//! - [`parser`] -- the scope stack that builds the tree
//! - [`types`] / [`document`] -- the value tree and its root
//! - [`extract`] -- typed extraction
//! - [`loader`] -- reading from files
//! - [`json`] / [`path`] -- JSON conversion and dotted lookup

pub mod classify;
pub mod document;
pub mod error;
pub mod extract;
pub mod indent;
pub mod json;
pub mod loader;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod path;
pub mod types;

pub use classify::classify;
pub use document::Document;
pub use error::{Error, Result};
pub use extract::Extract;
pub use loader::{load, load_with_options, try_load};
pub use options::{IndentMode, ParseOptions};
pub use types::{Kind, Mapping, Value};

/// Parse a document with default (lenient) options.
///
/// Lenient parsing never fails; the `Result` is shared with
/// [`parse_with_options`], where strict indentation can.
pub fn parse(input: &str) -> Result<Document> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse a document with explicit options.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Document> {
    let lines = normalize::normalize(input, options);
    parser::parse_lines(&lines, options)
}
