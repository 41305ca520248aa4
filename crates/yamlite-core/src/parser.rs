//! Scope stack builder: logical lines to a [`Document`].
//!
//! The parser never sees block delimiters, only indentation. It keeps a stack
//! of the mappings currently open, from the root down to the mapping being
//! populated:
//!
//! - a `key:` line with no value opens a new mapping under `key` and pushes it;
//! - a line indented less than the previous one closes
//!   `(previous - current) / unit` mappings;
//! - every other line inserts its classified value into the innermost open
//!   mapping.
//!
//! Open mappings are owned by the stack and moved into their parent when
//! closed. Their key is reserved in the parent when they open, so insertion
//! order follows the text.

use crate::classify::classify;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::indent::{infer_unit, leading_columns};
use crate::normalize::LogicalLine;
use crate::options::{IndentMode, ParseOptions};
use crate::types::{Mapping, Value};

/// Builds a document from normalized lines.
pub fn parse_lines(lines: &[LogicalLine], options: &ParseOptions) -> Result<Document> {
    let unit = infer_unit(lines, options.tab_width);
    if let Some(unit) = unit {
        tracing::debug!(columns = unit.columns(), "inferred indentation unit");
    }

    let mut scopes = ScopeStack::default();
    let mut previous = 0;

    for line in lines {
        let columns = leading_columns(&line.text, options.tab_width);

        match options.indent_mode {
            IndentMode::Lenient => {
                if let Some(unit) = unit {
                    if columns < previous {
                        scopes.close(unit.depth(previous - columns));
                    }
                }
            }
            IndentMode::Strict => {
                let unit_columns = unit.map_or(0, |unit| unit.columns());
                let depth = unit.map_or(0, |unit| unit.depth(columns));
                let aligned = unit.is_none_or(|unit| unit.is_aligned(columns));
                if !aligned || depth > scopes.depth() {
                    return Err(Error::Indentation {
                        line: line.number,
                        expected: depth.min(scopes.depth()) * unit_columns,
                        found: columns,
                    });
                }
                scopes.close(scopes.depth() - depth);
            }
        }

        let Some(NamedValue { key, value }) = NamedValue::from_statement(line.text.trim()) else {
            continue;
        };
        match value {
            Value::Absent => scopes.open(key),
            value => scopes.insert(key, value),
        }

        previous = columns;
    }

    let root = scopes.finish();
    tracing::debug!(lines = lines.len(), entries = root.len(), "parsed document");
    Ok(Document::from(root))
}

/// One `key:value` statement, split at the first colon and classified.
struct NamedValue {
    key: String,
    value: Value,
}

impl NamedValue {
    fn from_statement(statement: &str) -> Option<Self> {
        let (key, value_text) = statement.split_once(':')?;
        Some(Self {
            key: key.to_string(),
            value: classify(value_text),
        })
    }
}

struct Scope {
    key: String,
    entries: Mapping,
}

/// The mappings open between the root and the line being parsed.
#[derive(Default)]
struct ScopeStack {
    root: Mapping,
    open: Vec<Scope>,
}

impl ScopeStack {
    /// Number of open mappings below the root.
    fn depth(&self) -> usize {
        self.open.len()
    }

    fn top(&mut self) -> &mut Mapping {
        match self.open.last_mut() {
            Some(scope) => &mut scope.entries,
            None => &mut self.root,
        }
    }

    fn insert(&mut self, key: String, value: Value) {
        self.top().insert(key, value);
    }

    /// Reserves `key` in the current mapping and makes a fresh mapping for
    /// it the current one. A previous entry under `key` is discarded.
    fn open(&mut self, key: String) {
        tracing::trace!(key = %key, depth = self.depth() + 1, "opening mapping");
        self.top().insert(key.clone(), Value::Mapping(Mapping::new()));
        self.open.push(Scope {
            key,
            entries: Mapping::new(),
        });
    }

    /// Closes up to `count` mappings. The root is never closed.
    fn close(&mut self, count: usize) {
        for _ in 0..count {
            let Some(scope) = self.open.pop() else {
                break;
            };
            self.top().insert(scope.key, Value::Mapping(scope.entries));
        }
    }

    fn finish(mut self) -> Mapping {
        self.close(self.depth());
        self.root
    }
}
