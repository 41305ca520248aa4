//! Indentation model: leading whitespace to columns, columns to depth.

use crate::normalize::LogicalLine;

/// Counts the columns of leading whitespace in `line`. A space is one
/// column, a tab is `tab_width` columns; counting stops at the first other
/// character.
pub fn leading_columns(line: &str, tab_width: usize) -> usize {
    let mut columns = 0;
    for ch in line.chars() {
        match ch {
            ' ' => columns += 1,
            '\t' => columns += tab_width,
            _ => break,
        }
    }
    columns
}

/// The document's indentation unit, fixed by the first indented logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentUnit(usize);

impl IndentUnit {
    /// Returns `None` for a zero width, which cannot divide anything.
    pub fn new(columns: usize) -> Option<Self> {
        (columns > 0).then_some(Self(columns))
    }

    pub fn columns(self) -> usize {
        self.0
    }

    /// Logical nesting depth of a column count. Truncates irregular
    /// indentation toward the shallower level.
    pub fn depth(self, columns: usize) -> usize {
        columns / self.0
    }

    pub fn is_aligned(self, columns: usize) -> bool {
        columns % self.0 == 0
    }
}

/// Finds the indentation unit: the column count of the first logical line
/// that is indented at all. A flat document has none.
pub fn infer_unit(lines: &[LogicalLine], tab_width: usize) -> Option<IndentUnit> {
    lines
        .iter()
        .map(|line| leading_columns(&line.text, tab_width))
        .find(|&columns| columns > 0)
        .and_then(IndentUnit::new)
}
