//! Line normalizer: raw physical lines to logical `key:value` statements.
//!
//! Each raw line goes through three steps:
//!
//! 1. Everything from the first `#` onward is dropped. By default this is
//!    purely textual, so a `#` inside a quoted string also starts a comment;
//!    [`ParseOptions::quote_aware_comments`] keeps `#` inside quotes.
//! 2. Lines that are blank after that are skipped.
//! 3. A line containing `:` starts a new logical line. A line without one is
//!    a continuation and is appended, trimmed, to the previous logical line.
//!    This folds values that wrap across physical lines (typically long
//!    inline arrays); it is not block-scalar support.
//!
//! Whitespace directly after `:` or `,` is removed everywhere in the line, so
//! `name:   value` and `[1, 2]` become `name:value` and `[1,2]`.

use crate::options::ParseOptions;

/// One statement after comment stripping and continuation folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the physical line the statement starts on.
    pub number: usize,
    /// Leading indentation preserved, trailing whitespace removed.
    pub text: String,
}

/// Incremental normalizer fed one physical line at a time.
#[derive(Debug)]
pub struct Normalizer<'o> {
    options: &'o ParseOptions,
    lines: Vec<LogicalLine>,
    physical: usize,
}

impl<'o> Normalizer<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
            physical: 0,
        }
    }

    pub fn push(&mut self, raw: &str) {
        self.physical += 1;

        let content = strip_comment(raw, self.options.quote_aware_comments);
        if content.trim().is_empty() {
            return;
        }

        if content.contains(':') {
            self.lines.push(LogicalLine {
                number: self.physical,
                text: collapse_separators(content.trim_end()),
            });
            return;
        }

        match self.lines.last_mut() {
            Some(previous) => previous.text.push_str(&collapse_separators(content.trim())),
            None => tracing::warn!(
                line = self.physical,
                "dropping continuation line with no preceding key"
            ),
        }
    }

    pub fn finish(self) -> Vec<LogicalLine> {
        self.lines
    }
}

/// Normalizes a whole text at once.
pub fn normalize(input: &str, options: &ParseOptions) -> Vec<LogicalLine> {
    let mut normalizer = Normalizer::new(options);
    for raw in input.lines() {
        normalizer.push(raw);
    }
    normalizer.finish()
}

/// Cuts `line` at the first comment marker.
fn strip_comment(line: &str, quote_aware: bool) -> &str {
    if !quote_aware {
        return line.find('#').map_or(line, |pos| &line[..pos]);
    }

    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (pos, ch) in line.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if ch == '\\' => escaped = true,
            Some(open) if ch == open => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '#' => return &line[..pos],
                _ => {}
            },
        }
    }
    line
}

/// Drops spaces and tabs that follow a `:` or `,` (possibly across a run of
/// whitespace). Leading indentation is untouched.
fn collapse_separators(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last_significant: Option<char> = None;
    for ch in line.chars() {
        if ch == ' ' || ch == '\t' {
            if matches!(last_significant, Some(':') | Some(',')) {
                continue;
            }
        } else {
            last_significant = Some(ch);
        }
        out.push(ch);
    }
    out
}
