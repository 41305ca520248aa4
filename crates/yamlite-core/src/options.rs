//! Parser configuration.

/// Default number of columns a leading tab counts for.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// How the parser treats indentation that does not line up with the
/// document's indentation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentMode {
    /// Accept anything; scope pops use truncating division.
    #[default]
    Lenient,
    /// Reject lines whose indentation is not a whole number of units or does
    /// not match the depth of the mapping being populated.
    Strict,
}

/// Options for [`crate::parse_with_options`] and the file loaders.
///
/// ```
/// use yamlite_core::{IndentMode, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_tab_width(2)
///     .with_indent_mode(IndentMode::Strict);
/// assert_eq!(options.tab_width, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub tab_width: usize,
    pub indent_mode: IndentMode,
    /// Keep `#` characters that sit inside single or double quotes instead of
    /// treating them as the start of a comment.
    pub quote_aware_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            indent_mode: IndentMode::Lenient,
            quote_aware_comments: false,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the default options with [`IndentMode::Strict`].
    pub fn strict() -> Self {
        Self::default().with_indent_mode(IndentMode::Strict)
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn with_indent_mode(mut self, indent_mode: IndentMode) -> Self {
        self.indent_mode = indent_mode;
        self
    }

    #[must_use]
    pub fn with_quote_aware_comments(mut self, enabled: bool) -> Self {
        self.quote_aware_comments = enabled;
        self
    }
}
