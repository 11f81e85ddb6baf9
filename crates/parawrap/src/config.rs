#![forbid(unsafe_code)]

//! Wrapping configuration.
//!
//! [`WrapConfig`] is a plain value: build it once, validate it, and share it
//! by reference. None of the algorithms in this crate mutate it.
//!
//! # Example
//! ```
//! use parawrap::WrapConfig;
//!
//! let config = WrapConfig::new(40)
//!     .initial_indent("* ")
//!     .subsequent_indent("  ")
//!     .max_lines(Some(3));
//! assert!(config.validate().is_ok());
//! ```

use crate::chunk::text_width;
use crate::error::WrapError;

/// Default line width.
pub const DEFAULT_WIDTH: usize = 70;

/// Default tab stop distance.
pub const DEFAULT_TAB_SIZE: usize = 8;

/// Default truncation marker.
pub const DEFAULT_PLACEHOLDER: &str = " [...]";

/// Options controlling how text is wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WrapConfig {
    /// Maximum line length in characters, indent included.
    pub width: usize,
    /// Prepended to the first output line.
    pub initial_indent: String,
    /// Prepended to every output line after the first.
    pub subsequent_indent: String,
    /// Expand tabs to spaces before wrapping.
    pub expand_tabs: bool,
    /// Tab stop distance used by `expand_tabs`.
    pub tab_size: usize,
    /// Turn every whitespace character into a plain space.
    pub replace_whitespace: bool,
    /// Put two spaces after sentence-ending punctuation.
    pub fix_sentence_endings: bool,
    /// Split words longer than the line width.
    pub break_long_words: bool,
    /// Allow breaks after hyphens in compound words.
    pub break_on_hyphens: bool,
    /// Drop whitespace at the start and end of lines.
    pub drop_whitespace: bool,
    /// Truncate output to at most this many lines.
    pub max_lines: Option<usize>,
    /// Appended to the last line when output is truncated.
    pub placeholder: String,
}

impl WrapConfig {
    /// Create a configuration with the given width and default options.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            expand_tabs: true,
            tab_size: DEFAULT_TAB_SIZE,
            replace_whitespace: true,
            fix_sentence_endings: false,
            break_long_words: true,
            break_on_hyphens: true,
            drop_whitespace: true,
            max_lines: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Set the line width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the first-line indent.
    #[must_use]
    pub fn initial_indent(mut self, indent: impl Into<String>) -> Self {
        self.initial_indent = indent.into();
        self
    }

    /// Set the indent for lines after the first.
    #[must_use]
    pub fn subsequent_indent(mut self, indent: impl Into<String>) -> Self {
        self.subsequent_indent = indent.into();
        self
    }

    /// Set whether tabs are expanded.
    #[must_use]
    pub fn expand_tabs(mut self, expand: bool) -> Self {
        self.expand_tabs = expand;
        self
    }

    /// Set the tab stop distance.
    #[must_use]
    pub fn tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    /// Set whether whitespace characters are replaced by spaces.
    #[must_use]
    pub fn replace_whitespace(mut self, replace: bool) -> Self {
        self.replace_whitespace = replace;
        self
    }

    /// Set whether sentence endings get two spaces.
    #[must_use]
    pub fn fix_sentence_endings(mut self, fix: bool) -> Self {
        self.fix_sentence_endings = fix;
        self
    }

    /// Set whether overlong words are split.
    #[must_use]
    pub fn break_long_words(mut self, brk: bool) -> Self {
        self.break_long_words = brk;
        self
    }

    /// Set whether compound words may break after hyphens.
    #[must_use]
    pub fn break_on_hyphens(mut self, brk: bool) -> Self {
        self.break_on_hyphens = brk;
        self
    }

    /// Set whether whitespace is dropped at line edges.
    #[must_use]
    pub fn drop_whitespace(mut self, drop: bool) -> Self {
        self.drop_whitespace = drop;
        self
    }

    /// Set the maximum number of output lines.
    #[must_use]
    pub fn max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the truncation placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Indent used for the line at `index` (zero-based).
    #[inline]
    #[must_use]
    pub fn indent_for(&self, index: usize) -> &str {
        if index == 0 {
            &self.initial_indent
        } else {
            &self.subsequent_indent
        }
    }

    /// Check every configuration invariant.
    ///
    /// Fails when `width` is zero, when `max_lines` is `Some(0)`, or when the
    /// left-trimmed placeholder does not fit beside the indent of the last
    /// permitted line.
    pub fn validate(&self) -> Result<(), WrapError> {
        if self.width == 0 {
            return Err(WrapError::InvalidWidth { width: self.width });
        }
        if let Some(max_lines) = self.max_lines {
            if max_lines == 0 {
                return Err(WrapError::InvalidMaxLines);
            }
            let indent = if max_lines > 1 {
                &self.subsequent_indent
            } else {
                &self.initial_indent
            };
            let indent = text_width(indent);
            let placeholder = text_width(self.placeholder.trim_start());
            if indent + placeholder > self.width {
                return Err(WrapError::PlaceholderTooLarge {
                    indent,
                    placeholder,
                    width: self.width,
                });
            }
        }
        Ok(())
    }
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}
