#![forbid(unsafe_code)]

//! Paragraph wrapping entry points.
//!
//! [`wrap`], [`fill`] and [`shorten`] validate the configuration on every
//! call. [`TextWrapper`] validates once and then wraps any number of texts
//! without a fallible step.
//!
//! # Example
//! ```
//! use parawrap::{WrapConfig, fill, shorten, wrap};
//!
//! let config = WrapConfig::new(10);
//! let lines = wrap("Hello world foo bar", &config).unwrap();
//! assert_eq!(lines, vec!["Hello", "world foo", "bar"]);
//!
//! assert_eq!(fill("Hello world foo bar", &config).unwrap(), "Hello\nworld foo\nbar");
//!
//! let short = shorten("Hello  world!", 11, &WrapConfig::default()).unwrap();
//! assert_eq!(short, "Hello [...]");
//! ```

use std::borrow::Cow;

use crate::chunk::{Chunk, split_chunks};
use crate::config::WrapConfig;
use crate::error::WrapError;
use crate::normalize::normalize;
use crate::pack::pack_validated;
use crate::sentence::fix_sentence_endings;

/// Wrap `text` into lines of at most `config.width` characters.
///
/// Lines carry no trailing newline. Empty or whitespace-only input yields
/// no lines.
pub fn wrap(text: &str, config: &WrapConfig) -> Result<Vec<String>, WrapError> {
    config.validate()?;
    Ok(wrap_validated(text, config))
}

/// Wrap `text` and join the lines with `\n`.
pub fn fill(text: &str, config: &WrapConfig) -> Result<String, WrapError> {
    Ok(wrap(text, config)?.join("\n"))
}

/// Collapse whitespace and truncate `text` to fit on one line of `width`.
///
/// All whitespace runs become single spaces and the ends are trimmed. If
/// the result is still too long, words are dropped from the end and the
/// placeholder is appended. `width` and `max_lines` from `config` are
/// overridden.
pub fn shorten(text: &str, width: usize, config: &WrapConfig) -> Result<String, WrapError> {
    let config = config.clone().width(width).max_lines(Some(1));
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    fill(&collapsed, &config)
}

/// [`wrap`] with default options and the given width.
pub fn wrap_width(text: &str, width: usize) -> Result<Vec<String>, WrapError> {
    wrap(text, &WrapConfig::new(width))
}

/// [`fill`] with default options and the given width.
pub fn fill_width(text: &str, width: usize) -> Result<String, WrapError> {
    fill(text, &WrapConfig::new(width))
}

fn wrap_validated(text: &str, config: &WrapConfig) -> Vec<String> {
    tracing::trace!(bytes = text.len(), width = config.width, "wrapping text");
    let normalized = normalize(text, config);
    let mut chunks = split_chunks(&normalized, config);
    if config.fix_sentence_endings {
        fix_sentence_endings(&mut chunks);
    }
    pack_validated(chunks, config)
}

/// A reusable wrapper around a validated [`WrapConfig`].
///
/// # Example
/// ```
/// use parawrap::{TextWrapper, WrapConfig};
///
/// let wrapper = TextWrapper::new(WrapConfig::new(12).subsequent_indent("  ")).unwrap();
/// assert_eq!(wrapper.wrap("one two three four"), vec!["one two", "  three four"]);
///
/// // Stages can also be driven one at a time.
/// let text = wrapper.normalize("one\ttwo");
/// let chunks = wrapper.split_chunks(&text);
/// assert_eq!(wrapper.wrap_chunks(chunks), vec!["one     two"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextWrapper {
    config: WrapConfig,
}

impl TextWrapper {
    /// Validate `config` and build a wrapper around it.
    pub fn new(config: WrapConfig) -> Result<Self, WrapError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The wrapped configuration.
    #[must_use]
    pub fn config(&self) -> &WrapConfig {
        &self.config
    }

    /// Give the configuration back.
    #[must_use]
    pub fn into_config(self) -> WrapConfig {
        self.config
    }

    /// Apply tab expansion and whitespace replacement.
    #[must_use]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        normalize(text, &self.config)
    }

    /// Tokenize already-normalized text.
    #[must_use]
    pub fn split_chunks<'a>(&self, text: &'a str) -> Vec<Chunk<'a>> {
        split_chunks(text, &self.config)
    }

    /// Pack a prepared chunk sequence into lines.
    ///
    /// Sentence-ending fixes are not applied here.
    #[must_use]
    pub fn wrap_chunks(&self, chunks: Vec<Chunk<'_>>) -> Vec<String> {
        pack_validated(chunks, &self.config)
    }

    /// Wrap `text` with the held configuration.
    #[must_use]
    pub fn wrap(&self, text: &str) -> Vec<String> {
        wrap_validated(text, &self.config)
    }

    /// Wrap `text` and join the lines with `\n`.
    #[must_use]
    pub fn fill(&self, text: &str) -> String {
        self.wrap(text).join("\n")
    }
}

impl TryFrom<WrapConfig> for TextWrapper {
    type Error = WrapError;

    fn try_from(config: WrapConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
