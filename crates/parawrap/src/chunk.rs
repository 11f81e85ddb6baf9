#![forbid(unsafe_code)]

//! Chunk tokenizer.
//!
//! Splits normalized text into the indivisible pieces the line packer
//! works with: whitespace runs, words, hyphenated word fragments and
//! em-dash runs.
//!
//! # Example
//! ```
//! use parawrap::{WrapConfig, chunk::split_chunks};
//!
//! let config = WrapConfig::default();
//! let chunks: Vec<&str> = split_chunks("a well-known fact", &config)
//!     .iter()
//!     .map(|c| c.as_str())
//!     .collect();
//! assert_eq!(chunks, vec!["a", " ", "well-", "known", " ", "fact"]);
//! ```

use crate::config::WrapConfig;
use crate::normalize::is_wrap_whitespace;

/// Length of `text` in characters, the unit all widths are measured in.
#[inline]
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// An atomic piece of text placed on a line as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    text: &'a str,
    width: usize,
}

impl<'a> Chunk<'a> {
    /// Wrap a string slice as a chunk.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            width: text_width(text),
        }
    }

    /// The chunk text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in characters.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the chunk holds no text at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the chunk has no visible content.
    ///
    /// Uses Unicode whitespace, so a lone no-break space counts as blank even
    /// though the tokenizer keeps it inside words.
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Split after the first `at` characters.
    #[must_use]
    pub fn split_at(&self, at: usize) -> (Chunk<'a>, Chunk<'a>) {
        let at = at.min(self.width);
        let byte = self
            .text
            .char_indices()
            .nth(at)
            .map_or(self.text.len(), |(i, _)| i);
        let (head, tail) = self.text.split_at(byte);
        (
            Chunk {
                text: head,
                width: at,
            },
            Chunk {
                text: tail,
                width: self.width - at,
            },
        )
    }

    /// Character index of the last `-` among the first `limit` characters.
    #[must_use]
    pub fn last_hyphen_before(&self, limit: usize) -> Option<usize> {
        self.text
            .chars()
            .take(limit)
            .enumerate()
            .filter(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .last()
    }
}

impl AsRef<str> for Chunk<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

// =============================================================================
// Character classes
// =============================================================================

#[inline]
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A word character that is not numeric.
///
/// Every numeric category counts here, not just decimal digits, so `½`
/// and `Ⅻ` are not letters and never anchor a hyphen break.
#[inline]
fn is_letter(c: char) -> bool {
    is_word(c) && !c.is_numeric()
}

#[inline]
fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

// =============================================================================
// Tokenizer
// =============================================================================

/// Split already-normalized text into chunks.
///
/// With `break_on_hyphens` disabled only whitespace boundaries split words.
/// Empty chunks are never produced.
#[must_use]
pub fn split_chunks<'a>(text: &'a str, config: &WrapConfig) -> Vec<Chunk<'a>> {
    let scanner = Scanner::new(text);
    if config.break_on_hyphens {
        scanner.hyphenated()
    } else {
        scanner.simple()
    }
}

struct Scanner<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each char, plus `text.len()` as a final sentinel.
    offsets: Vec<usize>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);
        for (i, c) in text.char_indices() {
            chars.push(c);
            offsets.push(i);
        }
        offsets.push(text.len());
        Self {
            text,
            chars,
            offsets,
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    fn chunk(&self, start: usize, end: usize) -> Chunk<'a> {
        Chunk {
            text: &self.text[self.offsets[start]..self.offsets[end]],
            width: end - start,
        }
    }

    fn run_end(&self, start: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut end = start;
        while end < self.len() && pred(self.chars[end]) {
            end += 1;
        }
        end
    }

    fn simple(&self) -> Vec<Chunk<'a>> {
        let mut chunks = Vec::new();
        let mut pos = 0;
        while pos < self.len() {
            let ws = is_wrap_whitespace(self.chars[pos]);
            let end = self.run_end(pos, |c| is_wrap_whitespace(c) == ws);
            chunks.push(self.chunk(pos, end));
            pos = end;
        }
        chunks
    }

    fn hyphenated(&self) -> Vec<Chunk<'a>> {
        let mut chunks = Vec::new();
        let mut pos = 0;
        while pos < self.len() {
            let end = if is_wrap_whitespace(self.chars[pos]) {
                self.run_end(pos, is_wrap_whitespace)
            } else if let Some(end) = self.em_dash_at(pos) {
                end
            } else {
                self.word_end(pos)
            };
            chunks.push(self.chunk(pos, end));
            pos = end;
        }
        chunks
    }

    /// End of a `--+` run at `pos` that follows word punctuation and is
    /// followed by a word character.
    fn em_dash_at(&self, pos: usize) -> Option<usize> {
        if pos == 0 || !is_word_punct(self.chars[pos - 1]) {
            return None;
        }
        self.dash_run_before_word(pos)
    }

    /// End of a run of two or more hyphens at `pos`, if a word character
    /// follows it.
    fn dash_run_before_word(&self, pos: usize) -> Option<usize> {
        let end = self.run_end(pos, |c| c == '-');
        (end - pos >= 2 && self.at(end).is_some_and(is_word)).then_some(end)
    }

    /// Shortest word starting at `start` that ends at a break point.
    fn word_end(&self, start: usize) -> usize {
        let mut q = start + 1;
        loop {
            match self.at(q) {
                None => return q,
                Some(c) if is_wrap_whitespace(c) => return q,
                Some('-') if self.breaks_after_hyphen(q) => return q + 1,
                Some(_) => {}
            }
            if is_word_punct(self.chars[q - 1]) && self.dash_run_before_word(q).is_some() {
                return q;
            }
            q += 1;
        }
    }

    /// Whether a compound word may break after the hyphen at `h`.
    ///
    /// The hyphen needs two letters (or letter, hyphen, letter) before it
    /// and a letter, optional hyphen and letter after it.
    fn breaks_after_hyphen(&self, h: usize) -> bool {
        let letter = |i: usize| self.at(i).is_some_and(is_letter);
        let hyphen = |i: usize| self.at(i) == Some('-');

        let before = (h >= 2 && letter(h - 2) && letter(h - 1))
            || (h >= 3 && letter(h - 3) && hyphen(h - 2) && letter(h - 1));
        let after = letter(h + 1) && (letter(h + 2) || (hyphen(h + 2) && letter(h + 3)));
        before && after
    }
}
