#![forbid(unsafe_code)]

//! Greedy line packer.
//!
//! Consumes a chunk sequence front to back and fills one line at a time:
//! take chunks while they fit, break an oversized chunk if allowed, trim
//! whitespace at the line edges, and finish with a placeholder once the
//! `max_lines` budget runs out.
//!
//! # Example
//! ```
//! use parawrap::{WrapConfig, chunk::split_chunks, pack::pack};
//!
//! let config = WrapConfig::new(10);
//! let chunks = split_chunks("Hello there -- you goof-ball", &config);
//! let lines = pack(chunks, &config).unwrap();
//! assert_eq!(lines, vec!["Hello", "there --", "you goof-", "ball"]);
//! ```

use smallvec::SmallVec;

use crate::chunk::{Chunk, text_width};
use crate::config::WrapConfig;
use crate::error::WrapError;

/// Pack chunks into lines after validating `config`.
pub fn pack(chunks: Vec<Chunk<'_>>, config: &WrapConfig) -> Result<Vec<String>, WrapError> {
    config.validate()?;
    Ok(pack_validated(chunks, config))
}

/// Pack chunks into lines; `config` must already have passed validation.
pub(crate) fn pack_validated(chunks: Vec<Chunk<'_>>, config: &WrapConfig) -> Vec<String> {
    Packer::new(chunks, config).run()
}

/// What the outer loop does after a line is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// A line under construction.
#[derive(Debug, Default)]
struct Line<'a> {
    chunks: SmallVec<[Chunk<'a>; 16]>,
    width: usize,
}

impl<'a> Line<'a> {
    fn push(&mut self, chunk: Chunk<'a>) {
        self.width += chunk.width();
        self.chunks.push(chunk);
    }

    fn pop(&mut self) -> Option<Chunk<'a>> {
        let chunk = self.chunks.pop()?;
        self.width -= chunk.width();
        Some(chunk)
    }

    fn last(&self) -> Option<&Chunk<'a>> {
        self.chunks.last()
    }

    fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    fn render(&self, indent: &str, suffix: &str) -> String {
        let body: usize = self.chunks.iter().map(|c| c.as_str().len()).sum();
        let mut out = String::with_capacity(indent.len() + body + suffix.len());
        out.push_str(indent);
        for chunk in &self.chunks {
            out.push_str(chunk.as_str());
        }
        out.push_str(suffix);
        out
    }
}

struct Packer<'a, 'c> {
    pending: Vec<Chunk<'a>>,
    cursor: usize,
    config: &'c WrapConfig,
    lines: Vec<String>,
}

impl<'a, 'c> Packer<'a, 'c> {
    fn new(pending: Vec<Chunk<'a>>, config: &'c WrapConfig) -> Self {
        Self {
            pending,
            cursor: 0,
            config,
            lines: Vec::new(),
        }
    }

    fn peek(&self) -> Option<Chunk<'a>> {
        self.pending.get(self.cursor).copied()
    }

    fn remaining(&self) -> usize {
        self.pending.len() - self.cursor
    }

    fn run(mut self) -> Vec<String> {
        while self.remaining() > 0 {
            if self.fill_line() == Flow::Stop {
                break;
            }
        }
        self.lines
    }

    fn fill_line(&mut self) -> Flow {
        let config = self.config;
        let indent = config.indent_for(self.lines.len());
        // Bottoms out at zero when the indent alone exceeds the width.
        let width = config.width.saturating_sub(text_width(indent));

        let leading_blank = self.peek().is_some_and(|c| c.is_blank());
        if config.drop_whitespace && leading_blank && !self.lines.is_empty() {
            self.cursor += 1;
        }

        let mut line = Line::default();
        while let Some(chunk) = self.peek() {
            if line.width + chunk.width() > width {
                break;
            }
            line.push(chunk);
            self.cursor += 1;
        }

        if self.peek().is_some_and(|c| c.width() > width) {
            self.place_long_word(&mut line, width);
        }

        if config.drop_whitespace && line.last().is_some_and(|c| c.is_blank()) {
            line.pop();
        }

        if line.is_empty() {
            return Flow::Continue;
        }

        if self.emits_normally(&line, width) {
            self.lines.push(line.render(indent, ""));
            return Flow::Continue;
        }

        self.truncate(line, indent, width);
        Flow::Stop
    }

    /// Handle a pending chunk that cannot fit on any line as a whole.
    fn place_long_word(&mut self, line: &mut Line<'a>, width: usize) {
        let Some(chunk) = self.peek() else {
            return;
        };
        let room = if width == 0 { 1 } else { width - line.width };

        if !self.config.break_long_words {
            // Keep the word intact; overflow at most one line with it.
            if line.is_empty() {
                line.push(chunk);
                self.cursor += 1;
            }
            return;
        }

        let mut end = room;
        if self.config.break_on_hyphens && chunk.width() > room {
            if let Some(hyphen) = chunk.last_hyphen_before(room) {
                if hyphen > 0 && chunk.as_str().chars().take(hyphen).any(|c| c != '-') {
                    end = hyphen + 1;
                }
            }
        }

        let (head, tail) = chunk.split_at(end);
        tracing::trace!(
            chunk = chunk.as_str(),
            room,
            head = head.as_str(),
            "breaking long word"
        );
        line.push(head);
        // An emptied tail stays pending: it is the chunk the next line's
        // leading-whitespace drop consumes.
        self.pending[self.cursor] = tail;
    }

    fn emits_normally(&self, line: &Line<'_>, width: usize) -> bool {
        let Some(max_lines) = self.config.max_lines else {
            return true;
        };
        if self.lines.len() + 1 < max_lines {
            return true;
        }
        let nothing_left = match self.remaining() {
            0 => true,
            1 => self.config.drop_whitespace && self.pending[self.cursor].is_blank(),
            _ => false,
        };
        nothing_left && line.width <= width
    }

    /// Finish the output with the placeholder.
    ///
    /// Trailing chunks are dropped until the placeholder fits after a
    /// non-blank chunk. If the line empties, the placeholder goes onto the
    /// previous line when that fits the full width, and otherwise stands
    /// alone on its own line.
    fn truncate(&mut self, mut line: Line<'a>, indent: &str, width: usize) {
        let config = self.config;
        let placeholder = config.placeholder.as_str();
        let placeholder_width = text_width(placeholder);

        tracing::debug!(
            lines = self.lines.len() + 1,
            max_lines = ?config.max_lines,
            "truncating wrapped output"
        );

        while let Some(last) = line.last() {
            if !last.is_blank() && line.width + placeholder_width <= width {
                self.lines.push(line.render(indent, placeholder));
                return;
            }
            line.pop();
        }

        if let Some(prev) = self.lines.last_mut() {
            let trimmed = prev.trim_end();
            if text_width(trimmed) + placeholder_width <= config.width {
                *prev = format!("{trimmed}{placeholder}");
                return;
            }
        }
        self.lines.push(format!("{indent}{}", placeholder.trim_start()));
    }
}
