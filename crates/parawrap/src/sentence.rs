#![forbid(unsafe_code)]

//! Two spaces after sentence endings.
//!
//! A chunk ends a sentence when it ends in a lowercase ASCII letter, one of
//! `.`, `!` or `?`, and optionally a closing quote. The test looks at each
//! chunk alone, so abbreviations like "Dr." followed by a capitalized word
//! are not detected and "e.g." is treated as a sentence end.

use crate::chunk::Chunk;

const TWO_SPACES: &str = "  ";

/// Whether `chunk` looks like the last word of a sentence.
#[must_use]
pub fn ends_sentence(chunk: &str) -> bool {
    let body = chunk
        .strip_suffix(['"', '\''])
        .unwrap_or(chunk);
    let mut tail = body.chars().rev();
    matches!(
        (tail.next(), tail.next()),
        (Some('.' | '!' | '?'), Some('a'..='z'))
    )
}

/// Widen the single space after every sentence ending to two spaces.
pub fn fix_sentence_endings(chunks: &mut [Chunk<'_>]) {
    let mut i = 0;
    while i + 1 < chunks.len() {
        if chunks[i + 1].as_str() == " " && ends_sentence(chunks[i].as_str()) {
            chunks[i + 1] = Chunk::new(TWO_SPACES);
            i += 2;
        } else {
            i += 1;
        }
    }
}
