#![forbid(unsafe_code)]

//! Plain-text paragraph wrapping.
//!
//! This crate reflows paragraphs into lines of a maximum width and offers a
//! few related text-shape helpers:
//! - [`wrap`] / [`fill`] - greedy line packing with indents, hyphen-aware
//!   breaks and optional truncation
//! - [`shorten`] - collapse whitespace and truncate to one line
//! - [`dedent`] - strip the common leading margin
//! - [`indent`] / [`indent_with`] - prefix selected lines
//! - [`TextWrapper`] - a validated, reusable configuration
//!
//! Widths count characters (Unicode scalar values), not terminal cells.
//!
//! The pipeline is [`normalize`](normalize::normalize) →
//! [`split_chunks`](chunk::split_chunks) →
//! [`fix_sentence_endings`](sentence::fix_sentence_endings) (optional) →
//! [`pack`](pack::pack).
//!
//! # Example
//! ```
//! use parawrap::{WrapConfig, dedent, fill, indent, shorten, wrap};
//!
//! let config = WrapConfig::new(20).subsequent_indent("  ");
//! let lines = wrap("The quick brown fox jumps over the lazy dog", &config).unwrap();
//! assert_eq!(lines, vec!["The quick brown fox", "  jumps over the", "  lazy dog"]);
//!
//! let text = fill("The quick brown fox", &WrapConfig::new(10)).unwrap();
//! assert_eq!(text, "The quick\nbrown fox");
//!
//! let short = shorten("The quick brown fox", 15, &WrapConfig::default()).unwrap();
//! assert_eq!(short, "The quick [...]");
//!
//! assert_eq!(dedent("  a\n    b"), "a\n  b");
//! assert_eq!(indent("a\n\nb", "> "), "> a\n\n> b");
//! ```

pub mod chunk;
pub mod config;
pub mod error;
pub mod margin;
pub mod normalize;
pub mod pack;
pub mod sentence;
pub mod wrap;

pub use chunk::{Chunk, split_chunks, text_width};
pub use config::{DEFAULT_PLACEHOLDER, DEFAULT_TAB_SIZE, DEFAULT_WIDTH, WrapConfig};
pub use error::{ErrorKind, WrapError};
pub use margin::{dedent, indent, indent_with};
pub use wrap::{TextWrapper, fill, fill_width, shorten, wrap, wrap_width};
