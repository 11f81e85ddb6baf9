#![forbid(unsafe_code)]

//! Whitespace normalization applied before tokenizing.

use std::borrow::Cow;

use crate::config::WrapConfig;

/// Characters the wrapping engine treats as whitespace.
pub const WHITESPACE: [char; 6] = ['\t', '\n', '\x0b', '\x0c', '\r', ' '];

/// Whether `c` is one of the engine's whitespace characters.
#[inline]
#[must_use]
pub fn is_wrap_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Expand tabs to spaces, padding to the next multiple of `tab_size`.
///
/// The column is tracked per line: it resets after `\n` and `\r`. A
/// `tab_size` of zero deletes tabs.
#[must_use]
pub fn expand_tabs(text: &str, tab_size: usize) -> Cow<'_, str> {
    if !text.contains('\t') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                if tab_size > 0 {
                    let pad = tab_size - column % tab_size;
                    out.extend(std::iter::repeat_n(' ', pad));
                    column += pad;
                }
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    Cow::Owned(out)
}

/// Map every whitespace character to a plain space.
#[must_use]
pub fn replace_whitespace(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c != ' ' && is_wrap_whitespace(c)) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_wrap_whitespace(c) { ' ' } else { c })
            .collect(),
    )
}

/// Apply the tab and whitespace policies of `config` to `text`.
#[must_use]
pub fn normalize<'a>(text: &'a str, config: &WrapConfig) -> Cow<'a, str> {
    let text = if config.expand_tabs {
        expand_tabs(text, config.tab_size)
    } else {
        Cow::Borrowed(text)
    };
    if !config.replace_whitespace {
        return text;
    }
    match text {
        Cow::Borrowed(s) => replace_whitespace(s),
        Cow::Owned(s) => match replace_whitespace(&s) {
            Cow::Borrowed(_) => Cow::Owned(s),
            Cow::Owned(replaced) => Cow::Owned(replaced),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // expand_tabs
    // ==========================================================================

    #[test]
    fn expand_tabs_leading() {
        assert_eq!(expand_tabs("\tx", 8), "        x");
    }

    #[test]
    fn expand_tabs_uses_column() {
        assert_eq!(expand_tabs("ab\tc", 4), "ab  c");
        assert_eq!(expand_tabs("abcd\te", 4), "abcd    e");
    }

    #[test]
    fn expand_tabs_column_resets_per_line() {
        assert_eq!(expand_tabs("abc\n\tx", 4), "abc\n    x");
        assert_eq!(expand_tabs("abc\r\tx", 4), "abc\r    x");
    }

    #[test]
    fn expand_tabs_zero_size_removes_tabs() {
        assert_eq!(expand_tabs("a\tb\t", 0), "ab");
    }

    #[test]
    fn expand_tabs_without_tabs_borrows() {
        assert!(matches!(expand_tabs("plain text", 8), Cow::Borrowed(_)));
    }

    #[test]
    fn expand_tabs_counts_chars_not_bytes() {
        assert_eq!(expand_tabs("é\tx", 4), "é   x");
    }

    // ==========================================================================
    // replace_whitespace / normalize
    // ==========================================================================

    #[test]
    fn replace_whitespace_maps_all_classes() {
        assert_eq!(replace_whitespace("a\tb\nc\x0bd\x0ce\rf g"), "a b c d e f g");
    }

    #[test]
    fn replace_whitespace_leaves_other_spaces() {
        assert_eq!(replace_whitespace("a\u{a0}b"), "a\u{a0}b");
    }

    #[test]
    fn normalize_expands_before_replacing() {
        let config = WrapConfig::new(10).tab_size(4);
        assert_eq!(normalize("a\tb\nc", &config), "a   b c");
    }

    #[test]
    fn normalize_without_expansion_replaces_tab_with_one_space() {
        let config = WrapConfig::new(10).expand_tabs(false);
        assert_eq!(normalize("a\tb", &config), "a b");
    }

    #[test]
    fn normalize_disabled_is_identity() {
        let config = WrapConfig::new(10)
            .expand_tabs(false)
            .replace_whitespace(false);
        assert_eq!(normalize("a\tb\n", &config), "a\tb\n");
    }
}
