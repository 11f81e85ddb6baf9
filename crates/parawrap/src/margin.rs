#![forbid(unsafe_code)]

//! Removing and adding line prefixes.
//!
//! # Example
//! ```
//! use parawrap::{dedent, indent};
//!
//! assert_eq!(dedent("    hello\n      world\n    "), "hello\n  world\n");
//! assert_eq!(indent("hello\n\nworld", "> "), "> hello\n\n> world");
//! ```

#[inline]
fn is_indent_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Split `text` at `\r\n`, `\r` or `\n`, dropping the terminators.
///
/// Always yields at least one line; text ending in a terminator yields a
/// trailing empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(i) => {
                let skip = if current[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[i + skip..]);
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

fn leading_indent(line: &str) -> &str {
    let rest = line.trim_start_matches(is_indent_char);
    &line[..line.len() - rest.len()]
}

/// Longest common prefix of `a` and `b`.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .find(|&((_, x), y)| x != y)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i);
    &a[..len]
}

/// Remove the whitespace margin shared by all lines.
///
/// Lines made only of spaces and tabs are emptied first and do not take
/// part in finding the margin. Tabs and spaces are never considered equal,
/// so `"  x"` and `"\tx"` share no margin. Only `\n` separates lines here.
///
/// Whitespace-only lines are emptied even when no margin is found, so
/// `dedent("   \n  ")` returns `"\n"` rather than the input.
#[must_use]
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            if !line.is_empty() && line.chars().all(is_indent_char) {
                ""
            } else {
                line
            }
        })
        .collect();

    let margin = lines
        .iter()
        .copied()
        .filter(|line| !line.is_empty())
        .map(leading_indent)
        .reduce(|margin, indent| common_prefix(margin, indent))
        .unwrap_or("");

    lines
        .iter()
        .map(|&line| line.strip_prefix(margin).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every line that is not empty or whitespace-only.
#[must_use]
pub fn indent(text: &str, prefix: &str) -> String {
    indent_with(text, prefix, |line| !line.trim().is_empty())
}

/// Prefix every line for which `predicate` holds.
///
/// Lines break at `\n`, `\r\n` or `\r` and are rejoined with `\n`. The
/// predicate sees each line with a `\n` appended, including the last one.
/// Empty text is a single empty line, and a trailing terminator leaves an
/// empty last line.
#[must_use]
pub fn indent_with<F>(text: &str, prefix: &str, predicate: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut out = String::with_capacity(text.len() + prefix.len());
    let mut line_buf = String::new();
    for line in split_lines(text) {
        line_buf.clear();
        line_buf.push_str(line);
        line_buf.push('\n');
        if predicate(&line_buf) {
            out.push_str(prefix);
        }
        out.push_str(&line_buf);
    }
    out.pop();
    out
}
