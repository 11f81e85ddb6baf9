//! Reference corpus for line packing.
//!
//! Each case pairs an input and configuration with the exact lines the
//! greedy packer must produce. The corpus covers:
//! - Plain paragraphs at several widths
//! - Indents
//! - Hyphen-aware and plain long-word breaking
//! - Unbroken long words
//! - Sentence-ending fixes
//! - Truncation with `max_lines`
//! - `shorten`, `dedent` and `indent`

use parawrap::{TextWrapper, WrapConfig, dedent, fill, indent, shorten, wrap};

// =============================================================================
// Corpus Data
// =============================================================================

const PARAGRAPH: &str = "The textwrap module provides some convenience functions, as well as \
    TextWrapper, the class that does all the work. If you're just wrapping or filling one or \
    two text strings, the convenience functions should be good enough; otherwise, you should \
    use an instance of TextWrapper for efficiency.";

/// A wrapping case with its expected output.
#[derive(Debug)]
struct WrapCase {
    description: &'static str,
    input: &'static str,
    config: WrapConfig,
    expected: &'static [&'static str],
}

impl WrapCase {
    fn new(
        description: &'static str,
        input: &'static str,
        config: WrapConfig,
        expected: &'static [&'static str],
    ) -> Self {
        Self {
            description,
            input,
            config,
            expected,
        }
    }

    fn check(&self) {
        let lines = wrap(self.input, &self.config)
            .unwrap_or_else(|err| panic!("{}: unexpected error {err}", self.description));
        assert_eq!(lines, self.expected, "{}", self.description);
    }
}

fn corpus() -> Vec<WrapCase> {
    vec![
        WrapCase::new(
            "paragraph at 40",
            PARAGRAPH,
            WrapConfig::new(40),
            &[
                "The textwrap module provides some",
                "convenience functions, as well as",
                "TextWrapper, the class that does all the",
                "work. If you're just wrapping or filling",
                "one or two text strings, the convenience",
                "functions should be good enough;",
                "otherwise, you should use an instance of",
                "TextWrapper for efficiency.",
            ],
        ),
        WrapCase::new(
            "paragraph with indents",
            PARAGRAPH,
            WrapConfig::new(40)
                .initial_indent("    ")
                .subsequent_indent("  "),
            &[
                "    The textwrap module provides some",
                "  convenience functions, as well as",
                "  TextWrapper, the class that does all",
                "  the work. If you're just wrapping or",
                "  filling one or two text strings, the",
                "  convenience functions should be good",
                "  enough; otherwise, you should use an",
                "  instance of TextWrapper for",
                "  efficiency.",
            ],
        ),
        WrapCase::new(
            "paragraph truncated to three lines",
            PARAGRAPH,
            WrapConfig::new(25).max_lines(Some(3)),
            &[
                "The textwrap module",
                "provides some convenience",
                "functions, as well [...]",
            ],
        ),
        WrapCase::new(
            "paragraph with sentence fixes",
            PARAGRAPH,
            WrapConfig::new(60).fix_sentence_endings(true),
            &[
                "The textwrap module provides some convenience functions, as",
                "well as TextWrapper, the class that does all the work.  If",
                "you're just wrapping or filling one or two text strings, the",
                "convenience functions should be good enough; otherwise, you",
                "should use an instance of TextWrapper for efficiency.",
            ],
        ),
        WrapCase::new(
            "narrow paragraph, long words kept whole",
            "as well as TextWrapper, the class",
            WrapConfig::new(8).break_long_words(false),
            &["as well", "as", "TextWrapper,", "the", "class"],
        ),
        WrapCase::new(
            "em-dash and compound words",
            "Hello there -- you goof-ball, use the -b option!",
            WrapConfig::new(10),
            &["Hello", "there --", "you goof-", "ball, use", "the -b", "option!"],
        ),
        WrapCase::new(
            "hyphen preferred inside long word",
            "this-is-a-useful-feature-for-reformatting-posts-from-tim-peters'ly",
            WrapConfig::new(10),
            &[
                "this-is-a-",
                "useful-",
                "feature-",
                "for-reform",
                "atting-",
                "posts-",
                "from-tim-",
                "peters'ly",
            ],
        ),
        WrapCase::new(
            "placeholder replaces trailing words",
            "Hello there, how are you this fine day?",
            WrapConfig::new(12).max_lines(Some(2)).placeholder(" ..."),
            &["Hello there,", "how are ..."],
        ),
        WrapCase::new(
            "placeholder joins the previous line",
            "aaaa bbbbbbbbb cc",
            WrapConfig::new(10).max_lines(Some(2)).placeholder("..."),
            &["aaaa..."],
        ),
        WrapCase::new(
            "placeholder on its own line",
            "Hello there, how are you",
            WrapConfig::new(12)
                .max_lines(Some(2))
                .initial_indent("* ")
                .subsequent_indent("  "),
            &["* Hello", "  [...]"],
        ),
        WrapCase::new(
            "leading whitespace only on first line",
            "   leading spaces here",
            WrapConfig::new(10),
            &["   leading", "spaces", "here"],
        ),
        WrapCase::new("empty input", "", WrapConfig::new(10), &[]),
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn corpus_matches_reference() {
    for case in corpus() {
        case.check();
    }
}

#[test]
fn corpus_lines_respect_width() {
    for case in corpus() {
        if !case.config.break_long_words {
            continue;
        }
        for line in wrap(case.input, &case.config).unwrap() {
            assert!(
                line.chars().count() <= case.config.width,
                "{}: {line:?} exceeds {}",
                case.description,
                case.config.width
            );
        }
    }
}

#[test]
fn corpus_fill_matches_wrap() {
    for case in corpus() {
        let filled = fill(case.input, &case.config).unwrap();
        assert_eq!(filled, case.expected.join("\n"), "{}", case.description);
    }
}

#[test]
fn corpus_wrapper_matches_free_function() {
    for case in corpus() {
        let wrapper = TextWrapper::new(case.config.clone()).unwrap();
        assert_eq!(wrapper.wrap(case.input), case.expected, "{}", case.description);
    }
}

#[test]
fn shorten_examples() {
    let config = WrapConfig::default();
    assert_eq!(shorten("Hello  world!", 12, &config).unwrap(), "Hello world!");
    assert_eq!(shorten("Hello  world!", 11, &config).unwrap(), "Hello [...]");
    assert_eq!(
        shorten(PARAGRAPH, 40, &config).unwrap(),
        "The textwrap module provides some [...]"
    );
}

#[test]
fn dedent_and_indent_examples() {
    assert_eq!(dedent("    hello\n      world\n    "), "hello\n  world\n");
    assert_eq!(indent("hello\n\n \nworld", " "), " hello\n\n \n world");
    assert_eq!(indent("one\r\ntwo\rthree", "| "), "| one\n| two\n| three");
    assert_eq!(dedent("   \n  "), "\n");

    let block = "    first\n      second\n";
    assert_eq!(dedent(&dedent(block)), dedent(block));
}

#[test]
fn rewrap_is_stable() {
    let config = WrapConfig::new(33);
    let first = wrap(PARAGRAPH, &config).unwrap();
    let second = wrap(&first.join(" "), &config).unwrap();
    assert_eq!(first, second);
}
