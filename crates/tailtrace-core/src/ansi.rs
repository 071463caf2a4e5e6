//! ANSI escape code handling utilities
//!
//! Tailed log files routinely carry colour codes written by the producing
//! application. Those sequences occupy bytes but no terminal columns, so every
//! width computation in the pipeline goes through [`display_width`] and the
//! [`tokens`] iterator rather than `str::len`.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthChar;

/// Regex pattern for ANSI escape sequences.
///
/// Covers:
/// - CSI sequences: ESC [ ... letter (colors, cursor, etc.)
/// - OSC sequences: ESC ] ... BEL or ST (hyperlinks, titles)
/// - Simple escapes: ESC letter
static ANSI_ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \x1b\[[0-9;?]*[A-Za-z]               # CSI sequences
        | \x1b\][^\x07\x1b]*(?:\x07|\x1b\\)  # OSC sequences
        | \x1b[A-Za-z]                       # Simple escapes
        ",
    )
    .expect("ANSI regex pattern is valid")
});

/// Same alternatives as [`ANSI_ESCAPE_PATTERN`], anchored at the start of input.
static ANSI_ESCAPE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\x1b\[[0-9;?]*[A-Za-z]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b[A-Za-z])")
        .expect("ANSI prefix regex pattern is valid")
});

/// Start dim (faint) text.
pub const DIM: &str = "\x1b[2m";
/// End dim text without touching colours.
pub const UNDIM: &str = "\x1b[22m";
/// Start red foreground.
pub const RED: &str = "\x1b[31m";
/// Reset foreground colour.
pub const DEFAULT_FG: &str = "\x1b[39m";

/// Concealed vendor marker written by older renderers into summary lines.
pub const CONCEALED_VENDOR_MARK: &str = "\x1b[8mV\x1b[28m";

/// A piece of text as seen by the terminal: either a zero-width escape
/// sequence or a single printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Escape(&'a str),
    Char(char),
}

/// Split `input` into escape sequences and characters, in order.
///
/// A lone ESC that does not start a recognised sequence is yielded as a
/// character so no byte is ever dropped.
pub fn tokens(input: &str) -> impl Iterator<Item = Token<'_>> {
    let mut rest = input;
    std::iter::from_fn(move || {
        let c = rest.chars().next()?;
        if c == '\x1b' {
            if let Some(m) = ANSI_ESCAPE_PREFIX.find(rest) {
                let (escape, tail) = rest.split_at(m.end());
                rest = tail;
                return Some(Token::Escape(escape));
            }
        }
        rest = &rest[c.len_utf8()..];
        Some(Token::Char(c))
    })
}

/// Printable width of a single character. Control characters count as zero.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Printable column width of `input`, ignoring escape sequences.
pub fn display_width(input: &str) -> usize {
    tokens(input)
        .map(|token| match token {
            Token::Escape(_) => 0,
            Token::Char(c) => char_width(c),
        })
        .sum()
}

/// Strip all ANSI escape sequences from a string.
///
/// # Examples
///
/// ```
/// use tailtrace_core::strip_ansi_codes;
///
/// let input = "\x1b[31mred text\x1b[0m";
/// assert_eq!(strip_ansi_codes(input), "red text");
///
/// // Box-drawing characters are preserved
/// let input = "│ #01 /app/Http/Kernel.php(12)";
/// assert_eq!(strip_ansi_codes(input), input);
/// ```
pub fn strip_ansi_codes(input: &str) -> String {
    ANSI_ESCAPE_PATTERN.replace_all(input, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_simple_color_codes() {
        let input = "\x1b[31mred text\x1b[0m";
        assert_eq!(strip_ansi_codes(input), "red text");
    }

    #[test]
    fn test_strip_256_color_codes() {
        let input = "\x1b[38;5;244m│ #03 message\x1b[0m";
        assert_eq!(strip_ansi_codes(input), "│ #03 message");
    }

    #[test]
    fn test_strip_conceal_marker() {
        assert_eq!(strip_ansi_codes(CONCEALED_VENDOR_MARK), "V");
    }

    #[test]
    fn test_preserve_box_drawing() {
        let input = "╭─Trace───╮\n│ frame │\n╰═══════╯";
        assert_eq!(strip_ansi_codes(input), input);
    }

    #[test]
    fn test_osc_hyperlink() {
        let input = "\x1b]8;;https://example.com\x1b\\Link Text\x1b]8;;\x1b\\";
        assert_eq!(strip_ansi_codes(input), "Link Text");
    }

    #[test]
    fn test_tokens_split_escapes_from_chars() {
        let collected: Vec<Token> = tokens("a\x1b[2mb\x1b[22m").collect();
        assert_eq!(
            collected,
            vec![
                Token::Char('a'),
                Token::Escape("\x1b[2m"),
                Token::Char('b'),
                Token::Escape("\x1b[22m"),
            ]
        );
    }

    #[test]
    fn test_tokens_lone_escape_is_a_char() {
        let collected: Vec<Token> = tokens("\x1b").collect();
        assert_eq!(collected, vec![Token::Char('\x1b')]);
    }

    #[test]
    fn test_display_width_ignores_escapes() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width(CONCEALED_VENDOR_MARK), 1);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("#…"), 2);
    }
}
