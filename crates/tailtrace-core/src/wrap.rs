//! Hard wrapping of logical lines into physical rows.
//!
//! Rows are cut on printable columns, not bytes: escape sequences are zero
//! width and stay glued to the character that follows them, so a colour
//! code is never split from the text it colours. Continuation rows may carry
//! a hanging indent, in which case their content wraps at `width - indent`.

use crate::ansi::{char_width, tokens, Token};
use crate::line::{Segment, SegmentStyle};

/// Wrap `text` into rows of at most `width` printable columns.
///
/// Rows after the first are left-padded with `indent` spaces when
/// `0 < indent < width`. A row whose first character is wider than
/// `width - indent` is written without the indent. Always returns at least
/// one row.
///
/// ```
/// use tailtrace_core::wrap;
///
/// assert_eq!(wrap("abcdefg", 3, 0), vec!["abc", "def", "g"]);
/// assert_eq!(wrap("abcdefg", 4, 2), vec!["abcd", "  ef", "  g"]);
/// ```
pub fn wrap(text: &str, width: usize, indent: usize) -> Vec<String> {
    wrap_segments(&[Segment::plain(text)], width, indent)
        .into_iter()
        .map(|row| row.into_iter().map(|segment| segment.text).collect())
        .collect()
}

/// Number of rows `text` occupies once wrapped. Same algorithm as [`wrap`].
pub fn row_count(text: &str, width: usize, indent: usize) -> usize {
    wrap(text, width, indent).len()
}

/// Wrap styled segments, keeping each character's style.
pub fn wrap_segments(segments: &[Segment], width: usize, indent: usize) -> Vec<Vec<Segment>> {
    let mut builder = RowBuilder::new(width, indent);

    for segment in segments {
        for token in tokens(&segment.text) {
            match token {
                Token::Escape(escape) => builder.pending.push((segment.style, escape)),
                Token::Char(c) => builder.push_char(c, segment.style),
            }
        }
    }

    builder.finish()
}

struct RowBuilder<'a> {
    rows: Vec<Vec<Segment>>,
    row: Vec<Segment>,
    /// Printable columns used by content on the current row (indent excluded)
    used: usize,
    /// Content capacity of the current row
    limit: usize,
    width: usize,
    indent: usize,
    /// Escape sequences waiting for the next printable character
    pending: Vec<(SegmentStyle, &'a str)>,
}

impl<'a> RowBuilder<'a> {
    fn new(width: usize, indent: usize) -> Self {
        let width = width.max(1);
        let indent = if indent < width { indent } else { 0 };
        Self {
            rows: Vec::new(),
            row: Vec::new(),
            used: 0,
            limit: width,
            width,
            indent,
            pending: Vec::new(),
        }
    }

    fn push_char(&mut self, c: char, style: SegmentStyle) {
        let w = char_width(c);
        if w > 0 && self.used > 0 && self.used + w > self.limit {
            self.break_row();
        }
        if w > self.limit && self.used == 0 && self.limit < self.width {
            self.drop_indent();
        }
        self.flush_pending();

        let mut buf = [0u8; 4];
        push_text(&mut self.row, style, c.encode_utf8(&mut buf));
        self.used += w;
    }

    fn break_row(&mut self) {
        self.rows.push(std::mem::take(&mut self.row));
        self.used = 0;
        self.limit = self.width - self.indent;
        if self.indent > 0 {
            self.row.push(Segment::plain(" ".repeat(self.indent)));
        }
    }

    /// Give the current continuation row the full width.
    fn drop_indent(&mut self) {
        if let Some(first) = self.row.first_mut() {
            first.text.drain(..self.indent);
            if first.text.is_empty() {
                self.row.remove(0);
            }
        }
        self.limit = self.width;
    }

    fn flush_pending(&mut self) {
        for (style, escape) in self.pending.drain(..) {
            push_text(&mut self.row, style, escape);
        }
    }

    fn finish(mut self) -> Vec<Vec<Segment>> {
        self.flush_pending();
        self.rows.push(self.row);
        self.rows
    }
}

fn push_text(row: &mut Vec<Segment>, style: SegmentStyle, text: &str) {
    match row.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => row.push(Segment::new(text, style)),
    }
}

/// Right-pad `text` with spaces up to `width` printable columns.
pub fn pad(text: &str, width: usize) -> String {
    let visible = crate::ansi::display_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(visible));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(visible)));
    out
}
