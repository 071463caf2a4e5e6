//! Physical lines: one terminal row produced by the formatter.
//!
//! A row is a list of styled [`Segment`]s plus the metadata the scroll
//! anchoring needs. The metadata lives in fields, never inside the text, so
//! it can not leak into the printable width.

use crate::ansi::{self, display_width};

/// Visual treatment of a segment. Colours are chosen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentStyle {
    #[default]
    Plain,
    /// Faint text: box borders, frame numbers, method tails
    Dim,
    /// Exception message text
    Exception,
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: SegmentStyle,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: SegmentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Plain)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Dim)
    }

    pub fn exception(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Exception)
    }

    /// Printable columns, escape sequences excluded.
    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// One renderable terminal row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhysicalLine {
    pub segments: Vec<Segment>,
    /// Row belongs to a vendor stack frame (shown or summarised)
    pub is_vendor_frame: bool,
    /// Cumulative compressed-line count, set only on collapsed summaries
    pub compressed: Option<usize>,
}

impl PhysicalLine {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            is_vendor_frame: false,
            compressed: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Segment::plain(text)])
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(vec![Segment::dim(text)])
    }

    /// Tag the row as part of a vendor frame.
    pub fn vendor(mut self, is_vendor_frame: bool) -> Self {
        self.is_vendor_frame = is_vendor_frame;
        self
    }

    /// Mark the row as a collapsed summary carrying `count` compressed lines.
    pub fn summary(mut self, count: usize) -> Self {
        self.is_vendor_frame = true;
        self.compressed = Some(count);
        self
    }

    pub fn is_summary(&self) -> bool {
        self.compressed.is_some()
    }

    /// Concatenated text of all segments, escape sequences included.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Printable columns occupied by the row.
    pub fn width(&self) -> usize {
        self.segments.iter().map(Segment::width).sum()
    }

    /// Render as a string with standard SGR sequences for the styles.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.style {
                SegmentStyle::Plain => out.push_str(&segment.text),
                SegmentStyle::Dim => {
                    out.push_str(ansi::DIM);
                    out.push_str(&segment.text);
                    out.push_str(ansi::UNDIM);
                }
                SegmentStyle::Exception => {
                    out.push_str(ansi::RED);
                    out.push_str(&segment.text);
                    out.push_str(ansi::DEFAULT_FG);
                }
            }
        }
        out
    }
}
