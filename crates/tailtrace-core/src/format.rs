//! Per-line formatting of raw log text into physical rows.
//!
//! Each raw line is dispatched, in priority order, to one of:
//! - the closing line of a JSON exception payload (panel footer)
//! - a line embedding a JSON exception (message + nested exception)
//! - the `[stacktrace]` marker (panel header)
//! - plain text (anything that is not a `#N ` frame record)
//! - a stack frame, rendered inside the panel or folded into a summary
//!
//! Folding needs a running total of the rows hidden so far in the pass. That
//! total is threaded through [`LineFormatter::format_line`] as an explicit
//! accumulator and restarts at zero for every [`LineFormatter::render`].

use regex::Regex;
use std::sync::LazyLock;

use crate::collapse::collapse_vendor_frames;
use crate::frame::{is_stack_frame, FrameClassifier, PathClassifier};
use crate::line::{PhysicalLine, Segment};
use crate::scroll::VendorVisibility;
use crate::wrap::{pad, row_count, wrap, wrap_segments};

/// Marker that opens an embedded exception payload
pub const EXCEPTION_MARKER: &str = "{\"exception\":\"[object] ";

/// Marker that opens a stack trace
pub const STACKTRACE_MARKER: &str = "[stacktrace]";

/// Trimmed text of the line closing an exception payload
const PAYLOAD_CLOSE: &str = "\"}";

/// Hanging indent for wrapped frame continuation rows
pub const FRAME_INDENT: usize = 4;

/// Columns outside each panel border
const PANEL_MARGIN: usize = 2;

/// Border plus inner padding on both sides of the panel content
const PANEL_CHROME: usize = 4;

/// A single-digit frame number at the start of the line
static SINGLE_DIGIT_FRAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(\d)(\D|$)").expect("Invalid SINGLE_DIGIT_FRAME_REGEX")
});

/// Frame number, file part, and optional `:`-prefixed method tail
static FRAME_PARTS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#\d+)(.*?)(:.*)?$").expect("Invalid FRAME_PARTS_REGEX"));

/// Column budget for one render pass, derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLayout {
    /// Full viewport width, used for plain text
    pub width: usize,
    /// Outer width of the trace panel
    pub box_width: usize,
    /// Width available to frame text inside the panel
    pub content_width: usize,
}

impl TraceLayout {
    pub fn new(width: usize) -> Self {
        let box_width = width.saturating_sub(PANEL_MARGIN);
        Self {
            width,
            box_width,
            content_width: box_width.saturating_sub(PANEL_CHROME),
        }
    }
}

/// Turns raw log lines into styled physical rows.
#[derive(Debug, Clone)]
pub struct LineFormatter<C = PathClassifier> {
    classifier: C,
    base_path: Option<String>,
}

impl Default for LineFormatter<PathClassifier> {
    fn default() -> Self {
        Self::new(PathClassifier::default())
    }
}

impl<C: FrameClassifier> LineFormatter<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            base_path: None,
        }
    }

    /// Prefix removed from frame lines to keep them short.
    ///
    /// Trailing slashes are dropped so `/vendor/` survives for
    /// classification; an empty or root path disables shortening.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let trimmed = base_path.trim_end_matches('/');
        self.base_path = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Full pass: format every raw line, then fold vendor runs when hidden.
    pub fn render<'a, I>(
        &self,
        lines: I,
        width: usize,
        visibility: VendorVisibility,
    ) -> Vec<PhysicalLine>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let formatted = self.format_all(lines, width, visibility);
        match visibility {
            VendorVisibility::Hidden => collapse_vendor_frames(formatted),
            VendorVisibility::Visible => formatted,
        }
    }

    /// Format every raw line with a fresh compression counter.
    pub fn format_all<'a, I>(
        &self,
        lines: I,
        width: usize,
        visibility: VendorVisibility,
    ) -> Vec<PhysicalLine>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let layout = TraceLayout::new(width);
        let (rows, _) = lines
            .into_iter()
            .fold((Vec::new(), 0), |(mut rows, compressed), line| {
                let (formatted, compressed) =
                    self.format_line(line, layout, visibility, compressed);
                rows.extend(formatted);
                (rows, compressed)
            });
        rows
    }

    /// Format one raw line.
    ///
    /// `compressed` is the number of rows folded away earlier in the pass;
    /// the updated total is returned alongside the rows.
    pub fn format_line(
        &self,
        line: &str,
        layout: TraceLayout,
        visibility: VendorVisibility,
        compressed: usize,
    ) -> (Vec<PhysicalLine>, usize) {
        if line.trim() == PAYLOAD_CLOSE {
            return (vec![panel_footer(layout)], compressed);
        }

        if let Some((message, exception)) = line.split_once(EXCEPTION_MARKER) {
            return (format_exception(message, exception, layout), compressed);
        }

        if line.contains(STACKTRACE_MARKER) {
            return (vec![panel_header(layout)], compressed);
        }

        if !is_stack_frame(line) {
            let rows = wrap(line, layout.width, 0)
                .into_iter()
                .map(PhysicalLine::plain)
                .collect();
            return (rows, compressed);
        }

        self.format_frame(line, layout, visibility, compressed)
    }

    fn format_frame(
        &self,
        line: &str,
        layout: TraceLayout,
        visibility: VendorVisibility,
        compressed: usize,
    ) -> (Vec<PhysicalLine>, usize) {
        let frame = self.shorten(line);
        let vendor = self.classifier.is_vendor_frame(&frame);

        if vendor && visibility == VendorVisibility::Hidden {
            let compressed = compressed + row_count(&frame, layout.content_width, FRAME_INDENT);
            let summary = PhysicalLine::dim(format!(" │ {} │ ", pad("#…", layout.content_width)))
                .summary(compressed);
            return (vec![summary], compressed);
        }

        let rows = wrap_segments(&highlight_frame(&frame), layout.content_width, FRAME_INDENT)
            .into_iter()
            .map(|row| panel_row(row, layout).vendor(vendor))
            .collect();

        (rows, compressed)
    }

    /// Drop the base path and zero-pad single-digit frame numbers.
    fn shorten(&self, line: &str) -> String {
        let line = match &self.base_path {
            Some(base) => line.replace(base.as_str(), ""),
            None => line.to_string(),
        };
        SINGLE_DIGIT_FRAME_REGEX
            .replace(&line, "#0${1}${2}")
            .into_owned()
    }
}

fn panel_header(layout: TraceLayout) -> PhysicalLine {
    PhysicalLine::dim(format!(
        " ╭─Trace{}╮",
        "─".repeat(layout.content_width.saturating_sub(4))
    ))
}

fn panel_footer(layout: TraceLayout) -> PhysicalLine {
    PhysicalLine::dim(format!(
        " ╰{}╯",
        "═".repeat(layout.box_width.saturating_sub(2))
    ))
}

/// Message rows at full width, then nested exception rows shifted one column.
fn format_exception(message: &str, exception: &str, layout: TraceLayout) -> Vec<PhysicalLine> {
    let message_rows = wrap(message, layout.width, 0)
        .into_iter()
        .map(|row| PhysicalLine::new(vec![Segment::exception(row)]));

    let exception_rows = wrap(exception, layout.width.saturating_sub(1), 0)
        .into_iter()
        .map(|row| PhysicalLine::new(vec![Segment::plain(" "), Segment::exception(row)]));

    message_rows.chain(exception_rows).collect()
}

/// Dim the frame number and method tail, leave the file path as is.
fn highlight_frame(frame: &str) -> Vec<Segment> {
    let Some(caps) = FRAME_PARTS_REGEX.captures(frame) else {
        return vec![Segment::plain(frame)];
    };

    let mut segments = vec![Segment::dim(&caps[1])];
    if let Some(file) = caps.get(2).filter(|m| !m.is_empty()) {
        segments.push(Segment::plain(file.as_str()));
    }
    if let Some(tail) = caps.get(3) {
        segments.push(Segment::dim(tail.as_str()));
    }
    segments
}

/// Box a wrapped frame row: ` │ ` content padded to the panel, ` │ `.
fn panel_row(row: Vec<Segment>, layout: TraceLayout) -> PhysicalLine {
    let used: usize = row.iter().map(Segment::width).sum();
    let mut segments = Vec::with_capacity(row.len() + 3);
    segments.push(Segment::dim(" │ "));
    segments.extend(row);
    if layout.content_width > used {
        segments.push(Segment::plain(" ".repeat(layout.content_width - used)));
    }
    segments.push(Segment::dim(" │"));
    segments.push(Segment::plain(" "));
    PhysicalLine::new(segments)
}
