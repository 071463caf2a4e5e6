//! Log view widget
//!
//! Draws a window of pre-formatted [`PhysicalLine`]s inside a bordered pane.
//! Formatting and scroll anchoring happen before rendering (see
//! `AppState::render_pass`); this widget only maps styles and clips.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};
use tailtrace_app::log_view_state::LogViewState;
use tailtrace_core::{
    strip_ansi_codes, PhysicalLine, Segment, SegmentStyle, VendorVisibility, Viewport,
};

/// Stack trace styling constants
pub mod styles;


/// Log view widget
pub struct LogView<'a> {
    lines: &'a [PhysicalLine],
    source: &'a str,
    visibility: VendorVisibility,
}

impl<'a> LogView<'a> {
    pub fn new(lines: &'a [PhysicalLine]) -> Self {
        Self {
            lines,
            source: "",
            visibility: VendorVisibility::default(),
        }
    }

    /// Name of the tailed source, shown in the title
    pub fn source(mut self, source: &'a str) -> Self {
        self.source = source;
        self
    }

    pub fn visibility(mut self, visibility: VendorVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    fn build_title(&self) -> Line<'static> {
        let title = if self.source.is_empty() {
            format!(" {} ", self.visibility.label())
        } else {
            format!(" {} · {} ", self.source, self.visibility.label())
        };
        Line::from(Span::styled(title, styles::TITLE))
    }

    fn render_empty(&self, inner: Rect, buf: &mut Buffer) {
        let hint = vec![
            Line::from(""),
            Line::from(Span::styled("Waiting for log lines…", styles::EMPTY_HINT)),
        ];
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

fn segment_span(segment: &Segment) -> Span<'static> {
    let style = match segment.style {
        SegmentStyle::Plain => styles::PLAIN,
        SegmentStyle::Dim => styles::DIM,
        SegmentStyle::Exception => styles::EXCEPTION,
    };
    Span::styled(strip_ansi_codes(&segment.text), style)
}

/// Convert a physical line into a ratatui line.
///
/// Escape sequences carried over from the log file are dropped; ratatui
/// styles replace them.
pub fn to_line(line: &PhysicalLine) -> Line<'static> {
    Line::from(line.segments.iter().map(segment_span).collect::<Vec<_>>())
}

impl StatefulWidget for LogView<'_> {
    type State = LogViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .title(self.build_title())
            .borders(Borders::ALL)
            .border_style(styles::BORDER);

        let inner = block.inner(area);
        block.render(area, buf);

        if self.lines.is_empty() {
            self.render_empty(inner, buf);
            return;
        }

        let total_lines = self.lines.len();
        let visible_lines = inner.height as usize;
        state.update_content_size(
            total_lines,
            Viewport::new(inner.width as usize, visible_lines),
        );

        let (start, end) = state.visible_range();
        let window: Vec<Line> = self.lines[start..end].iter().map(to_line).collect();
        Paragraph::new(window).render(inner, buf);

        // Render scrollbar if content exceeds visible area
        if total_lines > visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");

            let mut scrollbar_state =
                ScrollbarState::new(state.total_lines.saturating_sub(visible_lines))
                    .position(start);

            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}

// Non-stateful version for simple rendering
impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = LogViewState::new();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}
