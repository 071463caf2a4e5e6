//! Hotkey bar widget
//!
//! One row under the log pane listing the active key bindings, with the
//! follow indicator on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tailtrace_app::Hotkey;

const KEY_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const LABEL_STYLE: Style = Style::new().fg(Color::Gray);

/// Hotkey bar widget
pub struct HotkeyBar<'a> {
    hotkeys: &'a [Hotkey],
    auto_scroll: bool,
}

impl<'a> HotkeyBar<'a> {
    pub fn new(hotkeys: &'a [Hotkey]) -> Self {
        Self {
            hotkeys,
            auto_scroll: true,
        }
    }

    /// Whether the log view is following new lines
    pub fn auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    fn bindings(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, hotkey) in self.hotkeys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{}]", hotkey.key), KEY_STYLE));
            spans.push(Span::styled(format!(" {}", hotkey.label), LABEL_STYLE));
        }
        Line::from(spans)
    }

    fn scroll_indicator(&self) -> Span<'static> {
        if self.auto_scroll {
            Span::styled("⬇ Auto ", Style::default().fg(Color::Green))
        } else {
            Span::styled("⬆ Manual ", Style::default().fg(Color::Yellow))
        }
    }
}

impl Widget for HotkeyBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let indicator = self.scroll_indicator();
        let [bindings_area, indicator_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(indicator.width() as u16),
        ])
        .areas(area);

        Paragraph::new(self.bindings()).render(bindings_area, buf);
        Paragraph::new(indicator).render(indicator_area, buf);
    }
}
