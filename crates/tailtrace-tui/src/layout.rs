//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Bordered log pane
    pub logs: Rect,

    /// One-line hotkey bar, when enabled
    pub hotkeys: Option<Rect>,
}

/// Split the screen into the log pane and an optional hotkey bar.
pub fn create(area: Rect, show_hotkeys: bool) -> ScreenAreas {
    if !show_hotkeys {
        return ScreenAreas {
            logs: area,
            hotkeys: None,
        };
    }

    let [logs, hotkeys] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    ScreenAreas {
        logs,
        hotkeys: Some(hotkeys),
    }
}

/// Area inside the log pane border; this is the viewport rows are wrapped to.
pub fn log_inner(logs: Rect) -> Rect {
    Block::bordered().inner(logs)
}
