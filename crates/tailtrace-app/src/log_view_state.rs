//! Log view state - scroll position, viewport bounds, and tail following.
//!
//! This module defines the state used by both the app handler layer (for
//! scroll commands) and the TUI layer (for rendering the log view).

use tailtrace_core::prelude::*;
use tailtrace_core::{ScrollState, Viewport};

/// State for log view scrolling
#[derive(Debug, Clone)]
pub struct LogViewState {
    /// Scroll index plus any adjustment left by a visibility toggle
    pub scroll: ScrollState,
    /// Whether auto-scroll is enabled (follow new content)
    pub auto_scroll: bool,
    /// Total number of physical lines (set during render)
    pub total_lines: usize,
    /// Area the log is drawn into (set during render)
    pub viewport: Viewport,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl LogViewState {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::default(),
            auto_scroll: true,
            total_lines: 0,
            viewport: Viewport::default(),
        }
    }

    /// Index of the first visible line
    pub fn offset(&self) -> usize {
        self.scroll.index
    }

    fn max_offset(&self) -> usize {
        ScrollState::max_index(self.total_lines, self.viewport.height)
    }

    /// Range of line indices to draw, end exclusive.
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.scroll.index.min(self.total_lines);
        let end = (start + self.viewport.height).min(self.total_lines);
        (start, end)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll.index = self.scroll.index.saturating_sub(n);
        self.auto_scroll = false;
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.max_offset();
        self.scroll.index = (self.scroll.index + n).min(max_offset);

        // Re-enable auto-scroll if at bottom
        if self.scroll.index >= max_offset {
            self.auto_scroll = true;
        }
    }

    /// Scroll to top
    pub fn scroll_to_top(&mut self) {
        self.scroll.index = 0;
        self.auto_scroll = false;
    }

    /// Scroll to bottom and enable auto-scroll
    pub fn scroll_to_bottom(&mut self) {
        self.scroll.index = self.max_offset();
        self.auto_scroll = true;
    }

    /// Page up
    pub fn page_up(&mut self) {
        let page = self.viewport.height.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    /// Page down
    pub fn page_down(&mut self) {
        let page = self.viewport.height.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Park an unclamped target for the next render pass.
    pub fn set_pending_index(&mut self, pending: i64) {
        self.scroll.pending_index = Some(pending);
    }

    /// Update with new content size.
    ///
    /// A pending index wins over tail following; once it is applied, the
    /// view keeps following only if it landed on the last page.
    pub fn update_content_size(&mut self, total: usize, viewport: Viewport) {
        self.total_lines = total;
        self.viewport = viewport;

        if self.scroll.resolve(total, viewport.height) {
            self.auto_scroll = self.scroll.index >= self.max_offset();
            debug!(index = self.scroll.index, total, "Resolved pending scroll index");
        } else if self.auto_scroll {
            self.scroll.index = self.max_offset();
        } else {
            self.scroll.clamp(total, viewport.height);
        }
    }

    /// Forget everything about the previous content.
    pub fn reset(&mut self) {
        self.scroll = ScrollState::default();
        self.total_lines = 0;
        self.auto_scroll = true;
    }
}
