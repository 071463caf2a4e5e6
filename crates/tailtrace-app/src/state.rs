//! Application state (Model in TEA pattern)

use std::path::{Path, PathBuf};

use tailtrace_core::prelude::*;
use tailtrace_core::{
    recalculate, truncate, LineFormatter, PhysicalLine, VendorVisibility, Viewport,
};

use crate::config::Settings;
use crate::log_buffer::LogBuffer;
use crate::log_view_state::LogViewState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Tailing and rendering
    #[default]
    Running,
    /// Quit requested; the driver loop exits after this update
    Quitting,
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Raw lines read from the log
    pub buffer: LogBuffer,

    /// Scroll position and viewport of the log pane
    pub log_view_state: LogViewState,

    /// Whether vendor frames are folded
    pub visibility: VendorVisibility,

    pub formatter: LineFormatter,

    /// File being tailed; None when lines are fed directly
    pub log_path: Option<PathBuf>,

    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings, formatter: LineFormatter, log_path: Option<PathBuf>) -> Self {
        let visibility = if settings.trace.hide_vendor {
            VendorVisibility::Hidden
        } else {
            VendorVisibility::Visible
        };

        Self {
            phase: AppPhase::Running,
            buffer: LogBuffer::new(settings.tail.max_lines),
            log_view_state: LogViewState::new(),
            visibility,
            formatter,
            log_path,
            settings,
        }
    }

    /// Build state from settings, resolving frame shortening against `working_dir`.
    pub fn with_settings(
        settings: Settings,
        working_dir: &Path,
        log_path: Option<PathBuf>,
    ) -> Result<Self> {
        let formatter = settings.trace.formatter(working_dir)?;
        Ok(Self::new(settings, formatter, log_path))
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Name shown in the log pane title
    pub fn source_name(&self) -> String {
        match &self.log_path {
            Some(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => "stdin".to_string(),
        }
    }

    fn format(&self, width: usize) -> Vec<PhysicalLine> {
        self.formatter.render(self.buffer.iter(), width, self.visibility)
    }

    /// One full render pass for `viewport`.
    ///
    /// Reformats the whole buffer in the current mode, resolves any pending
    /// scroll adjustment against the new total, and returns every physical
    /// line. The caller draws the window given by
    /// [`LogViewState::visible_range`].
    pub fn render_pass(&mut self, viewport: Viewport) -> Vec<PhysicalLine> {
        let lines = self.format(viewport.width);
        self.log_view_state.update_content_size(lines.len(), viewport);
        lines
    }

    /// Flip vendor visibility, anchoring the scroll position.
    ///
    /// The pending index is computed on the sequence as it is displayed now
    /// and applied by the next [`render_pass`](Self::render_pass).
    pub fn toggle_vendor_frames(&mut self) {
        let current = self.format(self.log_view_state.viewport.width);
        let index = self.log_view_state.offset();
        let pending = recalculate(&current, index, self.visibility);

        self.visibility = self.visibility.toggle();
        self.log_view_state.set_pending_index(pending);

        debug!(
            index,
            pending,
            mode = self.visibility.label(),
            "Toggled vendor frames"
        );
    }

    /// Empty the tailed file and, if that worked, the buffer.
    pub fn truncate_log(&mut self) -> bool {
        let Some(path) = &self.log_path else {
            return false;
        };

        let truncated = truncate(path, || self.buffer.clear());
        if truncated {
            self.log_view_state.reset();
        }
        truncated
    }

    /// Add freshly tailed lines.
    ///
    /// When the buffer is full and the user has scrolled away from the
    /// tail, the scroll index moves up by the rows the evicted lines took,
    /// so the visible content stays put.
    pub fn append_lines(&mut self, lines: Vec<String>) {
        let old_len = self.buffer.len();
        let evicting = (old_len + lines.len()).saturating_sub(self.buffer.capacity());
        let index = self.log_view_state.offset();
        if evicting == 0 || self.log_view_state.auto_scroll || index == 0 {
            self.buffer.extend(lines);
            return;
        }

        let width = self.log_view_state.viewport.width;
        let rows_before = self.format(width).len();
        self.buffer.extend(lines);

        let survivors = old_len.saturating_sub(evicting);
        let rows_kept = self
            .formatter
            .render(self.buffer.iter().take(survivors), width, self.visibility)
            .len();
        let shift = rows_before.saturating_sub(rows_kept);
        self.log_view_state.scroll.index = index.saturating_sub(shift);
        debug!(evicting, shift, "Evicted lines above the scroll position");
    }

    /// The source was truncated or replaced behind our back.
    pub fn reset_source(&mut self) {
        self.buffer.clear();
        self.log_view_state.reset();
    }
}
