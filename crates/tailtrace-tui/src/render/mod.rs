//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::Frame;
use tailtrace_app::{hotkeys, AppState};
use tailtrace_core::Viewport;

use super::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Formatting is redone every frame at the current pane size, so a resize
/// or a visibility toggle takes effect on the next draw. The only state
/// touched is the log view's scroll bookkeeping.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let areas = layout::create(frame.area(), state.settings.ui.show_hotkeys);

    let inner = layout::log_inner(areas.logs);
    let lines = state.render_pass(Viewport::new(inner.width as usize, inner.height as usize));

    let source = state.source_name();
    let log_view = widgets::LogView::new(&lines)
        .source(&source)
        .visibility(state.visibility);
    frame.render_stateful_widget(log_view, areas.logs, &mut state.log_view_state);

    if let Some(area) = areas.hotkeys {
        let bindings = hotkeys(state);
        let bar = widgets::HotkeyBar::new(&bindings).auto_scroll(state.log_view_state.auto_scroll);
        frame.render_widget(bar, area);
    }
}
