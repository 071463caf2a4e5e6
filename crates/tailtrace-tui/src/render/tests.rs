use super::*;
use crate::test_utils::{create_test_state, create_trace_state, TestTerminal};
use tailtrace_app::{update, Message};

#[test]
fn test_view_shows_source_and_hotkeys() {
    let mut state = create_test_state();
    state.log_path = Some("storage/logs/laravel.log".into());

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &mut state));

    assert!(term.line_contains(0, "laravel.log · vendor hidden"));
    assert!(term.buffer_contains("Waiting for log lines"));
    assert!(term.line_contains(23, "[v] Show Vendor"));
    assert!(term.line_contains(23, "[t] Truncate"));
}

#[test]
fn test_view_without_hotkey_bar() {
    let mut state = create_test_state();
    state.settings.ui.show_hotkeys = false;

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &mut state));

    assert!(!term.buffer_contains("[q] Quit"));
    // Log pane border reaches the last row
    assert!(term.line_contains(23, "└"));
}

#[test]
fn test_hidden_mode_folds_vendor_frames() {
    let mut state = create_trace_state();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &mut state));

    assert!(term.buffer_contains("#…"));
    assert!(term.buffer_contains("UserController.php"));
    assert!(!term.buffer_contains("Pipeline.php"));
}

#[test]
fn test_toggle_shows_vendor_frames() {
    let mut state = create_trace_state();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &mut state));

    update(&mut state, Message::ToggleVendorFrames);
    term.draw_with(|frame| view(frame, &mut state));

    assert!(term.buffer_contains("Pipeline.php"));
    assert!(term.line_contains(0, "all frames"));
    assert!(term.buffer_contains("[v] Hide Vendor"));
}

#[test]
fn test_viewport_matches_pane_interior() {
    let mut state = create_trace_state();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &mut state));

    // 80x24 minus the hotkey row and the pane border
    assert_eq!(state.log_view_state.viewport, Viewport::new(78, 21));
}

#[test]
fn test_exception_message_rendered() {
    let mut state = create_trace_state();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &mut state));

    assert!(term.buffer_contains("RuntimeException"));
    assert!(term.buffer_contains("Trace"));
}
