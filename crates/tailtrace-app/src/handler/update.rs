//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use tailtrace_core::prelude::*;

use super::{keys::handle_key, scroll, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Log Source Messages
        // ─────────────────────────────────────────────────────────
        Message::LinesAppended(lines) => {
            trace!("Appending {} lines", lines.len());
            state.append_lines(lines);
            UpdateResult::none()
        }

        Message::SourceReset => {
            debug!("Log source reset, clearing buffer");
            state.reset_source();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Hotkey Actions
        // ─────────────────────────────────────────────────────────
        Message::ToggleVendorFrames => {
            state.toggle_vendor_frames();
            UpdateResult::none()
        }

        Message::TruncateLog => {
            if state.truncate_log() {
                UpdateResult::action(UpdateAction::RewindTail)
            } else {
                UpdateResult::none()
            }
        }
    }
}
