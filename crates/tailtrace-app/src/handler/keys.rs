//! Key event handling

use crate::hotkeys;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key event to a message.
///
/// Registered hotkeys take precedence over the built-in navigation keys.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    hotkeys::lookup(state, key).or_else(|| handle_key_navigation(key))
}

fn handle_key_navigation(key: InputKey) -> Option<Message> {
    match key {
        // Force quit
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Line scrolling
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),

        // Page scrolling
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::PageUp),
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::PageDown),

        // Jumps
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),

        _ => None,
    }
}
