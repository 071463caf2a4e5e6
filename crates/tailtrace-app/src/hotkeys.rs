//! Hotkey registry.
//!
//! Each binding pairs a key with the message it sends and the label shown in
//! the hotkey bar. Labels depend on state, so the registry is rebuilt from
//! the current [`AppState`] whenever it is consulted.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// A registered key binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    pub key: InputKey,
    pub message: Message,
    pub label: &'static str,
}

impl Hotkey {
    pub fn new(key: InputKey, message: Message, label: &'static str) -> Self {
        Self {
            key,
            message,
            label,
        }
    }
}

/// Bindings active for `state`, in display order.
pub fn hotkeys(state: &AppState) -> Vec<Hotkey> {
    let vendor_label = if state.visibility.is_hidden() {
        "Show Vendor"
    } else {
        "Hide Vendor"
    };

    let mut bindings = vec![Hotkey::new(
        InputKey::Char('v'),
        Message::ToggleVendorFrames,
        vendor_label,
    )];

    if state.log_path.is_some() {
        bindings.push(Hotkey::new(
            InputKey::Char('t'),
            Message::TruncateLog,
            "Truncate",
        ));
    }

    bindings.push(Hotkey::new(InputKey::Char('q'), Message::Quit, "Quit"));
    bindings
}

/// Message bound to `key`, if any.
pub fn lookup(state: &AppState, key: InputKey) -> Option<Message> {
    hotkeys(state)
        .into_iter()
        .find(|hotkey| hotkey.key == key)
        .map(|hotkey| hotkey.message)
}
