//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Complete lines appended to the tailed file
    LinesAppended(Vec<String>),

    /// The tailed file was truncated or replaced; the buffer restarts
    SourceReset,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Hotkey Actions
    // ─────────────────────────────────────────────────────────
    /// Fold or expand vendor stack frames
    ToggleVendorFrames,

    /// Empty the tailed file and the buffer
    TruncateLog,

    /// Leave the application
    Quit,
}
