//! Abstract input key event, independent of terminal library.
//!
//! Keys are converted from crossterm events at the TUI boundary so the
//! application layer and its tests never depend on terminal types.

use std::fmt;

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
}

impl fmt::Display for InputKey {
    /// Short label used in the hotkey bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKey::Char(c) => write!(f, "{}", c),
            InputKey::CharCtrl(c) => write!(f, "^{}", c.to_ascii_uppercase()),
            InputKey::Up => f.write_str("↑"),
            InputKey::Down => f.write_str("↓"),
            InputKey::Home => f.write_str("Home"),
            InputKey::End => f.write_str("End"),
            InputKey::PageUp => f.write_str("PgUp"),
            InputKey::PageDown => f.write_str("PgDn"),
            InputKey::Enter => f.write_str("Enter"),
            InputKey::Esc => f.write_str("Esc"),
        }
    }
}
