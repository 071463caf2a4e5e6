//! Custom widget components

mod hotkey_bar;
mod log_view;

pub use hotkey_bar::HotkeyBar;
pub use log_view::LogView;
