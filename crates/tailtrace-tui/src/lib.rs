//! tailtrace-tui - Terminal UI for tailtrace
//!
//! Draws the formatted log pane and hotkey bar with ratatui and drives the
//! poll/update/draw loop on top of tailtrace-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
