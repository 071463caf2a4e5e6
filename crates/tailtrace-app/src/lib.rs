//! tailtrace-app - Application state and orchestration for tailtrace
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, configuration loading, the hotkey registry, and log file
//! tailing. It has no terminal dependencies; key events arrive as
//! [`InputKey`](input_key::InputKey).

pub mod config;
pub mod handler;
pub mod hotkeys;
pub mod input_key;
pub mod log_buffer;
pub mod log_view_state;
pub mod message;
pub mod state;
pub mod tailer;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use hotkeys::{hotkeys, Hotkey};
pub use input_key::InputKey;
pub use log_buffer::LogBuffer;
pub use log_view_state::LogViewState;
pub use message::Message;
pub use state::{AppPhase, AppState};
pub use tailer::Tailer;
