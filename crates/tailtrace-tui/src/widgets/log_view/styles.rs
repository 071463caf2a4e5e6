//! Stack trace styling constants for log view rendering

use ratatui::style::{Color, Modifier, Style};

/// Plain log text
pub const PLAIN: Style = Style::new();

/// Box borders, frame numbers, method tails, and vendor summaries
pub const DIM: Style = Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM);

/// Exception message text
pub const EXCEPTION: Style = Style::new().fg(Color::Red);

/// Pane border
pub const BORDER: Style = Style::new().fg(Color::DarkGray);

/// Pane title
pub const TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Placeholder shown while the buffer is empty
pub const EMPTY_HINT: Style = Style::new().fg(Color::DarkGray);
