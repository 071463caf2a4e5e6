//! Main TUI runner - entry point and event loop
//!
//! The loop is single threaded: poll the log file, apply whatever it
//! produced, draw, then wait for a key for at most one poll interval.

use std::time::Duration;

use tailtrace_app::message::Message;
use tailtrace_app::{handler, AppState, Tailer, UpdateAction};
use tailtrace_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Seeds the buffer with the last `tail.initial_lines` lines of the file,
/// then follows it.
pub fn run(mut state: AppState, mut tailer: Tailer) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let initial = tailer
        .backfill(state.settings.tail.initial_lines)
        .with_context(|| format!("Failed to read {}", tailer.path().display()))?;
    info!(
        "Following {} ({} lines backfilled, watcher: {})",
        tailer.path().display(),
        initial.len(),
        if tailer.is_watching() { "on" } else { "off" }
    );
    state.append_lines(initial);

    let mut term = terminal::init()?;
    let result = run_loop(&mut term, &mut state, &mut tailer);
    terminal::restore()?;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    tailer: &mut Tailer,
) -> Result<()> {
    let poll_interval = Duration::from_millis(state.settings.tail.poll_interval_ms);

    while !state.should_quit() {
        match tailer.poll() {
            Ok(messages) => {
                for message in messages {
                    process_message(state, message, tailer);
                }
            }
            Err(e) => warn!("Failed to read {}: {}", tailer.path().display(), e),
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(poll_interval)? {
            process_message(state, message, tailer);
        }
    }

    info!("Quit requested, restoring terminal");
    Ok(())
}

/// Process a message through the TEA update function, following up
/// messages and carrying out actions.
pub fn process_message(state: &mut AppState, message: Message, tailer: &mut Tailer) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, tailer);
        }

        msg = result.message;
    }
}

fn handle_action(action: UpdateAction, tailer: &mut Tailer) {
    match action {
        UpdateAction::RewindTail => tailer.rewind(),
    }
}
