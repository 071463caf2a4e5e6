//! tailtrace - live log viewer that folds vendor stack frames
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use tailtrace_app::config::{
    init_config_dir, load_settings, Settings, CONFIG_FILENAME, TAILTRACE_DIR,
};
use tailtrace_app::{AppState, Tailer};
use tailtrace_core::{logging, Error};
use tracing::{error, info};

const DEFAULT_LOG_FILE: &str = "storage/logs/laravel.log";

/// tailtrace - follow a Laravel log with vendor frames folded away
#[derive(Parser, Debug)]
#[command(name = "tailtrace")]
#[command(about = "Follow a log file, folding vendor stack frames", long_about = None)]
struct Args {
    /// Log file to follow
    #[arg(value_name = "FILE", default_value = DEFAULT_LOG_FILE)]
    file: PathBuf,

    /// Prefix stripped from frame paths (defaults to the working directory)
    #[arg(long, value_name = "PATH")]
    base_path: Option<String>,

    /// Start with vendor frames expanded
    #[arg(long)]
    show_vendor: bool,

    /// Lines shown from the end of the file on startup
    #[arg(long, value_name = "N")]
    lines: Option<usize>,

    /// Write a default .tailtrace/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    /// Command line flags win over the config file
    fn apply(&self, settings: &mut Settings) {
        if let Some(base_path) = &self.base_path {
            settings.trace.base_path = Some(base_path.clone());
        }
        if self.show_vendor {
            settings.trace.hide_vendor = false;
        }
        if let Some(lines) = self.lines {
            settings.tail.initial_lines = lines;
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let working_dir = std::env::current_dir()?;

    if args.init_config {
        init_config_dir(&working_dir)?;
        eprintln!(
            "Config written to {}",
            working_dir
                .join(TAILTRACE_DIR)
                .join(CONFIG_FILENAME)
                .display()
        );
        return Ok(());
    }

    // Log to file, since the TUI owns stdout
    logging::init()?;

    let mut settings = load_settings(&working_dir);
    args.apply(&mut settings);

    let log_path = working_dir.join(&args.file);
    // A missing file is waited for, a missing directory never fills in
    if log_path.parent().is_some_and(|dir| !dir.is_dir()) {
        return Err(Error::log_file_missing(&log_path).into());
    }
    info!("Log file: {}", log_path.display());

    let state = AppState::with_settings(settings, &working_dir, Some(log_path.clone()))?;
    let tailer = Tailer::new(log_path);

    let result = tailtrace_tui::run(state, tailer);
    if let Err(ref e) = result {
        error!("Exiting with error: {}", e);
    }

    info!("tailtrace exiting");
    Ok(result?)
}
