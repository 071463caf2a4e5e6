//! Settings parser for .tailtrace/config.toml

use super::types::{Settings, TraceSettings};
use std::path::Path;
use tailtrace_core::prelude::*;
use tailtrace_core::{LineFormatter, PathClassifier};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const TAILTRACE_DIR: &str = ".tailtrace";

const DEFAULT_CONFIG: &str = r#"# tailtrace configuration

[tail]
initial_lines = 100     # Lines shown from the end of the file on startup
max_lines = 10000       # Lines kept in memory (oldest dropped first)
poll_interval_ms = 100  # How often the file is checked for new lines

[trace]
hide_vendor = true      # Start with vendor frames folded into summaries
# Prefix stripped from frame paths (defaults to the working directory)
# base_path = "/var/www/html"
vendor_paths = ["/vendor/"]
# Library frames matching these patterns call into application code
# and are always shown
app_boundaries = ['BoundMethod\.php\([0-9]+\): App']

[ui]
show_hotkeys = true     # Hotkey bar under the log pane
"#;

/// Load settings from .tailtrace/config.toml
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(TAILTRACE_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config in .tailtrace/
///
/// An existing config file is left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let config_dir = project_path.join(TAILTRACE_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create .tailtrace dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(())
}

impl TraceSettings {
    /// Build the line formatter described by these settings.
    ///
    /// Frames are shortened by `base_path`, or by `working_dir` when unset.
    pub fn formatter(&self, working_dir: &Path) -> Result<LineFormatter> {
        let classifier = PathClassifier::new(&self.vendor_paths, &self.app_boundaries)?;
        let base_path = match &self.base_path {
            Some(base) => base.clone(),
            None => working_dir.to_string_lossy().into_owned(),
        };
        Ok(LineFormatter::new(classifier).with_base_path(base_path))
    }
}
