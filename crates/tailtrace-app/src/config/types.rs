//! Configuration types for tailtrace

use serde::{Deserialize, Serialize};
use tailtrace_core::frame::{DEFAULT_APP_BOUNDARY, DEFAULT_VENDOR_PATH};

/// Application settings (.tailtrace/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub tail: TailSettings,

    #[serde(default)]
    pub trace: TraceSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Log tailing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TailSettings {
    /// Lines read from the end of the file on startup
    #[serde(default = "default_initial_lines")]
    pub initial_lines: usize,

    /// Raw lines kept in memory; oldest are dropped first
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Delay between file polls in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for TailSettings {
    fn default() -> Self {
        Self {
            initial_lines: default_initial_lines(),
            max_lines: default_max_lines(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_initial_lines() -> usize {
    100
}

fn default_max_lines() -> usize {
    10_000
}

fn default_poll_interval_ms() -> u64 {
    100
}

/// Stack trace rendering settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TraceSettings {
    /// Start with vendor frames folded
    #[serde(default = "default_true")]
    pub hide_vendor: bool,

    /// Prefix stripped from frame paths (None = working directory)
    #[serde(default)]
    pub base_path: Option<String>,

    /// Path segments that mark a frame as library code
    #[serde(default = "default_vendor_paths")]
    pub vendor_paths: Vec<String>,

    /// Regex patterns for library frames that call into the application
    #[serde(default = "default_app_boundaries")]
    pub app_boundaries: Vec<String>,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            hide_vendor: true,
            base_path: None,
            vendor_paths: default_vendor_paths(),
            app_boundaries: default_app_boundaries(),
        }
    }
}

fn default_vendor_paths() -> Vec<String> {
    vec![DEFAULT_VENDOR_PATH.to_string()]
}

fn default_app_boundaries() -> Vec<String> {
    vec![DEFAULT_APP_BOUNDARY.to_string()]
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the hotkey bar under the log pane
    #[serde(default = "default_true")]
    pub show_hotkeys: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_hotkeys: true }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.tail.initial_lines, 100);
        assert_eq!(settings.tail.max_lines, 10_000);
        assert_eq!(settings.tail.poll_interval_ms, 100);
        assert!(settings.trace.hide_vendor);
        assert!(settings.trace.base_path.is_none());
        assert_eq!(settings.trace.vendor_paths, vec!["/vendor/"]);
        assert!(settings.ui.show_hotkeys);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[trace]
hide_vendor = false
"#,
        )
        .unwrap();
        assert!(!settings.trace.hide_vendor);
        assert_eq!(settings.trace.app_boundaries.len(), 1);
        assert_eq!(settings.tail.initial_lines, 100);
    }

    #[test]
    fn test_empty_document() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.ui.show_hotkeys);
    }
}
