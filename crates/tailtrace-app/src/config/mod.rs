//! Configuration file parsing for tailtrace
//!
//! Settings live in `.tailtrace/config.toml` under the working directory.
//! Every field is optional; anything missing falls back to its default.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, CONFIG_FILENAME, TAILTRACE_DIR};
pub use types::{Settings, TailSettings, TraceSettings, UiSettings};
