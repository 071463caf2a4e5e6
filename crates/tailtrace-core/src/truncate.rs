//! Emptying the tailed log file.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::{debug, warn};

/// Truncate `path` to zero length, then run `clear` to empty the in-memory
/// buffer.
///
/// The file is created when it does not exist. If it can not be opened the
/// failure is logged, `clear` is not called and `false` is returned; callers
/// are not expected to surface it.
pub fn truncate(path: &Path, clear: impl FnOnce()) -> bool {
    let opened = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path);

    match opened {
        Ok(file) => {
            drop(file);
            clear();
            debug!("Truncated log file {}", path.display());
            true
        }
        Err(e) => {
            warn!("Failed to truncate {}: {}", path.display(), e);
            false
        }
    }
}
