//! # tailtrace-core - Trace Rendering Core
//!
//! Foundation crate for tailtrace. Turns raw log lines into styled terminal
//! rows, folds vendor stack frames into summaries, and keeps the scroll
//! position anchored when that folding is toggled.
//!
//! This crate has **zero internal dependencies** and performs no terminal
//! I/O. The only file-system access is [`truncate()`].
//!
//! ## Public API
//!
//! ### Rows (`line`)
//! - [`PhysicalLine`] - One terminal row with vendor and summary metadata
//! - [`Segment`], [`SegmentStyle`] - Styled runs of text inside a row
//!
//! ### Wrapping (`wrap`)
//! - [`wrap()`] - Hard column wrap with hanging indent, escape-aware
//! - [`wrap_segments()`] - Same algorithm over styled segments
//!
//! ### Formatting (`format`, `frame`, `collapse`)
//! - [`LineFormatter`] - Raw line to physical rows, one render pass at a time
//! - [`FrameClassifier`] - Vendor/application strategy, [`PathClassifier`] by default
//! - [`collapse_vendor_frames()`] - Keep one summary per vendor run
//!
//! ### Scrolling (`scroll`)
//! - [`VendorVisibility`] - Visible/Hidden mode
//! - [`ScrollState`] - Scroll index plus a pending adjustment
//! - [`recalculate()`] - Pending index for a visibility toggle
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tailtrace_core::prelude::*;
//! ```

pub mod ansi;
pub mod collapse;
pub mod error;
pub mod format;
pub mod frame;
pub mod line;
pub mod logging;
pub mod scroll;
pub mod truncate;
pub mod wrap;

/// Prelude for common imports used throughout all tailtrace crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use ansi::{display_width, strip_ansi_codes};
pub use collapse::collapse_vendor_frames;
pub use error::{Error, Result, ResultExt};
pub use format::{LineFormatter, TraceLayout, EXCEPTION_MARKER, STACKTRACE_MARKER};
pub use frame::{is_stack_frame, FrameClassifier, PathClassifier};
pub use line::{PhysicalLine, Segment, SegmentStyle};
pub use scroll::{
    pending_index_on_hide, pending_index_on_show, recalculate, ScrollState, VendorVisibility,
    Viewport,
};
pub use truncate::truncate;
pub use wrap::{pad, row_count, wrap, wrap_segments};
