//! Scroll anchoring across vendor-frame visibility toggles.
//!
//! Toggling visibility changes how many physical rows sit above the user's
//! position. The recalculation walks the sequence *currently on screen* from
//! the scroll index back to the top and derives where the same content will
//! sit in the other mode. The result is stored as a pending index and only
//! clamped once the next render pass knows the new total.
//!
//! The two directions are deliberately asymmetric:
//!
//! - **Hide**: every vendor row above (and at) the index disappears, except
//!   that each run leaves one summary behind:
//!   `pending = index - vendor_rows + runs`.
//! - **Show**: the first summary met carries the cumulative number of rows
//!   folded above it, and every summary visited is replaced by those rows:
//!   `pending = index + first_summary_count - vendor_rows_visited`.

use crate::line::PhysicalLine;

/// Whether vendor stack frames are expanded or folded into summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorVisibility {
    Visible,
    #[default]
    Hidden,
}

impl VendorVisibility {
    pub fn toggle(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Visible => "all frames",
            Self::Hidden => "vendor hidden",
        }
    }
}

/// Size of the area the rows are drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Columns; governs the wrap width
    pub width: usize,
    /// Rows; governs the visible window and clamping
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Top-of-view position plus an adjustment waiting for the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Index of the first visible physical row
    pub index: usize,
    /// Unclamped target set by a visibility toggle
    pub pending_index: Option<i64>,
}

impl ScrollState {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            pending_index: None,
        }
    }

    /// Largest index that still fills the viewport.
    pub fn max_index(total: usize, height: usize) -> usize {
        total.saturating_sub(height)
    }

    /// Apply and clear the pending index, clamped to the new sequence.
    ///
    /// Returns true when a pending index was consumed.
    pub fn resolve(&mut self, total: usize, height: usize) -> bool {
        let Some(pending) = self.pending_index.take() else {
            return false;
        };
        let max = Self::max_index(total, height) as i64;
        self.index = pending.clamp(0, max) as usize;
        true
    }

    /// Keep the plain index inside the sequence when nothing is pending.
    pub fn clamp(&mut self, total: usize, height: usize) {
        self.index = self.index.min(Self::max_index(total, height));
    }
}

fn is_vendor_at(lines: &[PhysicalLine], i: usize) -> bool {
    lines.get(i).is_some_and(|line| line.is_vendor_frame)
}

/// Pending index for a Visible → Hidden toggle, computed on the expanded rows.
pub fn pending_index_on_hide(lines: &[PhysicalLine], index: usize) -> i64 {
    let mut vendor_rows = 0i64;
    let mut runs = 0i64;
    let mut in_run = false;

    for i in (0..=index).rev() {
        let vendor = is_vendor_at(lines, i);
        if vendor {
            vendor_rows += 1;
            if !in_run {
                runs += 1;
            }
        }
        in_run = vendor;
    }

    index as i64 - vendor_rows + runs
}

/// Pending index for a Hidden → Visible toggle, computed on the collapsed rows.
pub fn pending_index_on_show(lines: &[PhysicalLine], index: usize) -> i64 {
    let mut first_summary: Option<usize> = None;
    let mut vendor_rows = 0i64;

    for i in (0..=index).rev() {
        let Some(line) = lines.get(i) else { continue };
        if !line.is_vendor_frame {
            continue;
        }
        if first_summary.is_none() {
            first_summary = line.compressed;
        }
        vendor_rows += 1;
    }

    index as i64 + first_summary.unwrap_or(0) as i64 - vendor_rows
}

/// Pending index when leaving `current` for the other mode.
pub fn recalculate(lines: &[PhysicalLine], index: usize, current: VendorVisibility) -> i64 {
    match current {
        VendorVisibility::Visible => pending_index_on_hide(lines, index),
        VendorVisibility::Hidden => pending_index_on_show(lines, index),
    }
}

#[cfg(test)]
mod tests;
