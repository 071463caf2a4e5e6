//! Folding runs of vendor summaries down to one row.

use crate::line::PhysicalLine;

/// Keep only the bottom-most row of every maximal run of vendor rows.
///
/// Summaries carry a cumulative count, so the last summary of a run holds
/// the total for that run and everything above it. Non-vendor rows pass
/// through untouched and relative order is preserved.
pub fn collapse_vendor_frames(lines: Vec<PhysicalLine>) -> Vec<PhysicalLine> {
    let mut out = Vec::with_capacity(lines.len());
    let mut iter = lines.into_iter().peekable();

    while let Some(line) = iter.next() {
        let run_continues = line.is_vendor_frame
            && iter.peek().is_some_and(|next| next.is_vendor_frame);
        if !run_continues {
            out.push(line);
        }
    }

    out
}
