//! Canonicalize presence intervals into sorted, non-overlapping form.
//!
//! Sorts intervals by start time, then coalesces overlapping or touching
//! neighbours into single blocks.

use crate::types::Interval;

/// Merge overlapping or touching intervals.
///
/// Sorts by start (stable, so equal starts keep their input order) and
/// coalesces left to right. Two spans merge when the next start is `<=` the
/// running end -- a span that begins exactly where the previous one ends
/// becomes part of the same block.
///
/// Returns a sorted list of pairwise non-overlapping intervals; empty input
/// yields an empty list.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.start);

    let mut merged: Vec<Interval> = Vec::new();
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or touching — extend the current block.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}
