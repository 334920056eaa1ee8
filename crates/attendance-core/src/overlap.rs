//! Triple-wise overlap between the lesson window and two presence logs.
//!
//! Pupil and tutor logs are merged independently, then every pupil block is
//! compared against every tutor block. A pair contributes when the two
//! blocks strictly overlap; the contributed width is their intersection
//! clamped to the lesson window. Blocks that merely touch (one ends exactly
//! when the other starts) contribute nothing, unlike the merge step where
//! touching spans coalesce into one block.

use crate::error::Result;
use crate::merge::merge_intervals;
use crate::types::{AttendanceLog, Interval, RawAttendance};

/// Result of probing one pupil block against one tutor block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedOverlap {
    /// Whether the two blocks strictly overlap. Touching endpoints do not
    /// count.
    pub overlaps: bool,
    /// Latest of the three starts (lesson, pupil block, tutor block).
    pub start: i64,
    /// Earliest of the three ends.
    pub end: i64,
}

/// Probe two presence blocks against the lesson window.
///
/// Two blocks overlap iff `max(a.start, b.start) < min(a.end, b.end)`; the
/// comparison is strict, so adjacency is not overlap. The clamp bounds are
/// computed whatever the flag says; callers count `end - start` only when
/// `overlaps` is true.
pub fn clamped_overlap(lesson: Interval, a: Interval, b: Interval) -> ClampedOverlap {
    ClampedOverlap {
        overlaps: a.start.max(b.start) < a.end.min(b.end),
        start: lesson.start.max(a.start).max(b.start),
        end: lesson.end.min(a.end).min(b.end),
    }
}

/// Total time during which the lesson, the pupil, and the tutor were all
/// present at once.
///
/// An empty pupil or tutor log short-circuits to 0. Otherwise both logs are
/// merged and every pupil block is checked against every tutor block; each
/// strictly overlapping pair adds its lesson-clamped width. The merged
/// blocks per party are disjoint, so no instant is counted twice.
pub fn total_shared_time(log: &AttendanceLog) -> i64 {
    if log.pupil.is_empty() || log.tutor.is_empty() {
        return 0;
    }

    let pupil = merge_intervals(&log.pupil);
    let tutor = merge_intervals(&log.tutor);

    let mut total = 0;
    for p in &pupil {
        for t in &tutor {
            let probe = clamped_overlap(log.lesson, *p, *t);
            if probe.overlaps {
                total += probe.end - probe.start;
            }
        }
    }

    total
}

/// Validate a raw attendance map and compute the shared time.
///
/// # Errors
/// Returns `AttendanceError::LessonShape`, `OddEventList`, or
/// `InvertedInterval` when the input violates the shape contract.
pub fn shared_time(raw: &RawAttendance) -> Result<i64> {
    let log = AttendanceLog::from_raw(raw)?;
    Ok(total_shared_time(&log))
}

/// Parse a JSON attendance map and compute the shared time.
///
/// # Errors
/// Returns `AttendanceError::Json` when the input is not valid JSON, plus
/// any validation error from [`shared_time`].
pub fn shared_time_from_json(json: &str) -> Result<i64> {
    let raw: RawAttendance = serde_json::from_str(json)?;
    shared_time(&raw)
}
