//! Attendance input types and boundary validation.
//!
//! The wire format is a JSON map with three keys ("lesson", "pupil",
//! "tutor"); [`RawAttendance`] mirrors it field for field. Validation into
//! [`AttendanceLog`] happens once, at the boundary, so the merge and
//! overlap code never sees malformed pairs.

use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, Result};

/// A single presence span with integer endpoints, `start <= end`.
///
/// The unit is whatever the caller logs in -- Unix seconds in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Interval { start, end }
    }

    /// Width of the span in input units.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Unvalidated attendance input, one key per party.
///
/// `lesson` is expected to hold exactly two values; `pupil` and `tutor` are
/// flat start/end sequences of even length, unsorted and possibly
/// overlapping. Shapes are checked by [`AttendanceLog::from_raw`], not by
/// the deserializer, so shape violations surface as attendance errors
/// rather than serde errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAttendance {
    pub lesson: Vec<i64>,
    pub pupil: Vec<i64>,
    pub tutor: Vec<i64>,
}

/// Validated attendance input: the lesson window plus paired (but still
/// unmerged) presence intervals per party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceLog {
    pub lesson: Interval,
    pub pupil: Vec<Interval>,
    pub tutor: Vec<Interval>,
}

impl AttendanceLog {
    /// Validate a raw attendance map.
    ///
    /// # Errors
    /// Returns `LessonShape` unless the lesson holds exactly two values,
    /// `OddEventList` when a presence log cannot be paired, and
    /// `InvertedInterval` when any pair (the lesson included) has its
    /// start after its end.
    pub fn from_raw(raw: &RawAttendance) -> Result<Self> {
        if raw.lesson.len() != 2 {
            return Err(AttendanceError::LessonShape(raw.lesson.len()));
        }
        let lesson = checked_interval("lesson", raw.lesson[0], raw.lesson[1])?;

        Ok(AttendanceLog {
            lesson,
            pupil: pair_events("pupil", &raw.pupil)?,
            tutor: pair_events("tutor", &raw.tutor)?,
        })
    }
}

fn checked_interval(party: &'static str, start: i64, end: i64) -> Result<Interval> {
    if start > end {
        return Err(AttendanceError::InvertedInterval { party, start, end });
    }
    Ok(Interval { start, end })
}

/// Pair a flat start/end sequence into intervals, preserving input order.
fn pair_events(party: &'static str, events: &[i64]) -> Result<Vec<Interval>> {
    if events.len() % 2 != 0 {
        return Err(AttendanceError::OddEventList {
            party,
            len: events.len(),
        });
    }

    events
        .chunks_exact(2)
        .map(|pair| checked_interval(party, pair[0], pair[1]))
        .collect()
}
