//! Error types for attendance computations.

use thiserror::Error;

/// Errors raised at the input boundary. The core computation itself cannot
/// fail on validated input.
#[derive(Error, Debug)]
pub enum AttendanceError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The lesson list did not hold exactly two values (start, end).
    #[error("lesson must be exactly 2 values, got {0}")]
    LessonShape(usize),

    /// A presence log had an odd number of values and cannot be paired.
    #[error("{party} event list has odd length {len}; values must pair start/end")]
    OddEventList { party: &'static str, len: usize },

    /// A pair whose start lies after its end.
    #[error("{party} interval [{start}, {end}] has start after end")]
    InvertedInterval {
        party: &'static str,
        start: i64,
        end: i64,
    },
}

/// Convenience alias used throughout attendance-core.
pub type Result<T> = std::result::Result<T, AttendanceError>;
