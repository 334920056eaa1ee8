//! # attendance-core
//!
//! Shared lesson-attendance time from raw pupil/tutor presence logs.
//!
//! Given a lesson window and two flat start/end presence logs, computes the
//! total time during which the lesson, the pupil, and the tutor all
//! overlapped. Raw logs may be unsorted and self-overlapping; each is
//! canonicalized into sorted, non-overlapping blocks before the pairwise
//! comparison.
//!
//! ## Quick start
//!
//! ```rust
//! use attendance_core::shared_time_from_json;
//!
//! let total = shared_time_from_json(
//!     r#"{"lesson": [10, 20], "pupil": [9, 12, 15, 18], "tutor": [11, 16]}"#,
//! )
//! .unwrap();
//! assert_eq!(total, 2);
//! ```
//!
//! ## Modules
//!
//! - [`types`] — interval types, wire-format input, boundary validation
//! - [`merge`] — raw presence spans → sorted, non-overlapping blocks
//! - [`overlap`] — triple-wise overlap probe and accumulator
//! - [`error`] — error types

pub mod error;
pub mod merge;
pub mod overlap;
pub mod types;

pub use error::AttendanceError;
pub use merge::merge_intervals;
pub use overlap::{
    clamped_overlap, shared_time, shared_time_from_json, total_shared_time, ClampedOverlap,
};
pub use types::{AttendanceLog, Interval, RawAttendance};
