//! Property-based tests for interval merging and the shared-time
//! accumulator using proptest.
//!
//! These verify invariants that should hold for *any* well-formed input,
//! not just the fixed vectors in `attendance_vectors.rs`.

use attendance_core::{merge_intervals, total_shared_time, AttendanceLog, Interval};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// An interval of width 0..=500 starting somewhere in 0..=10_000.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (0i64..=10_000, 0i64..=500).prop_map(|(start, width)| Interval::new(start, start + width))
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 1..=40)
}

/// Intervals confined to the `[lo, hi]` window.
fn arb_intervals_within(lo: i64, hi: i64) -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(
        (lo..=hi, lo..=hi).prop_map(|(a, b)| Interval::new(a.min(b), a.max(b))),
        1..=20,
    )
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether the unit `[t, t+1)` is covered by any interval in the list.
fn covers(intervals: &[Interval], t: i64) -> bool {
    intervals.iter().any(|iv| iv.start <= t && t < iv.end)
}

// ---------------------------------------------------------------------------
// Property 1: Merged output is sorted and strictly separated
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merged_is_sorted_and_strictly_separated(intervals in arb_intervals()) {
        let merged = merge_intervals(&intervals);

        for iv in &merged {
            prop_assert!(iv.start <= iv.end);
        }
        // Touching blocks must have coalesced, so gaps are strict.
        for pair in merged.windows(2) {
            prop_assert!(
                pair[0].end < pair[1].start,
                "blocks {:?} and {:?} overlap or touch",
                pair[0],
                pair[1]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Merging is idempotent
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_is_idempotent(intervals in arb_intervals()) {
        let once = merge_intervals(&intervals);
        let twice = merge_intervals(&once);
        prop_assert_eq!(once, twice);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Merging ignores the order of input pairs
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merge_ignores_pair_order(
        (original, shuffled) in arb_intervals()
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(merge_intervals(&original), merge_intervals(&shuffled));
    }
}

// ---------------------------------------------------------------------------
// Property 4: The shared time is symmetric in pupil and tutor
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn shared_time_is_symmetric(
        a in arb_intervals(),
        b in arb_intervals(),
    ) {
        let lesson = Interval::new(2_000, 8_000);
        let forward = AttendanceLog { lesson, pupil: a.clone(), tutor: b.clone() };
        let backward = AttendanceLog { lesson, pupil: b, tutor: a };
        prop_assert_eq!(total_shared_time(&forward), total_shared_time(&backward));
    }
}

// ---------------------------------------------------------------------------
// Property 5: For lesson-confined logs, the accumulator matches a
// per-unit brute-force count and stays within the lesson duration
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn confined_logs_match_per_unit_oracle(
        pupil in arb_intervals_within(0, 100),
        tutor in arb_intervals_within(0, 100),
    ) {
        let lesson = Interval::new(0, 100);
        let log = AttendanceLog {
            lesson,
            pupil: pupil.clone(),
            tutor: tutor.clone(),
        };
        let total = total_shared_time(&log);

        let expected: i64 = (lesson.start..lesson.end)
            .filter(|&t| covers(&pupil, t) && covers(&tutor, t))
            .count() as i64;

        prop_assert_eq!(total, expected);
        prop_assert!(total >= 0);
        prop_assert!(total <= lesson.duration());
    }
}
