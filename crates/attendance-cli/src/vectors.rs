//! Built-in verification table for `attendance check`.
//!
//! The first three cases are real session logs (July 2020 Unix timestamps);
//! the rest pin boundary behavior. Inputs are kept as raw JSON so the check
//! exercises the same parse-and-validate path as `attendance compute`.

/// One verification case: raw JSON input and the expected shared time.
pub struct Case {
    pub input: &'static str,
    pub expected: i64,
}

pub const CASES: &[Case] = &[
    Case {
        input: r#"{
            "lesson": [1594663200, 1594666800],
            "pupil": [1594663340, 1594663389, 1594663390, 1594663395, 1594663396, 1594666472],
            "tutor": [1594663290, 1594663430, 1594663443, 1594666473]
        }"#,
        expected: 3117,
    },
    Case {
        input: r#"{
            "lesson": [1594702800, 1594706400],
            "pupil": [1594702789, 1594704500, 1594702807, 1594704542, 1594704512, 1594704513,
                      1594704564, 1594705150, 1594704581, 1594704582, 1594704734, 1594705009,
                      1594705095, 1594705096, 1594705106, 1594706480, 1594705158, 1594705773,
                      1594705849, 1594706480, 1594706500, 1594706875, 1594706502, 1594706503,
                      1594706524, 1594706524, 1594706579, 1594706641],
            "tutor": [1594700035, 1594700364, 1594702749, 1594705148, 1594705149, 1594706463]
        }"#,
        expected: 3577,
    },
    Case {
        input: r#"{
            "lesson": [1594692000, 1594695600],
            "pupil": [1594692033, 1594696347],
            "tutor": [1594692017, 1594692066, 1594692068, 1594696341]
        }"#,
        expected: 3565,
    },
    // No overlap at all.
    Case {
        input: r#"{"lesson": [10, 20], "pupil": [1, 2, 3, 5], "tutor": [21, 25]}"#,
        expected: 0,
    },
    // Full coverage clamps to the lesson bounds.
    Case {
        input: r#"{"lesson": [10, 20], "pupil": [5, 25], "tutor": [5, 25]}"#,
        expected: 10,
    },
    // Spans entirely inside the lesson.
    Case {
        input: r#"{"lesson": [10, 20], "pupil": [11, 15], "tutor": [12, 18]}"#,
        expected: 3,
    },
    // Spans crossing the lesson bounds on both sides.
    Case {
        input: r#"{"lesson": [10, 20], "pupil": [8, 25], "tutor": [5, 15]}"#,
        expected: 5,
    },
    // Multiple pupil spans against one tutor span.
    Case {
        input: r#"{"lesson": [10, 20], "pupil": [9, 12, 15, 18], "tutor": [11, 16]}"#,
        expected: 2,
    },
    // Spans matching the lesson exactly.
    Case {
        input: r#"{"lesson": [10, 20], "pupil": [10, 20], "tutor": [10, 20]}"#,
        expected: 10,
    },
    // Empty pupil log.
    Case {
        input: r#"{"lesson": [10, 20], "pupil": [], "tutor": [12, 18]}"#,
        expected: 0,
    },
    // One-unit overlap.
    Case {
        input: r#"{"lesson": [10, 20], "pupil": [10, 11], "tutor": [10, 11]}"#,
        expected: 1,
    },
    // Touching spans: the pupil leaves exactly when the tutor arrives.
    Case {
        input: r#"{"lesson": [10, 20], "pupil": [10, 15], "tutor": [15, 20]}"#,
        expected: 0,
    },
    // Intersection only partially inside the lesson.
    Case {
        input: r#"{"lesson": [60, 75], "pupil": [50, 80], "tutor": [70, 90]}"#,
        expected: 5,
    },
    // Large ordinals (10^15 scale).
    Case {
        input: r#"{
            "lesson": [1000000000000000, 1000000000001000],
            "pupil": [1000000000000100, 1000000000000900],
            "tutor": [1000000000000200, 1000000000000800]
        }"#,
        expected: 600,
    },
];
