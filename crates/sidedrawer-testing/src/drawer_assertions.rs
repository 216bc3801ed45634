//! Assertion utilities for drawer tests.

use sidedrawer::{DrawerFrame, DrawerPhase};

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a frame shows the drawer at rest in the given state.
pub fn assert_settled(frame: &DrawerFrame, open: bool, msg: &str) {
    assert_eq!(frame.phase, DrawerPhase::Idle, "{}: drawer still moving", msg);
    assert_eq!(
        frame.state.is_open, open,
        "{}: expected open={}, got {:?}",
        msg, open, frame.state
    );
    let expected_progress = if open { 1.0 } else { 0.0 };
    assert_approx_eq(
        frame.layout.progress,
        expected_progress,
        1e-4,
        &format!("{} - progress", msg),
    );
}

/// Assert that consecutive values never move against `direction`.
pub fn assert_monotonic(values: &[f32], direction: f32, msg: &str) {
    for (index, pair) in values.windows(2).enumerate() {
        let step = (pair[1] - pair[0]) * direction.signum();
        assert!(
            step >= -1e-3,
            "{}: step {} went from {} to {}",
            msg,
            index,
            pair[0],
            pair[1]
        );
    }
}
