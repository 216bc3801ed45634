//! Release classification: does a finished swipe leave the drawer open?

use sidedrawer_gestures::SWIPE_DISTANCE_MINIMUM;

use crate::config::DrawerPosition;

/// Gesture values at the moment the finger lifts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeRelease {
    pub translation_x: f32,
    pub velocity_x: f32,
    /// Committed state before the gesture.
    pub was_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThresholds {
    pub distance: f32,
    pub velocity: f32,
}

/// Resolve a release to open (`true`) or closed.
///
/// Movement within [`SWIPE_DISTANCE_MINIMUM`] is a tap and keeps the current
/// state. Past the distance threshold the translation's sign decides; below
/// it a fast enough fling decides by its velocity's sign. Comparisons are
/// strict, so values exactly on a threshold do not count.
pub fn classify(release: &SwipeRelease, thresholds: &SwipeThresholds, side: DrawerPosition) -> bool {
    let translation = release.translation_x;
    let velocity = release.velocity_x;

    let sign = if translation.abs() <= SWIPE_DISTANCE_MINIMUM {
        None
    } else if translation.abs() > thresholds.distance {
        Some(translation)
    } else if velocity.abs() > thresholds.velocity {
        Some(velocity)
    } else {
        None
    };

    match sign {
        Some(value) => opens_toward(value, side),
        None => release.was_open,
    }
}

fn opens_toward(value: f32, side: DrawerPosition) -> bool {
    match side {
        DrawerPosition::Left => value > 0.0,
        DrawerPosition::Right => value < 0.0,
    }
}
