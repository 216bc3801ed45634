//! Shared gesture constants for drawer swipes.
//!
//! Values are in logical pixels (and logical pixels per second).

/// Horizontal movement a pan must exceed before it becomes active.
///
/// The same floor separates a swipe from a tap when the gesture is released:
/// releases that moved less than this resolve back to the current state.
pub const SWIPE_DISTANCE_MINIMUM: f32 = 5.0;

/// Vertical movement that fails a pan that has not activated yet, leaving
/// vertical scrolling to the content underneath.
pub const VERTICAL_FAIL_OFFSET: f32 = 5.0;

/// Width of the strip along the drawer's edge that accepts a swipe while the
/// drawer is closed.
pub const DEFAULT_SWIPE_EDGE_WIDTH: f32 = 32.0;

/// Maximum release velocity reported to the drawer.
///
/// Matches Android's default maximum fling velocity on a baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
