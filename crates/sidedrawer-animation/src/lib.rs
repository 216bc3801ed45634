//! Animation primitives for sidedrawer
//!
//! Timing (eased tween) and spring animations that are advanced explicitly by
//! the caller with a frame timestamp in nanoseconds. Nothing here schedules
//! frames on its own; the owner steps the animation once per display refresh.

mod easing;
mod spring;
mod timing;
mod transition;

pub use easing::{Easing, Lerp};
pub use spring::{SpringAnimation, SpringSpec};
pub use timing::{TimingAnimation, TimingSpec};
pub use transition::{AnimationType, Transition};

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
