//! A single running animation of either kind.

use crate::spring::{SpringAnimation, SpringSpec};
use crate::timing::{TimingAnimation, TimingSpec};

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Timing(TimingSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Timing(TimingSpec::default())
    }
}

/// A running animation driven one frame at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Timing(TimingAnimation),
    Spring(SpringAnimation),
}

impl Transition {
    /// Start an animation from `from` to `to`. `velocity` only seeds springs.
    pub fn start(animation: AnimationType, from: f32, to: f32, velocity: f32) -> Self {
        log::trace!("transition {from} -> {to} ({animation:?}, velocity {velocity})");
        match animation {
            AnimationType::Timing(spec) => Transition::Timing(TimingAnimation::new(from, to, spec)),
            AnimationType::Spring(spec) => {
                Transition::Spring(SpringAnimation::new(from, velocity, to, spec))
            }
        }
    }

    /// Advance to `frame_time_nanos` and return the current value.
    pub fn step(&mut self, frame_time_nanos: u64) -> f32 {
        match self {
            Transition::Timing(timing) => timing.step(frame_time_nanos),
            Transition::Spring(spring) => spring.step(frame_time_nanos),
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Transition::Timing(timing) => timing.is_finished(),
            Transition::Spring(spring) => spring.is_finished(),
        }
    }
}
