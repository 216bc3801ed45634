//! Fixed-duration eased animation.

use crate::easing::{Easing, Lerp};

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Timing animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing applied to the linear progress.
    pub easing: Easing,
}

impl TimingSpec {
    /// Create a tween with the given duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }
}

impl Default for TimingSpec {
    /// 300 ms cubic ease-out, the drawer's programmatic toggle curve.
    fn default() -> Self {
        Self::tween(300, Easing::EaseOutCubic)
    }
}

/// In-flight timing animation between two values.
///
/// The first frame observed fixes the start time, so it always reports the
/// start value; the animation finishes on the first frame whose elapsed time
/// reaches the duration.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingAnimation {
    spec: TimingSpec,
    from: f32,
    to: f32,
    value: f32,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl TimingAnimation {
    pub fn new(from: f32, to: f32, spec: TimingSpec) -> Self {
        Self {
            spec,
            from,
            to,
            value: from,
            start_time_nanos: None,
            finished: false,
        }
    }

    /// Advance the animation to `frame_time_nanos` and return the new value.
    pub fn step(&mut self, frame_time_nanos: u64) -> f32 {
        if self.finished {
            return self.value;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = self
            .spec
            .duration_millis
            .saturating_mul(NANOS_PER_MILLI)
            .max(1);
        let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 {
            self.value = self.to;
            self.finished = true;
        } else {
            let progress = self.spec.easing.transform(linear_progress);
            self.value = self.from.lerp(&self.to, progress);
        }
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
