//! Release velocity estimation for swipe gestures.
//!
//! Uses the impulse strategy: the kinetic energy imparted between successive
//! samples is accumulated and converted back into a velocity, which is more
//! robust against jittery touch input than a straight line fit.

/// Number of samples kept.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window of the newest one contribute.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the finger stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// One-dimensional velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    /// Record the pointer position at `time_ms`.
    pub fn add_position(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Velocity in units per second, or 0.0 without two recent samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut ages = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.newest;
        let mut previous_time = newest.time_ms;

        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous_time - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous_time = sample.time_ms;

            positions[count] = sample.position;
            ages[count] = -(age as f32);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &ages[..count]) * 1000.0
    }

    /// Velocity clamped to `±max_velocity`; NaN and non-positive limits give 0.
    pub fn velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// Samples are ordered newest first; times are non-positive milliseconds.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let (earlier, later) = (times[i], times[i - 1]);
        if earlier == later {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / (later - earlier);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = ½ v² with unit mass.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_reports_zero() {
        assert_eq!(VelocityTracker1D::new().velocity(), 0.0);
    }

    #[test]
    fn single_sample_reports_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn steady_rightward_swipe() {
        let mut tracker = VelocityTracker1D::new();
        // 20 px every 10 ms = 2000 px/s
        for step in 0..6 {
            tracker.add_position(step * 10, step as f32 * 20.0);
        }
        let velocity = tracker.velocity();
        assert!(
            (velocity - 2000.0).abs() < 200.0,
            "Expected ~2000, got {}",
            velocity
        );
    }

    #[test]
    fn leftward_swipe_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 300.0);
        tracker.add_position(10, 250.0);
        tracker.add_position(20, 200.0);
        assert!(tracker.velocity() < 0.0);
    }

    #[test]
    fn velocity_is_capped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 0.0);
        tracker.add_position(1, 10_000.0);
        assert_eq!(tracker.velocity_with_max(8_000.0), 8_000.0);
        assert_eq!(tracker.velocity_with_max(0.0), 0.0);

        tracker.reset();
        tracker.add_position(0, 10_000.0);
        tracker.add_position(1, 0.0);
        assert_eq!(tracker.velocity_with_max(8_000.0), -8_000.0);
    }

    #[test]
    fn pause_before_release_reports_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 0.0);
        tracker.add_position(10, 50.0);
        tracker.add_position(10 + ASSUME_STOPPED_MS + 1, 50.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn stale_samples_are_ignored() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 1_000.0);
        tracker.add_position(150, 100.0);
        tracker.add_position(160, 200.0);
        tracker.add_position(170, 300.0);
        assert!(tracker.velocity() > 0.0);
    }
}
