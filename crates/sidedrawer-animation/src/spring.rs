//! Damped harmonic oscillator animation.
//!
//! Each frame solves the oscillator analytically from the current position and
//! velocity instead of integrating, so large or irregular frame gaps do not
//! destabilise the motion.

const NANOS_PER_MILLI: f32 = 1_000_000.0;

/// Longest step taken in a single frame; longer gaps are treated as this long.
const MAX_FRAME_STEP_MILLIS: f32 = 64.0;

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping coefficient `c`.
    pub damping: f32,
    /// Mass `m`.
    pub mass: f32,
    /// Stiffness `k`. Higher values settle faster.
    pub stiffness: f32,
    /// Finish as soon as the value crosses the target instead of bouncing.
    pub overshoot_clamping: bool,
    /// Speed (units/s) under which the spring may come to rest.
    pub rest_speed_threshold: f32,
    /// Distance from target under which the spring may come to rest.
    pub rest_displacement_threshold: f32,
}

impl SpringSpec {
    /// Drawer release spring: slightly under-damped and clamped so it never
    /// overshoots the open or closed position.
    pub fn drawer() -> Self {
        Self {
            damping: 30.0,
            mass: 1.0,
            stiffness: 250.0,
            overshoot_clamping: true,
            rest_speed_threshold: 0.001,
            rest_displacement_threshold: 0.001,
        }
    }

    /// Damping ratio `ζ = c / (2 √(k m))`. 1.0 is critically damped.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::drawer()
    }
}

/// In-flight spring animation toward a fixed target.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringAnimation {
    spec: SpringSpec,
    target: f32,
    position: f32,
    velocity: f32,
    last_frame_nanos: Option<u64>,
    finished: bool,
}

impl SpringAnimation {
    /// Start a spring at `position` moving with `velocity` (units/s).
    pub fn new(position: f32, velocity: f32, target: f32, spec: SpringSpec) -> Self {
        Self {
            spec,
            target,
            position,
            velocity,
            last_frame_nanos: None,
            finished: false,
        }
    }

    /// Advance the spring to `frame_time_nanos` and return the new position.
    pub fn step(&mut self, frame_time_nanos: u64) -> f32 {
        if self.finished {
            return self.position;
        }

        let last_frame = *self.last_frame_nanos.get_or_insert(frame_time_nanos);
        let delta_millis = (frame_time_nanos.saturating_sub(last_frame) as f32 / NANOS_PER_MILLI)
            .min(MAX_FRAME_STEP_MILLIS);
        self.last_frame_nanos = Some(frame_time_nanos);

        let t = delta_millis / 1000.0;
        let previous = self.position;
        let (position, velocity) = self.solve(t);
        self.position = position;
        self.velocity = velocity;

        let overshooting = self.spec.overshoot_clamping
            && self.spec.stiffness != 0.0
            && if previous < self.target {
                self.position > self.target
            } else {
                self.position < self.target
            };
        let resting = self.velocity.abs() < self.spec.rest_speed_threshold
            && (self.target - self.position).abs() < self.spec.rest_displacement_threshold;

        if overshooting || resting {
            if self.spec.stiffness != 0.0 {
                self.velocity = 0.0;
                self.position = self.target;
            }
            self.finished = true;
        }
        self.position
    }

    /// Closed-form oscillator state after `t` seconds from the current state.
    fn solve(&self, t: f32) -> (f32, f32) {
        let zeta = self.spec.damping_ratio();
        let omega0 = self.spec.natural_frequency();
        let x0 = self.target - self.position;
        let v0 = -self.velocity;

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let (sin1, cos1) = (omega1 * t).sin_cos();
            let fragment = envelope * (sin1 * ((v0 + zeta * omega0 * x0) / omega1) + x0 * cos1);
            let position = self.target - fragment;
            let velocity = zeta * omega0 * fragment
                - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1);
            (position, velocity)
        } else {
            let envelope = (-omega0 * t).exp();
            let position = self.target - envelope * (x0 + (v0 + omega0 * x0) * t);
            let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            (position, velocity)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
