//! Easing curves used by timing animations.

/// Values a timing animation can interpolate between.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^3`, the programmatic toggle curve.
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Fractions outside the unit range are clamped.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::EaseOutCubic => {
                let inverse = 1.0 - fraction;
                1.0 - inverse * inverse * inverse
            }
        }
    }
}
