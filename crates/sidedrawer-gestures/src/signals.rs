//! Gesture input adapter.
//!
//! [`GestureSignals`] is the block of gesture inputs the transition engine
//! reads every frame. Samples are written into it as they arrive; no
//! computation happens here, so tests can replay canned sample sequences and
//! inspect exactly what the engine will see on its next frame.

use crate::types::{GesturePhase, GestureSample};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSignals {
    pub touch_x: f32,
    pub translation_x: f32,
    pub velocity_x: f32,
    pub phase: GesturePhase,
    /// Set when an `Active` sample arrives; cleared by the next frame.
    activated: bool,
}

impl GestureSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one sample into the signal block.
    pub fn apply(&mut self, sample: &GestureSample) {
        self.touch_x = sample.touch_x;
        self.translation_x = sample.translation_x;
        self.velocity_x = sample.velocity_x;
        self.phase = sample.phase;
        if sample.phase.is_active() {
            self.activated = true;
        }
    }

    /// Returns whether an `Active` sample was seen since the last call.
    ///
    /// Lets a frame notice a gesture that activated and ended between two
    /// frames, which the latest phase alone would hide.
    pub fn take_activation(&mut self) -> bool {
        std::mem::take(&mut self.activated)
    }

    /// Zero the accumulated gesture values once a transition has settled.
    pub fn reset_accumulators(&mut self) {
        self.touch_x = 0.0;
        self.translation_x = 0.0;
        self.velocity_x = 0.0;
    }
}
