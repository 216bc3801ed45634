//! Drawer transition engine.
//!
//! All drawer motion is computed by [`TransitionEngine::frame`], called once
//! per display refresh with the frame timestamp. Between frames the engine
//! only records inputs: gesture samples land in its [`GestureSignals`] block
//! and programmatic requests in a single slot where the last request wins.
//!
//! Each frame, in order:
//! 1. a pending request stops any running animation and commits `is_open`;
//! 2. an active gesture drives `position` from the finger, stopping any
//!    running animation (the first active frame records the offset to resume
//!    from);
//! 3. otherwise a release is classified and a spring toward the resolved
//!    state starts, or an idle drawer away from its committed state starts a
//!    timing transition; the running animation is then stepped.
//!
//! Everything a listener cares about is reported through [`FrameOutput`].

use sidedrawer_animation::{AnimationType, SpringSpec, TimingSpec, Transition};
use sidedrawer_gestures::{GesturePhase, GestureSample, GestureSignals};

use crate::classifier::{classify, SwipeRelease, SwipeThresholds};
use crate::config::{DrawerConfig, DrawerPosition, DrawerType};

/// Externally visible lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawerPhase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Copyable snapshot of the engine state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionState {
    /// Signed offset in pixels: 0 closed, `width * direction` open.
    pub position: f32,
    pub is_open: bool,
    pub is_swiping: bool,
    /// The current or last motion came from a swipe (settles with a spring).
    pub is_swipe_gesture: bool,
    pub clock_running: bool,
}

impl TransitionState {
    pub fn phase(&self) -> DrawerPhase {
        if self.is_swiping {
            DrawerPhase::Dragging
        } else if self.clock_running {
            DrawerPhase::Settling
        } else {
            DrawerPhase::Idle
        }
    }

    /// Whether the drawer is headed open. Unknown while dragging.
    pub fn will_show(&self) -> bool {
        !self.is_swiping && self.is_open
    }
}

/// What changed during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub open_changed: Option<bool>,
    pub swipe_started: bool,
    pub swipe_ended: bool,
    pub phase_changed: Option<(DrawerPhase, bool)>,
}

impl FrameOutput {
    pub fn is_empty(&self) -> bool {
        *self == FrameOutput::default()
    }
}

/// The slice of [`DrawerConfig`] the engine reads each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub drawer_position: DrawerPosition,
    pub drawer_type: DrawerType,
    pub thresholds: SwipeThresholds,
    pub spring: SpringSpec,
    pub timing: TimingSpec,
}

impl From<&DrawerConfig> for EngineConfig {
    fn from(config: &DrawerConfig) -> Self {
        Self {
            drawer_position: config.drawer_position,
            drawer_type: config.drawer_type,
            thresholds: config.thresholds(),
            spring: config.spring,
            timing: config.timing,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from(&DrawerConfig::default())
    }
}

#[derive(Debug)]
pub struct TransitionEngine {
    position: f32,
    is_open: bool,
    is_swiping: bool,
    is_swipe_gesture: bool,
    offset_x: f32,
    next_is_open: Option<bool>,
    transition: Option<Transition>,
    signals: GestureSignals,
    drawer_width: f32,
    container_width: f32,
}

impl TransitionEngine {
    pub fn new(open: bool, drawer_width: f32, side: DrawerPosition) -> Self {
        Self {
            position: if open {
                drawer_width * side.direction()
            } else {
                0.0
            },
            is_open: open,
            is_swiping: false,
            is_swipe_gesture: false,
            offset_x: 0.0,
            next_is_open: None,
            transition: None,
            signals: GestureSignals::new(),
            drawer_width,
            container_width: 0.0,
        }
    }

    pub fn state(&self) -> TransitionState {
        TransitionState {
            position: self.position,
            is_open: self.is_open,
            is_swiping: self.is_swiping,
            is_swipe_gesture: self.is_swipe_gesture,
            clock_running: self.transition.is_some(),
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_swiping(&self) -> bool {
        self.is_swiping
    }

    pub fn signals(&self) -> &GestureSignals {
        &self.signals
    }

    pub fn drawer_width(&self) -> f32 {
        self.drawer_width
    }

    pub fn set_drawer_width(&mut self, width: f32) {
        self.drawer_width = width;
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn set_container_width(&mut self, width: f32) {
        self.container_width = width;
    }

    /// Record a gesture sample for the next frame.
    pub fn apply_sample(&mut self, sample: &GestureSample) {
        self.signals.apply(sample);
    }

    /// Turn an in-progress gesture into a cancelled one; the next frame
    /// settles it like any other release.
    pub fn cancel_gesture(&mut self) {
        if self.signals.phase.is_active() {
            let cancelled = GestureSample::new(
                GesturePhase::Cancelled,
                self.signals.touch_x,
                self.signals.translation_x,
                self.signals.velocity_x,
            );
            self.signals.apply(&cancelled);
        }
    }

    /// Ask for the drawer to open or close on the next frame.
    pub fn request_open(&mut self, open: bool) {
        self.next_is_open = Some(open);
    }

    pub fn pending_request(&self) -> Option<bool> {
        self.next_is_open
    }

    /// The state the drawer is headed for once pending requests apply.
    pub fn target_open(&self) -> bool {
        self.next_is_open.unwrap_or(self.is_open)
    }

    /// Settle the next transition with the timing curve instead of a spring.
    pub fn clear_swipe_gesture(&mut self) {
        if !self.is_swiping {
            self.is_swipe_gesture = false;
        }
    }

    pub fn frame(&mut self, frame_time_nanos: u64, config: &EngineConfig) -> FrameOutput {
        let before = self.state();
        let mut output = FrameOutput::default();

        if let Some(open) = self.next_is_open.take() {
            self.stop_clock();
            if !self.is_swiping {
                self.is_swipe_gesture = false;
            }
            self.is_open = open;
        }

        let activated = self.signals.take_activation();
        if self.signals.phase.is_active() || (activated && !self.is_swiping) {
            output.swipe_started = self.track_finger(config);
        }

        if !self.signals.phase.is_active() {
            if self.is_swiping {
                self.release(config);
                output.swipe_ended = true;
            } else if self.transition.is_none() {
                let target = self.target_position(self.is_open, config);
                if self.position != target {
                    self.start_transition(self.is_open, config);
                }
            }
            self.step_transition(frame_time_nanos);
        }

        let after = self.state();
        if after.is_open != before.is_open {
            output.open_changed = Some(after.is_open);
        }
        let phase = (after.phase(), after.will_show());
        if phase != (before.phase(), before.will_show()) {
            output.phase_changed = Some(phase);
        }
        output
    }

    /// Returns true on the first frame of a swipe.
    fn track_finger(&mut self, config: &EngineConfig) -> bool {
        let started = !self.is_swiping;
        if started {
            log::debug!("swipe started at {}", self.position);
            self.is_swiping = true;
            self.is_swipe_gesture = true;
            self.offset_x = self.position;
        }
        self.position =
            self.offset_x + self.signals.translation_x + self.edge_compensation(config);
        self.stop_clock();
        started
    }

    /// Extra offset for a front drawer when the swipe starts beyond its
    /// open edge: the drawer stays put until the finger reaches it.
    fn edge_compensation(&self, config: &EngineConfig) -> f32 {
        if config.drawer_type != DrawerType::Front {
            return 0.0;
        }
        let start_x = self.signals.touch_x - self.signals.translation_x;
        let from_edge = match config.drawer_position {
            DrawerPosition::Left => start_x,
            DrawerPosition::Right => {
                if self.container_width <= 0.0 {
                    return 0.0;
                }
                self.container_width - start_x
            }
        };
        (from_edge - self.drawer_width).max(0.0) * config.drawer_position.direction()
    }

    fn release(&mut self, config: &EngineConfig) {
        self.is_swiping = false;
        self.signals.touch_x = 0.0;

        let release = SwipeRelease {
            translation_x: self.signals.translation_x,
            velocity_x: self.signals.velocity_x,
            was_open: self.is_open,
        };
        let open = classify(&release, &config.thresholds, config.drawer_position);
        log::debug!(
            "swipe released: translation {} velocity {} -> {}",
            release.translation_x,
            release.velocity_x,
            if open { "open" } else { "closed" }
        );
        self.stop_clock();
        self.start_transition(open, config);
    }

    fn target_position(&self, open: bool, config: &EngineConfig) -> f32 {
        if open {
            self.drawer_width * config.drawer_position.direction()
        } else {
            0.0
        }
    }

    fn start_transition(&mut self, open: bool, config: &EngineConfig) {
        let target = self.target_position(open, config);
        let animation = if self.is_swipe_gesture {
            AnimationType::Spring(config.spring)
        } else {
            AnimationType::Timing(config.timing)
        };
        self.transition = Some(Transition::start(
            animation,
            self.position,
            target,
            self.signals.velocity_x,
        ));
        self.is_open = open;
    }

    fn step_transition(&mut self, frame_time_nanos: u64) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        self.position = transition.step(frame_time_nanos);
        if transition.is_finished() {
            log::trace!("transition settled at {}", self.position);
            self.transition = None;
            self.signals.reset_accumulators();
            self.is_swipe_gesture = false;
        }
    }

    fn stop_clock(&mut self) {
        self.transition = None;
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
