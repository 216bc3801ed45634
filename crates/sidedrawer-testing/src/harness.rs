//! Frame-driving harness.
//!
//! [`DrawerHarness`] owns a controller wired to recording collaborators and a
//! virtual clock advancing one 60 Hz frame per pump, so tests read as a
//! sequence of inputs and frames.

use sidedrawer::{
    DrawerConfig, DrawerController, DrawerError, DrawerFrame, DrawerPhase, GesturePhase,
    GestureSample,
};
use sidedrawer_gestures::PointerEvent;

use crate::recorder::{DrawerRecorder, RecordingKeyboard, RecordingStatusBar};

/// One frame at 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound for [`DrawerHarness::settle`]; about five seconds of frames.
pub const MAX_SETTLE_FRAMES: usize = 300;

pub struct DrawerHarness {
    controller: DrawerController,
    recorder: DrawerRecorder,
    status_bar: RecordingStatusBar,
    keyboard: RecordingKeyboard,
    now_nanos: u64,
    last_frame: Option<DrawerFrame>,
}

impl DrawerHarness {
    pub fn new(config: DrawerConfig, open: bool) -> Result<Self, DrawerError> {
        let recorder = DrawerRecorder::new();
        let status_bar = RecordingStatusBar::new();
        let keyboard = RecordingKeyboard::new();
        let controller = DrawerController::new(config, open)?
            .with_listener(recorder.clone())
            .with_status_bar(status_bar.clone())
            .with_keyboard(keyboard.clone());
        Ok(Self {
            controller,
            recorder,
            status_bar,
            keyboard,
            now_nanos: 0,
            last_frame: None,
        })
    }

    /// A harness whose drawer has been laid out at `width` and drawn once.
    pub fn laid_out(config: DrawerConfig, open: bool, width: f32) -> Result<Self, DrawerError> {
        let mut harness = Self::new(config, open)?;
        harness.controller.on_layout(width);
        harness.pump_frame();
        harness.recorder.take();
        Ok(harness)
    }

    pub fn controller(&self) -> &DrawerController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DrawerController {
        &mut self.controller
    }

    pub fn recorder(&self) -> &DrawerRecorder {
        &self.recorder
    }

    pub fn status_bar(&self) -> &RecordingStatusBar {
        &self.status_bar
    }

    pub fn keyboard(&self) -> &RecordingKeyboard {
        &self.keyboard
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    pub fn position(&self) -> f32 {
        self.controller.state().position
    }

    pub fn last_frame(&self) -> Option<&DrawerFrame> {
        self.last_frame.as_ref()
    }

    /// Advance the clock one frame and run the drawer.
    pub fn pump_frame(&mut self) -> DrawerFrame {
        self.now_nanos += FRAME_NANOS;
        let frame = self.controller.frame(self.now_nanos);
        log::trace!(
            "frame @{}ns: position {} {:?}",
            self.now_nanos,
            frame.state.position,
            frame.phase
        );
        self.last_frame = Some(frame);
        frame
    }

    pub fn pump_frames(&mut self, count: usize) -> DrawerFrame {
        let mut frame = self.pump_frame();
        for _ in 1..count {
            frame = self.pump_frame();
        }
        frame
    }

    /// Pump until the drawer is idle; panics after [`MAX_SETTLE_FRAMES`].
    pub fn settle(&mut self) -> DrawerFrame {
        self.settle_within(MAX_SETTLE_FRAMES)
    }

    pub fn settle_within(&mut self, max_frames: usize) -> DrawerFrame {
        for _ in 0..max_frames {
            let frame = self.pump_frame();
            if frame.phase == DrawerPhase::Idle {
                return frame;
            }
        }
        panic!(
            "drawer did not settle within {} frames: {:?}",
            max_frames,
            self.controller.state()
        );
    }

    /// Pump until idle, collecting the position after every frame.
    pub fn settle_positions(&mut self) -> Vec<f32> {
        let mut positions = Vec::new();
        for _ in 0..MAX_SETTLE_FRAMES {
            let frame = self.pump_frame();
            positions.push(frame.state.position);
            if frame.phase == DrawerPhase::Idle {
                return positions;
            }
        }
        panic!("drawer did not settle: {:?}", self.controller.state());
    }

    pub fn send(&mut self, sample: GestureSample) {
        self.controller.handle_gesture(sample);
    }

    /// Drive a gesture that starts at `start_x`, passes through each of
    /// `translations` (one frame each), and lifts at the last one with
    /// `release_velocity`. Returns the release frame.
    pub fn swipe(&mut self, start_x: f32, translations: &[f32], release_velocity: f32) -> DrawerFrame {
        self.send(GestureSample::new(GesturePhase::Began, start_x, 0.0, 0.0));
        self.pump_frame();

        let mut last = 0.0;
        for &translation in translations {
            self.send(GestureSample::new(
                GesturePhase::Active,
                start_x + translation,
                translation,
                0.0,
            ));
            self.pump_frame();
            last = translation;
        }

        self.send(GestureSample::new(
            GesturePhase::Ended,
            start_x + last,
            last,
            release_velocity,
        ));
        self.pump_frame()
    }

    /// Drive raw pointer events from `from_x` to `to_x` in `steps` moves,
    /// one frame apart, through the drawer's pan recogniser.
    pub fn pointer_swipe(&mut self, from_x: f32, to_x: f32, y: f32, steps: usize) -> DrawerFrame {
        let frame_ms = 16;
        let mut time_ms = (self.now_nanos / 1_000_000) as i64;
        self.controller.handle_pointer(PointerEvent::down(from_x, y, time_ms));
        self.pump_frame();

        let steps = steps.max(1);
        for step in 1..=steps {
            time_ms += frame_ms;
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            self.controller.handle_pointer(PointerEvent::moved(x, y, time_ms));
            self.pump_frame();
        }

        time_ms += frame_ms;
        self.controller.handle_pointer(PointerEvent::up(to_x, y, time_ms));
        self.pump_frame()
    }

    pub fn tap(&mut self, x: f32, y: f32) -> DrawerFrame {
        let time_ms = (self.now_nanos / 1_000_000) as i64;
        self.controller.handle_pointer(PointerEvent::down(x, y, time_ms));
        self.controller.handle_pointer(PointerEvent::up(x, y, time_ms + 50));
        self.pump_frame()
    }
}
