//! The drawer's public surface.
//!
//! [`DrawerController`] owns one [`TransitionEngine`] and connects it to the
//! outside: gesture input, imperative open/close, the owner's `open` flag,
//! lifecycle notifications and the injected platform capabilities.

use sidedrawer_gestures::{GestureSample, HitRegion, PanEvent, PanGestureRecognizer, PointerEvent};

use crate::config::{DrawerConfig, DrawerPosition, KeyboardDismissMode};
use crate::engine::{DrawerPhase, EngineConfig, FrameOutput, TransitionEngine, TransitionState};
use crate::error::DrawerError;
use crate::layout::{compose, DrawerLayout, DrawerOpacity, LayoutInput};
use crate::platform::{DrawerListener, KeyboardController, StatusBarController};
use crate::reconcile::OpenStateReconciler;

/// Result of one [`DrawerController::frame`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerFrame {
    pub state: TransitionState,
    pub phase: DrawerPhase,
    pub layout: DrawerLayout,
    pub output: FrameOutput,
}

pub struct DrawerController {
    config: DrawerConfig,
    engine: TransitionEngine,
    reconciler: OpenStateReconciler,
    pan: PanGestureRecognizer,
    listener: Option<Box<dyn DrawerListener>>,
    status_bar: Option<Box<dyn StatusBarController>>,
    keyboard: Option<Box<dyn KeyboardController>>,
    status_bar_hidden: bool,
    drawer_opacity: DrawerOpacity,
}

impl DrawerController {
    pub fn new(config: DrawerConfig, open: bool) -> Result<Self, DrawerError> {
        config.validate()?;
        let width = config.drawer_width.resolve();
        let mut pan = PanGestureRecognizer::default();
        pan.set_enabled(!config.lock_mode.is_locked());

        let mut controller = Self {
            engine: TransitionEngine::new(open, width, config.drawer_position),
            reconciler: OpenStateReconciler::new(open),
            pan,
            listener: None,
            status_bar: None,
            keyboard: None,
            status_bar_hidden: false,
            drawer_opacity: DrawerOpacity::Hidden,
            config,
        };
        controller.update_hit_region();
        Ok(controller)
    }

    pub fn with_listener(mut self, listener: impl DrawerListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn with_status_bar(mut self, status_bar: impl StatusBarController + 'static) -> Self {
        self.status_bar = Some(Box::new(status_bar));
        self
    }

    pub fn with_keyboard(mut self, keyboard: impl KeyboardController + 'static) -> Self {
        self.keyboard = Some(Box::new(keyboard));
        self
    }

    pub fn set_listener(&mut self, listener: Box<dyn DrawerListener>) {
        self.listener = Some(listener);
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn state(&self) -> TransitionState {
        self.engine.state()
    }

    pub fn phase(&self) -> DrawerPhase {
        self.engine.state().phase()
    }

    pub fn is_open(&self) -> bool {
        self.engine.is_open()
    }

    /// Open state after pending requests are applied.
    pub fn target_open(&self) -> bool {
        self.engine.target_open()
    }

    pub fn reconciler(&self) -> &OpenStateReconciler {
        &self.reconciler
    }

    pub fn drawer_width(&self) -> f32 {
        self.engine.drawer_width()
    }

    pub fn layout(&self) -> DrawerLayout {
        let state = self.engine.state();
        compose(&LayoutInput {
            position: state.position,
            is_open: state.is_open,
            drawer_width: self.engine.drawer_width(),
            drawer_position: self.config.drawer_position,
            drawer_type: self.config.drawer_type,
            drawer_opacity: self.drawer_opacity,
        })
    }

    pub fn open_drawer(&mut self) {
        self.request(true);
    }

    pub fn close_drawer(&mut self) {
        self.request(false);
    }

    pub fn toggle_drawer(&mut self) {
        let open = !self.engine.target_open();
        self.request(open);
    }

    fn request(&mut self, open: bool) {
        if self.engine.target_open() == open && !self.engine.is_swiping() {
            log::trace!("drawer already {}", if open { "open" } else { "closed" });
            return;
        }
        self.engine.request_open(open);
    }

    /// The owner's `open` flag, applied on every update from the owner.
    pub fn set_open(&mut self, open: bool) {
        let previous = self.reconciler.requested();
        if let Some(forced) = self.reconciler.external_update(open) {
            log::debug!("owner set open={forced}");
            self.engine.request_open(forced);
        }
        if open != previous {
            self.toggle_status_bar(open);
        }
    }

    /// Feed a pan gesture sample. Dropped while the drawer is locked.
    pub fn handle_gesture(&mut self, sample: GestureSample) {
        if self.config.lock_mode.is_locked() {
            log::trace!("drawer locked; dropping {:?}", sample.phase);
            return;
        }
        self.engine.apply_sample(&sample);
    }

    /// Feed a raw pointer event through the drawer's pan recogniser.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.update_hit_region();
        for output in self.pan.handle(&event) {
            match output {
                PanEvent::Sample(sample) => self.handle_gesture(sample),
                PanEvent::Tap { x, .. } => {
                    if self.tap_hits_overlay(x) {
                        self.overlay_tapped();
                    }
                }
            }
        }
    }

    /// A tap on the dimmed overlay closes the drawer unless it is locked.
    pub fn overlay_tapped(&mut self) {
        if self.config.lock_mode.is_locked() {
            return;
        }
        self.engine.clear_swipe_gesture();
        self.engine.request_open(false);
    }

    /// The drawer pane was measured.
    pub fn on_layout(&mut self, drawer_width: f32) {
        if !drawer_width.is_finite() || drawer_width <= 0.0 {
            log::warn!("ignoring drawer layout width {drawer_width}");
            return;
        }
        self.engine.set_drawer_width(drawer_width);
        // A request that has not reached a frame yet outranks the owner's value.
        if self.engine.pending_request().is_none() {
            let open = self
                .reconciler
                .pending()
                .unwrap_or_else(|| self.reconciler.requested());
            self.engine.request_open(open);
        }
        if self.drawer_opacity == DrawerOpacity::Hidden {
            self.drawer_opacity = DrawerOpacity::Revealing;
        }
    }

    /// The container was resized; a width provider is evaluated again.
    pub fn on_container_resize(&mut self, container_width: f32) {
        self.engine.set_container_width(container_width);
        if self.config.drawer_width.is_provider() {
            let width = self.config.drawer_width.resolve();
            if width.is_finite() && width >= 0.0 && width != self.engine.drawer_width() {
                log::debug!("drawer width {} -> {width}", self.engine.drawer_width());
                self.engine.set_drawer_width(width);
            }
        }
        self.update_hit_region();
    }

    pub fn set_config(&mut self, config: DrawerConfig) -> Result<(), DrawerError> {
        config.validate()?;

        let old_width = self.config.drawer_width.resolve();
        let new_width = config.drawer_width.resolve();
        let was_locked = self.config.lock_mode.is_locked();
        let locked = config.lock_mode.is_locked();
        if self.status_bar_hidden && !config.hide_status_bar {
            self.set_status_bar_hidden(false);
        }
        self.config = config;

        if new_width != old_width {
            self.engine.set_drawer_width(new_width);
        }
        self.pan.set_enabled(!locked);
        if locked && !was_locked {
            self.engine.cancel_gesture();
        }
        self.update_hit_region();
        Ok(())
    }

    pub fn frame(&mut self, frame_time_nanos: u64) -> DrawerFrame {
        let output = self
            .engine
            .frame(frame_time_nanos, &EngineConfig::from(&self.config));

        if output.swipe_started {
            self.swipe_started();
        }
        if let Some(open) = output.open_changed {
            if self.reconciler.resolved(open) {
                log::debug!("drawer {}", if open { "opened" } else { "closed" });
                if let Some(listener) = self.listener.as_mut() {
                    if open {
                        listener.on_drawer_open();
                    } else {
                        listener.on_drawer_close();
                    }
                }
            }
        }
        if output.swipe_ended {
            self.swipe_ended();
        }
        if let Some((phase, will_show)) = output.phase_changed {
            if let Some(listener) = self.listener.as_mut() {
                listener.on_drawer_state_changed(phase, will_show);
            }
        }

        if self.drawer_opacity == DrawerOpacity::Revealing {
            self.drawer_opacity = DrawerOpacity::Visible;
        }
        self.update_hit_region();

        let state = self.engine.state();
        DrawerFrame {
            state,
            phase: state.phase(),
            layout: self.layout(),
            output,
        }
    }

    fn swipe_started(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_swipe_start();
        }
        if self.config.keyboard_dismiss_mode == KeyboardDismissMode::OnDrag {
            if let Some(keyboard) = self.keyboard.as_mut() {
                keyboard.dismiss();
            }
        }
        self.toggle_status_bar(true);
    }

    fn swipe_ended(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_swipe_end();
        }
        self.toggle_status_bar(self.reconciler.current());
    }

    fn toggle_status_bar(&mut self, hidden: bool) {
        if self.config.hide_status_bar && self.status_bar_hidden != hidden {
            self.set_status_bar_hidden(hidden);
        }
    }

    fn set_status_bar_hidden(&mut self, hidden: bool) {
        self.status_bar_hidden = hidden;
        if let Some(status_bar) = self.status_bar.as_mut() {
            status_bar.set_hidden(hidden, self.config.status_bar_animation);
        }
    }

    fn update_hit_region(&mut self) {
        let container_width = self.engine.container_width();
        let region = if self.engine.is_open() {
            HitRegion::Anywhere
        } else {
            match self.config.drawer_position {
                DrawerPosition::Left => HitRegion::LeftEdge {
                    width: self.config.swipe_edge_width,
                },
                // The right edge is unknown until the container is measured.
                DrawerPosition::Right if container_width <= 0.0 => HitRegion::Nowhere,
                DrawerPosition::Right => HitRegion::RightEdge {
                    width: self.config.swipe_edge_width,
                    container_width,
                },
            }
        };
        self.pan.set_hit_region(region);
    }

    /// Whether a tap at `x` lands on the overlay rather than the drawer.
    fn tap_hits_overlay(&self, x: f32) -> bool {
        let layout = self.layout();
        if !layout.overlay_interactive {
            return false;
        }
        match self.config.drawer_position {
            DrawerPosition::Left => x > layout.translate_x,
            DrawerPosition::Right => {
                let container_width = self.engine.container_width();
                container_width > 0.0 && x < container_width + layout.translate_x
            }
        }
    }
}

impl Drop for DrawerController {
    fn drop(&mut self) {
        self.toggle_status_bar(false);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
