//! Horizontal pan recogniser.
//!
//! Turns raw pointer events into [`GestureSample`]s the way a platform pan
//! handler does: a pointer must go down inside the hit region, the pan turns
//! active after a small horizontal offset, and it fails if the pointer first
//! travels vertically. A pointer that lifts without ever activating is
//! reported as a tap.

use smallvec::SmallVec;

use crate::gesture_constants::{MAX_FLING_VELOCITY, SWIPE_DISTANCE_MINIMUM, VERTICAL_FAIL_OFFSET};
use crate::types::{GesturePhase, GestureSample, PointerEvent, PointerEventKind};
use crate::velocity_tracker::VelocityTracker1D;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanConfig {
    /// Horizontal travel required before the pan activates.
    pub active_offset_x: f32,
    /// Vertical travel that fails a pan that has not activated.
    pub fail_offset_y: f32,
    /// Upper bound for reported release velocity.
    pub max_velocity: f32,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            active_offset_x: SWIPE_DISTANCE_MINIMUM,
            fail_offset_y: VERTICAL_FAIL_OFFSET,
            max_velocity: MAX_FLING_VELOCITY,
        }
    }
}

/// Where a pointer may go down to start a pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitRegion {
    /// Anywhere in the container.
    Anywhere,
    /// Accepts no touches.
    Nowhere,
    /// A strip of the given width along the container's left edge.
    LeftEdge { width: f32 },
    /// A strip of the given width along the container's right edge.
    RightEdge { width: f32, container_width: f32 },
}

impl HitRegion {
    pub fn contains(&self, x: f32) -> bool {
        match *self {
            HitRegion::Anywhere => true,
            HitRegion::Nowhere => false,
            HitRegion::LeftEdge { width } => x <= width,
            HitRegion::RightEdge {
                width,
                container_width,
            } => x >= container_width - width,
        }
    }
}

/// Output of the recogniser for one pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    Sample(GestureSample),
    /// Pointer went down and up without the pan activating.
    Tap { x: f32, y: f32 },
}

#[derive(Clone, Copy, Debug)]
struct Tracking {
    start_x: f32,
    start_y: f32,
    active: bool,
}

#[derive(Debug)]
pub struct PanGestureRecognizer {
    config: PanConfig,
    enabled: bool,
    hit_region: HitRegion,
    tracking: Option<Tracking>,
    velocity: VelocityTracker1D,
}

impl Default for PanGestureRecognizer {
    fn default() -> Self {
        Self::new(PanConfig::default())
    }
}

impl PanGestureRecognizer {
    pub fn new(config: PanConfig) -> Self {
        Self {
            config,
            enabled: true,
            hit_region: HitRegion::Anywhere,
            tracking: None,
            velocity: VelocityTracker1D::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops any pan in progress without reporting it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.tracking = None;
        }
    }

    pub fn set_hit_region(&mut self, hit_region: HitRegion) {
        self.hit_region = hit_region;
    }

    pub fn hit_region(&self) -> HitRegion {
        self.hit_region
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn handle(&mut self, event: &PointerEvent) -> SmallVec<[PanEvent; 2]> {
        let mut out = SmallVec::new();
        if !self.enabled {
            return out;
        }

        match event.kind {
            PointerEventKind::Down => {
                if !self.hit_region.contains(event.x) {
                    log::trace!("pan: down at {} outside {:?}", event.x, self.hit_region);
                    return out;
                }
                self.tracking = Some(Tracking {
                    start_x: event.x,
                    start_y: event.y,
                    active: false,
                });
                self.velocity.reset();
                self.velocity.add_position(event.time_ms, event.x);
                out.push(PanEvent::Sample(GestureSample::new(
                    GesturePhase::Began,
                    event.x,
                    0.0,
                    0.0,
                )));
            }
            PointerEventKind::Move => {
                let Some(mut tracking) = self.tracking else {
                    return out;
                };
                self.velocity.add_position(event.time_ms, event.x);
                let dx = event.x - tracking.start_x;
                let dy = event.y - tracking.start_y;

                if !tracking.active {
                    if dy.abs() > self.config.fail_offset_y {
                        log::trace!("pan: failed on vertical travel {dy}");
                        self.tracking = None;
                        out.push(PanEvent::Sample(self.sample(GesturePhase::Failed, event, dx, dy)));
                        return out;
                    }
                    if dx.abs() <= self.config.active_offset_x {
                        return out;
                    }
                    tracking.active = true;
                    self.tracking = Some(tracking);
                }
                out.push(PanEvent::Sample(self.sample(GesturePhase::Active, event, dx, dy)));
            }
            PointerEventKind::Up => {
                let Some(tracking) = self.tracking.take() else {
                    return out;
                };
                self.velocity.add_position(event.time_ms, event.x);
                let dx = event.x - tracking.start_x;
                let dy = event.y - tracking.start_y;
                if tracking.active {
                    out.push(PanEvent::Sample(self.sample(GesturePhase::Ended, event, dx, dy)));
                } else {
                    out.push(PanEvent::Sample(self.sample(GesturePhase::Failed, event, dx, dy)));
                    out.push(PanEvent::Tap {
                        x: event.x,
                        y: event.y,
                    });
                }
            }
            PointerEventKind::Cancel => {
                if let Some(tracking) = self.tracking.take() {
                    let dx = event.x - tracking.start_x;
                    let dy = event.y - tracking.start_y;
                    out.push(PanEvent::Sample(self.sample(
                        GesturePhase::Cancelled,
                        event,
                        dx,
                        dy,
                    )));
                }
            }
        }
        out
    }

    fn sample(&self, phase: GesturePhase, event: &PointerEvent, dx: f32, dy: f32) -> GestureSample {
        GestureSample::new(
            phase,
            event.x,
            dx,
            self.velocity.velocity_with_max(self.config.max_velocity),
        )
        .with_translation_y(dy)
    }
}

#[cfg(test)]
#[path = "tests/pan_tests.rs"]
mod tests;
