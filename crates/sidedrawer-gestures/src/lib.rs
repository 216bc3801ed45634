//! Gesture input for the side drawer: pan recognition, release velocity and
//! the signal block the transition engine samples each frame.

pub mod gesture_constants;
mod pan;
mod signals;
mod types;
pub mod velocity_tracker;

pub use gesture_constants::*;
pub use pan::{HitRegion, PanConfig, PanEvent, PanGestureRecognizer};
pub use signals::GestureSignals;
pub use types::{GesturePhase, GestureSample, PointerEvent, PointerEventKind};
pub use velocity_tracker::VelocityTracker1D;
