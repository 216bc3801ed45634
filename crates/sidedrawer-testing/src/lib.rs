//! Testing utilities and harness for sidedrawer

pub mod drawer_assertions;
pub mod harness;
pub mod recorder;

pub use drawer_assertions::*;
pub use harness::{DrawerHarness, FRAME_NANOS, MAX_SETTLE_FRAMES};
pub use recorder::{DrawerEvent, DrawerRecorder, RecordingKeyboard, RecordingStatusBar};

pub mod prelude {
    pub use crate::drawer_assertions::*;
    pub use crate::harness::*;
    pub use crate::recorder::*;
}
