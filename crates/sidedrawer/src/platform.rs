//! Platform capabilities injected into a drawer.
//!
//! Each drawer talks to its own instances, so several drawers (or several
//! tests) never share hidden global state.

use crate::config::StatusBarAnimation;
use crate::engine::DrawerPhase;

/// Lifecycle notifications. Every method defaults to doing nothing.
pub trait DrawerListener {
    fn on_drawer_open(&mut self) {}

    fn on_drawer_close(&mut self) {}

    fn on_drawer_state_changed(&mut self, _phase: DrawerPhase, _will_show: bool) {}

    fn on_swipe_start(&mut self) {}

    fn on_swipe_end(&mut self) {}
}

pub trait StatusBarController {
    fn set_hidden(&mut self, hidden: bool, animation: StatusBarAnimation);
}

pub trait KeyboardController {
    fn dismiss(&mut self);
}
