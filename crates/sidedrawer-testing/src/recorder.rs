//! Recording implementations of the drawer's listener and capabilities.
//!
//! Each recorder is a cheap handle over shared storage: hand a clone to the
//! controller and keep one to inspect what happened.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sidedrawer::{
    DrawerListener, DrawerPhase, KeyboardController, StatusBarAnimation, StatusBarController,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    Opened,
    Closed,
    StateChanged { phase: DrawerPhase, will_show: bool },
    SwipeStarted,
    SwipeEnded,
}

impl DrawerEvent {
    pub fn is_open_or_close(&self) -> bool {
        matches!(self, DrawerEvent::Opened | DrawerEvent::Closed)
    }
}

#[derive(Clone, Debug, Default)]
pub struct DrawerRecorder {
    events: Rc<RefCell<Vec<DrawerEvent>>>,
}

impl DrawerRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DrawerEvent> {
        self.events.borrow().clone()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<DrawerEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Only the open/close notifications, in order.
    pub fn notifications(&self) -> Vec<DrawerEvent> {
        self.events
            .borrow()
            .iter()
            .copied()
            .filter(DrawerEvent::is_open_or_close)
            .collect()
    }

    /// Lifecycle phases reported, in order.
    pub fn phases(&self) -> Vec<DrawerPhase> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                DrawerEvent::StateChanged { phase, .. } => Some(*phase),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, event: DrawerEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: DrawerEvent) {
        log::trace!("recorded {event:?}");
        self.events.borrow_mut().push(event);
    }
}

impl DrawerListener for DrawerRecorder {
    fn on_drawer_open(&mut self) {
        self.push(DrawerEvent::Opened);
    }

    fn on_drawer_close(&mut self) {
        self.push(DrawerEvent::Closed);
    }

    fn on_drawer_state_changed(&mut self, phase: DrawerPhase, will_show: bool) {
        self.push(DrawerEvent::StateChanged { phase, will_show });
    }

    fn on_swipe_start(&mut self) {
        self.push(DrawerEvent::SwipeStarted);
    }

    fn on_swipe_end(&mut self) {
        self.push(DrawerEvent::SwipeEnded);
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingStatusBar {
    calls: Rc<RefCell<Vec<(bool, StatusBarAnimation)>>>,
}

impl RecordingStatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(bool, StatusBarAnimation)> {
        self.calls.borrow().clone()
    }

    pub fn is_hidden(&self) -> bool {
        self.calls
            .borrow()
            .last()
            .map(|(hidden, _)| *hidden)
            .unwrap_or(false)
    }
}

impl StatusBarController for RecordingStatusBar {
    fn set_hidden(&mut self, hidden: bool, animation: StatusBarAnimation) {
        self.calls.borrow_mut().push((hidden, animation));
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingKeyboard {
    dismissals: Rc<Cell<usize>>,
}

impl RecordingKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismissals(&self) -> usize {
        self.dismissals.get()
    }
}

impl KeyboardController for RecordingKeyboard {
    fn dismiss(&mut self) {
        self.dismissals.set(self.dismissals.get() + 1);
    }
}
