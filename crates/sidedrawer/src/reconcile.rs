//! Committed open state shared between the drawer and its owner.
//!
//! The owner passes `open` in and is told when the drawer resolves a
//! different value on its own (a swipe, a tap on the overlay). A resolved
//! value the owner has been told about but not yet echoed back sits in the
//! single `pending` slot. If the next update from the owner disagrees with
//! it, the owner dropped the change and the drawer reverts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenStateReconciler {
    /// Last value the owner supplied.
    requested: bool,
    /// Last value the engine resolved.
    current: bool,
    /// Last value both sides agreed on, by notification or by update.
    reported: bool,
    pending: Option<bool>,
}

impl OpenStateReconciler {
    pub fn new(open: bool) -> Self {
        Self {
            requested: open,
            current: open,
            reported: open,
            pending: None,
        }
    }

    pub fn requested(&self) -> bool {
        self.requested
    }

    pub fn current(&self) -> bool {
        self.current
    }

    pub fn pending(&self) -> Option<bool> {
        self.pending
    }

    /// The engine settled on `open`. Returns true when the owner must be
    /// notified; each value is reported at most once.
    pub fn resolved(&mut self, open: bool) -> bool {
        self.current = open;
        if open == self.reported {
            return false;
        }
        self.reported = open;
        self.pending = Some(open);
        true
    }

    /// The owner supplied `open`. Returns `Some(open)` when the engine must
    /// be forced to it.
    pub fn external_update(&mut self, open: bool) -> Option<bool> {
        let dropped = matches!(self.pending, Some(pending) if pending != open);
        let force = (open != self.requested && open != self.current) || dropped;
        if dropped {
            log::warn!(
                "drawer resolved open={} but owner kept open={open}; reverting",
                !open
            );
        }

        self.pending = None;
        self.requested = open;
        self.reported = open;
        if force {
            self.current = open;
            Some(open)
        } else {
            None
        }
    }
}
