//! Keeps the owner's `open` prop and the engine in step.
//!
//! The owner hears about every settled transition and is expected to feed
//! the result back as its `open` prop. When it does not, the next check
//! toggles the drawer back to what the owner declared, so neither side keeps
//! a different answer for longer than one cycle.

use crate::drawer::DrawerListener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconciler {
    /// Settled value offered to the owner that it has not confirmed yet.
    last_proposed: Option<bool>,
    /// Mirrors the engine's `is_open`.
    last_confirmed: bool,
    recheck_pending: bool,
}

impl Reconciler {
    pub fn new(open: bool) -> Self {
        Self {
            last_proposed: None,
            last_confirmed: open,
            recheck_pending: false,
        }
    }

    pub fn last_proposed(&self) -> Option<bool> {
        self.last_proposed
    }

    pub fn last_confirmed(&self) -> bool {
        self.last_confirmed
    }

    pub fn needs_recheck(&self) -> bool {
        self.recheck_pending
    }

    /// Records the engine's current boolean.
    pub fn confirm(&mut self, is_open: bool) {
        self.last_confirmed = is_open;
    }

    /// Props update cycle. Returns the toggle to issue, if any.
    pub fn props_updated(&mut self, previous_open: bool, open: bool) -> Option<bool> {
        let owner_changed = open != previous_open && open != self.last_confirmed;
        let proposal_dropped = self.last_proposed.is_some_and(|proposed| open != proposed);
        self.last_proposed = None;
        self.recheck_pending = false;

        if proposal_dropped {
            log::debug!("drawer: owner kept open={open}, reverting");
        }
        (owner_changed || proposal_dropped).then_some(open)
    }

    /// Runs the forced check scheduled by [`settle`](Self::settle) against
    /// unchanged props.
    pub fn recheck(&mut self, declared_open: bool) -> Option<bool> {
        if !self.recheck_pending {
            return None;
        }
        self.props_updated(declared_open, declared_open)
    }

    /// Reports a settled transition to `listener`. If the owner's prop
    /// disagrees, remembers the proposal and schedules a recheck.
    pub fn settle<L: DrawerListener + ?Sized>(
        &mut self,
        settled_open: bool,
        declared_open: bool,
        listener: &mut L,
    ) {
        self.last_confirmed = settled_open;
        if settled_open {
            listener.on_open();
        } else {
            listener.on_close();
        }
        if declared_open != settled_open {
            self.last_proposed = Some(settled_open);
            self.recheck_pending = true;
        }
    }
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
