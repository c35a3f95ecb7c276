//! Transition engine: one running transition per drawer, idle otherwise.
//!
//! A transition starts from a programmatic toggle (tween) or a gesture
//! release (spring), writes `position` every frame, and reports the boolean
//! it settled on exactly once. Starting a new one preempts the old one
//! silently.

use slideout_animation::{AnimationClock, Transition, TransitionModel};

use crate::state::DrawerState;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionRun {
    clock: AnimationClock,
    model: Option<Transition>,
    target_open: bool,
    finished: bool,
}

impl TransitionRun {
    pub const fn idle() -> Self {
        Self {
            clock: AnimationClock::new(),
            model: None,
            target_open: false,
            finished: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Set once the last transition converged; cleared on every start.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Boolean the running transition is heading to.
    pub fn target_open(&self) -> Option<bool> {
        self.is_running().then_some(self.target_open)
    }

    pub fn model(&self) -> Option<&Transition> {
        self.model.as_ref()
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.clock.elapsed()
    }

    /// Starts `model` toward `target_open`. Returns whether a running
    /// transition was preempted.
    pub fn start(&mut self, model: Transition, target_open: bool) -> bool {
        let preempted = self.is_running();
        self.model = Some(model);
        self.target_open = target_open;
        self.finished = false;
        self.clock.start();
        preempted
    }

    /// Stops the clock without finishing. No settle is reported.
    pub fn stop(&mut self) {
        self.clock.stop();
    }

    /// Steps the model for the frame at `frame_time_nanos`. Returns the
    /// target on the frame the model converges.
    pub fn advance(&mut self, position: &mut f32, frame_time_nanos: u64) -> Option<bool> {
        if !self.is_running() {
            return None;
        }
        let dt = self.clock.tick(frame_time_nanos);
        let Some(model) = self.model.as_mut() else {
            self.clock.stop();
            return None;
        };
        if !model.step(position, dt) {
            return None;
        }
        self.clock.stop();
        self.finished = true;
        Some(self.target_open)
    }
}

/// Starts a transition toward `target_open` using the model selected by
/// `is_gesture_originated`. `is_open` flips immediately.
pub fn begin(state: &mut DrawerState, target_open: bool) {
    let to_value = if target_open {
        state.open_position()
    } else {
        0.0
    };
    let model = if state.is_gesture_originated {
        Transition::spring(state.spring, to_value, state.gesture_velocity)
    } else {
        Transition::timing(state.tween, state.position, to_value)
    };
    let preempted = state.run.start(model, target_open);
    if preempted {
        log::debug!("drawer: preempted running transition");
    }
    log::debug!(
        "drawer: {} transition {:.1} -> {:.1} (open={})",
        model.name(),
        state.position,
        to_value,
        target_open
    );
    state.is_open = target_open;
}

/// Restarts a running transition toward the same boolean, e.g. after the
/// alignment flipped the sign of every position. Spring velocity carries
/// over mirrored.
pub fn retarget(state: &mut DrawerState) {
    let Some(target_open) = state.run.target_open() else {
        return;
    };
    if let Some(model) = state.run.model() {
        state.gesture_velocity = -model.velocity();
    }
    begin(state, target_open);
}

/// Advances the running transition by one frame. On convergence resets the
/// gesture sample and returns the settled boolean.
pub fn step(state: &mut DrawerState, frame_time_nanos: u64) -> Option<bool> {
    let mut position = state.position;
    let settled = state.run.advance(&mut position, frame_time_nanos);
    if state.run.is_running() || settled.is_some() {
        state.position = state.clamp_position(position);
    }
    let open = settled?;
    state.gesture_translation = 0.0;
    state.gesture_velocity = 0.0;
    state.is_open = open;
    log::debug!(
        "drawer: settled {} at {:.1}",
        if open { "open" } else { "closed" },
        state.position
    );
    Some(open)
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
