//! One display frame of drawer evaluation.
//!
//! Order within a frame: reveal the panel if layout asked for it, consume the
//! pending toggle, fold in queued gesture events, then step the running
//! transition. Everything observable comes back in [`FrameOutput`].

use slideout_foundation::GestureEvent;

use crate::render::{self, RenderFrame};
use crate::sampler;
use crate::state::{DrawerState, PanelReveal};
use crate::transition;

#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    /// Display-frame timestamp in nanoseconds.
    pub frame_time_nanos: u64,
    /// Gesture events received since the previous frame, oldest first.
    pub gestures: &'a [GestureEvent],
}

impl<'a> FrameInput<'a> {
    pub fn new(frame_time_nanos: u64, gestures: &'a [GestureEvent]) -> Self {
        Self {
            frame_time_nanos,
            gestures,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub render: RenderFrame,
    /// Boolean a transition settled on during this frame.
    pub settled: Option<bool>,
    /// Another frame is needed to make progress.
    pub animating: bool,
}

pub fn evaluate(state: &mut DrawerState, input: &FrameInput<'_>) -> FrameOutput {
    if state.reveal == PanelReveal::NextFrame {
        state.reveal = PanelReveal::Visible;
    }

    if let Some(open) = state.pending_open_request.take() {
        apply_toggle(state, open);
    }

    for event in input.gestures {
        sampler::apply_gesture(state, *event);
    }

    let settled = transition::step(state, input.frame_time_nanos);

    FrameOutput {
        render: render::derive(state),
        settled,
        animating: state.run.is_running() || state.pending_open_request.is_some(),
    }
}

/// A toggle during a drag only changes the boolean the release will decide
/// against; the finger keeps the panel.
fn apply_toggle(state: &mut DrawerState, open: bool) {
    if state.is_dragging {
        log::debug!("drawer: toggle to open={open} while dragging");
        state.is_open = open;
        return;
    }
    state.is_gesture_originated = false;
    transition::begin(state, open);
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
