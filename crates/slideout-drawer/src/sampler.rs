//! Gesture sampler: folds pan events into drawer state.

use slideout_foundation::{GestureEvent, GesturePhase};

use crate::policy::{classify_swipe, SwipeInput};
use crate::state::DrawerState;
use crate::transition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Locked drawer; nothing recorded.
    Ignored,
    /// Sample recorded without starting or ending a drag.
    Recorded,
    DragStarted,
    Dragged,
    /// Drag ended and a spring started toward `target_open`.
    Released { target_open: bool },
}

/// Applies one gesture event. While locked, only the end of a drag that
/// was already in progress gets through.
pub fn apply_gesture(state: &mut DrawerState, event: GestureEvent) -> SampleOutcome {
    if state.locked && !state.is_dragging {
        return SampleOutcome::Ignored;
    }
    let event = sanitize(event);

    state.gesture_phase = event.phase;
    state.gesture_translation = event.translation_x;
    state.gesture_velocity = event.velocity_x;

    match event.phase {
        GesturePhase::Active => {
            let started = !state.is_dragging;
            if started {
                state.is_dragging = true;
                state.is_gesture_originated = true;
                state.drag_offset = state.position;
                if state.run.is_running() {
                    log::debug!("drawer: drag took over running transition");
                }
            }
            state.position = state.clamp_position(state.drag_offset + event.translation_x);
            state.run.stop();
            if started {
                SampleOutcome::DragStarted
            } else {
                SampleOutcome::Dragged
            }
        }
        phase if phase.is_terminal() && state.is_dragging => {
            state.is_dragging = false;
            let decision = classify_swipe(&SwipeInput {
                translation_x: event.translation_x,
                velocity_x: event.velocity_x,
                alignment: state.alignment,
                distance_threshold: state.swipe_distance_threshold,
                velocity_threshold: state.swipe_velocity_threshold,
                is_open: state.is_open,
            });
            let target_open = decision.target(state.is_open);
            log::debug!(
                "drawer: release {:?} dx={:.1} vx={:.1} -> {:?}",
                phase,
                event.translation_x,
                event.velocity_x,
                decision
            );
            transition::begin(state, target_open);
            SampleOutcome::Released { target_open }
        }
        _ => SampleOutcome::Recorded,
    }
}

/// Non-finite samples count as 0.
fn sanitize(mut event: GestureEvent) -> GestureEvent {
    if !event.translation_x.is_finite() {
        log::warn!(
            "drawer: ignoring invalid gesture translation {}, using 0",
            event.translation_x
        );
        event.translation_x = 0.0;
    }
    if !event.velocity_x.is_finite() {
        log::warn!(
            "drawer: ignoring invalid gesture velocity {}, using 0",
            event.velocity_x
        );
        event.velocity_x = 0.0;
    }
    event
}

#[cfg(test)]
#[path = "tests/sampler_tests.rs"]
mod tests;
