use super::*;

use slideout_animation::TransitionModel;

use crate::config::{DrawerAlignment, DrawerProps};

const FRAME_NANOS: u64 = 16_666_667;

fn laid_out(width: f32) -> DrawerState {
    let mut state = DrawerState::new(&DrawerProps::default());
    state.set_width(width);
    state
}

/// Steps until settled, returning the settled value and the frame count.
fn pump(state: &mut DrawerState, start_frame: u64) -> (bool, u64) {
    for frame in 0..600 {
        if let Some(open) = step(state, (start_frame + frame) * FRAME_NANOS) {
            return (open, frame + 1);
        }
    }
    panic!("transition did not settle (position = {})", state.position);
}

#[test]
fn programmatic_toggle_uses_timing_and_settles_once() {
    let mut state = laid_out(300.0);
    begin(&mut state, true);

    assert!(state.is_open);
    assert!(state.run.is_running());
    assert!(!state.run.model().map_or(true, |model| model.is_spring()));

    let (open, frames) = pump(&mut state, 0);
    assert!(open);
    assert_eq!(frames, 19, "zero-length first frame plus 300ms at 60fps");
    assert_eq!(state.position, 300.0);
    assert!(state.run.is_finished());
    assert!(!state.run.is_running());
    assert_eq!(step(&mut state, 100 * FRAME_NANOS), None);
}

#[test]
fn gesture_release_uses_spring_with_release_velocity() {
    let mut state = laid_out(300.0);
    state.position = 200.0;
    state.is_gesture_originated = true;
    state.gesture_velocity = 800.0;
    begin(&mut state, true);

    let model = state.run.model().copied().expect("model");
    assert!(model.is_spring());
    assert_eq!(model.target(), 300.0);
    assert_eq!(model.velocity(), 800.0);

    let (open, _) = pump(&mut state, 0);
    assert!(open);
    assert_eq!(state.position, 300.0);
    assert_eq!(state.gesture_velocity, 0.0);
    assert_eq!(state.gesture_translation, 0.0);
}

#[test]
fn new_request_preempts_running_transition() {
    let mut state = laid_out(300.0);
    begin(&mut state, true);
    for frame in 0..5 {
        assert_eq!(step(&mut state, frame * FRAME_NANOS), None);
    }
    let midway = state.position;
    assert!(midway > 0.0 && midway < 300.0);

    begin(&mut state, false);
    assert!(!state.is_open);
    assert_eq!(state.run.target_open(), Some(false));

    let (open, _) = pump(&mut state, 5);
    assert!(!open);
    assert_eq!(state.position, 0.0);
}

#[test]
fn zero_width_spring_settles_on_first_frame() {
    let mut state = laid_out(0.0);
    state.is_gesture_originated = true;
    begin(&mut state, true);
    assert_eq!(step(&mut state, 0), Some(true));
    assert_eq!(state.position, 0.0);
}

#[test]
fn zero_width_timing_is_a_positional_no_op() {
    let mut state = laid_out(0.0);
    begin(&mut state, true);
    let (open, frames) = pump(&mut state, 0);
    assert!(open);
    assert_eq!(frames, 19);
    assert_eq!(state.position, 0.0);
}

#[test]
fn stopped_run_never_settles() {
    let mut state = laid_out(300.0);
    begin(&mut state, true);
    step(&mut state, 0);
    step(&mut state, FRAME_NANOS);
    state.run.stop();
    for frame in 2..40 {
        assert_eq!(step(&mut state, frame * FRAME_NANOS), None);
    }
    assert!(!state.run.is_finished());
}

#[test]
fn retarget_follows_mirrored_alignment() {
    let mut state = laid_out(300.0);
    begin(&mut state, true);
    for frame in 0..5 {
        step(&mut state, frame * FRAME_NANOS);
    }
    let before = state.position;

    assert!(state.set_alignment(DrawerAlignment::Trailing));
    retarget(&mut state);
    assert_eq!(state.position, -before);
    assert_eq!(state.run.target_open(), Some(true));
    assert_eq!(state.run.model().map(|model| model.target()), Some(-300.0));

    let (open, _) = pump(&mut state, 5);
    assert!(open);
    assert_eq!(state.position, -300.0);
}

#[test]
fn retarget_without_running_transition_does_nothing() {
    let mut state = laid_out(300.0);
    retarget(&mut state);
    assert!(!state.run.is_running());
    assert!(state.run.model().is_none());
}
