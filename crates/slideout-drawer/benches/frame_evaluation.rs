use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slideout_drawer::{
    evaluate, DrawerProps, DrawerState, FrameInput, GestureEvent, PanelReveal,
};

const FRAME_NANOS: u64 = 16_666_667;
const DRAWER_WIDTH: f32 = 320.0;
const GESTURE_BATCH_SAMPLES: &[usize] = &[1, 4, 16];

fn laid_out_state() -> DrawerState {
    let mut state = DrawerState::new(&DrawerProps::default());
    state.set_width(DRAWER_WIDTH);
    state.reveal = PanelReveal::Visible;
    state
}

/// Runs a full transition, returning the number of frames it took.
fn run_transition(state: &mut DrawerState, open: bool) -> u64 {
    state.pending_open_request = Some(open);
    let mut frame = 0;
    loop {
        let output = evaluate(state, &FrameInput::new(frame * FRAME_NANOS, &[]));
        frame += 1;
        if output.settled.is_some() || frame > 600 {
            return frame;
        }
    }
}

fn bench_idle_frame(c: &mut Criterion) {
    c.bench_function("frame_idle", |b| {
        let mut state = laid_out_state();
        let mut frame = 0u64;
        b.iter(|| {
            frame += 1;
            let output = evaluate(&mut state, &FrameInput::new(frame * FRAME_NANOS, &[]));
            black_box(output);
        });
    });
}

fn bench_timing_transition(c: &mut Criterion) {
    c.bench_function("transition_timing_open_close", |b| {
        let mut state = laid_out_state();
        b.iter(|| {
            let opened = run_transition(&mut state, true);
            let closed = run_transition(&mut state, false);
            black_box((opened, closed));
        });
    });
}

fn bench_drag_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_release");
    for &batch in GESTURE_BATCH_SAMPLES {
        group.bench_with_input(BenchmarkId::new("events_per_frame", batch), &batch, |b, &batch| {
            let events: Vec<GestureEvent> = (0..batch)
                .map(|i| GestureEvent::active((i + 1) as f32 * 200.0 / batch as f32, 900.0))
                .collect();
            b.iter(|| {
                let mut state = laid_out_state();
                let mut frame = 0u64;
                evaluate(&mut state, &FrameInput::new(frame * FRAME_NANOS, &events));
                frame += 1;
                let release = [GestureEvent::end(200.0, 900.0)];
                evaluate(&mut state, &FrameInput::new(frame * FRAME_NANOS, &release));
                loop {
                    frame += 1;
                    let output = evaluate(&mut state, &FrameInput::new(frame * FRAME_NANOS, &[]));
                    if output.settled.is_some() || frame > 600 {
                        break;
                    }
                }
                black_box(state.position);
            });
        });
    }
    group.finish();
}

criterion_group!(
    frame_evaluation,
    bench_idle_frame,
    bench_timing_transition,
    bench_drag_release
);
criterion_main!(frame_evaluation);
