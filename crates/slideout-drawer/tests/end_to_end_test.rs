//! Drawer behavior driven through the headless test rule.

use slideout_drawer::{
    DrawerAlignment, DrawerProps, GestureEvent, GesturePhase, PointerSample, Rect, Size,
};
use slideout_testing::{
    assert_approx_eq, assert_rect_approx_eq, DrawerCallback, DrawerTestRule, OwnerPolicy,
    RecordingOwner,
};

fn closed_drawer() -> DrawerTestRule {
    DrawerTestRule::laid_out(DrawerProps::default(), 300.0)
}

#[test]
fn swipe_open_end_to_end() {
    let mut rule = closed_drawer();
    rule.drag(&[0.0, 50.0, 100.0, 150.0, 200.0]);
    assert_eq!(rule.drawer().position(), 200.0);
    assert_approx_eq(rule.last_frame().progress, 200.0 / 300.0, 1e-6, "mid-drag progress");

    rule.release(200.0, 0.0);
    let mut previous = rule.drawer().position();
    while rule.drawer().needs_frame() {
        rule.advance_frame();
        let position = rule.drawer().position();
        assert!(position >= previous, "spring moved backwards to {position}");
        assert!(position <= 300.0);
        previous = position;
    }

    assert_eq!(rule.owner().open_count(), 1);
    assert_eq!(rule.owner().close_count(), 0);
    assert!(rule.drawer().is_open());
    assert_eq!(rule.drawer().position(), 300.0);
    assert_eq!(rule.drawer().progress(), 1.0);
    assert_eq!(rule.last_frame().backdrop_opacity, 1.0);
}

#[test]
fn settled_drawer_stays_put() {
    let mut rule = closed_drawer();
    let before = *rule.last_frame();
    let frame = rule.advance_frames(120);
    assert_eq!(frame, before);
    assert!(rule.owner().callbacks().is_empty());
    assert!(!rule.drawer().needs_frame());
}

#[test]
fn threshold_law() {
    let mut rule = closed_drawer();
    rule.drag(&[150.0]);
    rule.release(150.0, 0.0);
    rule.pump_until_idle();
    assert!(rule.drawer().is_open());

    let mut rule = closed_drawer();
    rule.drag(&[50.0]);
    rule.release(50.0, 0.0);
    rule.pump_until_idle();
    assert!(!rule.drawer().is_open());
    assert_eq!(rule.drawer().position(), 0.0);
}

#[test]
fn velocity_overrides_short_distance() {
    let mut rule = closed_drawer();
    rule.drag(&[20.0]);
    rule.release(20.0, 1500.0);
    rule.pump_until_idle();
    assert!(rule.drawer().is_open());
    assert_eq!(rule.drawer().position(), 300.0);
}

#[test]
fn non_finite_release_velocity_still_settles() {
    let mut rule = closed_drawer();
    rule.drag(&[200.0]);
    rule.release(200.0, f32::NAN);
    rule.pump_until_idle();

    assert!(!rule.drawer().needs_frame());
    assert!(rule.drawer().is_open());
    assert_eq!(rule.drawer().position(), 300.0);
    assert_eq!(rule.owner().callbacks(), &[DrawerCallback::Open]);
}

#[test]
fn sub_minimum_drag_returns_to_prior_state() {
    let mut rule = closed_drawer();
    rule.drag(&[10.0]);
    rule.release(10.0, 5000.0);
    rule.pump_until_idle();
    assert!(!rule.drawer().is_open());
    assert_eq!(rule.drawer().position(), 0.0);

    let mut rule = DrawerTestRule::laid_out(DrawerProps::default().with_open(true), 300.0);
    rule.drag(&[-10.0]);
    rule.release(-10.0, -5000.0);
    rule.pump_until_idle();
    assert!(rule.drawer().is_open());
    assert_eq!(rule.drawer().position(), 300.0);
}

#[test]
fn position_and_progress_stay_bounded() {
    let mut rule = closed_drawer();
    rule.drag(&[100.0, 400.0, 900.0]);
    assert_eq!(rule.drawer().position(), 300.0);
    assert_eq!(rule.last_frame().progress, 1.0);

    rule.drag(&[-900.0]);
    assert_eq!(rule.drawer().position(), 0.0);
    assert_eq!(rule.last_frame().progress, 0.0);

    rule.release(-900.0, -8000.0);
    for _ in 0..60 {
        let frame = rule.advance_frame();
        assert!(rule.drawer().position().abs() <= 300.0);
        assert!((0.0..=1.0).contains(&frame.progress));
    }
}

#[test]
fn zero_width_progress_is_zero() {
    let mut rule = DrawerTestRule::laid_out(DrawerProps::default().with_open(true), 0.0);
    assert_eq!(rule.last_frame().progress, 0.0);
    rule.drag(&[200.0]);
    assert_eq!(rule.drawer().position(), 0.0);
    assert_eq!(rule.last_frame().progress, 0.0);
}

#[test]
fn accepting_owner_converges_in_one_cycle() {
    let mut rule = closed_drawer();
    rule.drag(&[180.0]);
    rule.release(180.0, 0.0);
    rule.pump_until_idle();

    assert_eq!(rule.owner().callbacks(), &[DrawerCallback::Open]);
    assert!(rule.drawer().props().open);
    assert_eq!(rule.drawer().reconciler().last_proposed(), None);
    assert!(!rule.drawer().needs_frame());
}

#[test]
fn ignoring_owner_is_reverted() {
    let owner = RecordingOwner::new(OwnerPolicy::Ignore);
    let mut rule = DrawerTestRule::with_owner(DrawerProps::default(), owner);
    rule.layout(300.0);
    rule.pump_until_idle();
    rule.owner_mut().clear();

    rule.drag(&[180.0]);
    rule.release(180.0, 0.0);
    rule.pump_until_idle();

    assert_eq!(
        rule.owner().callbacks(),
        &[DrawerCallback::Open, DrawerCallback::Close]
    );
    assert!(!rule.drawer().is_open());
    assert_eq!(rule.drawer().position(), 0.0);
}

#[test]
fn preemption_fires_no_callbacks() {
    let mut rule = closed_drawer();
    rule.set_open(true);
    rule.advance_frames(6);
    assert!(rule.owner().callbacks().is_empty());

    // Owner changes its mind before the open settles.
    rule.set_open(false);
    rule.advance_frames(3);
    assert!(rule.owner().callbacks().is_empty());

    // A drag takes over the close.
    rule.drag(&[40.0]);
    assert!(rule.owner().callbacks().is_empty());
    rule.release(40.0, 0.0);
    rule.pump_until_idle();

    assert_eq!(rule.owner().callbacks(), &[DrawerCallback::Close]);
    assert_eq!(rule.drawer().position(), 0.0);
}

#[test]
fn backdrop_press_closes_with_timing() {
    let mut rule = DrawerTestRule::laid_out(DrawerProps::default().with_open(true), 300.0);
    assert!(rule.last_frame().backdrop_interactive);
    assert!(rule.press_backdrop());
    let frames = rule.pump_until_idle();

    assert_eq!(frames, 19);
    assert_eq!(rule.owner().callbacks(), &[DrawerCallback::Close]);

    // Owner wrote `open = false` back; the next frame stops catching taps.
    assert!(!rule.advance_frame().backdrop_interactive);
}

#[test]
fn trailing_drawer_opens_leftward() {
    let props = DrawerProps::default().with_alignment(DrawerAlignment::Trailing);
    let mut rule = DrawerTestRule::laid_out(props, 300.0);
    rule.drag(&[-60.0, -130.0]);
    assert_eq!(rule.drawer().position(), -130.0);
    assert_eq!(rule.last_frame().translate_x, -130.0);

    rule.release(-130.0, 0.0);
    rule.pump_until_idle();
    assert!(rule.drawer().is_open());
    assert_eq!(rule.drawer().position(), -300.0);
    assert_eq!(rule.last_frame().progress, 1.0);
}

#[test]
fn gesture_region_follows_the_panel_mid_drag() {
    let container = Size::new(400.0, 800.0);
    let mut rule = closed_drawer();
    rule.drag(&[150.0]);
    assert_rect_approx_eq(
        rule.drawer().gesture_region(container),
        Rect {
            x: 0.0,
            y: 0.0,
            width: 182.0,
            height: 800.0,
        },
        1e-4,
        "leading region",
    );

    let props = DrawerProps::default().with_alignment(DrawerAlignment::Trailing);
    let mut rule = DrawerTestRule::laid_out(props, 300.0);
    rule.drag(&[-100.0]);
    assert_rect_approx_eq(
        rule.drawer().gesture_region(container),
        Rect {
            x: 268.0,
            y: 0.0,
            width: 132.0,
            height: 800.0,
        },
        1e-4,
        "trailing region",
    );
}

#[test]
fn pointer_input_drives_the_drawer() {
    let container = Size::new(400.0, 800.0);
    let mut rule = closed_drawer();

    assert!(rule.pointer(PointerSample::down(12.0, 400.0, 0), container));
    for step in 1..=8i64 {
        let x = 12.0 + step as f32 * 25.0;
        rule.pointer(
            PointerSample::moved(x, 400.0, step * 16),
            container,
        );
        rule.advance_frame();
    }
    rule.pointer(
        PointerSample::up(212.0, 400.0, 8 * 16 + 4),
        container,
    );
    rule.pump_until_idle();

    assert!(rule.drawer().is_open());
    assert_eq!(rule.owner().open_count(), 1);
}

#[test]
fn gesture_event_without_activation_is_harmless() {
    let mut rule = closed_drawer();
    rule.gesture(GestureEvent::began());
    rule.gesture(GestureEvent::new(
        GesturePhase::Failed,
        3.0,
        0.0,
    ));
    rule.pump_until_idle();
    assert!(rule.owner().callbacks().is_empty());
    assert_eq!(rule.drawer().position(), 0.0);
}
