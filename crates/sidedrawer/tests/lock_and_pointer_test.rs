//! Lock modes and raw pointer input routed through the drawer's pan
//! recogniser.

use sidedrawer::{
    DrawerConfig, DrawerPhase, GesturePhase, GestureSample, KeyboardDismissMode, LockMode,
};
use sidedrawer_testing::prelude::*;

const WIDTH: f32 = 300.0;

fn config() -> DrawerConfig {
    DrawerConfig::default().with_width(WIDTH)
}

#[test]
fn locked_closed_ignores_swipes() {
    let mut harness = DrawerHarness::laid_out(
        config().with_lock_mode(LockMode::LockedClosed),
        false,
        WIDTH,
    )
    .expect("valid config");

    harness.swipe(10.0, &[50.0, 150.0, 250.0], 2000.0);
    let frame = harness.pump_frames(10);

    assert_settled(&frame, false, "locked closed");
    assert_eq!(frame.state.position, 0.0);
    assert!(harness.recorder().is_empty());
    assert_eq!(harness.keyboard().dismissals(), 0);

    harness.pointer_swipe(5.0, 260.0, 200.0, 8);
    assert_eq!(harness.position(), 0.0);
    assert!(harness.recorder().is_empty());
}

#[test]
fn locked_drawer_still_opens_programmatically() {
    let mut harness = DrawerHarness::laid_out(
        config().with_lock_mode(LockMode::LockedClosed),
        false,
        WIDTH,
    )
    .expect("valid config");

    harness.controller_mut().open_drawer();
    let frame = harness.settle();
    assert_settled(&frame, true, "programmatic open while locked");
}

#[test]
fn locked_open_keeps_the_drawer_open_on_overlay_tap() {
    let mut harness = DrawerHarness::laid_out(
        config().with_lock_mode(LockMode::LockedOpen),
        true,
        WIDTH,
    )
    .expect("valid config");

    harness.tap(350.0, 200.0);
    let frame = harness.pump_frames(5);
    assert_settled(&frame, true, "locked open");
    assert!(harness.recorder().is_empty());
}

#[test]
fn locking_mid_swipe_settles_the_gesture() {
    let mut harness = DrawerHarness::laid_out(config(), false, WIDTH).expect("valid config");

    harness.send(GestureSample::new(GesturePhase::Began, 10.0, 0.0, 0.0));
    harness.pump_frame();
    harness.send(GestureSample::new(GesturePhase::Active, 210.0, 200.0, 0.0));
    assert_eq!(harness.pump_frame().phase, DrawerPhase::Dragging);

    harness
        .controller_mut()
        .set_config(config().with_lock_mode(LockMode::LockedClosed))
        .expect("valid config");
    let frame = harness.settle();

    // The cancelled drag is classified like a release.
    assert_settled(&frame, true, "cancelled past threshold");
    assert_eq!(harness.recorder().count(DrawerEvent::SwipeEnded), 1);
}

#[test]
fn edge_pointer_swipe_opens() {
    let mut harness = DrawerHarness::laid_out(config(), false, WIDTH).expect("valid config");

    harness.pointer_swipe(10.0, 260.0, 200.0, 10);
    let frame = harness.settle();

    assert_settled(&frame, true, "pointer swipe");
    assert_eq!(harness.recorder().count(DrawerEvent::SwipeStarted), 1);
    assert_eq!(harness.recorder().notifications(), vec![DrawerEvent::Opened]);
    assert_eq!(harness.keyboard().dismissals(), 1);
}

#[test]
fn pointer_outside_the_edge_is_ignored_while_closed() {
    let mut harness = DrawerHarness::laid_out(config(), false, WIDTH).expect("valid config");

    harness.pointer_swipe(100.0, 350.0, 200.0, 10);
    harness.pump_frames(5);

    assert_eq!(harness.position(), 0.0);
    assert!(harness.recorder().is_empty());
}

#[test]
fn overlay_tap_closes_an_open_drawer() {
    let mut harness = DrawerHarness::laid_out(config(), true, WIDTH).expect("valid config");

    harness.tap(350.0, 200.0);
    let frame = harness.settle();

    assert_settled(&frame, false, "overlay tap");
    assert_eq!(harness.recorder().notifications(), vec![DrawerEvent::Closed]);
}

#[test]
fn tap_inside_the_drawer_keeps_it_open() {
    let mut harness = DrawerHarness::laid_out(config(), true, WIDTH).expect("valid config");

    harness.tap(120.0, 200.0);
    let frame = harness.pump_frames(5);

    assert_settled(&frame, true, "tap on drawer");
    assert!(harness.recorder().is_empty());
}

#[test]
fn keyboard_stays_up_without_on_drag_dismissal() {
    let mut harness = DrawerHarness::laid_out(
        config().with_keyboard_dismiss_mode(KeyboardDismissMode::None),
        false,
        WIDTH,
    )
    .expect("valid config");

    harness.swipe(10.0, &[150.0], 0.0);
    harness.settle();
    assert_eq!(harness.keyboard().dismissals(), 0);
}
