use super::*;

const FRAME_NANOS: u64 = 16_666_667;
const WIDTH: f32 = 300.0;

struct Driver {
    engine: TransitionEngine,
    config: EngineConfig,
    now: u64,
}

impl Driver {
    fn new(open: bool) -> Self {
        Self::with_config(open, EngineConfig::default())
    }

    fn with_config(open: bool, config: EngineConfig) -> Self {
        Self {
            engine: TransitionEngine::new(open, WIDTH, config.drawer_position),
            config,
            now: 0,
        }
    }

    fn frame(&mut self) -> FrameOutput {
        self.now += FRAME_NANOS;
        self.engine.frame(self.now, &self.config)
    }

    fn settle(&mut self) -> Vec<FrameOutput> {
        let mut outputs = Vec::new();
        for _ in 0..300 {
            outputs.push(self.frame());
            let state = self.engine.state();
            if !state.clock_running && !state.is_swiping {
                return outputs;
            }
        }
        panic!("engine did not settle: {:?}", self.engine.state());
    }

    fn sample(&mut self, phase: GesturePhase, touch_x: f32, translation_x: f32, velocity_x: f32) {
        self.engine
            .apply_sample(&GestureSample::new(phase, touch_x, translation_x, velocity_x));
    }
}

#[test]
fn initial_position_follows_open_state() {
    assert_eq!(TransitionEngine::new(false, WIDTH, DrawerPosition::Left).position(), 0.0);
    assert_eq!(TransitionEngine::new(true, WIDTH, DrawerPosition::Left).position(), 300.0);
    assert_eq!(TransitionEngine::new(true, WIDTH, DrawerPosition::Right).position(), -300.0);
}

#[test]
fn idle_engine_reports_nothing() {
    let mut driver = Driver::new(false);
    for _ in 0..5 {
        assert!(driver.frame().is_empty());
    }
    assert_eq!(driver.engine.position(), 0.0);
}

#[test]
fn programmatic_open_uses_timing() {
    let mut driver = Driver::new(false);
    driver.engine.request_open(true);

    let first = driver.frame();
    assert_eq!(first.open_changed, Some(true));
    assert_eq!(first.phase_changed, Some((DrawerPhase::Settling, true)));
    assert!(!driver.engine.state().is_swipe_gesture);

    let outputs = driver.settle();
    assert_eq!(driver.engine.position(), 300.0);
    assert_eq!(
        outputs.last().and_then(|o| o.phase_changed),
        Some((DrawerPhase::Idle, true))
    );
    // 300 ms at 60 fps plus the starting frame.
    assert!(outputs.len() >= 17 && outputs.len() <= 20, "{}", outputs.len());
}

#[test]
fn last_request_wins() {
    let mut driver = Driver::new(false);
    driver.engine.request_open(true);
    driver.engine.request_open(false);
    assert!(!driver.engine.target_open());

    let output = driver.frame();
    assert!(output.is_empty());
    assert_eq!(driver.engine.position(), 0.0);
}

#[test]
fn drag_past_distance_threshold_opens() {
    let mut driver = Driver::new(false);
    driver.sample(GesturePhase::Began, 10.0, 0.0, 0.0);
    assert!(driver.frame().is_empty());

    driver.sample(GesturePhase::Active, 260.0, 250.0, 0.0);
    let output = driver.frame();
    assert!(output.swipe_started);
    assert_eq!(output.phase_changed, Some((DrawerPhase::Dragging, false)));
    assert_eq!(driver.engine.position(), 250.0);

    driver.sample(GesturePhase::Ended, 260.0, 250.0, 0.0);
    let output = driver.frame();
    assert!(output.swipe_ended);
    assert_eq!(output.open_changed, Some(true));
    assert_eq!(output.phase_changed, Some((DrawerPhase::Settling, true)));
    assert!(driver.engine.state().is_swipe_gesture);

    driver.settle();
    assert_eq!(driver.engine.position(), 300.0);
    assert!(driver.engine.is_open());
    assert!(!driver.engine.state().is_swipe_gesture);
    assert_eq!(driver.engine.signals().translation_x, 0.0);
}

#[test]
fn short_fast_fling_closes() {
    let mut driver = Driver::new(true);
    driver.sample(GesturePhase::Active, 240.0, -30.0, -1500.0);
    driver.frame();
    assert_eq!(driver.engine.position(), 270.0);

    driver.sample(GesturePhase::Ended, 240.0, -30.0, -1500.0);
    let output = driver.frame();
    assert_eq!(output.open_changed, Some(false));

    driver.settle();
    assert_eq!(driver.engine.position(), 0.0);
}

#[test]
fn release_within_floor_snaps_back() {
    let mut driver = Driver::new(false);
    driver.sample(GesturePhase::Active, 14.0, 4.0, 3000.0);
    driver.frame();
    driver.sample(GesturePhase::Ended, 14.0, 4.0, 3000.0);
    let output = driver.frame();
    assert_eq!(output.open_changed, None);

    driver.settle();
    assert_eq!(driver.engine.position(), 0.0);
    assert!(!driver.engine.is_open());
}

#[test]
fn new_gesture_preempts_without_jump() {
    let mut driver = Driver::new(false);
    driver.engine.request_open(true);
    for _ in 0..6 {
        driver.frame();
    }
    let mid = driver.engine.position();
    assert!(mid > 0.0 && mid < 300.0);

    driver.sample(GesturePhase::Active, 100.0, 0.0, 0.0);
    let output = driver.frame();
    assert!(output.swipe_started);
    assert_eq!(driver.engine.position(), mid);
    assert!(!driver.engine.state().clock_running);
    assert_eq!(output.phase_changed, Some((DrawerPhase::Dragging, false)));
}

#[test]
fn front_drawer_catches_up_with_the_finger() {
    let mut driver = Driver::new(true);
    // Starts 50 px right of the open drawer's edge.
    driver.sample(GesturePhase::Active, 320.0, -30.0, 0.0);
    driver.frame();
    assert_eq!(driver.engine.position(), 320.0);

    driver.sample(GesturePhase::Active, 250.0, -100.0, 0.0);
    driver.frame();
    assert_eq!(driver.engine.position(), 250.0);
}

#[test]
fn back_drawer_follows_the_finger_directly() {
    let config = EngineConfig {
        drawer_type: DrawerType::Back,
        ..EngineConfig::default()
    };
    let mut driver = Driver::with_config(true, config);
    driver.sample(GesturePhase::Active, 320.0, -30.0, 0.0);
    driver.frame();
    assert_eq!(driver.engine.position(), 270.0);
}

#[test]
fn right_drawer_compensation_is_mirrored() {
    let config = EngineConfig {
        drawer_position: DrawerPosition::Right,
        ..EngineConfig::default()
    };
    let mut driver = Driver::with_config(true, config);
    driver.engine.set_container_width(400.0);
    // Starts at x = 20, 80 px left of the open drawer's edge at 100.
    driver.sample(GesturePhase::Active, 50.0, 30.0, 0.0);
    driver.frame();
    assert_eq!(driver.engine.position(), -350.0);
}

#[test]
fn activation_between_frames_is_not_lost() {
    let mut driver = Driver::new(false);
    driver.sample(GesturePhase::Active, 200.0, 190.0, 0.0);
    driver.sample(GesturePhase::Ended, 260.0, 250.0, 0.0);

    let output = driver.frame();
    assert!(output.swipe_started);
    assert!(output.swipe_ended);
    assert_eq!(output.open_changed, Some(true));

    driver.settle();
    assert_eq!(driver.engine.position(), 300.0);
}

#[test]
fn cancelled_gesture_settles_like_a_release() {
    let mut driver = Driver::new(false);
    driver.sample(GesturePhase::Active, 260.0, 250.0, 0.0);
    driver.frame();

    driver.engine.cancel_gesture();
    assert_eq!(driver.engine.signals().phase, GesturePhase::Cancelled);
    let output = driver.frame();
    assert!(output.swipe_ended);
    assert_eq!(output.open_changed, Some(true));
}

#[test]
fn request_during_drag_is_resolved_on_release() {
    let mut driver = Driver::new(false);
    driver.sample(GesturePhase::Active, 110.0, 100.0, 0.0);
    driver.frame();

    driver.engine.request_open(true);
    let output = driver.frame();
    assert_eq!(output.open_changed, Some(true));
    assert!(driver.engine.is_swiping());

    // Slow, short release keeps the committed state.
    driver.sample(GesturePhase::Ended, 110.0, 100.0, 0.0);
    driver.frame();
    driver.settle();
    assert_eq!(driver.engine.position(), 300.0);
}

#[test]
fn width_change_moves_an_idle_open_drawer() {
    let mut driver = Driver::new(true);
    driver.engine.set_drawer_width(250.0);
    let output = driver.frame();
    assert_eq!(output.phase_changed, Some((DrawerPhase::Settling, true)));
    driver.settle();
    assert_eq!(driver.engine.position(), 250.0);
}
