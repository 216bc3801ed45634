use std::cell::RefCell;
use std::rc::Rc;

use sidedrawer_gestures::GesturePhase;

use super::*;
use crate::config::DrawerWidth;

const FRAME_NANOS: u64 = 16_666_667;

#[derive(Clone, Default)]
struct Dispatched(Rc<RefCell<Vec<DrawerAction>>>);

impl Dispatched {
    fn take(&self) -> Vec<DrawerAction> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl NavigationDispatcher for Dispatched {
    fn dispatch(&mut self, action: DrawerAction) {
        self.0.borrow_mut().push(action);
    }
}

fn routes() -> Vec<Route> {
    vec![Route::new("home", "Home"), Route::new("settings", "Settings")]
}

fn descriptors() -> Descriptors {
    let mut descriptors = Descriptors::new();
    descriptors.insert("home".into(), Descriptor::default());
    descriptors.insert(
        "settings".into(),
        Descriptor::new(ScreenOptions::default().with_drawer_lock_mode(LockMode::LockedClosed)),
    );
    descriptors
}

fn closed_state() -> DrawerNavigationState {
    DrawerNavigationState {
        key: "drawer".into(),
        routes: routes(),
        index: 0,
        is_drawer_open: false,
        is_drawer_idle: true,
        ..Default::default()
    }
}

struct Fixture {
    navigator: DrawerNavigator,
    dispatched: Dispatched,
    now: u64,
}

impl Fixture {
    fn new(state: DrawerNavigationState) -> Self {
        let dispatched = Dispatched::default();
        let navigator = DrawerNavigator::new(
            DrawerConfig::default().with_width(300.0),
            descriptors(),
            dispatched.clone(),
            state,
        )
        .expect("navigator");
        Self {
            navigator,
            dispatched,
            now: 0,
        }
    }

    fn frame(&mut self) -> DrawerFrame {
        self.now += FRAME_NANOS;
        self.navigator.frame(self.now)
    }

    fn settle(&mut self) -> DrawerFrame {
        for _ in 0..300 {
            let frame = self.frame();
            if frame.phase == DrawerPhase::Idle {
                return frame;
            }
        }
        panic!("drawer did not settle");
    }

    fn update(&mut self, f: impl FnOnce(&mut DrawerNavigationState)) {
        let mut state = self.navigator.state().clone();
        f(&mut state);
        self.navigator.update(state).expect("update");
    }
}

#[test]
fn missing_descriptor_refuses_to_build() {
    let result = DrawerNavigator::new(
        DrawerConfig::default(),
        Descriptors::new(),
        Dispatched::default(),
        closed_state(),
    );
    assert_eq!(
        result.err().map(|err| err.to_string()),
        Some("no descriptor for route home".to_string())
    );
}

#[test]
fn open_request_round_trip() {
    let mut fixture = Fixture::new(closed_state());
    fixture.update(|state| state.open_id = Some(1));
    fixture.frame();
    assert_eq!(
        fixture.dispatched.take(),
        vec![
            DrawerAction::DrawerOpened {
                key: "drawer".into()
            },
            DrawerAction::MarkDrawerSettling {
                key: "drawer".into(),
                will_show: true
            },
        ]
    );

    // The router adopts the change.
    fixture.update(|state| {
        state.is_drawer_open = true;
        state.is_drawer_idle = false;
    });
    let frame = fixture.settle();
    assert_eq!(frame.state.position, 300.0);
    assert_eq!(
        fixture.dispatched.take(),
        vec![DrawerAction::MarkDrawerIdle {
            key: "drawer".into()
        }]
    );
}

#[test]
fn same_update_requests_last_one_wins() {
    let mut fixture = Fixture::new(closed_state());
    fixture.update(|state| {
        state.open_id = Some(3);
        state.close_id = Some(5);
    });
    fixture.frame();
    assert!(!fixture.navigator.controller().is_open());
    assert!(fixture.dispatched.take().is_empty());

    // Toggle after open flips it back.
    fixture.update(|state| {
        state.open_id = Some(7);
        state.toggle_id = Some(8);
    });
    assert!(!fixture.navigator.controller().target_open());

    // A toggle after a close opens.
    fixture.update(|state| {
        state.close_id = Some(9);
        state.toggle_id = Some(10);
    });
    assert!(fixture.navigator.controller().target_open());
}

#[test]
fn unchanged_ids_are_not_replayed() {
    let mut fixture = Fixture::new(closed_state());
    fixture.update(|state| state.toggle_id = Some(1));
    fixture.settle();
    assert!(fixture.navigator.controller().is_open());

    fixture.update(|state| state.is_drawer_open = true);
    fixture.update(|state| state.index = 0);
    fixture.settle();
    assert!(fixture.navigator.controller().is_open());
}

#[test]
fn lock_mode_precedence() {
    let mut fixture = Fixture::new(closed_state());
    let lock = |fixture: &Fixture| fixture.navigator.controller().config().lock_mode;
    assert_eq!(lock(&fixture), LockMode::Unlocked);

    fixture
        .navigator
        .set_screen_lock_mode(Some(LockMode::LockedOpen))
        .expect("lock");
    assert_eq!(lock(&fixture), LockMode::LockedOpen);

    // The focused route's own option beats the screen override.
    fixture.update(|state| state.index = 1);
    assert_eq!(lock(&fixture), LockMode::LockedClosed);

    fixture.navigator.set_screen_lock_mode(None).expect("lock");
    fixture.update(|state| state.index = 0);
    assert_eq!(lock(&fixture), LockMode::Unlocked);
}

#[test]
fn update_to_unknown_route_is_rejected() {
    let mut fixture = Fixture::new(closed_state());
    let mut state = closed_state();
    state.routes.push(Route::new("orphan", "Orphan"));
    state.index = 2;
    assert_eq!(
        fixture.navigator.update(state),
        Err(DrawerError::MissingDescriptor {
            route: "orphan".into()
        })
    );
    assert_eq!(fixture.navigator.state().index, 0);
}

#[test]
fn dragging_marks_the_drawer_active() {
    let mut fixture = Fixture::new(closed_state());
    fixture
        .navigator
        .handle_gesture(GestureSample::new(GesturePhase::Active, 60.0, 50.0, 0.0));
    fixture.frame();
    assert_eq!(
        fixture.dispatched.take(),
        vec![DrawerAction::MarkDrawerActive {
            key: "drawer".into()
        }]
    );
}

#[test]
fn item_press_navigates_or_closes() {
    let mut fixture = Fixture::new(closed_state());
    fixture.navigator.on_item_press("settings").expect("press");
    fixture.navigator.on_item_press("home").expect("press");
    assert_eq!(
        fixture.dispatched.take(),
        vec![
            DrawerAction::Navigate {
                route_name: "Settings".into()
            },
            DrawerAction::CloseDrawer {
                key: "drawer".into()
            },
        ]
    );
    assert!(fixture.navigator.on_item_press("nowhere").is_err());
}

#[test]
fn sidebar_items_come_from_descriptors() {
    let fixture = Fixture::new(closed_state());
    let items = fixture.navigator.sidebar_items(ItemTint::default()).expect("items");
    let labels: Vec<_> = items.iter().map(|item| item.label.clone()).collect();
    assert_eq!(labels, ["Home", "Settings"]);
    assert!(items[0].focused);
}

#[test]
fn width_provider_reevaluated_on_dimension_change() {
    let window = Rc::new(RefCell::new(400.0f32));
    let source = Rc::clone(&window);
    let dispatched = Dispatched::default();
    let mut navigator = DrawerNavigator::new(
        DrawerConfig::default().with_width(DrawerWidth::provider(move || *source.borrow() - 56.0)),
        descriptors(),
        dispatched,
        closed_state(),
    )
    .expect("navigator");
    assert_eq!(navigator.controller().drawer_width(), 344.0);

    *window.borrow_mut() = 600.0;
    navigator.on_dimensions_changed(600.0);
    assert_eq!(navigator.controller().drawer_width(), 544.0);
}
