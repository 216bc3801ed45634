//! Drawer navigator: binds a [`DrawerController`] to a navigation router.
//!
//! The router owns the navigation state and hands over a fresh
//! [`DrawerNavigationState`] after every change. Open, close and toggle
//! requests arrive as new request ids in that state; drawer lifecycle events
//! go back to the router as [`DrawerAction`]s through a
//! [`NavigationDispatcher`].

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use smallvec::SmallVec;
use sidedrawer_gestures::{GestureSample, PointerEvent};

use crate::config::{DrawerConfig, LockMode};
use crate::controller::{DrawerController, DrawerFrame};
use crate::engine::DrawerPhase;
use crate::error::DrawerError;
use crate::platform::DrawerListener;
use crate::sidebar::{resolve_items, DrawerLabel, ItemTint, SidebarItem};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub key: String,
    pub route_name: String,
}

impl Route {
    pub fn new(key: impl Into<String>, route_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            route_name: route_name.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawerNavigationState {
    pub key: String,
    pub routes: Vec<Route>,
    /// Focused route.
    pub index: usize,
    pub is_drawer_open: bool,
    pub is_drawer_idle: bool,
    pub open_id: Option<u64>,
    pub close_id: Option<u64>,
    pub toggle_id: Option<u64>,
}

impl DrawerNavigationState {
    pub fn active_route(&self) -> Option<&Route> {
        self.routes.get(self.index)
    }
}

/// Per-screen options.
#[derive(Clone, Debug, Default)]
pub struct ScreenOptions {
    pub title: Option<String>,
    pub drawer_label: Option<DrawerLabel>,
    pub drawer_lock_mode: Option<LockMode>,
}

impl ScreenOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_drawer_label(mut self, label: DrawerLabel) -> Self {
        self.drawer_label = Some(label);
        self
    }

    pub fn with_drawer_lock_mode(mut self, lock_mode: LockMode) -> Self {
        self.drawer_lock_mode = Some(lock_mode);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct Descriptor {
    pub options: ScreenOptions,
}

impl Descriptor {
    pub fn new(options: ScreenOptions) -> Self {
        Self { options }
    }
}

/// Descriptors by route key, in insertion order.
pub type Descriptors = IndexMap<String, Descriptor>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawerAction {
    DrawerOpened { key: String },
    DrawerClosed { key: String },
    MarkDrawerSettling { key: String, will_show: bool },
    MarkDrawerIdle { key: String },
    MarkDrawerActive { key: String },
    CloseDrawer { key: String },
    Navigate { route_name: String },
}

pub trait NavigationDispatcher {
    fn dispatch(&mut self, action: DrawerAction);
}

/// What the lifecycle listener needs from the latest router state.
struct RouterLink {
    key: String,
    is_drawer_idle: bool,
    dispatcher: Box<dyn NavigationDispatcher>,
}

impl RouterLink {
    fn dispatch(&mut self, action: DrawerAction) {
        log::trace!("dispatch {action:?}");
        self.dispatcher.dispatch(action);
    }
}

struct DispatchingListener {
    link: Rc<RefCell<RouterLink>>,
}

impl DrawerListener for DispatchingListener {
    fn on_drawer_open(&mut self) {
        let mut link = self.link.borrow_mut();
        let key = link.key.clone();
        link.dispatch(DrawerAction::DrawerOpened { key });
    }

    fn on_drawer_close(&mut self) {
        let mut link = self.link.borrow_mut();
        let key = link.key.clone();
        link.dispatch(DrawerAction::DrawerClosed { key });
    }

    fn on_drawer_state_changed(&mut self, phase: DrawerPhase, will_show: bool) {
        let mut link = self.link.borrow_mut();
        let key = link.key.clone();
        match phase {
            DrawerPhase::Idle => {
                if !link.is_drawer_idle {
                    link.dispatch(DrawerAction::MarkDrawerIdle { key });
                }
            }
            DrawerPhase::Settling => {
                link.dispatch(DrawerAction::MarkDrawerSettling { key, will_show });
            }
            DrawerPhase::Dragging => {
                if link.is_drawer_idle {
                    link.dispatch(DrawerAction::MarkDrawerActive { key });
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Request {
    Open,
    Close,
    Toggle,
}

pub struct DrawerNavigator {
    config: DrawerConfig,
    screen_lock_mode: Option<LockMode>,
    descriptors: Descriptors,
    state: DrawerNavigationState,
    link: Rc<RefCell<RouterLink>>,
    controller: DrawerController,
}

impl DrawerNavigator {
    /// Fails when the focused route has no descriptor.
    pub fn new(
        config: DrawerConfig,
        descriptors: Descriptors,
        dispatcher: impl NavigationDispatcher + 'static,
        state: DrawerNavigationState,
    ) -> Result<Self, DrawerError> {
        let lock_mode = resolve_lock_mode(&state, &descriptors, None, &config)?;
        let mut controller =
            DrawerController::new(config.clone().with_lock_mode(lock_mode), state.is_drawer_open)?;
        let link = Rc::new(RefCell::new(RouterLink {
            key: state.key.clone(),
            is_drawer_idle: state.is_drawer_idle,
            dispatcher: Box::new(dispatcher),
        }));
        controller.set_listener(Box::new(DispatchingListener {
            link: Rc::clone(&link),
        }));

        Ok(Self {
            config,
            screen_lock_mode: None,
            descriptors,
            state,
            link,
            controller,
        })
    }

    pub fn state(&self) -> &DrawerNavigationState {
        &self.state
    }

    pub fn controller(&self) -> &DrawerController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DrawerController {
        &mut self.controller
    }

    pub fn descriptors(&self) -> &Descriptors {
        &self.descriptors
    }

    pub fn set_descriptors(&mut self, descriptors: Descriptors) -> Result<(), DrawerError> {
        resolve_lock_mode(&self.state, &descriptors, self.screen_lock_mode, &self.config)?;
        self.descriptors = descriptors;
        self.apply_lock_mode()
    }

    /// Screen-level lock override; a route's own option still wins.
    pub fn set_screen_lock_mode(&mut self, lock_mode: Option<LockMode>) -> Result<(), DrawerError> {
        self.screen_lock_mode = lock_mode;
        self.apply_lock_mode()
    }

    /// Adopt a new router state.
    ///
    /// Request ids not present in the previous state are applied in
    /// ascending order; the last one decides, with a toggle flipping the
    /// outcome of the requests before it. The router's `is_drawer_open` is
    /// then reconciled with the drawer.
    pub fn update(&mut self, state: DrawerNavigationState) -> Result<(), DrawerError> {
        let previous = std::mem::replace(&mut self.state, state);
        if let Err(err) = self.apply_lock_mode() {
            self.state = previous;
            return Err(err);
        }
        {
            let mut link = self.link.borrow_mut();
            link.key = self.state.key.clone();
            link.is_drawer_idle = self.state.is_drawer_idle;
        }

        self.apply_requests(&previous);
        self.controller.set_open(self.state.is_drawer_open);
        Ok(())
    }

    fn apply_requests(&mut self, previous: &DrawerNavigationState) {
        let previous_ids = [previous.open_id, previous.close_id, previous.toggle_id];
        let mut changed: SmallVec<[(u64, Request); 3]> = [
            (self.state.open_id, Request::Open),
            (self.state.close_id, Request::Close),
            (self.state.toggle_id, Request::Toggle),
        ]
        .into_iter()
        .filter_map(|(id, request)| id.map(|id| (id, request)))
        .filter(|(id, _)| !previous_ids.contains(&Some(*id)))
        .collect();
        if changed.is_empty() {
            return;
        }
        changed.sort_by_key(|(id, _)| *id);

        let mut open = self.controller.target_open();
        for (id, request) in &changed {
            log::debug!("drawer request {request:?} #{id}");
            open = match request {
                Request::Open => true,
                Request::Close => false,
                Request::Toggle => !open,
            };
        }
        if open {
            self.controller.open_drawer();
        } else {
            self.controller.close_drawer();
        }
    }

    fn apply_lock_mode(&mut self) -> Result<(), DrawerError> {
        let lock_mode = resolve_lock_mode(
            &self.state,
            &self.descriptors,
            self.screen_lock_mode,
            &self.config,
        )?;
        if lock_mode != self.controller.config().lock_mode {
            log::debug!("drawer lock mode -> {lock_mode:?}");
            let config = self.controller.config().clone().with_lock_mode(lock_mode);
            self.controller.set_config(config)?;
        }
        Ok(())
    }

    pub fn frame(&mut self, frame_time_nanos: u64) -> DrawerFrame {
        self.controller.frame(frame_time_nanos)
    }

    pub fn handle_gesture(&mut self, sample: GestureSample) {
        self.controller.handle_gesture(sample);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.controller.handle_pointer(event);
    }

    pub fn on_layout(&mut self, drawer_width: f32) {
        self.controller.on_layout(drawer_width);
    }

    /// Window dimensions changed; re-evaluates a width provider.
    pub fn on_dimensions_changed(&mut self, container_width: f32) {
        self.controller.on_container_resize(container_width);
    }

    pub fn sidebar_items(&self, tint: ItemTint) -> Result<Vec<SidebarItem>, DrawerError> {
        resolve_items(&self.state, &self.descriptors, tint)
    }

    /// A sidebar item was pressed: the focused route closes the drawer,
    /// any other route is navigated to.
    pub fn on_item_press(&mut self, route_key: &str) -> Result<(), DrawerError> {
        let (index, route) = self
            .state
            .routes
            .iter()
            .enumerate()
            .find(|(_, route)| route.key == route_key)
            .ok_or_else(|| DrawerError::MissingDescriptor {
                route: route_key.to_string(),
            })?;

        let action = if index == self.state.index {
            DrawerAction::CloseDrawer {
                key: self.state.key.clone(),
            }
        } else {
            DrawerAction::Navigate {
                route_name: route.route_name.clone(),
            }
        };
        self.link.borrow_mut().dispatch(action);
        Ok(())
    }
}

/// Route option, then screen override, then navigator config.
fn resolve_lock_mode(
    state: &DrawerNavigationState,
    descriptors: &Descriptors,
    screen_lock_mode: Option<LockMode>,
    config: &DrawerConfig,
) -> Result<LockMode, DrawerError> {
    let route = state
        .active_route()
        .ok_or_else(|| DrawerError::MissingDescriptor {
            route: format!("#{}", state.index),
        })?;
    let descriptor = descriptors
        .get(&route.key)
        .ok_or_else(|| DrawerError::MissingDescriptor {
            route: route.key.clone(),
        })?;
    Ok(descriptor
        .options
        .drawer_lock_mode
        .or(screen_lock_mode)
        .unwrap_or(config.lock_mode))
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
