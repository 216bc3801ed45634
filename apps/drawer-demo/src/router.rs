//! In-memory router standing in for a navigation library.
//!
//! Actions dispatched by the drawer are queued and reduced into a new
//! navigation state on [`DemoRouter::drain`], the way a real router batches
//! them into its next render.

use std::cell::RefCell;
use std::rc::Rc;

use sidedrawer::{DrawerAction, DrawerNavigationState, NavigationDispatcher, Route};

#[derive(Clone, Default)]
pub struct Inbox(Rc<RefCell<Vec<DrawerAction>>>);

impl NavigationDispatcher for Inbox {
    fn dispatch(&mut self, action: DrawerAction) {
        self.0.borrow_mut().push(action);
    }
}

pub struct DemoRouter {
    state: DrawerNavigationState,
    inbox: Inbox,
    next_request_id: u64,
}

impl DemoRouter {
    pub fn new(key: &str, routes: Vec<Route>) -> Self {
        Self {
            state: DrawerNavigationState {
                key: key.to_string(),
                routes,
                index: 0,
                is_drawer_open: false,
                is_drawer_idle: true,
                ..Default::default()
            },
            inbox: Inbox::default(),
            next_request_id: 1,
        }
    }

    pub fn inbox(&self) -> Inbox {
        self.inbox.clone()
    }

    pub fn state(&self) -> &DrawerNavigationState {
        &self.state
    }

    pub fn open_drawer(&mut self) {
        self.state.open_id = Some(self.request_id());
    }

    pub fn close_drawer(&mut self) {
        self.state.close_id = Some(self.request_id());
    }

    pub fn toggle_drawer(&mut self) {
        self.state.toggle_id = Some(self.request_id());
    }

    /// Reduce queued actions into the state. Returns whether anything was
    /// queued; the state must then be handed back to the drawer.
    pub fn drain(&mut self) -> bool {
        let actions = std::mem::take(&mut *self.inbox.0.borrow_mut());
        for action in &actions {
            log::info!("router <- {action:?}");
            self.reduce(action);
        }
        !actions.is_empty()
    }

    fn reduce(&mut self, action: &DrawerAction) {
        match action {
            DrawerAction::DrawerOpened { .. } => self.state.is_drawer_open = true,
            DrawerAction::DrawerClosed { .. } => self.state.is_drawer_open = false,
            DrawerAction::MarkDrawerSettling { .. } | DrawerAction::MarkDrawerActive { .. } => {
                self.state.is_drawer_idle = false;
            }
            DrawerAction::MarkDrawerIdle { .. } => self.state.is_drawer_idle = true,
            DrawerAction::CloseDrawer { .. } => self.close_drawer(),
            DrawerAction::Navigate { route_name } => {
                match self
                    .state
                    .routes
                    .iter()
                    .position(|route| &route.route_name == route_name)
                {
                    Some(index) => {
                        self.state.index = index;
                        self.close_drawer();
                    }
                    None => log::warn!("no route named {route_name}"),
                }
            }
        }
    }

    fn request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }
}
