//! Swipeable navigation drawer.
//!
//! A headless drawer engine: feed it gesture input, open/close requests and
//! the owner's `open` flag, call [`DrawerController::frame`] once per display
//! refresh, and draw the returned [`DrawerLayout`].

mod classifier;
mod config;
mod controller;
mod engine;
mod error;
mod layout;
pub mod navigation;
mod platform;
mod reconcile;
pub mod sidebar;

pub use classifier::{classify, SwipeRelease, SwipeThresholds};
pub use config::{
    DrawerConfig, DrawerPosition, DrawerType, DrawerWidth, KeyboardDismissMode, LayoutDirection,
    LockMode, StatusBarAnimation, SWIPE_DISTANCE_THRESHOLD_DEFAULT,
    SWIPE_VELOCITY_THRESHOLD_DEFAULT,
};
pub use controller::{DrawerController, DrawerFrame};
pub use engine::{DrawerPhase, EngineConfig, FrameOutput, TransitionEngine, TransitionState};
pub use error::DrawerError;
pub use layout::{compose, DrawerLayout, DrawerOpacity, LayoutInput};
pub use navigation::{
    Descriptor, Descriptors, DrawerAction, DrawerNavigationState, DrawerNavigator,
    NavigationDispatcher, Route, ScreenOptions,
};
pub use platform::{DrawerListener, KeyboardController, StatusBarController};
pub use reconcile::OpenStateReconciler;
pub use sidebar::{resolve_items, DrawerLabel, ItemTint, LabelContext, SidebarItem};

pub use sidedrawer_animation::{Easing, SpringSpec, TimingSpec};
pub use sidedrawer_gestures::{GesturePhase, GestureSample, PointerEvent, PointerEventKind};
