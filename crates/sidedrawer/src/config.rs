//! Drawer configuration.
//!
//! [`DrawerConfig`] follows the builder style of the animation specs: start
//! from `Default` and chain `with_*` calls. Values are checked with
//! [`DrawerConfig::validate`] when a controller is built or reconfigured.

use std::fmt;
use std::rc::Rc;

use sidedrawer_animation::{SpringSpec, TimingSpec};
use sidedrawer_gestures::DEFAULT_SWIPE_EDGE_WIDTH;

use crate::classifier::SwipeThresholds;
use crate::error::DrawerError;

/// Default distance a release must exceed to count as a swipe by distance.
pub const SWIPE_DISTANCE_THRESHOLD_DEFAULT: f32 = 120.0;

/// Default velocity a release must exceed to count as a fling.
pub const SWIPE_VELOCITY_THRESHOLD_DEFAULT: f32 = 1000.0;

/// Edge of the container the drawer hangs from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawerPosition {
    #[default]
    Left,
    Right,
}

impl DrawerPosition {
    /// Sign of an open drawer's position: `+1` for left, `-1` for right.
    pub fn direction(self) -> f32 {
        match self {
            DrawerPosition::Left => 1.0,
            DrawerPosition::Right => -1.0,
        }
    }

    /// The conventional side for a layout direction; RTL mirrors it.
    pub fn default_for_direction(direction: LayoutDirection) -> Self {
        match direction {
            LayoutDirection::Ltr => DrawerPosition::Left,
            LayoutDirection::Rtl => DrawerPosition::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// How the drawer and the content are composited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawerType {
    /// The drawer slides over content that stays put.
    #[default]
    Front,
    /// The content slides away, revealing a drawer fixed behind it.
    Back,
    /// Drawer and content move together.
    Slide,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LockMode {
    #[default]
    Unlocked,
    LockedClosed,
    LockedOpen,
}

impl LockMode {
    /// Locked drawers ignore gestures; only programmatic requests move them.
    pub fn is_locked(self) -> bool {
        self != LockMode::Unlocked
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyboardDismissMode {
    None,
    #[default]
    OnDrag,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusBarAnimation {
    #[default]
    Slide,
    Fade,
    None,
}

/// Drawer width, either fixed or computed from the current container.
///
/// A provider is re-evaluated whenever the container is resized.
#[derive(Clone)]
pub enum DrawerWidth {
    Fixed(f32),
    Provider(Rc<dyn Fn() -> f32>),
}

impl DrawerWidth {
    pub fn provider(f: impl Fn() -> f32 + 'static) -> Self {
        DrawerWidth::Provider(Rc::new(f))
    }

    pub fn resolve(&self) -> f32 {
        match self {
            DrawerWidth::Fixed(width) => *width,
            DrawerWidth::Provider(provider) => provider(),
        }
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, DrawerWidth::Provider(_))
    }
}

impl Default for DrawerWidth {
    fn default() -> Self {
        DrawerWidth::Fixed(0.0)
    }
}

impl fmt::Debug for DrawerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerWidth::Fixed(width) => f.debug_tuple("Fixed").field(width).finish(),
            DrawerWidth::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

impl From<f32> for DrawerWidth {
    fn from(width: f32) -> Self {
        DrawerWidth::Fixed(width)
    }
}

#[derive(Clone, Debug)]
pub struct DrawerConfig {
    pub drawer_position: DrawerPosition,
    pub drawer_type: DrawerType,
    pub drawer_width: DrawerWidth,
    pub lock_mode: LockMode,
    /// Width of the edge strip that accepts swipes while closed.
    pub swipe_edge_width: f32,
    pub swipe_distance_threshold: f32,
    pub swipe_velocity_threshold: f32,
    pub keyboard_dismiss_mode: KeyboardDismissMode,
    pub hide_status_bar: bool,
    pub status_bar_animation: StatusBarAnimation,
    /// Animation used after a swipe is released.
    pub spring: SpringSpec,
    /// Animation used for programmatic open/close.
    pub timing: TimingSpec,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            drawer_position: DrawerPosition::default(),
            drawer_type: DrawerType::default(),
            drawer_width: DrawerWidth::default(),
            lock_mode: LockMode::default(),
            swipe_edge_width: DEFAULT_SWIPE_EDGE_WIDTH,
            swipe_distance_threshold: SWIPE_DISTANCE_THRESHOLD_DEFAULT,
            swipe_velocity_threshold: SWIPE_VELOCITY_THRESHOLD_DEFAULT,
            keyboard_dismiss_mode: KeyboardDismissMode::default(),
            hide_status_bar: false,
            status_bar_animation: StatusBarAnimation::default(),
            spring: SpringSpec::drawer(),
            timing: TimingSpec::default(),
        }
    }
}

impl DrawerConfig {
    /// Defaults with the drawer on the conventional side for `direction`.
    pub fn for_direction(direction: LayoutDirection) -> Self {
        Self::default().with_position(DrawerPosition::default_for_direction(direction))
    }

    pub fn with_position(mut self, position: DrawerPosition) -> Self {
        self.drawer_position = position;
        self
    }

    pub fn with_type(mut self, drawer_type: DrawerType) -> Self {
        self.drawer_type = drawer_type;
        self
    }

    pub fn with_width(mut self, width: impl Into<DrawerWidth>) -> Self {
        self.drawer_width = width.into();
        self
    }

    pub fn with_lock_mode(mut self, lock_mode: LockMode) -> Self {
        self.lock_mode = lock_mode;
        self
    }

    pub fn with_swipe_edge_width(mut self, width: f32) -> Self {
        self.swipe_edge_width = width;
        self
    }

    pub fn with_swipe_distance_threshold(mut self, threshold: f32) -> Self {
        self.swipe_distance_threshold = threshold;
        self
    }

    pub fn with_swipe_velocity_threshold(mut self, threshold: f32) -> Self {
        self.swipe_velocity_threshold = threshold;
        self
    }

    pub fn with_keyboard_dismiss_mode(mut self, mode: KeyboardDismissMode) -> Self {
        self.keyboard_dismiss_mode = mode;
        self
    }

    pub fn with_hide_status_bar(mut self, hide: bool) -> Self {
        self.hide_status_bar = hide;
        self
    }

    pub fn with_status_bar_animation(mut self, animation: StatusBarAnimation) -> Self {
        self.status_bar_animation = animation;
        self
    }

    pub fn with_spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    pub fn with_timing(mut self, timing: TimingSpec) -> Self {
        self.timing = timing;
        self
    }

    pub fn thresholds(&self) -> SwipeThresholds {
        SwipeThresholds {
            distance: self.swipe_distance_threshold,
            velocity: self.swipe_velocity_threshold,
        }
    }

    /// Rejects negative or non-finite tuning values and degenerate springs.
    ///
    /// A provider width is evaluated once here.
    pub fn validate(&self) -> Result<(), DrawerError> {
        non_negative("drawer_width", self.drawer_width.resolve())?;
        non_negative("swipe_edge_width", self.swipe_edge_width)?;
        non_negative("swipe_distance_threshold", self.swipe_distance_threshold)?;
        non_negative("swipe_velocity_threshold", self.swipe_velocity_threshold)?;
        non_negative("spring.damping", self.spring.damping)?;
        positive("spring.mass", self.spring.mass)?;
        positive("spring.stiffness", self.spring.stiffness)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), DrawerError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DrawerError::InvalidConfig { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), DrawerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DrawerError::InvalidConfig { field, value })
    }
}
