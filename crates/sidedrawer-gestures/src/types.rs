/// Lifecycle phase of a pan gesture, as reported by the platform handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    #[default]
    Undetermined,
    Began,
    Active,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    pub fn is_active(self) -> bool {
        self == GesturePhase::Active
    }

    /// Whether the gesture is over (successfully or not).
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed
        )
    }
}

/// One normalised pan gesture update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    /// Current touch position in container coordinates.
    pub touch_x: f32,
    /// Horizontal distance travelled since the gesture began.
    pub translation_x: f32,
    /// Vertical distance travelled since the gesture began.
    pub translation_y: f32,
    /// Horizontal velocity in px/s.
    pub velocity_x: f32,
    pub phase: GesturePhase,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, touch_x: f32, translation_x: f32, velocity_x: f32) -> Self {
        Self {
            touch_x,
            translation_x,
            translation_y: 0.0,
            velocity_x,
            phase,
        }
    }

    pub fn with_translation_y(mut self, translation_y: f32) -> Self {
        self.translation_y = translation_y;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer input delivered by the platform shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
    pub y: f32,
    /// Event timestamp in milliseconds, used for velocity tracking.
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32, y: f32, time_ms: i64) -> Self {
        Self { kind, x, y, time_ms }
    }

    pub fn down(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, x, y, time_ms)
    }

    pub fn moved(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, x, y, time_ms)
    }

    pub fn up(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, x, y, time_ms)
    }

    pub fn cancel(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, x, y, time_ms)
    }
}
