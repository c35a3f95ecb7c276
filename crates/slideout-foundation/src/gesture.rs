//! Pan gesture samples consumed by the drawer engine.

/// Lifecycle of a pan gesture, mirroring the usual recognizer state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Undetermined,
    /// Pointer went down inside the hit region; not dragging yet.
    Began,
    /// Drag in progress. Only this phase moves the drawer.
    Active,
    /// Pointer released after activation.
    End,
    /// Gesture interrupted by the platform.
    Cancelled,
    /// Pointer released before the gesture activated.
    Failed,
}

impl GesturePhase {
    pub fn is_active(self) -> bool {
        matches!(self, GesturePhase::Active)
    }

    /// Phases that close out a gesture.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GesturePhase::End | GesturePhase::Cancelled | GesturePhase::Failed
        )
    }
}

/// One sample from the gesture recognizer.
///
/// `translation_x` is measured from where the pointer went down, and
/// `velocity_x` is in pixels per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    pub translation_x: f32,
    pub velocity_x: f32,
}

impl GestureEvent {
    pub const fn new(phase: GesturePhase, translation_x: f32, velocity_x: f32) -> Self {
        Self {
            phase,
            translation_x,
            velocity_x,
        }
    }

    pub const fn began() -> Self {
        Self::new(GesturePhase::Began, 0.0, 0.0)
    }

    pub const fn active(translation_x: f32, velocity_x: f32) -> Self {
        Self::new(GesturePhase::Active, translation_x, velocity_x)
    }

    pub const fn end(translation_x: f32, velocity_x: f32) -> Self {
        Self::new(GesturePhase::End, translation_x, velocity_x)
    }

    pub const fn cancelled(translation_x: f32, velocity_x: f32) -> Self {
        Self::new(GesturePhase::Cancelled, translation_x, velocity_x)
    }
}
