//! Per-drawer animated state.
//!
//! Every cell the engine reads or writes lives here. Owner input (props,
//! layout, gestures) is copied into cells; nothing is shared across drawers.

use slideout_animation::{SpringSpec, TweenSpec};
use slideout_foundation::GesturePhase;

use crate::config::{DrawerAlignment, DrawerProps, LayoutDirection};
use crate::transition::TransitionRun;

/// Panel visibility around the first layout pass. The panel stays hidden
/// until the frame after its width is known so the unmeasured frame never
/// shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelReveal {
    #[default]
    Hidden,
    NextFrame,
    Visible,
}

#[derive(Clone, Debug)]
pub struct DrawerState {
    /// Boolean the engine last animated toward.
    pub is_open: bool,
    /// Programmatic toggle waiting for the next frame.
    pub pending_open_request: Option<bool>,
    /// Panel offset in px; `0` is closed, `±drawer_width` is open.
    pub position: f32,
    /// Position snapshot taken when the current drag started.
    pub drag_offset: f32,
    pub gesture_translation: f32,
    pub gesture_velocity: f32,
    pub gesture_phase: GesturePhase,
    pub is_dragging: bool,
    /// Spring when set, tween otherwise.
    pub is_gesture_originated: bool,
    pub drawer_width: f32,
    pub alignment: DrawerAlignment,
    pub swipe_distance_threshold: f32,
    pub swipe_velocity_threshold: f32,
    pub run: TransitionRun,
    pub spring: SpringSpec,
    pub tween: TweenSpec,
    pub locked: bool,
    pub declared_open: bool,
    pub layout_direction: LayoutDirection,
    pub reveal: PanelReveal,
}

impl DrawerState {
    pub fn new(props: &DrawerProps) -> Self {
        Self {
            is_open: props.open,
            pending_open_request: None,
            position: 0.0,
            drag_offset: 0.0,
            gesture_translation: 0.0,
            gesture_velocity: 0.0,
            gesture_phase: GesturePhase::Undetermined,
            is_dragging: false,
            is_gesture_originated: false,
            drawer_width: 0.0,
            alignment: props.alignment,
            swipe_distance_threshold: props.distance_threshold(),
            swipe_velocity_threshold: props.swipe_velocity_threshold,
            run: TransitionRun::idle(),
            spring: props.spring,
            tween: props.tween,
            locked: props.locked,
            declared_open: props.open,
            layout_direction: props.layout_direction,
            reveal: PanelReveal::Hidden,
        }
    }

    /// Copies every prop except alignment, which goes through
    /// [`set_alignment`](Self::set_alignment) because it moves the panel.
    pub fn apply_props(&mut self, props: &DrawerProps) {
        self.swipe_distance_threshold = props.distance_threshold();
        self.swipe_velocity_threshold = props.swipe_velocity_threshold;
        self.spring = props.spring;
        self.tween = props.tween;
        self.locked = props.locked;
        self.declared_open = props.open;
        self.layout_direction = props.layout_direction;
    }

    /// Switches edges, mirroring position and drag offset. Returns whether
    /// the alignment changed.
    pub fn set_alignment(&mut self, alignment: DrawerAlignment) -> bool {
        if self.alignment == alignment {
            return false;
        }
        self.alignment = alignment;
        self.position = -self.position;
        self.drag_offset = -self.drag_offset;
        true
    }

    /// Stores a measured width. Non-finite and negative widths count as 0.
    pub fn set_width(&mut self, width: f32) {
        let width = if width.is_finite() && width >= 0.0 {
            width
        } else {
            log::warn!("drawer: ignoring invalid layout width {width}, using 0");
            0.0
        };
        self.drawer_width = width;
        self.position = self.clamp_position(self.position);
    }

    /// Open position under the current alignment and width.
    pub fn open_position(&self) -> f32 {
        self.drawer_width * self.alignment.sign()
    }

    /// Limits `position` to the travel range: `[0, w]` when leading,
    /// `[-w, 0]` when trailing.
    pub fn clamp_position(&self, position: f32) -> f32 {
        let open = self.open_position();
        let (low, high) = if open < 0.0 { (open, 0.0) } else { (0.0, open) };
        if position.is_nan() {
            return 0.0;
        }
        position.clamp(low, high)
    }

    /// No drag, no transition and nothing queued.
    pub fn is_settled(&self) -> bool {
        !self.is_dragging && !self.run.is_running() && self.pending_open_request.is_none()
    }
}
