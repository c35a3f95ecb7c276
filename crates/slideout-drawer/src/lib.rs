//! Swipeable side drawer engine
//!
//! A drawer panel slides over content, driven either by a horizontal drag or
//! by the owner flipping its `open` prop. All per-drawer state lives in one
//! [`DrawerState`]; [`engine::evaluate`] advances it once per display frame
//! and [`Drawer`] wraps it for hosts, queueing input between frames and
//! keeping the owner's boolean in sync.

pub mod config;
pub mod drawer;
pub mod engine;
pub mod error;
pub mod policy;
pub mod reconcile;
pub mod render;
pub mod sampler;
pub mod state;
pub mod transition;

pub use config::{
    DrawerAlignment, DrawerProps, LayoutDirection, SWIPE_DISTANCE_MINIMUM,
    SWIPE_DISTANCE_THRESHOLD_DEFAULT, SWIPE_EDGE_WIDTH_DEFAULT, SWIPE_VELOCITY_THRESHOLD_DEFAULT,
};
pub use drawer::{Drawer, DrawerListener};
pub use engine::{evaluate, FrameInput, FrameOutput};
pub use error::DrawerConfigError;
pub use policy::{classify_swipe, resolve_swipe, SwipeDecision, SwipeInput};
pub use reconcile::Reconciler;
pub use render::{PanelOffset, RenderFrame};
pub use state::{DrawerState, PanelReveal};
pub use transition::TransitionRun;

pub use slideout_animation::{Easing, SpringSpec, TweenSpec};
pub use slideout_foundation::{GestureEvent, GesturePhase, PointerSample};
pub use slideout_graphics::{Rect, Size};

pub mod prelude {
    pub use crate::config::{DrawerAlignment, DrawerProps, LayoutDirection};
    pub use crate::drawer::{Drawer, DrawerListener};
    pub use crate::render::RenderFrame;
    pub use slideout_foundation::{GestureEvent, GesturePhase, PointerSample};
}
