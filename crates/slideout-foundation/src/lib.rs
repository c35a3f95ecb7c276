//! Foundation input layer for slideout
//!
//! Raw pointer samples come in, horizontal pan gesture events come out. The
//! drawer engine only ever sees [`GestureEvent`]s, so hosts that already own
//! a gesture recognizer can skip [`PanGestureRecognizer`] entirely.

pub mod gesture;
pub mod gesture_constants;
pub mod pan;
pub mod pointer;
pub mod velocity_tracker;

pub use gesture::{GestureEvent, GesturePhase};
pub use gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
pub use pan::PanGestureRecognizer;
pub use pointer::{PointerEventKind, PointerSample};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use super::gesture::{GestureEvent, GesturePhase};
    pub use super::pan::PanGestureRecognizer;
    pub use super::pointer::{PointerEventKind, PointerSample};
}
