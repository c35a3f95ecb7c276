//! Animation primitives for slideout
//!
//! This crate provides the easing curves, spring and tween specifications and
//! the per-frame steppers that move a scalar toward a target.

pub mod animation;
pub mod clock;
pub mod model;

pub use animation::*;
pub use clock::AnimationClock;
pub use model::{SpringModel, TimingModel, Transition, TransitionModel, MAX_SPRING_FRAME};

pub mod prelude {
    pub use crate::animation::{Easing, SpringSpec, TweenSpec};
    pub use crate::clock::AnimationClock;
    pub use crate::model::{SpringModel, TimingModel, Transition, TransitionModel};
}
