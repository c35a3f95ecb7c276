//! Release decision: where a finished drag sends the drawer.

use crate::config::{DrawerAlignment, SWIPE_DISTANCE_MINIMUM};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeInput {
    pub translation_x: f32,
    pub velocity_x: f32,
    pub alignment: DrawerAlignment,
    pub distance_threshold: f32,
    pub velocity_threshold: f32,
    pub is_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Travel too short to be a swipe at all.
    BelowMinimum,
    /// Far or fast enough; `open` follows the drag direction.
    Decisive { open: bool },
    /// A real drag that was neither far nor fast enough.
    SnapBack,
}

impl SwipeDecision {
    pub fn target(self, is_open: bool) -> bool {
        match self {
            SwipeDecision::Decisive { open } => open,
            SwipeDecision::BelowMinimum | SwipeDecision::SnapBack => is_open,
        }
    }
}

pub fn classify_swipe(input: &SwipeInput) -> SwipeDecision {
    let distance = input.translation_x.abs();
    if distance <= SWIPE_DISTANCE_MINIMUM {
        return SwipeDecision::BelowMinimum;
    }
    if distance > input.distance_threshold || input.velocity_x.abs() > input.velocity_threshold {
        let open = match input.alignment {
            DrawerAlignment::Leading => input.translation_x > 0.0,
            DrawerAlignment::Trailing => input.translation_x < 0.0,
        };
        return SwipeDecision::Decisive { open };
    }
    SwipeDecision::SnapBack
}

/// Boolean the drawer should settle on after the release.
pub fn resolve_swipe(input: &SwipeInput) -> bool {
    classify_swipe(input).target(input.is_open)
}

#[cfg(test)]
#[path = "tests/policy_tests.rs"]
mod tests;
