//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Horizontal travel, in logical pixels, before a pan gesture activates.
///
/// Below this the pointer is treated as a press (for example on the drawer
/// backdrop) rather than a drag. Matches common platform touch slop.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum release velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity on a baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
