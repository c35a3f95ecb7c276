//! Easing curves and animation specifications.
//!
//! Specs are plain `Copy` data. The steppers in [`crate::model`] consume them.

use std::time::Duration;

/// Easing curves for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic polynomial ease-out, `1 - (1 - t)^3`. Used for programmatic
    /// drawer toggles.
    EaseOutCubic,
}

impl Easing {
    /// Maps a linear fraction in [0, 1] onto the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::EaseOutCubic => {
                let inverse = 1.0 - fraction;
                1.0 - inverse * inverse * inverse
            }
        }
    }
}

/// Fixed-duration tween: duration plus easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl TweenSpec {
    /// Create a tween animation with duration and easing.
    pub const fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create a linear tween animation.
    pub const fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_millis)
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::tween(300, Easing::EaseOutCubic)
    }
}

/// Damped harmonic oscillator parameters.
///
/// `damping` is the viscous damping coefficient (not a ratio); the ratio is
/// derived from it together with `mass` and `stiffness`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub damping: f32,
    pub mass: f32,
    pub stiffness: f32,
    /// Finish as soon as the value crosses the target instead of bouncing.
    pub overshoot_clamping: bool,
    /// Speed (units/s) below which the spring may come to rest.
    pub rest_speed_threshold: f32,
    /// Distance from target below which the spring may come to rest.
    pub rest_displacement_threshold: f32,
}

impl SpringSpec {
    /// Slightly under-damped spring with clamped overshoot, tuned for drawers.
    pub const fn drawer() -> Self {
        Self {
            damping: 30.0,
            mass: 1.0,
            stiffness: 250.0,
            overshoot_clamping: true,
            rest_speed_threshold: 0.001,
            rest_displacement_threshold: 0.001,
        }
    }

    pub const fn with_overshoot_clamping(mut self, overshoot_clamping: bool) -> Self {
        self.overshoot_clamping = overshoot_clamping;
        self
    }

    /// 1.0 = critically damped, < 1.0 = under-damped, > 1.0 = over-damped.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped angular frequency in rad/s.
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::drawer()
    }
}
