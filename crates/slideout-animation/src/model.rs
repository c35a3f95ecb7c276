//! Steppers that move a scalar toward a target one frame at a time.
//!
//! [`SpringModel`] integrates a damped harmonic oscillator analytically over
//! each frame delta. [`TimingModel`] follows a fixed-duration eased curve.
//! [`Transition`] selects between the two at runtime.

use std::time::Duration;

use crate::animation::{SpringSpec, TweenSpec};

/// Longest frame delta a spring integrates in one step. Longer gaps (a
/// stalled frame, a backgrounded app) are truncated so the spring never jumps.
pub const MAX_SPRING_FRAME: Duration = Duration::from_millis(64);

/// Ratios this close above 1 step as critically damped; the over-damped
/// closed form loses precision as its two roots converge.
const OVER_DAMPED_MARGIN: f32 = 1e-3;

pub trait TransitionModel {
    /// Advances `value` by `dt` toward [`target`](Self::target).
    ///
    /// Returns `true` once the model has settled. A settled model leaves
    /// `value` exactly at the target.
    fn step(&mut self, value: &mut f32, dt: Duration) -> bool;

    fn target(&self) -> f32;

    /// Current rate of change in units per second.
    fn velocity(&self) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringModel {
    spec: SpringSpec,
    target: f32,
    velocity: f32,
}

impl SpringModel {
    pub fn new(spec: SpringSpec, target: f32, initial_velocity: f32) -> Self {
        Self {
            spec,
            target,
            velocity: initial_velocity,
        }
    }

    pub fn spec(&self) -> &SpringSpec {
        &self.spec
    }
}

impl TransitionModel for SpringModel {
    fn step(&mut self, value: &mut f32, dt: Duration) -> bool {
        let start = *value;
        let t = dt.min(MAX_SPRING_FRAME).as_secs_f32();

        if t > 0.0 {
            let zeta = self.spec.damping_ratio();
            let omega0 = self.spec.natural_frequency();
            // Displacement and velocity expressed relative to the target.
            let x0 = self.target - start;
            let v0 = -self.velocity;

            if zeta < 1.0 {
                let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
                let envelope = (-zeta * omega0 * t).exp();
                let (sin1, cos1) = (omega1 * t).sin_cos();
                let phase = v0 + zeta * omega0 * x0;
                let fragment = envelope * (sin1 * (phase / omega1) + x0 * cos1);
                *value = self.target - fragment;
                self.velocity =
                    zeta * omega0 * fragment - envelope * (cos1 * phase - omega1 * x0 * sin1);
            } else if zeta > 1.0 + OVER_DAMPED_MARGIN {
                let root = omega0 * (zeta * zeta - 1.0).sqrt();
                let fast = -zeta * omega0 - root;
                let slow = -zeta * omega0 + root;
                let slow_weight = (v0 - fast * x0) / (slow - fast);
                let fast_weight = x0 - slow_weight;
                let (slow_decay, fast_decay) = ((slow * t).exp(), (fast * t).exp());
                *value = self.target - (slow_weight * slow_decay + fast_weight * fast_decay);
                self.velocity =
                    -(slow * slow_weight * slow_decay + fast * fast_weight * fast_decay);
            } else {
                let envelope = (-omega0 * t).exp();
                *value = self.target - envelope * (x0 + (v0 + omega0 * x0) * t);
                self.velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            }
        }

        if !value.is_finite() || !self.velocity.is_finite() {
            self.velocity = 0.0;
            *value = self.target;
            return true;
        }

        let overshooting = self.spec.overshoot_clamping
            && self.spec.stiffness != 0.0
            && if start < self.target {
                *value > self.target
            } else {
                *value < self.target
            };
        let at_rest = self.velocity.abs() < self.spec.rest_speed_threshold;
        let near_target = self.spec.stiffness == 0.0
            || (self.target - *value).abs() < self.spec.rest_displacement_threshold;

        if overshooting || (at_rest && near_target) {
            if self.spec.stiffness != 0.0 {
                self.velocity = 0.0;
                *value = self.target;
            }
            return true;
        }
        false
    }

    fn target(&self) -> f32 {
        self.target
    }

    fn velocity(&self) -> f32 {
        self.velocity
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingModel {
    spec: TweenSpec,
    from: f32,
    target: f32,
    elapsed: Duration,
}

impl TimingModel {
    pub fn new(spec: TweenSpec, from: f32, target: f32) -> Self {
        Self {
            spec,
            from,
            target,
            elapsed: Duration::ZERO,
        }
    }

    pub fn spec(&self) -> &TweenSpec {
        &self.spec
    }

    fn fraction(&self) -> f32 {
        let duration = self.spec.duration();
        if duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl TransitionModel for TimingModel {
    fn step(&mut self, value: &mut f32, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.spec.duration() {
            *value = self.target;
            return true;
        }
        let eased = self.spec.easing.transform(self.fraction());
        *value = self.from + (self.target - self.from) * eased;
        false
    }

    fn target(&self) -> f32 {
        self.target
    }

    fn velocity(&self) -> f32 {
        let duration = self.spec.duration().as_secs_f32();
        if duration <= 0.0 || self.elapsed >= self.spec.duration() {
            return 0.0;
        }
        // Finite difference over one millisecond of curve.
        let fraction = self.fraction();
        let ahead = (fraction + 0.001 / duration).min(1.0);
        let span = ahead - fraction;
        if span <= 0.0 {
            return 0.0;
        }
        let easing = self.spec.easing;
        let delta = (easing.transform(ahead) - easing.transform(fraction)) * (self.target - self.from);
        delta / (span * duration)
    }
}

/// A running transition: spring for gesture releases, tween otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Spring(SpringModel),
    Timing(TimingModel),
}

impl Transition {
    pub fn spring(spec: SpringSpec, target: f32, initial_velocity: f32) -> Self {
        Self::Spring(SpringModel::new(spec, target, initial_velocity))
    }

    pub fn timing(spec: TweenSpec, from: f32, target: f32) -> Self {
        Self::Timing(TimingModel::new(spec, from, target))
    }

    pub fn is_spring(&self) -> bool {
        matches!(self, Self::Spring(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Spring(_) => "spring",
            Self::Timing(_) => "timing",
        }
    }
}

impl TransitionModel for Transition {
    fn step(&mut self, value: &mut f32, dt: Duration) -> bool {
        let finished = match self {
            Self::Spring(model) => model.step(value, dt),
            Self::Timing(model) => model.step(value, dt),
        };
        log::trace!(
            "{} step dt={:?} value={:.3} target={:.3} finished={}",
            self.name(),
            dt,
            value,
            self.target(),
            finished
        );
        finished
    }

    fn target(&self) -> f32 {
        match self {
            Self::Spring(model) => model.target(),
            Self::Timing(model) => model.target(),
        }
    }

    fn velocity(&self) -> f32 {
        match self {
            Self::Spring(model) => model.velocity(),
            Self::Timing(model) => model.velocity(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
