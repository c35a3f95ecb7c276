//! Horizontal pan recognizer.
//!
//! Turns raw pointer samples into [`GestureEvent`]s. A pointer going down
//! inside the hit region begins a gesture; once the horizontal travel exceeds
//! [`DRAG_THRESHOLD`] the gesture becomes active and every further move is
//! reported with its translation and current velocity.

use slideout_graphics::{Point, Rect};

use crate::gesture::{GestureEvent, GesturePhase};
use crate::gesture_constants::DRAG_THRESHOLD;
use crate::pointer::{PointerEventKind, PointerSample};
use crate::velocity_tracker::VelocityTracker1D;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PanState {
    Idle,
    Tracking {
        origin: Point,
        translation_x: f32,
        active: bool,
    },
}

#[derive(Clone, Debug)]
pub struct PanGestureRecognizer {
    enabled: bool,
    /// `None` accepts a down anywhere.
    hit_region: Option<Rect>,
    state: PanState,
    tracker: VelocityTracker1D,
}

impl Default for PanGestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PanGestureRecognizer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            hit_region: None,
            state: PanState::Idle,
            tracker: VelocityTracker1D::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables recognition. Disabling mid-gesture cancels it and
    /// returns the cancellation event for the caller to forward.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<GestureEvent> {
        self.enabled = enabled;
        if enabled {
            return None;
        }
        self.finish(GesturePhase::Cancelled)
    }

    /// Region in which a pointer down may start a gesture. Only consulted on
    /// down; an in-progress gesture keeps tracking outside it.
    pub fn set_hit_region(&mut self, region: Option<Rect>) {
        self.hit_region = region;
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, PanState::Tracking { .. })
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PanState::Tracking { active: true, .. })
    }

    pub fn handle(&mut self, sample: PointerSample) -> Option<GestureEvent> {
        match sample.kind {
            PointerEventKind::Down => self.on_down(sample),
            PointerEventKind::Move => self.on_move(sample),
            PointerEventKind::Up => {
                self.track(sample);
                let phase = if self.is_active() {
                    GesturePhase::End
                } else {
                    GesturePhase::Failed
                };
                self.finish(phase)
            }
            PointerEventKind::Cancel => self.finish(GesturePhase::Cancelled),
        }
    }

    fn on_down(&mut self, sample: PointerSample) -> Option<GestureEvent> {
        if !self.enabled {
            return None;
        }
        if let Some(region) = self.hit_region {
            if !region.contains(sample.position) {
                return None;
            }
        }
        if self.is_tracking() {
            log::debug!("pan: pointer down while tracking, restarting gesture");
        }
        self.tracker.reset();
        self.tracker.add_data_point(sample.time_ms, sample.position.x);
        self.state = PanState::Tracking {
            origin: sample.position,
            translation_x: 0.0,
            active: false,
        };
        Some(GestureEvent::began())
    }

    fn on_move(&mut self, sample: PointerSample) -> Option<GestureEvent> {
        self.track(sample);
        let PanState::Tracking {
            translation_x,
            active,
            ..
        } = &mut self.state
        else {
            return None;
        };
        if !*active && translation_x.abs() > DRAG_THRESHOLD {
            *active = true;
        }
        if !*active {
            return None;
        }
        Some(GestureEvent::active(
            *translation_x,
            self.tracker.release_velocity(),
        ))
    }

    fn track(&mut self, sample: PointerSample) {
        if let PanState::Tracking {
            origin,
            translation_x,
            ..
        } = &mut self.state
        {
            *translation_x = sample.position.x - origin.x;
            self.tracker.add_data_point(sample.time_ms, sample.position.x);
        }
    }

    fn finish(&mut self, phase: GesturePhase) -> Option<GestureEvent> {
        let PanState::Tracking {
            translation_x,
            active,
            ..
        } = std::mem::replace(&mut self.state, PanState::Idle)
        else {
            return None;
        };
        let velocity_x = if active {
            self.tracker.release_velocity()
        } else {
            0.0
        };
        self.tracker.reset();
        Some(GestureEvent::new(phase, translation_x, velocity_x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slideout_graphics::Size;

    #[test]
    fn small_moves_do_not_activate() {
        let mut pan = PanGestureRecognizer::new();
        assert_eq!(pan.handle(PointerSample::down(10.0, 10.0, 0)), Some(GestureEvent::began()));
        assert_eq!(pan.handle(PointerSample::moved(15.0, 10.0, 8)), None);

        let up = pan.handle(PointerSample::up(16.0, 10.0, 16)).expect("gesture closes");
        assert_eq!(up.phase, GesturePhase::Failed);
        assert_eq!(up.translation_x, 6.0);
        assert_eq!(up.velocity_x, 0.0);
        assert!(!pan.is_tracking());
    }

    #[test]
    fn drag_reports_translation_from_down_point() {
        let mut pan = PanGestureRecognizer::new();
        pan.handle(PointerSample::down(10.0, 0.0, 0));
        let event = pan.handle(PointerSample::moved(40.0, 0.0, 16)).expect("active");
        assert_eq!(event.phase, GesturePhase::Active);
        assert_eq!(event.translation_x, 30.0);
        assert!(event.velocity_x > 0.0);

        let end = pan.handle(PointerSample::up(70.0, 0.0, 32)).expect("end");
        assert_eq!(end.phase, GesturePhase::End);
        assert_eq!(end.translation_x, 60.0);
        assert!(end.velocity_x > 0.0);
    }

    #[test]
    fn down_outside_region_is_ignored() {
        let mut pan = PanGestureRecognizer::new();
        pan.set_hit_region(Some(Rect::from_size(Size::new(32.0, 100.0))));
        assert_eq!(pan.handle(PointerSample::down(50.0, 10.0, 0)), None);
        assert_eq!(pan.handle(PointerSample::moved(90.0, 10.0, 16)), None);
        assert!(pan.handle(PointerSample::down(20.0, 10.0, 32)).is_some());
    }

    #[test]
    fn disabling_cancels_in_flight_gesture() {
        let mut pan = PanGestureRecognizer::new();
        pan.handle(PointerSample::down(0.0, 0.0, 0));
        pan.handle(PointerSample::moved(-40.0, 0.0, 16));
        let cancelled = pan.set_enabled(false).expect("cancellation");
        assert_eq!(cancelled.phase, GesturePhase::Cancelled);
        assert_eq!(cancelled.translation_x, -40.0);
        assert_eq!(pan.handle(PointerSample::down(0.0, 0.0, 32)), None);
    }
}
