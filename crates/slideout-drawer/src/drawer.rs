//! Host-facing drawer.
//!
//! Hosts push input between frames (props, layout, gestures, backdrop
//! presses) and call [`Drawer::frame`] once per display frame for as long as
//! [`Drawer::needs_frame`] says so.
//!
//! ```
//! use slideout_drawer::{Drawer, DrawerListener, DrawerProps, GestureEvent};
//!
//! struct Owner {
//!     open: bool,
//! }
//!
//! impl DrawerListener for Owner {
//!     fn on_open(&mut self) {
//!         self.open = true;
//!     }
//!     fn on_close(&mut self) {
//!         self.open = false;
//!     }
//! }
//!
//! let mut owner = Owner { open: false };
//! let mut drawer = Drawer::new(DrawerProps::default());
//! drawer.on_layout(300.0);
//! drawer.on_gesture(GestureEvent::active(200.0, 0.0));
//! drawer.on_gesture(GestureEvent::end(200.0, 0.0));
//!
//! let mut frame_time = 0u64;
//! while drawer.needs_frame() {
//!     drawer.frame(frame_time, &mut owner);
//!     drawer.set_props(drawer.props().with_open(owner.open));
//!     frame_time += 16_666_667;
//! }
//! assert!(drawer.is_open());
//! assert_eq!(drawer.progress(), 1.0);
//! ```

use smallvec::SmallVec;

use slideout_foundation::{GestureEvent, PanGestureRecognizer, PointerSample};
use slideout_graphics::{EdgeInsets, Rect, Size};

use crate::config::DrawerProps;
use crate::engine::{self, FrameInput};
use crate::error::DrawerConfigError;
use crate::reconcile::Reconciler;
use crate::render::{self, RenderFrame};
use crate::state::{DrawerState, PanelReveal};
use crate::transition;

/// Owner callbacks, fired once per settled transition.
pub trait DrawerListener {
    fn on_open(&mut self) {}
    fn on_close(&mut self) {}
}

impl DrawerListener for () {}

pub struct Drawer {
    props: DrawerProps,
    state: DrawerState,
    reconciler: Reconciler,
    gestures: SmallVec<[GestureEvent; 4]>,
    recognizer: PanGestureRecognizer,
    last_frame: RenderFrame,
}

impl Drawer {
    pub fn new(props: DrawerProps) -> Self {
        let state = DrawerState::new(&props);
        let mut recognizer = PanGestureRecognizer::new();
        recognizer.set_enabled(!props.locked);
        let last_frame = render::derive(&state);
        Self {
            props,
            state,
            reconciler: Reconciler::new(props.open),
            gestures: SmallVec::new(),
            recognizer,
            last_frame,
        }
    }

    /// Like [`new`](Self::new) but rejects props that fail
    /// [`DrawerProps::validate`].
    pub fn try_new(props: DrawerProps) -> Result<Self, DrawerConfigError> {
        props.validate()?;
        Ok(Self::new(props))
    }

    pub fn props(&self) -> &DrawerProps {
        &self.props
    }

    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn position(&self) -> f32 {
        self.state.position
    }

    pub fn progress(&self) -> f32 {
        render::progress(self.state.position, self.state.drawer_width)
    }

    /// Output of the most recent frame.
    pub fn last_frame(&self) -> &RenderFrame {
        &self.last_frame
    }

    /// Replaces the props, running the reconciliation cycle against the
    /// previous ones.
    pub fn set_props(&mut self, props: DrawerProps) {
        let previous = std::mem::replace(&mut self.props, props);

        if let Some(open) = self.reconciler.props_updated(previous.open, props.open) {
            self.state.pending_open_request = Some(open);
        }

        self.state.apply_props(&props);
        if self.state.set_alignment(props.alignment) {
            log::debug!("drawer: alignment changed to {:?}", props.alignment);
            transition::retarget(&mut self.state);
        }

        if props.locked && !previous.locked {
            self.lock_gestures();
        } else if !props.locked && previous.locked {
            self.recognizer.set_enabled(true);
        }
    }

    /// Reports the measured panel width.
    pub fn on_layout(&mut self, width: f32) {
        self.state.set_width(width);
        self.state.pending_open_request = Some(self.props.open);
        if self.state.reveal == PanelReveal::Hidden {
            self.state.reveal = PanelReveal::NextFrame;
        }
    }

    /// Queues a gesture event for the next frame.
    pub fn on_gesture(&mut self, event: GestureEvent) {
        self.gestures.push(event);
    }

    /// Feeds a raw pointer sample through the built-in pan recognizer.
    /// Returns whether it produced a gesture event.
    pub fn handle_pointer(&mut self, sample: PointerSample, container: Size) -> bool {
        self.recognizer
            .set_hit_region(Some(self.gesture_region(container)));
        match self.recognizer.handle(sample) {
            Some(event) => {
                self.on_gesture(event);
                true
            }
            None => false,
        }
    }

    /// Backdrop tap: closes the drawer with a programmatic transition.
    /// Returns `false` when locked.
    pub fn press_backdrop(&mut self) -> bool {
        if self.props.locked {
            return false;
        }
        self.state.is_gesture_originated = false;
        self.state.pending_open_request = Some(false);
        true
    }

    /// Area of `container` in which a pointer down grabs the drawer: the
    /// panel's on-screen rect plus `swipe_edge_width` on its inner side.
    pub fn gesture_region(&self, container: Size) -> Rect {
        if self.props.locked {
            return Rect::EMPTY;
        }
        let width = self.state.drawer_width;
        let frame = render::derive(&self.state);
        let edge_width = self.props.swipe_edge_width.max(0.0);
        let trailing = self.state.alignment.is_trailing();
        let (closed_x, slop) = if trailing {
            (
                container.width,
                EdgeInsets::from_components(edge_width, 0.0, 0.0, 0.0),
            )
        } else {
            (-width, EdgeInsets::from_components(0.0, 0.0, edge_width, 0.0))
        };
        let closed_panel = Rect {
            x: closed_x,
            y: 0.0,
            width,
            height: container.height,
        };
        closed_panel
            .translate(frame.translate_x, 0.0)
            .outset_by(slop)
            .intersect(Rect::from_size(container))
    }

    pub fn needs_frame(&self) -> bool {
        self.state.run.is_running()
            || self.state.pending_open_request.is_some()
            || !self.gestures.is_empty()
            || self.reconciler.needs_recheck()
            || self.state.reveal == PanelReveal::NextFrame
    }

    /// Evaluates one display frame and notifies `listener` if a transition
    /// settled.
    pub fn frame<L: DrawerListener + ?Sized>(
        &mut self,
        frame_time_nanos: u64,
        listener: &mut L,
    ) -> RenderFrame {
        if let Some(open) = self.reconciler.recheck(self.props.open) {
            self.state.pending_open_request = Some(open);
        }

        let gestures = std::mem::take(&mut self.gestures);
        let output = engine::evaluate(
            &mut self.state,
            &FrameInput::new(frame_time_nanos, &gestures),
        );
        self.reconciler.confirm(self.state.is_open);

        if let Some(settled) = output.settled {
            self.reconciler.settle(settled, self.props.open, listener);
        }

        self.last_frame = output.render;
        output.render
    }

    fn lock_gestures(&mut self) {
        let cancelled = self.recognizer.set_enabled(false);
        if !self.state.is_dragging {
            return;
        }
        let event = cancelled.unwrap_or_else(|| {
            GestureEvent::cancelled(self.state.gesture_translation, self.state.gesture_velocity)
        });
        self.on_gesture(event);
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(DrawerProps::default())
    }
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod tests;
