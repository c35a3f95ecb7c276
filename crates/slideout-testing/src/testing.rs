use slideout_drawer::{Drawer, DrawerListener, DrawerProps, RenderFrame};
use slideout_foundation::{GestureEvent, PointerSample};
use slideout_graphics::Size;

/// 60 fps frame interval in nanoseconds.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Upper bound for [`DrawerTestRule::pump_until_idle`]. Ten seconds of frames.
pub const MAX_IDLE_FRAMES: usize = 600;

/// What the owner does with a drawer callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OwnerPolicy {
    /// Writes the reported value back into its `open` prop.
    #[default]
    Accept,
    /// Keeps its `open` prop as it was.
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerCallback {
    Open,
    Close,
}

/// Owner stand-in that records every callback.
#[derive(Debug, Default)]
pub struct RecordingOwner {
    policy: OwnerPolicy,
    callbacks: Vec<DrawerCallback>,
    pending_write: Option<bool>,
}

impl RecordingOwner {
    pub fn new(policy: OwnerPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> OwnerPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: OwnerPolicy) {
        self.policy = policy;
    }

    pub fn callbacks(&self) -> &[DrawerCallback] {
        &self.callbacks
    }

    pub fn open_count(&self) -> usize {
        self.count(DrawerCallback::Open)
    }

    pub fn close_count(&self) -> usize {
        self.count(DrawerCallback::Close)
    }

    pub fn clear(&mut self) {
        self.callbacks.clear();
        self.pending_write = None;
    }

    /// Prop value the owner wants written back, if any.
    pub fn take_write(&mut self) -> Option<bool> {
        self.pending_write.take()
    }

    fn count(&self, callback: DrawerCallback) -> usize {
        self.callbacks.iter().filter(|c| **c == callback).count()
    }

    fn record(&mut self, callback: DrawerCallback) {
        self.callbacks.push(callback);
        if self.policy == OwnerPolicy::Accept {
            self.pending_write = Some(callback == DrawerCallback::Open);
        }
    }
}

impl DrawerListener for RecordingOwner {
    fn on_open(&mut self) {
        self.record(DrawerCallback::Open);
    }

    fn on_close(&mut self) {
        self.record(DrawerCallback::Close);
    }
}

/// Headless harness driving a [`Drawer`] with a synthetic 60 fps clock.
///
/// After every frame an accepting owner writes the settled value back into
/// the drawer's props, the same way a UI owner would on its next update.
pub struct DrawerTestRule {
    drawer: Drawer,
    owner: RecordingOwner,
    frame_time_nanos: u64,
    frames: usize,
    last_frame: RenderFrame,
}

impl DrawerTestRule {
    pub fn new(props: DrawerProps) -> Self {
        Self::with_owner(props, RecordingOwner::default())
    }

    pub fn with_owner(props: DrawerProps, owner: RecordingOwner) -> Self {
        let drawer = Drawer::new(props);
        let last_frame = *drawer.last_frame();
        Self {
            drawer,
            owner,
            frame_time_nanos: 0,
            frames: 0,
            last_frame,
        }
    }

    /// Lays the drawer out at `width`, lets the initial transition finish and
    /// forgets the callbacks it produced.
    pub fn laid_out(props: DrawerProps, width: f32) -> Self {
        let mut rule = Self::new(props);
        rule.layout(width);
        rule.pump_until_idle();
        rule.owner.clear();
        rule
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut Drawer {
        &mut self.drawer
    }

    pub fn owner(&self) -> &RecordingOwner {
        &self.owner
    }

    pub fn owner_mut(&mut self) -> &mut RecordingOwner {
        &mut self.owner
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Frames evaluated so far.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    pub fn last_frame(&self) -> &RenderFrame {
        &self.last_frame
    }

    pub fn set_props(&mut self, props: DrawerProps) {
        self.drawer.set_props(props);
    }

    /// Owner flips its `open` prop.
    pub fn set_open(&mut self, open: bool) {
        let props = self.drawer.props().with_open(open);
        self.drawer.set_props(props);
    }

    pub fn layout(&mut self, width: f32) {
        self.drawer.on_layout(width);
    }

    pub fn gesture(&mut self, event: GestureEvent) {
        self.drawer.on_gesture(event);
    }

    pub fn pointer(&mut self, sample: PointerSample, container: Size) -> bool {
        self.drawer.handle_pointer(sample, container)
    }

    /// Drags through `translations`, one frame per sample, without releasing.
    pub fn drag(&mut self, translations: &[f32]) {
        for translation in translations {
            self.gesture(GestureEvent::active(*translation, 0.0));
            self.advance_frame();
        }
    }

    /// Ends the current drag with the given final sample.
    pub fn release(&mut self, translation_x: f32, velocity_x: f32) {
        self.gesture(GestureEvent::end(translation_x, velocity_x));
    }

    pub fn press_backdrop(&mut self) -> bool {
        self.drawer.press_backdrop()
    }

    /// Evaluates one frame at the next 60 fps timestamp.
    pub fn advance_frame(&mut self) -> RenderFrame {
        let frame = self.drawer.frame(self.frame_time_nanos, &mut self.owner);
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.frames += 1;
        self.last_frame = frame;

        if let Some(open) = self.owner.take_write() {
            self.set_open(open);
        }
        frame
    }

    pub fn advance_frames(&mut self, count: usize) -> RenderFrame {
        for _ in 0..count {
            self.advance_frame();
        }
        self.last_frame
    }

    /// Runs frames until the drawer stops asking for them. Returns the
    /// number of frames it took.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.drawer.needs_frame() {
            if frames >= MAX_IDLE_FRAMES {
                panic!(
                    "drawer still animating after {frames} frames (position = {})",
                    self.drawer.position()
                );
            }
            self.advance_frame();
            frames += 1;
        }
        frames
    }
}
