//! Scripted drawer session with a simulated owner and 60 fps clock.

use std::time::Duration;

use anyhow::{ensure, Context, Result};
use slideout_drawer::{Drawer, DrawerListener, DrawerProps, RenderFrame};
use slideout_foundation::PointerSample;
use slideout_graphics::Size;
use web_time::Instant;

const FRAME_NANOS: u64 = 16_666_667;
const MAX_FRAMES: usize = 600;

/// Owner of the drawer's `open` prop.
#[derive(Debug)]
pub struct DemoOwner {
    pub accepts_updates: bool,
    pub open: bool,
    pub opened: usize,
    pub closed: usize,
}

impl DemoOwner {
    fn new(open: bool) -> Self {
        Self {
            accepts_updates: true,
            open,
            opened: 0,
            closed: 0,
        }
    }
}

impl DrawerListener for DemoOwner {
    fn on_open(&mut self) {
        self.opened += 1;
        if self.accepts_updates {
            self.open = true;
        }
        log::info!("owner: on_open (accepts={})", self.accepts_updates);
    }

    fn on_close(&mut self) {
        self.closed += 1;
        if self.accepts_updates {
            self.open = false;
        }
        log::info!("owner: on_close (accepts={})", self.accepts_updates);
    }
}

#[derive(Debug, Default)]
struct EvaluationStats {
    frames: u64,
    total: Duration,
    worst: Duration,
}

impl EvaluationStats {
    fn record(&mut self, elapsed: Duration) {
        self.frames += 1;
        self.total += elapsed;
        self.worst = self.worst.max(elapsed);
    }

    fn average(&self) -> Duration {
        if self.frames == 0 {
            return Duration::ZERO;
        }
        self.total / self.frames as u32
    }
}

pub struct Session {
    drawer: Drawer,
    owner: DemoOwner,
    container: Size,
    frame_time_nanos: u64,
    last_frame: RenderFrame,
    stats: EvaluationStats,
}

impl Session {
    pub fn new(props: DrawerProps, container: Size, drawer_width: f32) -> Result<Self> {
        let drawer = Drawer::try_new(props).context("invalid drawer props")?;
        let last_frame = *drawer.last_frame();
        let mut session = Self {
            drawer,
            owner: DemoOwner::new(props.open),
            container,
            frame_time_nanos: 0,
            last_frame,
            stats: EvaluationStats::default(),
        };
        session.drawer.on_layout(drawer_width);
        session.run_until_idle()?;
        Ok(session)
    }

    pub fn owner(&self) -> &DemoOwner {
        &self.owner
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn set_owner_accepts(&mut self, accepts: bool) {
        self.owner.accepts_updates = accepts;
    }

    /// Owner flips its prop, as a button elsewhere in the UI would.
    pub fn set_open(&mut self, open: bool) {
        self.owner.open = open;
        self.sync_props();
    }

    pub fn press_backdrop(&mut self) -> bool {
        self.drawer.press_backdrop()
    }

    /// Drags a pointer horizontally from `from_x` to `to_x` over `steps`
    /// frames, then lifts it. Returns whether the drawer picked it up.
    pub fn swipe(&mut self, from_x: f32, to_x: f32, steps: u32) -> Result<bool> {
        ensure!(steps > 0, "swipe needs at least one step");
        let y = self.container.height / 2.0;
        let mut time_ms = self.time_ms();
        if !self
            .drawer
            .handle_pointer(PointerSample::down(from_x, y, time_ms), self.container)
        {
            log::info!("swipe from x={from_x:.0} missed the drawer");
            return Ok(false);
        }
        for step in 1..=steps {
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            self.advance_frame();
            time_ms = self.time_ms();
            self.drawer
                .handle_pointer(PointerSample::moved(x, y, time_ms), self.container);
        }
        self.drawer
            .handle_pointer(PointerSample::up(to_x, y, time_ms + 4), self.container);
        Ok(true)
    }

    pub fn advance_frame(&mut self) -> RenderFrame {
        let started = Instant::now();
        let frame = self.drawer.frame(self.frame_time_nanos, &mut self.owner);
        self.stats.record(started.elapsed());

        self.frame_time_nanos += FRAME_NANOS;
        self.last_frame = frame;
        self.sync_props();
        log::trace!(
            "frame t={}ms position={:.1} progress={:.3}",
            self.frame_time_nanos / 1_000_000,
            self.drawer.position(),
            frame.progress
        );
        frame
    }

    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.advance_frame();
        }
    }

    pub fn run_until_idle(&mut self) -> Result<usize> {
        let mut frames = 0;
        while self.drawer.needs_frame() {
            ensure!(
                frames < MAX_FRAMES,
                "drawer still animating after {MAX_FRAMES} frames"
            );
            self.advance_frame();
            frames += 1;
        }
        Ok(frames)
    }

    pub fn describe(&self) -> String {
        format!(
            "open={} position={:.1} progress={:.2} backdrop={:.2} (owner open={}, opened={}, closed={})",
            self.drawer.is_open(),
            self.drawer.position(),
            self.last_frame.progress,
            self.last_frame.backdrop_opacity,
            self.owner.open,
            self.owner.opened,
            self.owner.closed
        )
    }

    pub fn report(&self) {
        log::info!(
            "evaluated {} frames, avg {:?}, worst {:?}",
            self.stats.frames,
            self.stats.average(),
            self.stats.worst
        );
    }

    fn sync_props(&mut self) {
        if self.drawer.props().open != self.owner.open {
            let props = self.drawer.props().with_open(self.owner.open);
            self.drawer.set_props(props);
        }
    }

    fn time_ms(&self) -> i64 {
        (self.frame_time_nanos / 1_000_000) as i64
    }
}
