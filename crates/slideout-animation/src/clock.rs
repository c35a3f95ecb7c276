//! Per-transition animation clock.
//!
//! Frame timestamps come from the host's display-frame callback in
//! nanoseconds. The clock turns them into deltas for the steppers.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationClock {
    running: bool,
    last_frame_nanos: Option<u64>,
    elapsed: Duration,
}

impl AnimationClock {
    pub const fn new() -> Self {
        Self {
            running: false,
            last_frame_nanos: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Starts (or restarts) the clock. The next tick only records its
    /// timestamp and reports a zero delta.
    pub fn start(&mut self) {
        self.running = true;
        self.last_frame_nanos = None;
        self.elapsed = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_frame_nanos = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time accumulated since the last [`start`](Self::start).
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Records a frame and returns the time since the previous one.
    ///
    /// Returns zero while stopped, on the first frame after a start, and when
    /// the host hands out a timestamp older than the previous one.
    pub fn tick(&mut self, frame_time_nanos: u64) -> Duration {
        if !self.running {
            return Duration::ZERO;
        }
        let previous = self
            .last_frame_nanos
            .replace(frame_time_nanos)
            .unwrap_or(frame_time_nanos);
        let delta = Duration::from_nanos(frame_time_nanos.saturating_sub(previous));
        self.elapsed += delta;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_after_start_is_zero() {
        let mut clock = AnimationClock::new();
        clock.start();
        assert_eq!(clock.tick(1_000_000_000), Duration::ZERO);
        assert_eq!(clock.tick(1_016_000_000), Duration::from_millis(16));
        assert_eq!(clock.elapsed(), Duration::from_millis(16));
    }

    #[test]
    fn stopped_clock_does_not_advance() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.tick(5), Duration::ZERO);

        clock.start();
        clock.tick(0);
        clock.stop();
        assert_eq!(clock.tick(16_000_000), Duration::ZERO);
        assert!(!clock.is_running());
    }

    #[test]
    fn backwards_timestamp_saturates() {
        let mut clock = AnimationClock::new();
        clock.start();
        clock.tick(100);
        assert_eq!(clock.tick(50), Duration::ZERO);
    }
}
