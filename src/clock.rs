// Frame timing: wall-clock delta between frames plus a once-per-second FPS sample.

use std::time::{Duration, Instant};

/// Seconds from `prev` to `curr`; zero if `curr` is not after `prev`.
#[inline]
pub fn delta_seconds(prev: Instant, curr: Instant) -> f32 {
    curr.saturating_duration_since(prev).as_secs_f32()
}

/// Keeps only the previous frame's timestamp.
pub struct FrameClock {
    prev: Instant,
}

impl FrameClock {
    /// Stamp "now" as the reference for the first delta. Call right before the loop.
    pub fn start() -> Self {
        Self { prev: Instant::now() }
    }

    /// Seconds since the previous tick (or since `start` on the first call).
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = delta_seconds(self.prev, now);
        self.prev = now;
        dt
    }

    /// Timestamp taken by the latest `tick` (or by `start` before the first one).
    pub fn last_tick(&self) -> Instant {
        self.prev
    }
}

/// Counts frames and yields an average once at least a second has passed.
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self { window_start: now, frames: 0 }
    }

    /// Record one finished frame; returns the FPS when a one-second window closes.
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}
