//! Fixed-rate frame clock
//!
//! Elapsed time accumulates into `delta`, measured in frame periods. Once a
//! full period has built up, one frame is due and `delta` drops back to zero:
//! time lost to a stall is discarded rather than replayed, so the loop never
//! runs faster than its target to catch up.

use std::time::{Duration, Instant};

/// Length of the FPS reporting window
pub const REPORT_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    /// Accumulated time since the last frame, in frame periods
    delta: f64,
    last_tick: Instant,
    /// Frames counted in the current report window
    frames: u32,
    window_start: Instant,
}

impl FrameClock {
    /// Clock targeting `fps` frames per second, starting at `now`
    ///
    /// `fps` is clamped to at least 1.
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            delta: 0.0,
            last_tick: now,
            frames: 0,
            window_start: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Frames counted so far in the current window
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Restart timing at `now`, dropping any accumulated state
    pub fn reset(&mut self, now: Instant) {
        self.delta = 0.0;
        self.last_tick = now;
        self.frames = 0;
        self.window_start = now;
    }

    /// Account for time up to `now`; returns true when a frame is due
    ///
    /// At most one frame is due per call, however long the gap was.
    pub fn tick(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.delta += elapsed.as_secs_f64() / self.period.as_secs_f64();
        self.last_tick = now;

        if self.delta >= 1.0 {
            self.delta = 0.0;
            true
        } else {
            false
        }
    }

    /// Count one completed render pass
    pub fn record_frame(&mut self) {
        self.frames += 1;
    }

    /// Frames completed in the window that ended, once a full window has passed
    ///
    /// The window start advances by exactly one window per report, so a long
    /// stall yields several back-to-back reports (the later ones zero).
    pub fn poll_fps(&mut self, now: Instant) -> Option<u32> {
        if now.saturating_duration_since(self.window_start) < REPORT_WINDOW {
            return None;
        }

        let fps = self.frames;
        self.frames = 0;
        self.window_start += REPORT_WINDOW;
        Some(fps)
    }

    /// Time left at `now` before the next frame falls due (zero if already due)
    ///
    /// Time spent since the last tick, such as a render pass, counts toward
    /// the wait.
    pub fn until_next_frame(&self, now: Instant) -> Duration {
        let remaining = (1.0 - self.delta).max(0.0);
        self.period
            .mul_f64(remaining)
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}
