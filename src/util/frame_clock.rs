use std::time::Duration;

use web_time::Instant;

/// Elapsed and delta time for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Time since the clock started.
    pub elapsed: Duration,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl FrameTime {
    /// Frame time from explicit seconds (tests, replays).
    #[must_use]
    pub fn from_secs(elapsed: f32, delta: f32) -> Self {
        Self {
            elapsed: Duration::from_secs_f32(elapsed.max(0.0)),
            delta,
        }
    }

    /// Elapsed time in seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// Monotonic frame clock with smoothed FPS.
pub struct FrameClock {
    /// When the clock started.
    start: Instant,
    /// Elapsed time at the previous tick.
    previous: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Start a new clock now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            previous: Duration::ZERO,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Advance to now and return this frame's elapsed/delta time.
    pub fn tick(&mut self) -> FrameTime {
        let elapsed = self.start.elapsed();
        self.advance_to(elapsed)
    }

    /// Advance to an explicit elapsed time. Time never runs backwards.
    pub fn advance_to(&mut self, elapsed: Duration) -> FrameTime {
        let elapsed = elapsed.max(self.previous);
        let delta = (elapsed - self.previous).as_secs_f32();
        self.previous = elapsed;

        if delta > 0.0 {
            let instant_fps = 1.0 / delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTime { elapsed, delta }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_difference_between_ticks() {
        let mut clock = FrameClock::new();
        let first = clock.advance_to(Duration::from_millis(100));
        assert!((first.delta - 0.1).abs() < 1e-6);
        let second = clock.advance_to(Duration::from_millis(116));
        assert!((second.delta - 0.016).abs() < 1e-6);
        assert_eq!(second.elapsed, Duration::from_millis(116));
    }

    #[test]
    fn time_never_runs_backwards() {
        let mut clock = FrameClock::new();
        let _ = clock.advance_to(Duration::from_secs(2));
        let frame = clock.advance_to(Duration::from_secs(1));
        assert_eq!(frame.delta, 0.0);
        assert_eq!(frame.elapsed, Duration::from_secs(2));
    }

    #[test]
    fn fps_converges_toward_frame_rate() {
        let mut clock = FrameClock::new();
        for i in 1..=400 {
            let _ = clock.advance_to(Duration::from_millis(i * 33));
        }
        assert!((clock.fps() - 30.3).abs() < 1.0, "fps {}", clock.fps());
    }

    #[test]
    fn wall_clock_tick_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(b.elapsed >= a.elapsed);
        assert!(b.delta >= 0.0);
    }
}
