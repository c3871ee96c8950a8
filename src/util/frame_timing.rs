use web_time::Instant;

/// Monotonic clock that hands out per-frame elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
}

impl FrameClock {
    /// Start the clock now. The first [`tick`](Self::tick) measures from
    /// here.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Seconds since the previous tick (or since construction).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        dt.as_secs_f32()
    }

    /// Seconds since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Forget the time spent since the last tick (e.g. after the window was
    /// hidden) so the next delta starts from now.
    pub fn reset_tick(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Smoothed frames-per-second estimate.
#[derive(Debug, Clone, Copy)]
pub struct FrameTiming {
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    frames: u64,
}

impl FrameTiming {
    /// Create a timer seeded at 60 FPS.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Fold one frame's duration into the average. Zero-length frames only
    /// bump the frame count.
    pub fn record(&mut self, frame_time: f32) {
        self.frames += 1;
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames recorded so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
