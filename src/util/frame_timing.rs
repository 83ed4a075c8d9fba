use web_time::{Duration, Instant};

/// Frame clock reporting per-frame elapsed time and a smoothed FPS.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Longest frame delta reported, so a stalled window doesn't fling the
    /// scene on resume
    max_delta: Duration,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Longest single frame reported by [`FrameTiming::end_frame`].
    pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(250);

    /// Create a clock whose first frame is measured from now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_delta(Self::DEFAULT_MAX_DELTA)
    }

    /// Create a clock that caps each reported frame at `max_delta`.
    #[must_use]
    pub fn with_max_delta(max_delta: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            max_delta,
        }
    }

    /// Restart timing from now, discarding time spent idle.
    pub fn restart(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Call once per frame. Returns the time since the previous call, capped
    /// at the configured maximum.
    pub fn end_frame(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_delta_is_capped() {
        let mut timing = FrameTiming::with_max_delta(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(timing.end_frame(), Duration::ZERO);
    }

    #[test]
    fn consecutive_frames_measure_elapsed_time() {
        let mut timing = FrameTiming::new();
        std::thread::sleep(Duration::from_millis(5));
        let dt = timing.end_frame();
        assert!(dt >= Duration::from_millis(5));
        assert!(dt <= FrameTiming::DEFAULT_MAX_DELTA);
        assert!(timing.fps() > 0.0);
    }
}
