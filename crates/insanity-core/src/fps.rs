use instant::Instant;

use crate::constants::FPS_REPORT_INTERVAL_SEC;

/// Counts rendered frames and reports the average rate about once a second.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            frames: 0,
            window_start: now,
        }
    }

    /// Record one frame drawn at `now`. Returns the frames per second over the
    /// elapsed window once it reaches the report interval, then starts a new one.
    pub fn frame(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start).as_secs_f64();
        if elapsed < FPS_REPORT_INTERVAL_SEC {
            return None;
        }
        let fps = self.frames as f64 / elapsed;
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}

#[inline]
pub fn fps_title(fps: f64) -> String {
    format!("FPS: {fps:.2}")
}
