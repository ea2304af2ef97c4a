use std::time::Instant;

/// Seconds between FPS reports
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Averages frame rate over `FPS_UPDATE_INTERVAL` windows.
/// Timing is informational only; the animation advances per frame, not per second.
#[derive(Debug)]
pub struct FpsCounter {
    last_frame_time: Instant,
    frames: u32,
    elapsed: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Record a frame presented now
    pub fn tick(&mut self) -> Option<f32> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;
        self.record(delta)
    }

    /// Record one frame that took `delta` seconds. Returns the new average when a window closes.
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < FPS_UPDATE_INTERVAL {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
