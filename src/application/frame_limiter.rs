use std::time::{Duration, Instant};

/// Caps the frame rate by sleeping out the rest of each frame's time slice.
/// The wait is blocking; quitting is only observed between frames.
#[derive(Debug)]
pub struct FrameLimiter {
    frame_time: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub const fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Time left in the current frame as seen at `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame_time
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Block until the current frame's slice is used up, then start the next one
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}
