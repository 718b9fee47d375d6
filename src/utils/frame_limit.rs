use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces a driver loop to a maximum frame rate and supplies frame timestamps.
pub struct FrameLimiter {
    start: Instant,
    frame_timer: Instant,
    target_frametime: Duration,
    frametime_smoothed: f64,
}

impl FrameLimiter {
    pub fn new(max_fps: f64) -> Self {
        let now = Instant::now();
        let mut limiter = Self {
            start: now,
            frame_timer: now,
            target_frametime: Duration::ZERO,
            frametime_smoothed: 0.,
        };
        limiter.set_max_fps(max_fps);
        limiter
    }

    /// Non-positive or non-finite rates disable the limit.
    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.target_frametime = if max_fps.is_finite() && max_fps > 0. {
            Duration::from_secs_f64(1. / max_fps)
        } else {
            Duration::ZERO
        };
    }

    /// Seconds since the limiter was created.
    pub fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Sleeps for the rest of the current frame.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();
        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
