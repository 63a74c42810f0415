//! Time sources for the game loop
//!
//! Game logic never reads the clock itself; it is handed millisecond
//! timestamps. `Clock` is the seam between SDL's tick counter and that logic,
//! and `PeriodicTimer` replaces an OS timer thread with a deadline that the
//! loop checks once per frame.

use std::time::{Duration, Instant};

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl Clock for sdl2::TimerSubsystem {
    fn now_ms(&self) -> u64 {
        self.ticks() as u64
    }
}

/// Fires every `interval_ms` while running
///
/// The first deadline is one full interval after `start`. Polling is
/// synchronous, so a slow frame catches up by reporting several fires at once
/// instead of losing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicTimer {
    interval_ms: u64,
    next_fire_ms: Option<u64>,
}

impl PeriodicTimer {
    /// Creates a stopped timer
    pub fn new(interval_ms: u64) -> Self {
        PeriodicTimer {
            interval_ms: interval_ms.max(1),
            next_fire_ms: None,
        }
    }

    pub fn start(&mut self, now_ms: u64) {
        self.next_fire_ms = Some(now_ms + self.interval_ms);
    }

    pub fn stop(&mut self) {
        self.next_fire_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_fire_ms.is_some()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Number of deadlines passed since the last poll
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let Some(mut next) = self.next_fire_ms else {
            return 0;
        };

        let mut fired = 0;
        while next <= now_ms {
            fired += 1;
            next += self.interval_ms;
        }
        self.next_fire_ms = Some(next);
        fired
    }
}

/// Caps the loop at a fixed frame rate by sleeping out the rest of each frame
pub struct FrameLimiter {
    frame_duration: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        FrameLimiter {
            frame_duration: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Sleeps until the current frame has used its full budget
    ///
    /// A frame that already ran long is not made up for; the next one just
    /// starts late.
    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut timer = PeriodicTimer::new(1500);
        assert!(!timer.is_running());
        assert_eq!(timer.poll(1_000_000), 0);
    }

    #[test]
    fn test_first_fire_after_one_interval() {
        let mut timer = PeriodicTimer::new(1500);
        timer.start(0);
        assert_eq!(timer.poll(1499), 0);
        assert_eq!(timer.poll(1500), 1);
        assert_eq!(timer.poll(1500), 0);
        assert_eq!(timer.poll(2999), 0);
        assert_eq!(timer.poll(3000), 1);
    }

    #[test]
    fn test_ten_second_run_fires_six_times() {
        let mut timer = PeriodicTimer::new(1500);
        timer.start(0);

        let mut fire_times = Vec::new();
        let mut now = 0;
        while now <= 10_000 {
            for _ in 0..timer.poll(now) {
                fire_times.push(now);
            }
            now += 16;
        }

        assert_eq!(fire_times.len(), 6);
        // Each fire is seen on the first frame at or after its deadline
        for (fire, deadline) in fire_times.iter().zip((1..=6).map(|n| n * 1500)) {
            assert!(*fire >= deadline && *fire < deadline + 16);
        }
    }

    #[test]
    fn test_slow_frame_catches_up() {
        let mut timer = PeriodicTimer::new(1500);
        timer.start(1000);
        assert_eq!(timer.poll(5600), 3);
        assert_eq!(timer.poll(5999), 0);
        assert_eq!(timer.poll(7000), 1);
    }

    #[test]
    fn test_restart_realigns_phase() {
        let mut timer = PeriodicTimer::new(1500);
        timer.start(0);
        assert_eq!(timer.poll(1000), 0);
        timer.stop();
        assert_eq!(timer.poll(5000), 0);

        timer.start(5000);
        assert_eq!(timer.poll(6499), 0);
        assert_eq!(timer.poll(6500), 1);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut timer = PeriodicTimer::new(0);
        timer.start(0);
        assert_eq!(timer.interval_ms(), 1);
        assert_eq!(timer.poll(5), 5);
    }

    #[test]
    fn test_frame_limiter_budget() {
        let limiter = FrameLimiter::new(60);
        assert_eq!(limiter.frame_duration(), Duration::from_secs(1) / 60);
    }
}
