//! crates/logging/src/timer.rs
//! Frame deltas for hosts that do not track their own.

use std::time::{Duration, Instant};

/// Measures the time between successive host frames.
///
/// ```
/// use logging::FrameTimer;
///
/// let mut timer = FrameTimer::new();
/// let delta = timer.delta();
/// assert!(delta < std::time::Duration::from_secs(60));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FrameTimer {
    last: Instant,
}

impl FrameTimer {
    /// Starts measuring from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Time since the previous call (or since creation), restarting the
    /// measurement.
    pub fn delta(&mut self) -> Duration {
        self.delta_at(Instant::now())
    }

    /// Like [`delta`](Self::delta) with an explicit current instant. A `now`
    /// earlier than the previous frame yields zero.
    pub fn delta_at(&mut self, now: Instant) -> Duration {
        let delta = now.saturating_duration_since(self.last);
        self.last = self.last.max(now);
        delta
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_measures_between_frames() {
        let start = Instant::now();
        let mut timer = FrameTimer { last: start };
        assert_eq!(
            timer.delta_at(start + Duration::from_millis(16)),
            Duration::from_millis(16)
        );
        assert_eq!(
            timer.delta_at(start + Duration::from_millis(40)),
            Duration::from_millis(24)
        );
    }

    #[test]
    fn time_never_runs_backwards() {
        let start = Instant::now();
        let mut timer = FrameTimer {
            last: start + Duration::from_millis(50),
        };
        assert_eq!(timer.delta_at(start), Duration::ZERO);
        assert_eq!(
            timer.delta_at(start + Duration::from_millis(60)),
            Duration::from_millis(10)
        );
    }
}
