//! crates/logging/src/pacing.rs
//! Cooldown clocks for paced log calls.

use std::collections::HashMap;
use std::time::Duration;

use crate::registry::SwitchKey;

/// Cooldown applied by paced calls that do not specify one.
pub const DEFAULT_PACE: Duration = Duration::from_secs(1);

/// How paced calls share their cooldown.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PacingMode {
    /// One clock for the whole process: a paced line from any component
    /// restarts the cooldown for every other paced call.
    #[default]
    Shared,
    /// One clock per switch key, so categories throttle independently.
    PerCategory,
}

/// Elapsed time since the last paced emission.
///
/// A clock that has never emitted is always ready, so the first paced call
/// goes through immediately.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PacingClock {
    since_emit: Option<Duration>,
}

impl PacingClock {
    /// Creates a clock that has never emitted.
    #[must_use]
    pub const fn new() -> Self {
        Self { since_emit: None }
    }

    /// Advances the clock by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(elapsed) = self.since_emit.as_mut() {
            *elapsed = elapsed.saturating_add(delta);
        }
    }

    /// Time accumulated since the last emission, `None` before the first one.
    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        self.since_emit
    }

    /// Reports whether at least `delay` has passed since the last emission.
    #[must_use]
    pub fn is_ready(&self, delay: Duration) -> bool {
        self.since_emit.is_none_or(|elapsed| elapsed >= delay)
    }

    /// Restarts the cooldown after an emission.
    pub fn reset(&mut self) {
        self.since_emit = Some(Duration::ZERO);
    }
}

/// Owns the clocks consulted by paced calls.
#[derive(Clone, Debug, Default)]
pub struct Pacer {
    mode: PacingMode,
    shared: PacingClock,
    per_key: HashMap<SwitchKey, PacingClock>,
}

impl Pacer {
    /// Creates a pacer using `mode`.
    #[must_use]
    pub fn new(mode: PacingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Returns the sharing mode.
    #[must_use]
    pub const fn mode(&self) -> PacingMode {
        self.mode
    }

    /// Advances every clock by one tick's `delta`.
    pub fn tick(&mut self, delta: Duration) {
        self.shared.advance(delta);
        for clock in self.per_key.values_mut() {
            clock.advance(delta);
        }
    }

    /// Lets a paced line for `key` through if its clock is ready, resetting the
    /// clock when it does. A suppressed line leaves the clock untouched.
    pub fn try_pass(&mut self, key: &SwitchKey, delay: Duration) -> bool {
        let clock = self.clock_mut(key);
        if !clock.is_ready(delay) {
            return false;
        }
        clock.reset();
        true
    }

    /// Returns the clock `key` is paced by, if it exists yet.
    #[must_use]
    pub fn clock(&self, key: &SwitchKey) -> Option<&PacingClock> {
        match self.mode {
            PacingMode::Shared => Some(&self.shared),
            PacingMode::PerCategory => self.per_key.get(key),
        }
    }

    fn clock_mut(&mut self, key: &SwitchKey) -> &mut PacingClock {
        match self.mode {
            PacingMode::Shared => &mut self.shared,
            PacingMode::PerCategory => self.per_key.entry(key.clone()).or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn key(text: &str) -> SwitchKey {
        let (component, category) = text.split_once('.').unwrap();
        SwitchKey::new(&component.into(), category)
    }

    #[test]
    fn fresh_clock_is_ready() {
        let clock = PacingClock::new();
        assert!(clock.is_ready(Duration::from_secs(3600)));
        assert_eq!(clock.elapsed(), None);
    }

    #[test]
    fn fresh_clock_ignores_ticks_until_first_emit() {
        let mut clock = PacingClock::new();
        clock.advance(ms(500));
        assert_eq!(clock.elapsed(), None);
    }

    #[test]
    fn clock_accumulates_after_reset() {
        let mut clock = PacingClock::new();
        clock.reset();
        clock.advance(ms(500));
        assert!(!clock.is_ready(DEFAULT_PACE));
        clock.advance(ms(600));
        assert_eq!(clock.elapsed(), Some(ms(1100)));
        assert!(clock.is_ready(DEFAULT_PACE));
    }

    #[test]
    fn clock_is_ready_exactly_at_delay() {
        let mut clock = PacingClock::new();
        clock.reset();
        clock.advance(DEFAULT_PACE);
        assert!(clock.is_ready(DEFAULT_PACE));
    }

    #[test]
    fn clock_saturates_instead_of_overflowing() {
        let mut clock = PacingClock::new();
        clock.reset();
        clock.advance(Duration::MAX);
        clock.advance(Duration::MAX);
        assert_eq!(clock.elapsed(), Some(Duration::MAX));
    }

    #[test]
    fn shared_pacer_couples_categories() {
        let mut pacer = Pacer::new(PacingMode::Shared);
        assert!(pacer.try_pass(&key("net.Sockets"), DEFAULT_PACE));
        assert!(!pacer.try_pass(&key("ui.Layout"), DEFAULT_PACE));
        pacer.tick(ms(1000));
        assert!(pacer.try_pass(&key("ui.Layout"), DEFAULT_PACE));
    }

    #[test]
    fn per_category_pacer_isolates_categories() {
        let mut pacer = Pacer::new(PacingMode::PerCategory);
        assert!(pacer.try_pass(&key("net.Sockets"), DEFAULT_PACE));
        assert!(pacer.try_pass(&key("ui.Layout"), DEFAULT_PACE));
        assert!(!pacer.try_pass(&key("net.Sockets"), DEFAULT_PACE));

        pacer.tick(ms(400));
        assert_eq!(
            pacer.clock(&key("ui.Layout")).unwrap().elapsed(),
            Some(ms(400))
        );
        assert!(pacer.clock(&key("db.Queries")).is_none());
    }

    #[test]
    fn suppressed_call_leaves_clock_untouched() {
        let mut pacer = Pacer::new(PacingMode::Shared);
        let k = key("net.Sockets");
        assert!(pacer.try_pass(&k, DEFAULT_PACE));
        pacer.tick(ms(300));
        assert!(!pacer.try_pass(&k, DEFAULT_PACE));
        assert_eq!(pacer.clock(&k).unwrap().elapsed(), Some(ms(300)));
    }
}
