//! Fixed-interval tick scheduling for the automatic scroll.

use std::time::{Duration, Instant};

/// Decides when the next automatic advance is due.
///
/// The baseline moves forward by exactly one period per tick rather than
/// jumping to the poll time, so ticks do not drift. After a stall the
/// scheduler fires once per poll until it has caught up.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use vmarquee::marquee::TickScheduler;
///
/// let start = Instant::now();
/// let mut clock = TickScheduler::new(start);
/// assert!(!clock.poll(start + Duration::from_millis(150), 200.0));
/// assert!(clock.poll(start + Duration::from_millis(200), 200.0));
/// assert!(!clock.poll(start + Duration::from_millis(399), 200.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickScheduler {
    baseline: Instant,
}

impl TickScheduler {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { baseline: now }
    }

    /// Time the last tick was due.
    #[must_use]
    pub fn baseline(&self) -> Instant {
        self.baseline
    }

    /// Whether a tick is due at `now` for a period of `period_ms`.
    ///
    /// Fires at most once per call. A non-finite or non-positive period
    /// never fires.
    pub fn poll(&mut self, now: Instant, period_ms: f64) -> bool {
        if !(period_ms.is_finite() && period_ms > 0.0) {
            return false;
        }
        let period = Duration::from_secs_f64(period_ms / 1000.0);
        if now.saturating_duration_since(self.baseline) < period {
            return false;
        }
        self.baseline += period;
        true
    }

    /// Restart the schedule from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.baseline = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let mut clock = TickScheduler::new(start);
        assert!(!clock.poll(start, 100.0));
        assert!(!clock.poll(start + ms(99), 100.0));
        assert!(clock.poll(start + ms(100), 100.0));
        assert!(!clock.poll(start + ms(100), 100.0));
        assert!(clock.poll(start + ms(205), 100.0));
        assert_eq!(clock.baseline(), start + ms(200));
    }

    #[test]
    fn test_baseline_does_not_drift() {
        let start = Instant::now();
        let mut clock = TickScheduler::new(start);
        // Polls land late every time; the schedule stays on the grid.
        for i in 1..=10u64 {
            assert!(clock.poll(start + ms(i * 50 + 7), 50.0));
        }
        assert_eq!(clock.baseline(), start + ms(500));
    }

    #[test]
    fn test_stall_catches_up_one_tick_per_poll() {
        let start = Instant::now();
        let mut clock = TickScheduler::new(start);
        let late = start + ms(1000);
        let fired = (0..20).filter(|_| clock.poll(late, 200.0)).count();
        assert_eq!(fired, 5);
        assert_eq!(clock.baseline(), late);
    }

    #[test]
    fn test_period_change_applies_without_reset() {
        let start = Instant::now();
        let mut clock = TickScheduler::new(start);
        assert!(!clock.poll(start + ms(60), 200.0));
        assert!(clock.poll(start + ms(60), 50.0));
        assert_eq!(clock.baseline(), start + ms(50));
    }

    #[test]
    fn test_invalid_period_never_fires() {
        let start = Instant::now();
        let mut clock = TickScheduler::new(start);
        let later = start + ms(10_000);
        assert!(!clock.poll(later, 0.0));
        assert!(!clock.poll(later, -5.0));
        assert!(!clock.poll(later, f64::NAN));
        clock.reset(later);
        assert_eq!(clock.baseline(), later);
    }
}
