//! Time sources used to measure algorithms.
use std::time::{Duration, Instant};

/// Source of monotonic timestamps.
pub trait Clock {
    /// Timestamp type.
    type Instant: Copy;

    /// Current timestamp.
    fn now(&self) -> Self::Instant;

    /// Time elapsed between `earlier` and `later`, saturating to zero.
    fn between(&self, earlier: Self::Instant, later: Self::Instant) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Copy, Clone, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn between(&self, earlier: Instant, later: Instant) -> Duration {
        later.saturating_duration_since(earlier)
    }
}

/// Calls `f` and returns its result along with the time the call took.
pub fn measure<C: Clock, T>(clock: &C, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = clock.now();
    let result = f();
    let end = clock.now();
    (result, clock.between(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Advances by one millisecond on every read.
    struct TickingClock(Cell<u64>);

    impl Clock for TickingClock {
        type Instant = u64;

        fn now(&self) -> u64 {
            let t = self.0.get();
            self.0.set(t + 1);
            t
        }

        fn between(&self, earlier: u64, later: u64) -> Duration {
            Duration::from_millis(later.saturating_sub(earlier))
        }
    }

    #[test]
    fn test_measure_brackets_call() {
        let clock = TickingClock(Cell::new(0));
        let (value, elapsed) = measure(&clock, || {
            clock.now();
            42
        });
        assert_eq!(42, value);
        assert_eq!(Duration::from_millis(2), elapsed);
    }

    #[test]
    fn test_monotonic_clock() {
        let clock = MonotonicClock;
        let (_, elapsed) = measure(&clock, || std::thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= Duration::from_millis(5));
        let now = clock.now();
        assert_eq!(Duration::ZERO, clock.between(now, now));
    }
}
