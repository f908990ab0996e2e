//! Time source for the benchmark runner.

use std::time::Instant;

/// Millisecond time source, injected into the runner so that timing logic
/// is deterministic under test.
pub trait Clock {
    /// Milliseconds elapsed since the clock's origin.
    fn millis(&self) -> u64;
}

/// Wall clock backed by [Instant]; the origin is the moment of construction.
pub struct WallClock(Instant);

impl WallClock {
    pub fn new() -> Self {
        Self(Instant::now())
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn millis(&self) -> u64 {
        self.0.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::Cell;

    use super::Clock;

    /// Fake clock advancing by a fixed step on every read.
    pub(crate) struct TickClock {
        now: Cell<u64>,
        step: u64,
    }

    impl TickClock {
        pub(crate) fn with_step(step: u64) -> Self {
            Self {
                now: Cell::new(0),
                step,
            }
        }
    }

    impl Clock for TickClock {
        fn millis(&self) -> u64 {
            let now = self.now.get();
            self.now.set(now + self.step);
            now
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_does_not_go_backwards() {
        let clock = WallClock::new();
        let first = clock.millis();
        let second = clock.millis();
        assert!(second >= first);
    }

    #[test]
    fn tick_clock_advances_per_read() {
        let clock = test_support::TickClock::with_step(7);
        assert_eq!(clock.millis(), 0);
        assert_eq!(clock.millis(), 7);
        assert_eq!(clock.millis(), 14);
    }
}
