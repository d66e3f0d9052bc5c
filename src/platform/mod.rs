//! Platform abstraction layer
//!
//! Wraps time and sleeping behind a small trait so the fixed-rate frame loop
//! can be driven in tests without real-time delay.

use std::time::{Duration, Instant};

/// Time source for the frame pacer
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

/// Wall-clock implementation used by the binary
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Blocks once per frame to hold a fixed tick rate.
///
/// The wait is the frame loop's sole suspension point. A frame that overruns
/// its budget skips the sleep and the deadline resynchronizes to now, so a
/// stall does not cause a burst of catch-up ticks.
pub struct FramePacer<C: Clock> {
    clock: C,
    frame: Duration,
    deadline: Instant,
}

impl<C: Clock> FramePacer<C> {
    pub fn new(clock: C, tick_rate: u32) -> Self {
        let frame = Duration::from_secs(1) / tick_rate.max(1);
        let deadline = clock.now() + frame;
        Self {
            clock,
            frame,
            deadline,
        }
    }

    /// Block until the next tick boundary
    pub fn wait(&mut self) {
        let now = self.clock.now();
        if now < self.deadline {
            self.clock.sleep(self.deadline - now);
            self.deadline += self.frame;
        } else {
            self.deadline = self.clock.now() + self.frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Clock that only advances when slept on
    struct FakeClock {
        start: Instant,
        offset: Cell<Duration>,
        slept: Cell<Duration>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self {
                start: Instant::now(),
                offset: Cell::new(Duration::ZERO),
                slept: Cell::new(Duration::ZERO),
            }
        }

        fn advance(&self, duration: Duration) {
            self.offset.set(self.offset.get() + duration);
        }
    }

    impl Clock for &FakeClock {
        fn now(&self) -> Instant {
            self.start + self.offset.get()
        }

        fn sleep(&self, duration: Duration) {
            self.advance(duration);
            self.slept.set(self.slept.get() + duration);
        }
    }

    #[test]
    fn test_wait_sleeps_out_the_frame_budget() {
        let clock = FakeClock::new();
        let mut pacer = FramePacer::new(&clock, 50);

        // 5ms of simulated work per 20ms frame leaves 15ms of sleep.
        clock.advance(Duration::from_millis(5));
        pacer.wait();
        assert_eq!(clock.slept.get(), Duration::from_millis(15));
    }

    #[test]
    fn test_overrun_frame_does_not_sleep() {
        let clock = FakeClock::new();
        let mut pacer = FramePacer::new(&clock, 50);

        clock.advance(Duration::from_millis(70));
        pacer.wait();
        assert_eq!(clock.slept.get(), Duration::ZERO);

        // After resync the pacer is back on a 20ms cadence.
        clock.advance(Duration::from_millis(8));
        pacer.wait();
        assert_eq!(clock.slept.get(), Duration::from_millis(12));
    }
}
