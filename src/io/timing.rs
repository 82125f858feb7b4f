//! Fixed-rate pacing for the tick loop

use std::time::{Duration, Instant};

/// Sleeps between ticks to hold a target rate
///
/// When a tick overruns its slot the schedule restarts from now instead of
/// bursting to catch up.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    next_deadline: Instant,
}

impl TickClock {
    /// Create a clock ticking `rate_hz` times per second
    ///
    /// A rate of zero is treated as one tick per second.
    pub fn new(rate_hz: u32) -> Self {
        let period = Duration::from_secs(1) / rate_hz.max(1);
        Self {
            period,
            next_deadline: Instant::now() + period,
        }
    }

    /// Time allotted to one tick
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Block until the current tick's slot ends
    ///
    /// Returns how long the call slept.
    pub fn wait(&mut self) -> Duration {
        let now = Instant::now();
        if now >= self.next_deadline {
            self.next_deadline = now + self.period;
            return Duration::ZERO;
        }

        let remaining = self.next_deadline - now;
        std::thread::sleep(remaining);
        self.next_deadline += self.period;
        remaining
    }
}
