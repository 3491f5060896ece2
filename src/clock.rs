use std::time::{Duration, Instant};

/// Fixed-rate frame throttle.
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / ticks_per_second.max(1),
            next: now,
        }
    }

    /// Returns true when a frame is due and schedules the following one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            // Too far behind; drop the missed frames.
            self.next = now + self.period;
        }
        true
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }
}
