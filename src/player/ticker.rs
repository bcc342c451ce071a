use std::time::{Duration, Instant};

use crate::types::Event;

/// One-shot tick timer.
///
/// The deadline only moves after a tick has been handled, and then counts
/// from when handling finished. Other events never touch it, so ticks
/// cannot queue up behind slow frames or be pushed back by input.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Ticker {
            interval,
            next: now + interval,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// How long to wait for input before the tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Record that `event` has been fully handled at `now`.
    pub fn handled(&mut self, event: Event, now: Instant) {
        if event == Event::Tick {
            self.next = now + self.interval;
        }
    }
}
