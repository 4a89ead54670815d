//! Repeating interval timers
//!
//! The animation is driven by two countdowns: a 10-second launch timer and
//! a 15-millisecond motion timer, with exactly one of them running at any
//! moment. `IntervalTimer` models them as passive deadline records that the
//! frame loop polls: a timer fires at most once per poll, and its next
//! deadline is scheduled relative to the fire time, so late frames coalesce
//! the way GUI dispatcher timers do instead of bursting to catch up.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct IntervalTimer {
    interval: Duration,
    /// `None` while stopped.
    deadline: Option<Instant>,
}

impl IntervalTimer {
    /// A stopped timer with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// (Re)start the countdown: the timer becomes due one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Poll the timer. Returns true if it was due at `now`, in which case
    /// the next deadline is scheduled one interval after `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the deadline, zero if already due, `None` if
    /// stopped. Used to schedule the next frame wake-up.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
