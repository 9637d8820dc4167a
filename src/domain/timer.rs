// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot alarms.
//!
//! Timers are polled rather than spawned: the application feeds the current
//! instant on every tick and each alarm reports whether it fired. Arming an
//! alarm that is already pending replaces the previous deadline, so a
//! resource never has two overlapping alarms.

use std::time::{Duration, Instant};

/// A delayed action that fires at most once per arming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot {
    delay: Duration,
    deadline: Option<Instant>,
}

impl OneShot {
    /// Creates a disarmed timer with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arms the timer relative to `now`, cancelling any pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancels the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn new_timer_is_disarmed() {
        let mut timer = OneShot::new(DELAY);
        assert!(!timer.is_armed());
        assert!(!timer.poll(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = OneShot::new(DELAY);
        timer.arm(start);

        assert!(!timer.poll(start + Duration::from_millis(299)));
        assert!(timer.poll(start + DELAY));
        assert!(!timer.poll(start + Duration::from_secs(10)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearming_replaces_pending_deadline() {
        let start = Instant::now();
        let mut timer = OneShot::new(DELAY);
        timer.arm(start);
        timer.arm(start + Duration::from_millis(200));

        assert!(!timer.poll(start + DELAY));
        assert!(timer.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn cancel_prevents_firing() {
        let start = Instant::now();
        let mut timer = OneShot::new(DELAY);
        timer.arm(start);
        timer.cancel();

        assert!(!timer.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn is_armed_tracks_the_pending_deadline() {
        let start = Instant::now();
        let mut timer = OneShot::new(DELAY);
        timer.arm(start);
        assert!(timer.is_armed());

        assert!(timer.poll(start + DELAY));
        assert!(!timer.is_armed());
    }
}
