// SPDX-License-Identifier: MPL-2.0
//! Time source used by every timer and by the dismissal record.
//!
//! Two clocks are needed: a monotonic one for one-shot alarms and a wall
//! clock (epoch milliseconds) for values that outlive the session.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Source of monotonic and wall-clock time.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Monotonic time used to arm and poll timers.
    fn now(&self) -> Instant;

    /// Wall-clock time in milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Manually advanced clock.
///
/// Clones share the same underlying time, so a test can keep a handle
/// while the application owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<Mutex<ManualTime>>,
}

#[derive(Debug)]
struct ManualTime {
    origin: Instant,
    elapsed: Duration,
    epoch_origin_ms: i64,
}

impl ManualClock {
    /// Creates a clock whose wall time starts at `epoch_millis`.
    #[must_use]
    pub fn starting_at(epoch_millis: i64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ManualTime {
                origin: Instant::now(),
                elapsed: Duration::ZERO,
                epoch_origin_ms: epoch_millis,
            })),
        }
    }

    /// Moves both clocks forward.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut time) = self.inner.lock() {
            time.elapsed += by;
        }
    }

    /// Moves both clocks forward by `millis` milliseconds.
    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.inner
            .lock()
            .map(|time| time.origin + time.elapsed)
            .unwrap_or_else(|_| Instant::now())
    }

    fn epoch_millis(&self) -> i64 {
        self.inner
            .lock()
            .map(|time| {
                time.epoch_origin_ms + i64::try_from(time.elapsed.as_millis()).unwrap_or(i64::MAX)
            })
            .unwrap_or(0)
    }
}
