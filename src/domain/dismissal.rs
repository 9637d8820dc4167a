// SPDX-License-Identifier: MPL-2.0
//! Persisted record of the last user dismissal of the promo notification.
//!
//! The record is a single epoch-millisecond timestamp stored as a decimal
//! string. It is overwritten on every dismissal and never removed: it
//! expires purely by age comparison.

use std::time::Duration;

/// Store key under which the record is kept.
pub const DISMISSAL_KEY: &str = "promo_notification_dismissed";

/// How long a dismissal suppresses the notification.
pub const DEFAULT_DISMISSAL_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// When the user last closed the promo notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissalRecord {
    dismissed_at_ms: i64,
}

impl DismissalRecord {
    #[must_use]
    pub fn new(dismissed_at_ms: i64) -> Self {
        Self { dismissed_at_ms }
    }

    /// Parses a stored value. Anything that is not an integer is treated as
    /// no record at all.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(Self::new)
    }

    /// Value written to the store.
    #[must_use]
    pub fn to_stored(self) -> String {
        self.dismissed_at_ms.to_string()
    }

    #[must_use]
    pub fn dismissed_at_ms(self) -> i64 {
        self.dismissed_at_ms
    }

    /// Whether the dismissal still suppresses the notification at `now_ms`.
    ///
    /// Timestamps from the future count as recent.
    #[must_use]
    pub fn is_recent(self, now_ms: i64, ttl: Duration) -> bool {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        now_ms.saturating_sub(self.dismissed_at_ms) < ttl_ms
    }
}
