// SPDX-License-Identifier: MPL-2.0
//! Timed promotional notification.
//!
//! ```text
//! Hidden ──init──▶ Scheduled ──show delay──▶ Visible ──auto-hide / close──▶ Hidden
//!    └──recent dismissal record──▶ Dismissed
//! ```
//!
//! Only a user dismissal (close button or Escape) writes a fresh
//! [`DismissalRecord`]. Once hidden the notification is never rescheduled in
//! the same session.

use crate::app::page::PromoCopy;
use crate::app::persisted_state::PersistedStore;
use crate::domain::dismissal::{DismissalRecord, DISMISSAL_KEY};
use crate::domain::timer::OneShot;
use crate::error::Result;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use std::time::{Duration, Instant};

/// Lifecycle state of the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromoState {
    #[default]
    Hidden,
    Scheduled,
    Visible,
    /// Suppressed for this session by a recent dismissal.
    Dismissed,
}

/// Transition driven by a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoEvent {
    Shown,
    AutoHidden,
}

/// Timings of the notification lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoTimings {
    pub show_delay: Duration,
    pub auto_hide: Duration,
    pub dismissal_ttl: Duration,
}

/// State machine behind the notification.
#[derive(Debug, Clone)]
pub struct PromoController {
    state: PromoState,
    show: OneShot,
    auto_hide: OneShot,
    dismissal_ttl: Duration,
}

impl PromoController {
    #[must_use]
    pub fn new(timings: PromoTimings) -> Self {
        Self {
            state: PromoState::Hidden,
            show: OneShot::new(timings.show_delay),
            auto_hide: OneShot::new(timings.auto_hide),
            dismissal_ttl: timings.dismissal_ttl,
        }
    }

    /// Decides between suppression and scheduling from the stored record.
    pub fn initialize(&mut self, record: Option<DismissalRecord>, now_ms: i64, now: Instant) {
        if let Some(record) = record.filter(|r| r.is_recent(now_ms, self.dismissal_ttl)) {
            tracing::debug!(dismissed_at = record.dismissed_at_ms(), "promo suppressed");
            self.state = PromoState::Dismissed;
            return;
        }
        self.state = PromoState::Scheduled;
        self.show.arm(now);
    }

    /// Fires due timers.
    pub fn tick(&mut self, now: Instant) -> Option<PromoEvent> {
        match self.state {
            PromoState::Scheduled if self.show.poll(now) => {
                self.state = PromoState::Visible;
                self.auto_hide.arm(now);
                Some(PromoEvent::Shown)
            }
            PromoState::Visible if self.auto_hide.poll(now) => {
                self.state = PromoState::Hidden;
                Some(PromoEvent::AutoHidden)
            }
            _ => None,
        }
    }

    /// User dismissal. Returns the record to persist, or `None` when the
    /// notification was not visible.
    pub fn dismiss(&mut self, now_ms: i64) -> Option<DismissalRecord> {
        if self.state != PromoState::Visible {
            return None;
        }
        self.auto_hide.cancel();
        self.state = PromoState::Hidden;
        Some(DismissalRecord::new(now_ms))
    }

    #[must_use]
    pub fn state(&self) -> PromoState {
        self.state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == PromoState::Visible
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.show.is_armed() || self.auto_hide.is_armed()
    }
}

/// Reads the dismissal record; unreadable values count as absent.
#[must_use]
pub fn load_record(store: &dyn PersistedStore) -> Option<DismissalRecord> {
    let raw = store.get(DISMISSAL_KEY)?;
    let record = DismissalRecord::parse(&raw);
    if record.is_none() {
        tracing::debug!(%raw, "ignoring unparseable dismissal record");
    }
    record
}

/// Overwrites the stored dismissal record.
///
/// # Errors
///
/// Propagates the store failure.
pub fn save_record(store: &mut dyn PersistedStore, record: DismissalRecord) -> Result<()> {
    store.set(DISMISSAL_KEY, record.to_stored())
}

// ============================================================================
// Component
// ============================================================================

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Dismissed(DismissalRecord),
}

pub fn update(controller: &mut PromoController, message: Message, now_ms: i64) -> Event {
    match message {
        Message::Close => controller
            .dismiss(now_ms)
            .map_or(Event::None, Event::Dismissed),
    }
}

pub struct ViewContext<'a> {
    pub copy: &'a PromoCopy,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new("✕").size(typography::CAPTION))
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(styles::button::link);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.copy.title.as_str()).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(close);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(Text::new(ctx.copy.body.as_str()).size(typography::BODY));

    Container::new(content)
        .width(Length::Fixed(sizing::PROMO_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::promo)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::persisted_state::MemoryStore;

    const HOUR_MS: i64 = 60 * 60 * 1000;

    fn controller() -> PromoController {
        PromoController::new(PromoTimings {
            show_delay: Duration::from_secs(20),
            auto_hide: Duration::from_secs(8),
            dismissal_ttl: Duration::from_secs(24 * 60 * 60),
        })
    }

    #[test]
    fn no_record_schedules_and_shows_after_delay() {
        let start = Instant::now();
        let mut promo = controller();
        promo.initialize(None, 0, start);
        assert_eq!(promo.state(), PromoState::Scheduled);

        assert_eq!(promo.tick(start + Duration::from_millis(19_999)), None);
        assert_eq!(promo.tick(start + Duration::from_secs(20)), Some(PromoEvent::Shown));
        assert!(promo.is_visible());
    }

    #[test]
    fn auto_hide_returns_to_hidden_without_record() {
        let start = Instant::now();
        let mut promo = controller();
        promo.initialize(None, 0, start);
        let shown_at = start + Duration::from_secs(20);
        promo.tick(shown_at);

        assert_eq!(
            promo.tick(shown_at + Duration::from_secs(8)),
            Some(PromoEvent::AutoHidden)
        );
        assert_eq!(promo.state(), PromoState::Hidden);
        assert_eq!(promo.dismiss(99), None);
        assert!(!promo.has_pending_timer());
    }

    #[test]
    fn dismiss_cancels_auto_hide_and_yields_record() {
        let start = Instant::now();
        let mut promo = controller();
        promo.initialize(None, 0, start);
        let shown_at = start + Duration::from_secs(20);
        promo.tick(shown_at);

        assert_eq!(promo.dismiss(25_000), Some(DismissalRecord::new(25_000)));
        assert!(!promo.has_pending_timer());
        assert_eq!(promo.tick(shown_at + Duration::from_secs(60)), None);
        assert_eq!(promo.state(), PromoState::Hidden);
    }

    #[test]
    fn recent_record_suppresses_for_the_session() {
        let start = Instant::now();
        let mut promo = controller();
        promo.initialize(Some(DismissalRecord::new(5_000)), 5_000 + HOUR_MS, start);

        assert_eq!(promo.state(), PromoState::Dismissed);
        assert_eq!(promo.tick(start + Duration::from_secs(3_600)), None);
    }

    #[test]
    fn expired_record_schedules() {
        let mut promo = controller();
        promo.initialize(
            Some(DismissalRecord::new(0)),
            24 * HOUR_MS + 1,
            Instant::now(),
        );
        assert_eq!(promo.state(), PromoState::Scheduled);
    }

    #[test]
    fn close_only_reports_when_visible() {
        let mut promo = controller();
        assert_eq!(update(&mut promo, Message::Close, 1), Event::None);
    }

    #[test]
    fn garbage_record_is_absent() {
        let store = MemoryStore::with_entry(DISMISSAL_KEY, "yesterday");
        assert_eq!(load_record(&store), None);
    }

    #[test]
    fn saved_record_reloads() {
        let mut store = MemoryStore::new();
        save_record(&mut store, DismissalRecord::new(5_000)).expect("save");
        assert_eq!(load_record(&store), Some(DismissalRecord::new(5_000)));
    }
}
