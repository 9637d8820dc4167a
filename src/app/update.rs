// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! `App::update` borrows its state into an [`UpdateContext`] and hands each
//! message to one of the handlers below. Components report what happened
//! through their `Event`; the handlers turn those events into page-level
//! effects such as scrolling, persistence, submissions and toasts.

use super::persisted_state::PersistedStore;
use super::{Focus, KeyIntent, Message, PAGE_SCROLLABLE_ID};
use crate::app::page::PageManifest;
use crate::domain::clock::Clock;
use crate::domain::dismissal::DismissalRecord;
use crate::domain::group::{GroupKey, KeyOutcome};
use crate::submission::Submitters;
use crate::ui::accordion::{self, Event as FaqEvent, FaqState};
use crate::ui::cards::{self, Event as CardsEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::newsletter::{self, Event as NewsletterEvent, NewsletterForm, Slot};
use crate::ui::notifications::{self, Notification};
use crate::ui::page_layout::{columns_for_width, Align, LayoutInput, PageLayout, Section};
use crate::ui::promo::{self, Event as PromoEvent, PromoController, PromoEvent as PromoTimerEvent};
use crate::ui::scroll::{RevealTracker, ScrollReactor};
use crate::ui::search_form::{self, Event as SearchEvent, SearchForm};
use crate::ui::topics::{self, Event as TopicsEvent, TopicsState};
use iced::widget::operation;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::Id;
use iced::{Size, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub clock: &'a dyn Clock,
    pub store: &'a mut dyn PersistedStore,
    pub submitters: &'a Submitters,
    pub page: &'a PageManifest,
    pub navbar: &'a mut Option<navbar::State>,
    pub search: &'a mut Option<SearchForm>,
    pub topics: &'a mut Option<TopicsState>,
    pub faq: &'a mut Option<FaqState>,
    pub newsletter_main: &'a mut Option<NewsletterForm>,
    pub newsletter_footer: &'a mut Option<NewsletterForm>,
    pub promo: &'a mut Option<PromoController>,
    pub scroll: &'a mut ScrollReactor,
    pub reveal: &'a mut RevealTracker,
    pub layout: &'a mut PageLayout,
    pub layout_base: &'a LayoutInput,
    pub window_size: &'a mut Size,
    pub focus: &'a mut Focus,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn newsletter(&mut self, slot: Slot) -> Option<&mut NewsletterForm> {
        match slot {
            Slot::Main => self.newsletter_main.as_mut(),
            Slot::Footer => self.newsletter_footer.as_mut(),
        }
    }
}

// ============================================================================
// Layout and scrolling
// ============================================================================

/// Geometry input for the current accordion and window state.
pub fn layout_input(base: &LayoutInput, faq: Option<&FaqState>, width: f32) -> LayoutInput {
    LayoutInput {
        faq_open: faq.map_or(0, FaqState::open_total),
        columns: columns_for_width(width),
        ..base.clone()
    }
}

/// Recomputes the page geometry and schedules a reveal pass against it.
fn relayout(ctx: &mut UpdateContext<'_>) {
    let input = layout_input(ctx.layout_base, ctx.faq.as_ref(), ctx.window_size.width);
    *ctx.layout = PageLayout::compute(&input);
    ctx.scroll.request_frame();
}

/// Scrolls the page so `section` lands at `align` in the viewport.
fn scroll_to_section(ctx: &mut UpdateContext<'_>, section: Section, align: Align) -> Task<Message> {
    let viewport_height = ctx.scroll.applied().viewport_height;
    let Some(offset) = ctx.layout.scroll_target(section, viewport_height, align) else {
        tracing::debug!(%section, "scroll target not on page");
        return Task::none();
    };

    ctx.scroll.record(offset, viewport_height);
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: ctx.layout.relative_y(offset, viewport_height),
        },
    )
}

pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, offset: f32, viewport_height: f32) {
    ctx.scroll.record(offset, viewport_height);
}

/// Applies the coalesced scroll position and starts due reveals.
pub fn handle_frame(ctx: &mut UpdateContext<'_>) {
    let now = ctx.clock.now();
    if let Some(observation) = ctx.scroll.on_frame() {
        let started = ctx.reveal.observe(ctx.layout.blocks(), observation, now);
        if started > 0 {
            tracing::trace!(started, offset = observation.offset, "reveal started");
        }
    }
    ctx.reveal.tick(now);
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    *ctx.window_size = size;
    if let Some(state) = ctx.navbar.as_mut() {
        state.set_width(size.width);
    }
    if let Some(state) = ctx.topics.as_mut() {
        state.set_width(size.width);
    }
    relayout(ctx);

    let offset = ctx.scroll.applied().offset;
    ctx.scroll
        .record(offset, (size.height - crate::ui::design_tokens::sizing::NAVBAR_HEIGHT).max(0.0));
}

// ============================================================================
// Components
// ============================================================================

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    let Some(state) = ctx.navbar.as_mut() else {
        return Task::none();
    };
    if matches!(message, navbar::Message::ToggleMenu) {
        *ctx.focus = Focus::Hamburger;
    }

    match navbar::update(state, message) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(section) => {
            *ctx.focus = Focus::Section(section);
            scroll_to_section(ctx, section, Align::Start)
        }
    }
}

pub fn handle_search_message(
    ctx: &mut UpdateContext<'_>,
    message: search_form::Message,
) -> Task<Message> {
    let now = ctx.clock.now();
    let Some(form) = ctx.search.as_mut() else {
        return Task::none();
    };

    match search_form::update(form, message, now) {
        SearchEvent::None => Task::none(),
        SearchEvent::TripActivated(trip) => {
            tracing::debug!(%trip, "trip type selected");
            *ctx.focus = Focus::TripToggle;
            Task::none()
        }
        SearchEvent::Submit(record) => {
            tracing::info!(%record, "search submitted");
            Task::perform(ctx.submitters.search.submit(record), |result| {
                Message::Search(search_form::Message::Completed(result))
            })
        }
        SearchEvent::Finished(Ok(())) => {
            ctx.notifications
                .push(Notification::success("Searching for flights…", now));
            Task::none()
        }
        SearchEvent::Finished(Err(error)) => {
            ctx.notifications
                .push(Notification::error(format!("Search failed: {error}"), now));
            Task::none()
        }
    }
}

pub fn handle_flight_cards_message(
    ctx: &mut UpdateContext<'_>,
    message: cards::Message,
) -> Task<Message> {
    match cards::update(&ctx.page.flight_cards, message) {
        CardsEvent::None => Task::none(),
        CardsEvent::Prefill { from, to } => {
            let Some(form) = ctx.search.as_mut() else {
                return Task::none();
            };
            form.prefill(&from, &to, ctx.clock.now());
            *ctx.focus = Focus::None;
            scroll_to_section(ctx, Section::Search, Align::Center)
        }
    }
}

pub fn handle_topics_message(ctx: &mut UpdateContext<'_>, message: topics::Message) -> Task<Message> {
    let Some(state) = ctx.topics.as_mut() else {
        return Task::none();
    };
    if matches!(message, topics::Message::TopicPressed(_)) {
        *ctx.focus = Focus::Topics;
    }

    match topics::update(state, message) {
        TopicsEvent::Activated { reveal: true, .. } => {
            scroll_to_section(ctx, Section::Topics, Align::Start)
        }
        TopicsEvent::Activated { .. } | TopicsEvent::None => Task::none(),
    }
}

pub fn handle_faq_message(ctx: &mut UpdateContext<'_>, message: accordion::Message) -> Task<Message> {
    let Some(state) = ctx.faq.as_mut() else {
        return Task::none();
    };
    *ctx.focus = Focus::Faq;

    match accordion::update(state, message) {
        FaqEvent::Resized => relayout(ctx),
        FaqEvent::None => {}
    }
    Task::none()
}

pub fn handle_newsletter_message(
    ctx: &mut UpdateContext<'_>,
    slot: Slot,
    message: newsletter::Message,
) -> Task<Message> {
    let now = ctx.clock.now();
    let Some(form) = ctx.newsletter(slot) else {
        return Task::none();
    };

    match newsletter::update(form, message, now) {
        NewsletterEvent::None => Task::none(),
        NewsletterEvent::Subscribe(email) => {
            tracing::info!(?slot, "newsletter subscription");
            Task::perform(ctx.submitters.newsletter.subscribe(email), move |result| {
                Message::Newsletter(slot, newsletter::Message::Delivered(result))
            })
        }
        NewsletterEvent::Failed(error) => {
            ctx.notifications.push(Notification::warning(
                format!("Newsletter signup failed: {error}"),
                now,
            ));
            Task::none()
        }
    }
}

pub fn handle_promo_message(ctx: &mut UpdateContext<'_>, message: promo::Message) -> Task<Message> {
    let now_ms = ctx.clock.epoch_millis();
    let Some(controller) = ctx.promo.as_mut() else {
        return Task::none();
    };

    match promo::update(controller, message, now_ms) {
        PromoEvent::Dismissed(record) => persist_dismissal(ctx, record),
        PromoEvent::None => {}
    }
    Task::none()
}

/// Writes the dismissal record; a failing store only costs the reminder.
fn persist_dismissal(ctx: &mut UpdateContext<'_>, record: DismissalRecord) {
    if let Err(error) = promo::save_record(ctx.store, record) {
        tracing::warn!(%error, "promo dismissal not persisted");
        ctx.notifications.push(Notification::warning(
            "Could not remember that the offer was closed.",
            ctx.clock.now(),
        ));
    }
}

pub fn handle_floating_cta(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(target) = ctx.page.floating_cta.as_ref().map(|cta| cta.target) else {
        return Task::none();
    };
    *ctx.focus = Focus::Section(target);
    scroll_to_section(ctx, target, Align::Start)
}

// ============================================================================
// Keyboard and timers
// ============================================================================

pub fn handle_key(ctx: &mut UpdateContext<'_>, intent: KeyIntent) -> Task<Message> {
    match intent {
        KeyIntent::Escape => {
            handle_escape(ctx);
            Task::none()
        }
        KeyIntent::Group(key) => handle_group_key(ctx, key),
    }
}

/// Escape closes the mobile menu and dismisses a visible promo.
fn handle_escape(ctx: &mut UpdateContext<'_>) {
    if ctx.navbar.as_mut().is_some_and(navbar::State::close) {
        *ctx.focus = Focus::Hamburger;
    }

    let now_ms = ctx.clock.epoch_millis();
    let dismissed = ctx
        .promo
        .as_mut()
        .filter(|controller| controller.is_visible())
        .and_then(|controller| controller.dismiss(now_ms));
    if let Some(record) = dismissed {
        persist_dismissal(ctx, record);
    }
}

/// Routes group navigation to whichever group holds keyboard focus.
fn handle_group_key(ctx: &mut UpdateContext<'_>, key: GroupKey) -> Task<Message> {
    match *ctx.focus {
        Focus::TripToggle => {
            if let Some(form) = ctx.search.as_mut() {
                if let KeyOutcome::Activated(trip) = form.handle_trip_key(key) {
                    tracing::debug!(%trip, "trip type selected");
                }
            }
            Task::none()
        }
        Focus::Topics => {
            let Some(state) = ctx.topics.as_mut() else {
                return Task::none();
            };
            match state.handle_key(key) {
                KeyOutcome::Activated(_) if state.is_narrow() => {
                    scroll_to_section(ctx, Section::Topics, Align::Start)
                }
                _ => Task::none(),
            }
        }
        Focus::Faq if key == GroupKey::Activate => {
            if ctx
                .faq
                .as_mut()
                .and_then(FaqState::activate_focused)
                .is_some()
            {
                relayout(ctx);
            }
            Task::none()
        }
        Focus::Hamburger if key == GroupKey::Activate => {
            handle_navbar_message(ctx, navbar::Message::ToggleMenu)
        }
        _ => Task::none(),
    }
}

/// Advances every polled timer.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, _instant: Instant) {
    let now = ctx.clock.now();
    ctx.notifications.tick(now);

    if let Some(form) = ctx.search.as_mut() {
        if form.tick(now) {
            *ctx.focus = Focus::Departure;
        }
    }
    for slot in [Slot::Main, Slot::Footer] {
        if let Some(form) = ctx.newsletter(slot) {
            form.tick(now);
        }
    }
    if let Some(controller) = ctx.promo.as_mut() {
        match controller.tick(now) {
            Some(PromoTimerEvent::Shown) => tracing::debug!("promo shown"),
            Some(PromoTimerEvent::AutoHidden) => tracing::debug!("promo auto-hidden"),
            None => {}
        }
    }
    ctx.reveal.tick(now);
}
