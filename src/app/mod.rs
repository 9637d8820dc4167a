// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page regions.
//!
//! The `App` struct owns one optional component per page region. Regions the
//! page does not provide are left disabled at startup and every handler
//! skips them, so a partial page still works. Messages are translated into
//! side effects here: anchor scrolling, dismissal persistence, simulated
//! submissions and toasts.

pub mod config;
mod message;
pub mod page;
pub mod paths;
pub mod persisted_state;
pub mod registry;
mod subscription;
mod update;
mod view;

pub use message::{Flags, KeyIntent, Message};
pub use subscription::key_intent;

use crate::domain::clock::{Clock, SystemClock};
use crate::submission::Submitters;
use crate::ui::accordion::FaqState;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar;
use crate::ui::newsletter::NewsletterForm;
use crate::ui::notifications::{self, Notification};
use crate::ui::page_layout::{columns_for_width, LayoutInput, PageLayout, Section};
use crate::ui::promo::{self, PromoController, PromoState, PromoTimings};
use crate::ui::scroll::{RevealTracker, ScrollReactor};
use crate::ui::search_form::{self, SearchFeatures, SearchForm, SearchTimings};
use crate::ui::theming::ThemeMode;
use crate::ui::topics::TopicsState;
use config::defaults::DEFAULT_CARD_FOCUS_DELAY_MS;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use page::PageManifest;
use persisted_state::{FileStore, PersistedStore};
use registry::{Region, Registry};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Identifier of the page scrollable, target of anchor scrolling.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Where keyboard focus currently is.
///
/// Group navigation keys go to the focused group; the view draws the focus
/// ring from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    TripToggle,
    Topics,
    Faq,
    Hamburger,
    Departure,
    /// An anchor target after in-page navigation.
    Section(Section),
}

/// Everything the application is built from.
///
/// `from_flags` reads the real config, page and store; tests assemble one by
/// hand with a manual clock and an in-memory store.
pub struct AppContext {
    pub config: Config,
    pub page: PageManifest,
    pub store: Box<dyn PersistedStore>,
    pub clock: Arc<dyn Clock>,
    pub submitters: Submitters,
    pub reduced_motion: bool,
    /// Startup problems shown as toasts.
    pub warnings: Vec<String>,
}

impl AppContext {
    #[must_use]
    pub fn from_flags(flags: Flags) -> Self {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_deref().map(PathBuf::from));
        let (page, page_warning) = PageManifest::load(flags.page_path.as_deref().map(Path::new));
        let (store, store_warning) =
            FileStore::open(flags.data_dir.as_deref().map(PathBuf::from));

        let reduced_motion = flags.reduced_motion || config.motion.reduced_motion.unwrap_or(false);
        let submitters = Submitters::simulated(config.forms.search_latency());

        Self {
            config,
            page,
            store: Box::new(store),
            clock: Arc::new(SystemClock),
            submitters,
            reduced_motion,
            warnings: [config_warning, page_warning, store_warning]
                .into_iter()
                .flatten()
                .collect(),
        }
    }
}

/// Root Iced application state that bridges the page regions, the clock
/// and persisted state.
pub struct App {
    clock: Arc<dyn Clock>,
    store: Box<dyn PersistedStore>,
    submitters: Submitters,
    page: PageManifest,
    theme_mode: ThemeMode,
    navbar: Option<navbar::State>,
    search: Option<SearchForm>,
    topics: Option<TopicsState>,
    faq: Option<FaqState>,
    newsletter_main: Option<NewsletterForm>,
    newsletter_footer: Option<NewsletterForm>,
    promo: Option<PromoController>,
    /// Floating call to action is on the page.
    cta_enabled: bool,
    scroll: ScrollReactor,
    reveal: RevealTracker,
    /// Content counts; accordion state and width are applied on relayout.
    layout_base: LayoutInput,
    layout: PageLayout,
    window_size: Size,
    focus: Focus,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("focus", &self.focus)
            .field("promo", &self.promo.as_ref().map(PromoController::state))
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot; the flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        App::from_context(AppContext::from_flags(flags))
    }

    /// Wires every region the page provides and starts the promo schedule.
    pub fn from_context(ctx: AppContext) -> (Self, Task<Message>) {
        let AppContext {
            config,
            page,
            store,
            clock,
            submitters,
            reduced_motion,
            warnings,
        } = ctx;

        let registry = Registry::resolve(&page);
        let now = clock.now();
        let now_ms = clock.epoch_millis();
        let window_size = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);

        let mut navbar = registry::enable(&registry, "mobile navigation", &[Region::Navigation], || {
            navbar::State::default()
        });

        let search = page.search.as_ref().and_then(|section| {
            registry::enable(&registry, "search form", &[Region::SearchForm], || {
                SearchForm::new(
                    section,
                    SearchFeatures {
                        trip_toggle: registry.contains(Region::TripToggle),
                        return_date: registry.contains(Region::ReturnDate),
                        swap: registry.contains(Region::CitySwap),
                    },
                    SearchTimings {
                        swap_reset: config.forms.swap_reset(),
                        card_focus_delay: Duration::from_millis(DEFAULT_CARD_FOCUS_DELAY_MS),
                    },
                    search_form::today_utc(now_ms),
                )
            })
        });

        let mut topics = page.sidebar.as_ref().and_then(|sidebar| {
            registry::enable(&registry, "sidebar topics", &[Region::SidebarTopics], || {
                TopicsState::new(sidebar.topics.len(), registry.contains(Region::SidebarTitle))
            })
        });

        let faq = registry::enable(&registry, "accordion", &[Region::Accordion], || {
            FaqState::new(&page.faq)
        });

        let confirmation = config.forms.newsletter_confirmation();
        let newsletter_main =
            registry::enable(&registry, "newsletter", &[Region::NewsletterMain], || {
                NewsletterForm::new(confirmation)
            });
        let newsletter_footer =
            registry::enable(&registry, "footer newsletter", &[Region::NewsletterFooter], || {
                NewsletterForm::new(confirmation)
            });

        let promo = registry::enable(&registry, "promo notification", &[Region::PromoNotification], || {
            let mut controller = PromoController::new(PromoTimings {
                show_delay: config.promo.show_delay(),
                auto_hide: config.promo.auto_hide(),
                dismissal_ttl: config.promo.dismissal_ttl(),
            });
            controller.initialize(promo::load_record(store.as_ref()), now_ms, now);
            controller
        });

        let cta_enabled =
            registry::enable(&registry, "floating call to action", &[Region::FloatingCta], || ())
                .is_some();

        if let Some(state) = navbar.as_mut() {
            state.set_width(window_size.width);
        }
        if let Some(state) = topics.as_mut() {
            state.set_width(window_size.width);
        }

        let layout_base = LayoutInput {
            search: search.is_some(),
            flight_cards: page.flight_cards.len(),
            topics: topics.is_some(),
            offers: page.offers.len(),
            testimonials: page.testimonials.len(),
            faq_items: if faq.is_some() {
                page.faq.iter().map(|group| group.items.len()).collect()
            } else {
                Vec::new()
            },
            faq_open: 0,
            newsletter: newsletter_main.is_some(),
            columns: columns_for_width(window_size.width),
        };
        let layout = PageLayout::compute(&update::layout_input(
            &layout_base,
            faq.as_ref(),
            window_size.width,
        ));

        let reveal_motion = reduced_motion || !registry.contains(Region::RevealBlocks);
        let reveal = RevealTracker::new(layout.blocks().len(), reveal_motion);

        let mut scroll = ScrollReactor::new(config.scroll.cta_threshold());
        // Initial pass reveals whatever is already in view
        scroll.record(0.0, window_size.height - sizing::NAVBAR_HEIGHT);
        scroll.request_frame();

        let mut notifications = notifications::Manager::new();
        for warning in warnings {
            notifications.push(Notification::warning(warning, now));
        }

        tracing::info!(
            brand = %page.brand,
            promo = ?promo.as_ref().map(PromoController::state),
            reduced_motion,
            "page ready"
        );

        let app = App {
            clock,
            store,
            submitters,
            page,
            theme_mode: config.general.theme_mode,
            navbar,
            search,
            topics,
            faq,
            newsletter_main,
            newsletter_footer,
            promo,
            cta_enabled,
            scroll,
            reveal,
            layout_base,
            layout,
            window_size,
            focus: Focus::None,
            notifications,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.page.brand.clone()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    /// A timer is armed somewhere, so the periodic tick must run.
    fn has_pending_timers(&self) -> bool {
        self.notifications.has_notifications()
            || self.search.as_ref().is_some_and(SearchForm::has_pending_timer)
            || self
                .newsletter_main
                .iter()
                .chain(self.newsletter_footer.iter())
                .any(NewsletterForm::has_pending_timer)
            || self.promo.as_ref().is_some_and(PromoController::has_pending_timer)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.has_pending_timers());
        let frame_sub = subscription::create_frame_subscription(
            self.scroll.frame_pending() || self.reveal.is_animating(),
        );

        Subscription::batch([event_sub, tick_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            clock: self.clock.as_ref(),
            store: self.store.as_mut(),
            submitters: &self.submitters,
            page: &self.page,
            navbar: &mut self.navbar,
            search: &mut self.search,
            topics: &mut self.topics,
            faq: &mut self.faq,
            newsletter_main: &mut self.newsletter_main,
            newsletter_footer: &mut self.newsletter_footer,
            promo: &mut self.promo,
            scroll: &mut self.scroll,
            reveal: &mut self.reveal,
            layout: &mut self.layout,
            layout_base: &self.layout_base,
            window_size: &mut self.window_size,
            focus: &mut self.focus,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Search(message) => update::handle_search_message(&mut ctx, message),
            Message::FlightCards(message) => update::handle_flight_cards_message(&mut ctx, message),
            Message::Topics(message) => update::handle_topics_message(&mut ctx, message),
            Message::Faq(message) => update::handle_faq_message(&mut ctx, message),
            Message::Newsletter(slot, message) => {
                update::handle_newsletter_message(&mut ctx, slot, message)
            }
            Message::Promo(message) => update::handle_promo_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::FloatingCtaPressed => update::handle_floating_cta(&mut ctx),
            Message::Scrolled {
                offset,
                viewport_height,
            } => {
                update::handle_scrolled(&mut ctx, offset, viewport_height);
                Task::none()
            }
            Message::Frame(_) => {
                update::handle_frame(&mut ctx);
                Task::none()
            }
            Message::Tick(instant) => {
                update::handle_tick(&mut ctx, instant);
                Task::none()
            }
            Message::Key(intent) => update::handle_key(&mut ctx, intent),
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            page: &self.page,
            layout: &self.layout,
            navbar: self.navbar.as_ref(),
            search: self.search.as_ref(),
            topics: self.topics.as_ref(),
            faq: self.faq.as_ref(),
            newsletter_main: self.newsletter_main.as_ref(),
            newsletter_footer: self.newsletter_footer.as_ref(),
            promo: self.promo.as_ref(),
            cta_enabled: self.cta_enabled,
            scroll: &self.scroll,
            reveal: &self.reveal,
            focus: self.focus,
            notifications: &self.notifications,
            now: self.clock.now(),
            columns: columns_for_width(self.window_size.width),
        })
    }

    // ========================================================================
    // Read access for embedding and tests
    // ========================================================================

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn promo_state(&self) -> Option<PromoState> {
        self.promo.as_ref().map(PromoController::state)
    }

    #[must_use]
    pub fn search(&self) -> Option<&SearchForm> {
        self.search.as_ref()
    }

    #[must_use]
    pub fn navbar(&self) -> Option<&navbar::State> {
        self.navbar.as_ref()
    }

    #[must_use]
    pub fn topics(&self) -> Option<&TopicsState> {
        self.topics.as_ref()
    }

    #[must_use]
    pub fn faq(&self) -> Option<&FaqState> {
        self.faq.as_ref()
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    #[must_use]
    pub fn cta_visible(&self) -> bool {
        self.cta_enabled && self.scroll.cta_visible()
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn store(&self) -> &dyn PersistedStore {
        self.store.as_ref()
    }

    /// Feeds a message through the update loop, discarding its task.
    pub fn dispatch(&mut self, message: Message) {
        let _task = self.update(message);
    }

    /// Renders the page; used to check that every state draws.
    pub fn render(&self) -> Element<'_, Message> {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::dismissal::{DismissalRecord, DISMISSAL_KEY};
    use crate::domain::group::GroupKey;
    use crate::error::{Error, Result};
    use crate::ui::accordion::{self, HeaderId};
    use crate::ui::cards;
    use crate::ui::topics;
    use persisted_state::MemoryStore;
    use std::time::Instant;

    const START_MS: i64 = 1_790_000_000_000;
    const HOUR_MS: i64 = 60 * 60 * 1000;

    #[derive(Debug)]
    struct FailingStore;

    impl PersistedStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<()> {
            Err(Error::Store("read-only".into()))
        }
    }

    fn context(store: Box<dyn PersistedStore>, clock: &ManualClock) -> AppContext {
        let config = Config::default();
        AppContext {
            submitters: Submitters::simulated(config.forms.search_latency()),
            config,
            page: PageManifest::embedded().expect("embedded page parses"),
            store,
            clock: Arc::new(clock.clone()),
            reduced_motion: false,
            warnings: Vec::new(),
        }
    }

    fn app_with(store: Box<dyn PersistedStore>) -> (App, ManualClock) {
        let clock = ManualClock::starting_at(START_MS);
        let (app, _task) = App::from_context(context(store, &clock));
        (app, clock)
    }

    fn app() -> (App, ManualClock) {
        app_with(Box::new(MemoryStore::new()))
    }

    fn tick(app: &mut App, clock: &ManualClock, by: Duration) {
        clock.advance(by);
        app.dispatch(Message::Tick(Instant::now()));
    }

    #[test]
    fn embedded_page_enables_every_region() {
        let (app, _clock) = app();
        assert!(app.navbar.is_some());
        assert!(app.search.is_some());
        assert!(app.topics.is_some());
        assert!(app.faq.is_some());
        assert!(app.newsletter_main.is_some());
        assert!(app.newsletter_footer.is_some());
        assert!(app.cta_enabled);
        assert_eq!(app.promo_state(), Some(PromoState::Scheduled));
    }

    #[test]
    fn page_without_promo_runs_without_it() {
        let clock = ManualClock::starting_at(START_MS);
        let mut ctx = context(Box::new(MemoryStore::new()), &clock);
        ctx.page.promo = None;
        ctx.page.faq.clear();

        let (mut app, _task) = App::from_context(ctx);
        assert_eq!(app.promo_state(), None);
        assert!(app.faq().is_none());

        app.dispatch(Message::Key(KeyIntent::Escape));
        tick(&mut app, &clock, Duration::from_secs(30));
        let _element = app.render();
    }

    #[test]
    fn promo_shows_after_delay_and_auto_hides() {
        let (mut app, clock) = app();
        tick(&mut app, &clock, Duration::from_secs(20));
        assert_eq!(app.promo_state(), Some(PromoState::Visible));

        tick(&mut app, &clock, Duration::from_secs(8));
        assert_eq!(app.promo_state(), Some(PromoState::Hidden));
        assert_eq!(app.store().get(DISMISSAL_KEY), None);
    }

    #[test]
    fn closing_promo_persists_dismissal() {
        let (mut app, clock) = app();
        tick(&mut app, &clock, Duration::from_secs(20));

        app.dispatch(Message::Promo(promo::Message::Close));
        assert_eq!(app.promo_state(), Some(PromoState::Hidden));

        let stored = app.store().get(DISMISSAL_KEY).expect("record written");
        let record = DismissalRecord::parse(&stored).expect("record parses");
        assert_eq!(record.dismissed_at_ms(), START_MS + 20_000);
    }

    #[test]
    fn escape_dismisses_visible_promo_and_closes_menu() {
        let (mut app, clock) = app();
        app.dispatch(Message::WindowResized(Size::new(500.0, 800.0)));
        app.dispatch(Message::Navbar(navbar::Message::ToggleMenu));
        tick(&mut app, &clock, Duration::from_secs(20));
        assert!(app.navbar().is_some_and(navbar::State::menu_open));

        app.dispatch(Message::Key(KeyIntent::Escape));
        assert!(!app.navbar().is_some_and(navbar::State::menu_open));
        assert_eq!(app.focus(), Focus::Hamburger);
        assert_eq!(app.promo_state(), Some(PromoState::Hidden));
        assert!(app.store().get(DISMISSAL_KEY).is_some());
    }

    #[test]
    fn escape_before_promo_shows_keeps_schedule() {
        let (mut app, _clock) = app();
        app.dispatch(Message::Key(KeyIntent::Escape));
        assert_eq!(app.promo_state(), Some(PromoState::Scheduled));
        assert_eq!(app.store().get(DISMISSAL_KEY), None);
    }

    #[test]
    fn recent_dismissal_suppresses_promo() {
        let record = DismissalRecord::new(START_MS - HOUR_MS).to_stored();
        let (mut app, clock) = app_with(Box::new(MemoryStore::with_entry(DISMISSAL_KEY, record)));
        assert_eq!(app.promo_state(), Some(PromoState::Dismissed));

        tick(&mut app, &clock, Duration::from_secs(60));
        assert_eq!(app.promo_state(), Some(PromoState::Dismissed));
    }

    #[test]
    fn failing_store_still_closes_promo_with_warning() {
        let (mut app, clock) = app_with(Box::new(FailingStore));
        tick(&mut app, &clock, Duration::from_secs(20));

        app.dispatch(Message::Promo(promo::Message::Close));
        assert_eq!(app.promo_state(), Some(PromoState::Hidden));
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn startup_warnings_become_toasts() {
        let clock = ManualClock::starting_at(START_MS);
        let mut ctx = context(Box::new(MemoryStore::new()), &clock);
        ctx.warnings.push("Settings could not be read.".into());

        let (app, _task) = App::from_context(ctx);
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn flight_card_prefills_search_then_focuses_departure() {
        let (mut app, clock) = app();
        let card = app.page.flight_cards[0].clone();

        app.dispatch(Message::FlightCards(cards::Message::Select(0)));
        let form = app.search().expect("search form");
        assert_eq!(form.value(search_form::FieldName::From), card.from);
        assert_eq!(form.value(search_form::FieldName::To), card.to);
        assert_ne!(app.focus(), Focus::Departure);

        tick(&mut app, &clock, Duration::from_millis(DEFAULT_CARD_FOCUS_DELAY_MS));
        assert_eq!(app.focus(), Focus::Departure);
    }

    #[test]
    fn trip_keys_follow_focus() {
        let (mut app, _clock) = app();
        let members = app
            .search()
            .and_then(SearchForm::trips)
            .map(|trips| trips.members().to_vec())
            .expect("trip toggle");
        let initial = app.search().map(SearchForm::trip_type);

        // Keys do nothing until the toggle has focus
        app.dispatch(Message::Key(KeyIntent::Group(GroupKey::Last)));
        app.dispatch(Message::Key(KeyIntent::Group(GroupKey::Activate)));
        assert_eq!(app.search().map(SearchForm::trip_type), initial);

        app.dispatch(Message::Search(search_form::Message::TripPressed(members[0])));
        app.dispatch(Message::Key(KeyIntent::Group(GroupKey::Last)));
        app.dispatch(Message::Key(KeyIntent::Group(GroupKey::Activate)));
        let last = members[members.len() - 1];
        assert_eq!(app.search().map(SearchForm::trip_type), Some(last));
    }

    #[test]
    fn topic_keys_route_to_sidebar() {
        let (mut app, _clock) = app();
        app.dispatch(Message::Topics(topics::Message::TopicPressed(0)));
        app.dispatch(Message::Key(KeyIntent::Group(GroupKey::Next)));
        app.dispatch(Message::Key(KeyIntent::Group(GroupKey::Activate)));

        assert_eq!(app.topics().and_then(TopicsState::active), Some(1));
        assert_eq!(app.topics().map(TopicsState::active_count), Some(1));
    }

    #[test]
    fn opening_an_answer_grows_the_page() {
        let (mut app, _clock) = app();
        let before = app.layout().content_height();

        let header = HeaderId {
            container: 0,
            item: 0,
        };
        app.dispatch(Message::Faq(accordion::Message::Toggle(header)));
        assert!(app.layout().content_height() > before);

        // Enter on the focused header collapses it again
        app.dispatch(Message::Key(KeyIntent::Group(GroupKey::Activate)));
        assert!((app.layout().content_height() - before).abs() < f32::EPSILON);
    }

    #[test]
    fn floating_cta_follows_scroll_threshold() {
        let (mut app, _clock) = app();
        assert!(!app.cta_visible());

        app.dispatch(Message::Scrolled {
            offset: 300.0,
            viewport_height: 700.0,
        });
        // Applied on the next frame only
        assert!(!app.cta_visible());
        app.dispatch(Message::Frame(Instant::now()));
        assert!(app.cta_visible());

        app.dispatch(Message::Scrolled {
            offset: 299.0,
            viewport_height: 700.0,
        });
        app.dispatch(Message::Frame(Instant::now()));
        assert!(!app.cta_visible());
    }

    #[test]
    fn first_frame_reveals_cards_in_view_only() {
        let (mut app, _clock) = app();
        app.dispatch(Message::Frame(Instant::now()));

        let blocks = app.layout().blocks().to_vec();
        let viewport_bottom = WINDOW_DEFAULT_HEIGHT as f32 - sizing::NAVBAR_HEIGHT;
        for (index, block) in blocks.iter().enumerate() {
            let started = app.reveal().state(index) != Some(crate::ui::scroll::RevealState::Pending);
            let in_view = block.top + block.height * 0.1 <= viewport_bottom;
            assert_eq!(started, in_view, "block {index}");
        }
    }

    #[test]
    fn anchor_link_moves_focus_to_section() {
        let (mut app, _clock) = app();
        app.dispatch(Message::Navbar(navbar::Message::LinkPressed(Section::Faq)));
        assert_eq!(app.focus(), Focus::Section(Section::Faq));
    }

    #[test]
    fn every_state_renders() {
        let (mut app, clock) = app();
        drop(app.render());

        app.dispatch(Message::WindowResized(Size::new(400.0, 700.0)));
        app.dispatch(Message::Navbar(navbar::Message::ToggleMenu));
        tick(&mut app, &clock, Duration::from_secs(20));
        app.dispatch(Message::Scrolled {
            offset: 900.0,
            viewport_height: 636.0,
        });
        app.dispatch(Message::Frame(Instant::now()));
        drop(app.render());
    }
}
