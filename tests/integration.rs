// SPDX-License-Identifier: MPL-2.0
use skyway::app::page::PageManifest;
use skyway::app::persisted_state::FileStore;
use skyway::app::registry::{Region, Registry};
use skyway::app::{App, AppContext, Message};
use skyway::config::{self, Config};
use skyway::domain::clock::ManualClock;
use skyway::domain::dismissal::{DismissalRecord, DISMISSAL_KEY};
use skyway::submission::Submitters;
use skyway::ui::promo::{self, PromoState};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const START_MS: i64 = 1_790_000_000_000;
const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

fn quick_promo_config() -> Config {
    let mut config = Config::default();
    config.promo.show_delay_ms = Some(5_000);
    config
}

/// Starts the application at `epoch_ms` with state stored under `data_dir`.
fn launch(data_dir: &Path, epoch_ms: i64) -> (App, ManualClock) {
    let clock = ManualClock::starting_at(epoch_ms);
    let (store, warning) = FileStore::open(Some(data_dir.to_path_buf()));
    assert_eq!(warning, None);

    let config = quick_promo_config();
    let (app, _task) = App::from_context(AppContext {
        submitters: Submitters::simulated(config.forms.search_latency()),
        config,
        page: PageManifest::embedded().expect("embedded page parses"),
        store: Box::new(store),
        clock: Arc::new(clock.clone()),
        reduced_motion: false,
        warnings: Vec::new(),
    });
    (app, clock)
}

fn advance(app: &mut App, clock: &ManualClock, by: Duration) {
    clock.advance(by);
    app.dispatch(Message::Tick(Instant::now()));
}

#[test]
fn closed_promo_stays_hidden_after_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (mut app, clock) = launch(dir.path(), START_MS);
    advance(&mut app, &clock, Duration::from_secs(5));
    assert_eq!(app.promo_state(), Some(PromoState::Visible));
    app.dispatch(Message::Promo(promo::Message::Close));
    drop(app);

    // One hour later the record is still recent
    let (mut app, clock) = launch(dir.path(), START_MS + 5_000 + HOUR_MS);
    assert_eq!(app.promo_state(), Some(PromoState::Dismissed));
    advance(&mut app, &clock, Duration::from_secs(60));
    assert_eq!(app.promo_state(), Some(PromoState::Dismissed));
}

#[test]
fn promo_returns_once_the_dismissal_expires() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (mut app, clock) = launch(dir.path(), START_MS);
    advance(&mut app, &clock, Duration::from_secs(5));
    app.dispatch(Message::Promo(promo::Message::Close));
    drop(app);

    let (mut app, clock) = launch(dir.path(), START_MS + 5_000 + DAY_MS + 1);
    assert_eq!(app.promo_state(), Some(PromoState::Scheduled));
    advance(&mut app, &clock, Duration::from_secs(5));
    assert_eq!(app.promo_state(), Some(PromoState::Visible));
}

#[test]
fn dismissal_exactly_one_day_old_is_expired() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (mut app, clock) = launch(dir.path(), START_MS);
    advance(&mut app, &clock, Duration::from_secs(5));
    app.dispatch(Message::Promo(promo::Message::Close));
    drop(app);

    let (app, _clock) = launch(dir.path(), START_MS + 5_000 + DAY_MS);
    assert_eq!(app.promo_state(), Some(PromoState::Scheduled));
}

#[test]
fn auto_hidden_promo_reappears_on_next_launch() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (mut app, clock) = launch(dir.path(), START_MS);
    advance(&mut app, &clock, Duration::from_secs(5));
    advance(&mut app, &clock, Duration::from_secs(8));
    assert_eq!(app.promo_state(), Some(PromoState::Hidden));
    assert_eq!(app.store().get(DISMISSAL_KEY), None);
    drop(app);

    let (app, _clock) = launch(dir.path(), START_MS + HOUR_MS);
    assert_eq!(app.promo_state(), Some(PromoState::Scheduled));
}

#[test]
fn stored_record_is_the_dismissal_time_in_millis() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (mut app, clock) = launch(dir.path(), START_MS);
    advance(&mut app, &clock, Duration::from_secs(5));
    app.dispatch(Message::Promo(promo::Message::Close));

    let (store, _warning) = FileStore::open(Some(dir.path().to_path_buf()));
    let raw = skyway::app::persisted_state::PersistedStore::get(&store, DISMISSAL_KEY)
        .expect("record on disk");
    assert_eq!(raw, (START_MS + 5_000).to_string());
    assert_eq!(
        DismissalRecord::parse(&raw).map(DismissalRecord::dismissed_at_ms),
        Some(START_MS + 5_000)
    );
}

#[test]
fn config_round_trip_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = quick_promo_config();
    config.scroll.cta_threshold = Some(450.0);
    config.motion.reduced_motion = Some(true);
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, config);
    assert_eq!(loaded.promo.show_delay(), Duration::from_secs(5));
    assert!((loaded.scroll.cta_threshold() - 450.0).abs() < f32::EPSILON);

    let (from_dir, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    assert_eq!(from_dir, config);
}

#[test]
fn broken_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[promo\nshow_delay_ms = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn partial_page_disables_missing_regions() {
    let page = PageManifest::from_toml(
        r#"
brand = "SkyWay Travel"

[[faq]]
title = "Booking"

[[faq.items]]
question = "Can I cancel?"
answer = "Within 24 hours."
"#,
    )
    .expect("partial page parses");

    let registry = Registry::resolve(&page);
    assert!(registry.contains(Region::Accordion));
    assert!(!registry.contains(Region::SearchForm));
    assert!(!registry.contains(Region::PromoNotification));
    assert!(registry.require(Region::Navigation).is_err());

    let clock = ManualClock::starting_at(START_MS);
    let dir = tempdir().expect("Failed to create temporary directory");
    let (store, _warning) = FileStore::open(Some(dir.path().to_path_buf()));
    let (mut app, _task) = App::from_context(AppContext {
        config: Config::default(),
        page,
        store: Box::new(store),
        clock: Arc::new(clock.clone()),
        submitters: Submitters::simulated(Duration::from_millis(10)),
        reduced_motion: true,
        warnings: Vec::new(),
    });

    assert!(app.search().is_none());
    assert!(app.faq().is_some());
    assert_eq!(app.promo_state(), None);

    clock.advance(Duration::from_secs(30));
    app.dispatch(Message::Tick(Instant::now()));
    app.dispatch(Message::FloatingCtaPressed);
    let _element = app.render();
}
