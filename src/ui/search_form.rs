// SPDX-License-Identifier: MPL-2.0
//! Flight search form.
//!
//! Holds the trip-type toggle, the city fields with their swap button, the
//! travel dates and the passenger/class pickers. Only input constraints are
//! checked here (required fields, date format and minimum dates); the
//! record itself is handed to a
//! [`SearchSubmitter`](crate::submission::SearchSubmitter).

use crate::app::page::SearchSection;
use crate::domain::group::{ExclusiveGroup, GroupKey, KeyOutcome, NotAMember};
use crate::domain::timer::OneShot;
use crate::domain::trip::TripType;
use crate::submission::{SearchRecord, SubmissionError};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, NaiveDate};
use iced::widget::{button, pick_list, text, text_input, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length, Theme};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Date format of the date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date (UTC) of an epoch-millisecond timestamp.
#[must_use]
pub fn today_utc(epoch_millis: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(epoch_millis)
        .map(|moment| moment.date_naive())
        .unwrap_or(NaiveDate::MIN)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Fields of the search record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    From,
    To,
    Depart,
    Return,
    Passengers,
    Class,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::From,
        FieldName::To,
        FieldName::Depart,
        FieldName::Return,
        FieldName::Passengers,
        FieldName::Class,
    ];

    /// Key used in the submission record.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            FieldName::From => "from",
            FieldName::To => "to",
            FieldName::Depart => "depart",
            FieldName::Return => "return",
            FieldName::Passengers => "passengers",
            FieldName::Class => "class",
        }
    }
}

/// Derived presentation of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub visible: bool,
    pub required: bool,
}

impl FieldState {
    pub const HIDDEN: Self = Self {
        visible: false,
        required: false,
    };
    pub const REQUIRED: Self = Self {
        visible: true,
        required: true,
    };
}

/// Return-date presentation for a trip type.
#[must_use]
pub fn return_field(trip: TripType, has_return_field: bool) -> FieldState {
    if has_return_field && trip.needs_return_date() {
        FieldState::REQUIRED
    } else {
        FieldState::HIDDEN
    }
}

// ============================================================================
// Trip toggle
// ============================================================================

/// Radio group of trip types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSelector {
    group: ExclusiveGroup<TripType>,
}

impl TripSelector {
    #[must_use]
    pub fn new(members: Vec<TripType>, initial: Option<TripType>) -> Self {
        let group = match initial {
            Some(initial) => ExclusiveGroup::with_active(members, initial),
            None => ExclusiveGroup::new(members),
        };
        Self { group }
    }

    /// Builds the toggle from the manifest. Unknown names are skipped;
    /// `None` when no known trip type remains.
    #[must_use]
    pub fn from_section(section: &SearchSection) -> Option<Self> {
        let mut members: Vec<TripType> = Vec::new();
        for name in &section.trip_types {
            match name.parse::<TripType>() {
                Ok(trip) if !members.contains(&trip) => members.push(trip),
                Ok(_) => {}
                Err(error) => tracing::debug!(%error, "trip toggle member skipped"),
            }
        }
        if members.is_empty() {
            return None;
        }
        let initial = section
            .default_trip
            .as_deref()
            .and_then(|name| name.parse().ok());
        Some(Self::new(members, initial))
    }

    /// Activates `trip`.
    ///
    /// # Errors
    ///
    /// Returns [`NotAMember`] when the toggle does not offer `trip`.
    pub fn activate(&mut self, trip: TripType) -> Result<TripType, NotAMember> {
        self.group.activate(trip)
    }

    pub fn handle_key(&mut self, key: GroupKey) -> KeyOutcome<TripType> {
        self.group.handle_key(key)
    }

    pub fn blur(&mut self) {
        self.group.blur();
    }

    /// Active trip type; round-trip when nothing is active.
    #[must_use]
    pub fn selected(&self) -> TripType {
        self.group.active().unwrap_or_default()
    }

    #[must_use]
    pub fn aria_pressed(&self, trip: TripType) -> bool {
        self.group.is_active(trip)
    }

    #[must_use]
    pub fn focused(&self) -> Option<TripType> {
        self.group.focused()
    }

    #[must_use]
    pub fn members(&self) -> &[TripType] {
        self.group.members()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.group.active_count()
    }
}

// ============================================================================
// Form state
// ============================================================================

/// Which optional parts of the form exist on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFeatures {
    pub trip_toggle: bool,
    pub return_date: bool,
    pub swap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimings {
    /// How long the swap glyph stays rotated.
    pub swap_reset: Duration,
    /// Delay before focus moves to the departure date after a card prefill.
    pub card_focus_delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone)]
pub struct SearchForm {
    trips: Option<TripSelector>,
    has_return: bool,
    has_swap: bool,
    from: String,
    to: String,
    depart: String,
    return_date: String,
    passengers: u8,
    max_passengers: u8,
    class: String,
    classes: Vec<String>,
    today: NaiveDate,
    errors: BTreeSet<FieldName>,
    phase: Phase,
    swap_glyph: OneShot,
    focus_depart: OneShot,
}

impl SearchForm {
    #[must_use]
    pub fn new(
        section: &SearchSection,
        features: SearchFeatures,
        timings: SearchTimings,
        today: NaiveDate,
    ) -> Self {
        let trips = if features.trip_toggle {
            TripSelector::from_section(section)
        } else {
            None
        };
        let classes = if section.classes.is_empty() {
            vec!["Economy".to_string()]
        } else {
            section.classes.clone()
        };

        Self {
            trips,
            has_return: features.return_date,
            has_swap: features.swap,
            from: String::new(),
            to: String::new(),
            depart: String::new(),
            return_date: String::new(),
            passengers: 1,
            max_passengers: section.max_passengers.max(1),
            class: classes[0].clone(),
            classes,
            today,
            errors: BTreeSet::new(),
            phase: Phase::Idle,
            swap_glyph: OneShot::new(timings.swap_reset),
            focus_depart: OneShot::new(timings.card_focus_delay),
        }
    }

    /// Trip type for the next submission.
    #[must_use]
    pub fn trip_type(&self) -> TripType {
        self.trips
            .as_ref()
            .map_or(TripType::default(), TripSelector::selected)
    }

    #[must_use]
    pub fn trips(&self) -> Option<&TripSelector> {
        self.trips.as_ref()
    }

    pub fn trips_mut(&mut self) -> Option<&mut TripSelector> {
        self.trips.as_mut()
    }

    /// Arrow/Home/End/Enter/Space inside the trip toggle.
    pub fn handle_trip_key(&mut self, key: GroupKey) -> KeyOutcome<TripType> {
        let Some(trips) = self.trips.as_mut() else {
            return KeyOutcome::Ignored;
        };
        let outcome = trips.handle_key(key);
        if matches!(outcome, KeyOutcome::Activated(_)) && !self.return_field().required {
            self.errors.remove(&FieldName::Return);
        }
        outcome
    }

    #[must_use]
    pub fn return_field(&self) -> FieldState {
        return_field(self.trip_type(), self.has_return)
    }

    #[must_use]
    pub fn depart_min(&self) -> NaiveDate {
        self.today
    }

    /// Earliest return date: today, or the departure date once set.
    #[must_use]
    pub fn return_min(&self) -> NaiveDate {
        parse_date(&self.depart).map_or(self.today, |depart| depart.max(self.today))
    }

    #[must_use]
    pub fn value(&self, field: FieldName) -> String {
        match field {
            FieldName::From => self.from.clone(),
            FieldName::To => self.to.clone(),
            FieldName::Depart => self.depart.clone(),
            FieldName::Return => self.return_date.clone(),
            FieldName::Passengers => self.passengers.to_string(),
            FieldName::Class => self.class.clone(),
        }
    }

    #[must_use]
    pub fn has_error(&self, field: FieldName) -> bool {
        self.errors.contains(&field)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_swap_rotated(&self) -> bool {
        self.swap_glyph.is_armed()
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.swap_glyph.is_armed() || self.focus_depart.is_armed()
    }

    /// Fills the cities from a flight card and schedules the focus hand-off
    /// to the departure date.
    pub fn prefill(&mut self, from: &str, to: &str, now: Instant) {
        self.from = from.to_string();
        self.to = to.to_string();
        self.errors.remove(&FieldName::From);
        self.errors.remove(&FieldName::To);
        self.focus_depart.arm(now);
    }

    /// Polls the form timers. Returns `true` when focus should move to the
    /// departure date.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.swap_glyph.poll(now);
        self.focus_depart.poll(now)
    }

    fn set_depart(&mut self, value: String) {
        self.depart = value;
        self.errors.remove(&FieldName::Depart);
        if let (Some(depart), Some(back)) = (parse_date(&self.depart), parse_date(&self.return_date))
        {
            if back < depart {
                self.return_date.clear();
            }
        }
    }

    fn swap_cities(&mut self, now: Instant) {
        std::mem::swap(&mut self.from, &mut self.to);
        let from_invalid = self.errors.remove(&FieldName::From);
        let to_invalid = self.errors.remove(&FieldName::To);
        if from_invalid {
            self.errors.insert(FieldName::To);
        }
        if to_invalid {
            self.errors.insert(FieldName::From);
        }
        self.swap_glyph.arm(now);
    }

    fn check_date(&self, value: &str, min: NaiveDate) -> bool {
        parse_date(value).is_some_and(|date| date >= min)
    }

    /// Fields that violate their input constraints.
    #[must_use]
    pub fn validate(&self) -> BTreeSet<FieldName> {
        let mut invalid = BTreeSet::new();
        if self.from.trim().is_empty() {
            invalid.insert(FieldName::From);
        }
        if self.to.trim().is_empty() {
            invalid.insert(FieldName::To);
        }
        if !self.check_date(&self.depart, self.depart_min()) {
            invalid.insert(FieldName::Depart);
        }
        if self.return_field().required && !self.check_date(&self.return_date, self.return_min()) {
            invalid.insert(FieldName::Return);
        }
        if !(1..=self.max_passengers).contains(&self.passengers) {
            invalid.insert(FieldName::Passengers);
        }
        if !self.classes.contains(&self.class) {
            invalid.insert(FieldName::Class);
        }
        invalid
    }

    /// Snapshot of every field plus the trip type.
    #[must_use]
    pub fn record(&self) -> SearchRecord {
        let mut record = SearchRecord::new(self.trip_type());
        for field in FieldName::ALL {
            record.insert(field.key(), self.value(field).trim());
        }
        record
    }
}

// ============================================================================
// Component
// ============================================================================

#[derive(Debug, Clone)]
pub enum Message {
    TripPressed(TripType),
    FromChanged(String),
    ToChanged(String),
    DepartChanged(String),
    ReturnChanged(String),
    PassengersSelected(u8),
    ClassSelected(String),
    Swap,
    Submit,
    Completed(Result<(), SubmissionError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    TripActivated(TripType),
    Submit(SearchRecord),
    Finished(Result<(), SubmissionError>),
}

pub fn update(form: &mut SearchForm, message: Message, now: Instant) -> Event {
    match message {
        Message::TripPressed(trip) => {
            let Some(trips) = form.trips.as_mut() else {
                return Event::None;
            };
            match trips.activate(trip) {
                Ok(trip) => {
                    if !form.return_field().required {
                        form.errors.remove(&FieldName::Return);
                    }
                    Event::TripActivated(trip)
                }
                Err(error) => {
                    tracing::debug!(%error, %trip, "trip toggle");
                    Event::None
                }
            }
        }
        Message::FromChanged(value) => {
            form.from = value;
            form.errors.remove(&FieldName::From);
            Event::None
        }
        Message::ToChanged(value) => {
            form.to = value;
            form.errors.remove(&FieldName::To);
            Event::None
        }
        Message::DepartChanged(value) => {
            form.set_depart(value);
            Event::None
        }
        Message::ReturnChanged(value) => {
            form.return_date = value;
            form.errors.remove(&FieldName::Return);
            Event::None
        }
        Message::PassengersSelected(count) => {
            form.passengers = count;
            form.errors.remove(&FieldName::Passengers);
            Event::None
        }
        Message::ClassSelected(class) => {
            form.class = class;
            form.errors.remove(&FieldName::Class);
            Event::None
        }
        Message::Swap => {
            if form.has_swap {
                form.swap_cities(now);
            }
            Event::None
        }
        Message::Submit => {
            if form.phase == Phase::Submitting {
                tracing::debug!("search already in flight");
                return Event::None;
            }
            form.errors = form.validate();
            if !form.errors.is_empty() {
                tracing::debug!(fields = ?form.errors, "search blocked by invalid fields");
                return Event::None;
            }
            form.phase = Phase::Submitting;
            Event::Submit(form.record())
        }
        Message::Completed(result) => {
            form.phase = Phase::Idle;
            Event::Finished(result)
        }
    }
}

pub struct ViewContext<'a> {
    pub form: &'a SearchForm,
    /// Keyboard focus is inside the trip toggle.
    pub trip_focus: bool,
    /// Keyboard focus is on the departure date.
    pub depart_focus: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let form = ctx.form;
    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Find your next flight").size(typography::TITLE_LG));

    if let Some(trips) = form.trips() {
        content = content.push(trip_toggle(trips, ctx.trip_focus));
    }

    let swap_glyph = if form.is_swap_rotated() { "⇅" } else { "⇄" };
    let mut cities = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Bottom)
        .push(field(
            "From",
            text_input("City or airport", &form.from)
                .on_input(Message::FromChanged)
                .padding(spacing::XS)
                .into(),
            form.has_error(FieldName::From),
            false,
        ));
    if form.has_swap {
        cities = cities.push(
            button(Text::new(swap_glyph))
                .on_press(Message::Swap)
                .padding(spacing::XS)
                .style(styles::button::unselected),
        );
    }
    cities = cities.push(field(
        "To",
        text_input("City or airport", &form.to)
            .on_input(Message::ToChanged)
            .padding(spacing::XS)
            .into(),
        form.has_error(FieldName::To),
        false,
    ));
    content = content.push(cities);

    let mut dates = Row::new().spacing(spacing::XS).push(field(
        "Depart",
        date_input(&form.depart, form.depart_min(), Message::DepartChanged),
        form.has_error(FieldName::Depart),
        ctx.depart_focus,
    ));
    if form.return_field().visible {
        dates = dates.push(field(
            "Return",
            date_input(&form.return_date, form.return_min(), Message::ReturnChanged),
            form.has_error(FieldName::Return),
            false,
        ));
    }
    content = content.push(dates);

    let passenger_options: Vec<u8> = (1..=form.max_passengers).collect();
    let pickers = Row::new()
        .spacing(spacing::XS)
        .push(field(
            "Passengers",
            pick_list(
                passenger_options,
                Some(form.passengers),
                Message::PassengersSelected,
            )
            .padding(spacing::XS)
            .width(Length::Fill)
            .into(),
            form.has_error(FieldName::Passengers),
            false,
        ))
        .push(field(
            "Class",
            pick_list(
                form.classes.as_slice(),
                Some(form.class.clone()),
                Message::ClassSelected,
            )
            .padding(spacing::XS)
            .width(Length::Fill)
            .into(),
            form.has_error(FieldName::Class),
            false,
        ));
    content = content.push(pickers);

    let submit = match form.phase {
        Phase::Idle => button(Text::new("Search Flights"))
            .on_press(Message::Submit)
            .style(styles::button::primary),
        Phase::Submitting => button(Text::new("Searching...")).style(styles::button::disabled()),
    };
    content = content.push(submit.padding([spacing::XS, spacing::LG]));

    if !form.errors.is_empty() {
        content = content.push(error_caption("Please check the highlighted fields."));
    }

    content.into()
}

fn trip_toggle(trips: &TripSelector, has_focus: bool) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for &trip in trips.members() {
        let base = if trips.aria_pressed(trip) {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        let focused = has_focus && trips.focused() == Some(trip);
        row = row.push(
            button(Text::new(trip.label()))
                .on_press(Message::TripPressed(trip))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::with_focus(base, focused)),
        );
    }
    row.into()
}

fn date_input<'a>(
    value: &'a str,
    min: NaiveDate,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            text_input("YYYY-MM-DD", value)
                .on_input(on_input)
                .padding(spacing::XS),
        )
        .push(Text::new(format!("Earliest {min}")).size(typography::CAPTION))
        .into()
}

fn field<'a>(
    label: &'a str,
    input: Element<'a, Message>,
    invalid: bool,
    focused: bool,
) -> Element<'a, Message> {
    let wrapped = Container::new(input).padding(1.0);
    let wrapped = if invalid {
        wrapped.style(styles::container::field_error)
    } else if focused {
        wrapped.style(styles::container::focus_ring)
    } else {
        wrapped
    };

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(label).size(typography::CAPTION))
        .push(wrapped)
        .into()
}

fn error_caption<'a>(message: &'a str) -> Element<'a, Message> {
    Text::new(message)
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> SearchSection {
        SearchSection {
            trip_types: vec!["round-trip".into(), "one-way".into(), "multi-city".into()],
            default_trip: Some("round-trip".into()),
            classes: vec!["Economy".into(), "Business".into()],
            max_passengers: 9,
            return_date: true,
            swap: true,
        }
    }

    fn features() -> SearchFeatures {
        SearchFeatures {
            trip_toggle: true,
            return_date: true,
            swap: true,
        }
    }

    fn timings() -> SearchTimings {
        SearchTimings {
            swap_reset: Duration::from_millis(300),
            card_focus_delay: Duration::from_millis(500),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    fn form() -> SearchForm {
        SearchForm::new(&section(), features(), timings(), today())
    }

    fn fill(form: &mut SearchForm, now: Instant) {
        update(form, Message::FromChanged("Boston".into()), now);
        update(form, Message::ToChanged("Rome".into()), now);
        update(form, Message::DepartChanged("2026-11-02".into()), now);
        update(form, Message::ReturnChanged("2026-11-09".into()), now);
    }

    #[test]
    fn today_is_derived_from_epoch_millis() {
        // 2026-10-19T12:00:00Z
        assert_eq!(today_utc(1_792_411_200_000), today());
    }

    #[test]
    fn one_way_hides_and_unrequires_return() {
        let now = Instant::now();
        let mut form = form();
        assert_eq!(form.return_field(), FieldState::REQUIRED);

        update(&mut form, Message::TripPressed(TripType::OneWay), now);
        assert_eq!(form.return_field(), FieldState::HIDDEN);

        update(&mut form, Message::TripPressed(TripType::RoundTrip), now);
        assert_eq!(form.return_field(), FieldState::REQUIRED);
    }

    #[test]
    fn exactly_one_trip_type_is_pressed() {
        let now = Instant::now();
        let mut form = form();
        for trip in [TripType::MultiCity, TripType::OneWay, TripType::OneWay] {
            update(&mut form, Message::TripPressed(trip), now);
            let trips = form.trips().expect("toggle present");
            assert_eq!(trips.active_count(), 1);
            assert!(trips.aria_pressed(trip));
        }
    }

    #[test]
    fn trip_type_defaults_to_round_trip() {
        let mut section = section();
        section.default_trip = None;
        let form = SearchForm::new(&section, features(), timings(), today());

        assert_eq!(form.trips().map(TripSelector::active_count), Some(0));
        assert_eq!(form.trip_type(), TripType::RoundTrip);
    }

    #[test]
    fn missing_toggle_still_submits_round_trip() {
        let now = Instant::now();
        let mut form = SearchForm::new(
            &section(),
            SearchFeatures {
                trip_toggle: false,
                ..features()
            },
            timings(),
            today(),
        );
        fill(&mut form, now);

        let Event::Submit(record) = update(&mut form, Message::Submit, now) else {
            panic!("expected a submission");
        };
        assert_eq!(record.trip_type(), Some("round-trip"));
    }

    #[test]
    fn submit_builds_complete_record() {
        let now = Instant::now();
        let mut form = form();
        fill(&mut form, now);
        update(&mut form, Message::PassengersSelected(2), now);
        update(&mut form, Message::ClassSelected("Business".into()), now);

        let Event::Submit(record) = update(&mut form, Message::Submit, now) else {
            panic!("expected a submission");
        };
        assert_eq!(record.get("from"), Some("Boston"));
        assert_eq!(record.get("to"), Some("Rome"));
        assert_eq!(record.get("depart"), Some("2026-11-02"));
        assert_eq!(record.get("return"), Some("2026-11-09"));
        assert_eq!(record.get("passengers"), Some("2"));
        assert_eq!(record.get("class"), Some("Business"));
        assert_eq!(record.trip_type(), Some("round-trip"));
        assert_eq!(form.phase(), Phase::Submitting);
    }

    #[test]
    fn empty_form_marks_required_fields() {
        let now = Instant::now();
        let mut form = form();

        assert_eq!(update(&mut form, Message::Submit, now), Event::None);
        for field in [FieldName::From, FieldName::To, FieldName::Depart, FieldName::Return] {
            assert!(form.has_error(field), "{field:?} should be invalid");
        }
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn one_way_submits_without_return_date() {
        let now = Instant::now();
        let mut form = form();
        update(&mut form, Message::TripPressed(TripType::OneWay), now);
        update(&mut form, Message::FromChanged("Oslo".into()), now);
        update(&mut form, Message::ToChanged("Lima".into()), now);
        update(&mut form, Message::DepartChanged("2026-12-01".into()), now);

        let Event::Submit(record) = update(&mut form, Message::Submit, now) else {
            panic!("expected a submission");
        };
        assert_eq!(record.trip_type(), Some("one-way"));
    }

    #[test]
    fn past_departure_is_rejected() {
        let now = Instant::now();
        let mut form = form();
        fill(&mut form, now);
        update(&mut form, Message::DepartChanged("2026-10-18".into()), now);

        assert_eq!(update(&mut form, Message::Submit, now), Event::None);
        assert!(form.has_error(FieldName::Depart));
    }

    #[test]
    fn later_departure_clears_earlier_return() {
        let now = Instant::now();
        let mut form = form();
        fill(&mut form, now);

        update(&mut form, Message::DepartChanged("2026-11-20".into()), now);

        assert_eq!(form.value(FieldName::Return), "");
        assert_eq!(
            form.return_min(),
            NaiveDate::from_ymd_opt(2026, 11, 20).expect("valid date")
        );
    }

    #[test]
    fn repeated_submit_is_ignored_while_in_flight() {
        let now = Instant::now();
        let mut form = form();
        fill(&mut form, now);

        assert!(matches!(update(&mut form, Message::Submit, now), Event::Submit(_)));
        assert_eq!(update(&mut form, Message::Submit, now), Event::None);

        assert_eq!(
            update(&mut form, Message::Completed(Ok(())), now),
            Event::Finished(Ok(()))
        );
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn swap_exchanges_cities_and_rearms_glyph() {
        let start = Instant::now();
        let mut form = form();
        fill(&mut form, start);

        update(&mut form, Message::Swap, start);
        assert_eq!(form.value(FieldName::From), "Rome");
        assert_eq!(form.value(FieldName::To), "Boston");
        assert!(form.is_swap_rotated());

        update(&mut form, Message::Swap, start + Duration::from_millis(200));
        form.tick(start + Duration::from_millis(300));
        assert!(form.is_swap_rotated());

        form.tick(start + Duration::from_millis(500));
        assert!(!form.is_swap_rotated());
    }

    #[test]
    fn prefill_moves_focus_after_delay() {
        let start = Instant::now();
        let mut form = form();

        form.prefill("Miami", "Cancun", start);
        assert_eq!(form.value(FieldName::From), "Miami");
        assert!(!form.tick(start + Duration::from_millis(499)));
        assert!(form.tick(start + Duration::from_millis(500)));
        assert!(!form.has_pending_timer());
    }

    #[test]
    fn trip_keyboard_navigation_moves_focus_only() {
        let mut form = form();
        let trips = form.trips_mut().expect("toggle present");

        assert_eq!(trips.handle_key(GroupKey::Next), KeyOutcome::Focused(TripType::OneWay));
        assert_eq!(trips.selected(), TripType::RoundTrip);
        assert_eq!(
            trips.handle_key(GroupKey::Activate),
            KeyOutcome::Activated(TripType::OneWay)
        );
        assert_eq!(form.return_field(), FieldState::HIDDEN);
    }

    #[test]
    fn keyboard_switch_to_one_way_clears_return_error() {
        let mut form = form();
        let now = Instant::now();
        update(&mut form, Message::Submit, now);
        assert!(form.has_error(FieldName::Return));

        form.handle_trip_key(GroupKey::Next);
        assert_eq!(
            form.handle_trip_key(GroupKey::Activate),
            KeyOutcome::Activated(TripType::OneWay)
        );
        assert!(!form.has_error(FieldName::Return));
    }
}
