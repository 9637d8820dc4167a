// SPDX-License-Identifier: MPL-2.0
//! Newsletter signup forms.
//!
//! The page carries two independent instances (main section and footer)
//! that share no state. A valid address is handed to the
//! [`NewsletterSubmitter`](crate::submission::NewsletterSubmitter) without
//! waiting for the result; the form shows a confirmation while disabled and
//! then resets itself.

use crate::app::page::NewsletterCopy;
use crate::domain::timer::OneShot;
use crate::error::{Error, Result};
use crate::submission::SubmissionError;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{Element, Length, Theme};
use regex::Regex;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Text shown in the field while the confirmation is displayed.
pub const CONFIRMATION_TEXT: &str = "Thanks for subscribing!";

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Checks `value` against `local@domain.tld`.
///
/// # Errors
///
/// Returns [`Error::InvalidEmail`] when the address does not match.
pub fn validate_email(value: &str) -> Result<()> {
    match EMAIL_PATTERN.as_ref() {
        Some(pattern) if pattern.is_match(value) => Ok(()),
        _ => Err(Error::InvalidEmail),
    }
}

/// Which of the two forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Main,
    Footer,
}

impl Slot {
    #[must_use]
    pub fn is_footer(self) -> bool {
        self == Slot::Footer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Confirming,
}

/// State of one signup form.
#[derive(Debug, Clone)]
pub struct NewsletterForm {
    value: String,
    invalid: bool,
    phase: Phase,
    reset: OneShot,
}

impl NewsletterForm {
    #[must_use]
    pub fn new(confirmation: Duration) -> Self {
        Self {
            value: String::new(),
            invalid: false,
            phase: Phase::Editing,
            reset: OneShot::new(confirmation),
        }
    }

    /// Validates and, on success, starts the confirmation. Returns the
    /// address to hand to the submitter.
    fn submit(&mut self, now: Instant) -> Option<String> {
        if self.phase == Phase::Confirming {
            return None;
        }
        let email = self.value.trim().to_string();
        if let Err(error) = validate_email(&email) {
            tracing::debug!(%error, "newsletter address rejected");
            self.invalid = true;
            return None;
        }
        self.invalid = false;
        self.phase = Phase::Confirming;
        self.reset.arm(now);
        Some(email)
    }

    /// Ends the confirmation when its timer fires.
    pub fn tick(&mut self, now: Instant) {
        if self.reset.poll(now) {
            self.value.clear();
            self.phase = Phase::Editing;
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.phase == Phase::Editing
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.reset.is_armed()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Submit,
    /// Outcome reported by the submitter.
    Delivered(std::result::Result<(), SubmissionError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Subscribe(String),
    Failed(SubmissionError),
}

pub fn update(form: &mut NewsletterForm, message: Message, now: Instant) -> Event {
    match message {
        Message::EmailChanged(value) => {
            if form.is_enabled() {
                form.value = value;
                form.invalid = false;
            }
            Event::None
        }
        Message::Submit => form.submit(now).map_or(Event::None, Event::Subscribe),
        Message::Delivered(Ok(())) => Event::None,
        Message::Delivered(Err(error)) => Event::Failed(error),
    }
}

pub struct ViewContext<'a> {
    pub form: &'a NewsletterForm,
    pub copy: &'a NewsletterCopy,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let form = ctx.form;
    let shown = if form.phase == Phase::Confirming {
        CONFIRMATION_TEXT
    } else {
        form.value.as_str()
    };

    let mut input = text_input(ctx.copy.placeholder.as_str(), shown)
        .padding(spacing::XS)
        .width(Length::Fill);
    if form.is_enabled() {
        input = input
            .on_input(Message::EmailChanged)
            .on_submit(Message::Submit);
    }

    let submit = if form.is_enabled() {
        button(Text::new(ctx.copy.button.as_str()))
            .on_press(Message::Submit)
            .style(styles::button::primary)
    } else {
        button(Text::new(ctx.copy.button.as_str())).style(styles::button::disabled())
    };

    let row = Row::new().spacing(spacing::XS).push(input).push(submit);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.copy.heading.as_str()).size(typography::TITLE_MD));

    if form.invalid {
        column = column.push(Container::new(row).style(styles::container::field_error));
        column = column.push(
            Text::new("Please enter a valid email address.")
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    } else {
        column = column.push(row);
    }

    column.into()
}
