// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::group::GroupKey;
use crate::ui::accordion;
use crate::ui::cards;
use crate::ui::navbar;
use crate::ui::newsletter::{self, Slot};
use crate::ui::notifications;
use crate::ui::promo;
use crate::ui::search_form;
use crate::ui::topics;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Search(search_form::Message),
    FlightCards(cards::Message),
    Topics(topics::Message),
    Faq(accordion::Message),
    Newsletter(Slot, newsletter::Message),
    Promo(promo::Message),
    Notification(notifications::NotificationMessage),
    FloatingCtaPressed,
    /// The page scrollable moved.
    Scrolled {
        offset: f32,
        viewport_height: f32,
    },
    /// Next animation frame after a scroll or during a reveal.
    Frame(Instant),
    Tick(Instant), // Periodic tick for timers and toast auto-dismiss
    Key(KeyIntent),
    WindowResized(Size),
}

/// Keyboard input the page reacts to, after widgets had their chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Escape,
    Group(GroupKey),
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional page manifest replacing the built-in page.
    pub page_path: Option<String>,
    /// Optional data directory override (for the dismissal record).
    /// Takes precedence over `SKYWAY_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SKYWAY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Force reduced motion regardless of settings.
    pub reduced_motion: bool,
}
