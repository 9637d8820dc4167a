// SPDX-License-Identifier: MPL-2.0
//! Page manifest: the structural content of the landing page.
//!
//! The manifest names every interactive region and the copy it shows. A
//! default manifest is embedded in the binary; `--page <file>` replaces it.
//! Sections are optional and a missing section only disables its feature
//! (see [`super::registry`]).

use crate::error::{Error, Result};
use crate::ui::page_layout::Section;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

/// File name of the embedded manifest.
pub const DEFAULT_PAGE: &str = "page.toml";

pub const PAGE_LOAD_WARNING: &str = "The page file could not be read; the built-in page is shown.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: Section,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSection {
    #[serde(default)]
    pub links: Vec<NavLink>,
}

/// Search form configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSection {
    /// Wire names of the trip toggle members, in display order.
    #[serde(default)]
    pub trip_types: Vec<String>,
    /// Member active at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_trip: Option<String>,
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,
    #[serde(default = "default_max_passengers")]
    pub max_passengers: u8,
    /// Whether the form has a return-date field.
    #[serde(default = "default_true")]
    pub return_date: bool,
    /// Whether the form has a city swap button.
    #[serde(default = "default_true")]
    pub swap: bool,
}

fn default_classes() -> Vec<String> {
    vec!["Economy".to_string()]
}

fn default_max_passengers() -> u8 {
    9
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightCard {
    pub from: String,
    pub to: String,
    pub price: String,
    #[serde(default)]
    pub airline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub label: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Heading that doubles as the collapse toggle on narrow windows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// One accordion container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterCopy {
    pub heading: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default = "default_subscribe")]
    pub button: String,
}

fn default_subscribe() -> String {
    "Subscribe".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<NewsletterCopy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<NewsletterCopy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingCta {
    pub label: String,
    pub target: Section,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCopy {
    pub title: String,
    pub body: String,
}

/// Complete page description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageManifest {
    #[serde(default)]
    pub brand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchSection>,
    #[serde(default)]
    pub flight_cards: Vec<FlightCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<SidebarSection>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub faq: Vec<FaqGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<NewsletterSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_cta: Option<FloatingCta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<PromoCopy>,
}

impl PageManifest {
    /// Parses a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Page`] when the text is not a valid manifest.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Page(e.to_string()))
    }

    /// The manifest compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Page`] if the embedded asset is missing or invalid.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(DEFAULT_PAGE)
            .ok_or_else(|| Error::Page(format!("embedded {DEFAULT_PAGE} not found")))?;
        Self::from_toml(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Reads a manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Page`]
    /// if it is not a valid manifest.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads the page, falling back to the embedded manifest.
    ///
    /// Returns a tuple of (manifest, optional_warning). An unreadable custom
    /// page falls back to the embedded one with a warning; if even that
    /// fails, an empty manifest is returned and every feature is disabled.
    pub fn load(path: Option<&Path>) -> (Self, Option<String>) {
        let mut warning = None;

        if let Some(path) = path {
            match Self::load_from_path(path) {
                Ok(manifest) => return (manifest, None),
                Err(error) => {
                    tracing::warn!(%error, path = %path.display(), "custom page ignored");
                    warning = Some(PAGE_LOAD_WARNING.to_string());
                }
            }
        }

        match Self::embedded() {
            Ok(manifest) => (manifest, warning),
            Err(error) => {
                tracing::warn!(%error, "embedded page unavailable");
                (Self::default(), warning)
            }
        }
    }

    /// Copy for the main or footer newsletter form.
    #[must_use]
    pub fn newsletter_copy(&self, footer: bool) -> Option<&NewsletterCopy> {
        let section = self.newsletter.as_ref()?;
        if footer {
            section.footer.as_ref()
        } else {
            section.main.as_ref()
        }
    }
}
