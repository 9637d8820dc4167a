// SPDX-License-Identifier: MPL-2.0
//! Widget registry.
//!
//! Resolves once, at startup, which interactive regions the page manifest
//! provides. Features ask for their regions through [`Registry::require`]
//! and switch themselves off when one is missing; nothing else on the page
//! is affected.

use super::page::PageManifest;
use crate::domain::trip::TripType;
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Named interactive regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Navigation,
    SearchForm,
    TripToggle,
    ReturnDate,
    CitySwap,
    FlightCards,
    SidebarTopics,
    SidebarTitle,
    Accordion,
    NewsletterMain,
    NewsletterFooter,
    FloatingCta,
    PromoNotification,
    RevealBlocks,
}

impl Region {
    pub const ALL: [Region; 14] = [
        Region::Navigation,
        Region::SearchForm,
        Region::TripToggle,
        Region::ReturnDate,
        Region::CitySwap,
        Region::FlightCards,
        Region::SidebarTopics,
        Region::SidebarTitle,
        Region::Accordion,
        Region::NewsletterMain,
        Region::NewsletterFooter,
        Region::FloatingCta,
        Region::PromoNotification,
        Region::RevealBlocks,
    ];

    fn name(self) -> &'static str {
        match self {
            Region::Navigation => "navigation",
            Region::SearchForm => "search-form",
            Region::TripToggle => "trip-toggle",
            Region::ReturnDate => "return-date",
            Region::CitySwap => "city-swap",
            Region::FlightCards => "flight-cards",
            Region::SidebarTopics => "sidebar-topics",
            Region::SidebarTitle => "sidebar-title",
            Region::Accordion => "accordion",
            Region::NewsletterMain => "newsletter-main",
            Region::NewsletterFooter => "newsletter-footer",
            Region::FloatingCta => "floating-cta",
            Region::PromoNotification => "promo-notification",
            Region::RevealBlocks => "reveal-blocks",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Regions present on the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    present: BTreeSet<Region>,
}

impl Registry {
    /// Resolves every region of `page`.
    #[must_use]
    pub fn resolve(page: &PageManifest) -> Self {
        let mut present = BTreeSet::new();
        let mut mark = |region: Region, found: bool| {
            if found {
                present.insert(region);
            }
        };

        mark(
            Region::Navigation,
            page.navigation
                .as_ref()
                .is_some_and(|nav| !nav.links.is_empty()),
        );

        if let Some(search) = &page.search {
            mark(Region::SearchForm, true);
            mark(
                Region::TripToggle,
                search
                    .trip_types
                    .iter()
                    .any(|name| name.parse::<TripType>().is_ok()),
            );
            mark(Region::ReturnDate, search.return_date);
            mark(Region::CitySwap, search.swap);
        }

        mark(Region::FlightCards, !page.flight_cards.is_empty());

        if let Some(sidebar) = &page.sidebar {
            mark(Region::SidebarTopics, !sidebar.topics.is_empty());
            mark(Region::SidebarTitle, sidebar.title.is_some());
        }

        mark(
            Region::Accordion,
            page.faq.iter().any(|group| !group.items.is_empty()),
        );
        mark(Region::NewsletterMain, page.newsletter_copy(false).is_some());
        mark(Region::NewsletterFooter, page.newsletter_copy(true).is_some());
        mark(Region::FloatingCta, page.floating_cta.is_some());
        mark(Region::PromoNotification, page.promo.is_some());
        mark(
            Region::RevealBlocks,
            !page.flight_cards.is_empty() || !page.offers.is_empty() || !page.testimonials.is_empty(),
        );

        let registry = Self { present };
        for region in registry.missing() {
            tracing::debug!(%region, "region absent from page");
        }
        registry
    }

    /// Confirms that `region` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] when the page does not provide it.
    pub fn require(&self, region: Region) -> Result<()> {
        if self.present.contains(&region) {
            Ok(())
        } else {
            Err(Error::MissingElement(region))
        }
    }

    #[must_use]
    pub fn contains(&self, region: Region) -> bool {
        self.present.contains(&region)
    }

    /// Regions the page does not provide.
    pub fn missing(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL
            .into_iter()
            .filter(|region| !self.present.contains(region))
    }
}

/// Runs `init` when every region in `regions` exists.
///
/// A missing region is traced and the feature is left disabled.
pub fn enable<T>(
    registry: &Registry,
    feature: &str,
    regions: &[Region],
    init: impl FnOnce() -> T,
) -> Option<T> {
    for region in regions {
        if let Err(error) = registry.require(*region) {
            tracing::debug!(feature, %error, "feature disabled");
            return None;
        }
    }
    Some(init())
}
