// SPDX-License-Identifier: MPL-2.0
//! Fixed-height geometry of the scrolling page.
//!
//! Every section and every card is rendered with the heights defined here,
//! so scroll offsets can be mapped to sections and reveal blocks without
//! querying the renderer. The layout is a pure function of a
//! [`LayoutInput`] and is recomputed whenever the input changes.

use crate::app::config::{MOBILE_NAV_BREAKPOINT, MOBILE_SIDEBAR_BREAKPOINT};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================================================
// Geometry Constants
// ==========================================================================

pub const SEARCH_HEIGHT: f32 = 560.0;
pub const SECTION_HEADER_HEIGHT: f32 = 80.0;
pub const GRID_GAP: f32 = 16.0;
pub const FLIGHT_CARD_HEIGHT: f32 = 180.0;
pub const OFFER_CARD_HEIGHT: f32 = 140.0;
pub const TESTIMONIAL_HEIGHT: f32 = 160.0;
pub const TOPICS_HEIGHT: f32 = 440.0;
pub const FAQ_GROUP_TITLE_HEIGHT: f32 = 40.0;
pub const FAQ_HEADER_HEIGHT: f32 = 48.0;
pub const FAQ_ANSWER_HEIGHT: f32 = 72.0;
pub const NEWSLETTER_HEIGHT: f32 = 220.0;
pub const FOOTER_HEIGHT: f32 = 200.0;

/// Anchor targets, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Search,
    Deals,
    Topics,
    Offers,
    Testimonials,
    Faq,
    Newsletter,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Search,
        Section::Deals,
        Section::Topics,
        Section::Offers,
        Section::Testimonials,
        Section::Faq,
        Section::Newsletter,
        Section::Footer,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Search => "search",
            Section::Deals => "deals",
            Section::Topics => "topics",
            Section::Offers => "offers",
            Section::Testimonials => "testimonials",
            Section::Faq => "faq",
            Section::Newsletter => "newsletter",
            Section::Footer => "footer",
        };
        f.write_str(name)
    }
}

/// Kind of card that plays the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    FlightCard,
    Offer,
    Testimonial,
}

/// A revealable card and its position on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub index: usize,
    pub top: f32,
    pub height: f32,
}

/// Where a scrolled-to section should land in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
}

/// Content counts that determine the geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutInput {
    pub search: bool,
    pub flight_cards: usize,
    pub topics: bool,
    pub offers: usize,
    pub testimonials: usize,
    /// Item count of each accordion container.
    pub faq_items: Vec<usize>,
    /// Number of expanded accordion answers.
    pub faq_open: usize,
    pub newsletter: bool,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Placed {
    section: Section,
    top: f32,
    height: f32,
}

/// Computed page geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    sections: Vec<Placed>,
    blocks: Vec<Block>,
    content_height: f32,
}

impl PageLayout {
    #[must_use]
    pub fn compute(input: &LayoutInput) -> Self {
        let columns = input.columns.max(1);
        let mut layout = Self::default();

        if input.search {
            layout.place(Section::Search, SEARCH_HEIGHT);
        }
        layout.place_grid(
            Section::Deals,
            BlockKind::FlightCard,
            input.flight_cards,
            columns,
            FLIGHT_CARD_HEIGHT,
        );
        if input.topics {
            layout.place(Section::Topics, TOPICS_HEIGHT);
        }
        layout.place_grid(
            Section::Offers,
            BlockKind::Offer,
            input.offers,
            columns,
            OFFER_CARD_HEIGHT,
        );
        layout.place_grid(
            Section::Testimonials,
            BlockKind::Testimonial,
            input.testimonials,
            columns,
            TESTIMONIAL_HEIGHT,
        );
        if !input.faq_items.is_empty() {
            layout.place(Section::Faq, faq_height(&input.faq_items, input.faq_open));
        }
        if input.newsletter {
            layout.place(Section::Newsletter, NEWSLETTER_HEIGHT);
        }
        layout.place(Section::Footer, FOOTER_HEIGHT);
        layout
    }

    /// Appends a section below the current content and returns its top.
    fn place(&mut self, section: Section, height: f32) -> f32 {
        let top = self.content_height;
        self.sections.push(Placed {
            section,
            top,
            height,
        });
        self.content_height += height;
        top
    }

    fn place_grid(
        &mut self,
        section: Section,
        kind: BlockKind,
        count: usize,
        columns: usize,
        card_height: f32,
    ) {
        if count == 0 {
            return;
        }
        let section_top = self.place(section, grid_height(count, columns, card_height));
        for index in 0..count {
            let row = (index / columns) as f32;
            self.blocks.push(Block {
                kind,
                index,
                top: section_top + SECTION_HEADER_HEIGHT + row * (card_height + GRID_GAP),
                height: card_height,
            });
        }
    }

    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn section_top(&self, section: Section) -> Option<f32> {
        self.find(section).map(|placed| placed.top)
    }

    #[must_use]
    pub fn section_height(&self, section: Section) -> Option<f32> {
        self.find(section).map(|placed| placed.height)
    }

    #[must_use]
    pub fn has_section(&self, section: Section) -> bool {
        self.find(section).is_some()
    }

    /// Absolute offset that brings `section` into view, clamped to the
    /// scrollable range.
    #[must_use]
    pub fn scroll_target(&self, section: Section, viewport_height: f32, align: Align) -> Option<f32> {
        let placed = self.find(section)?;
        let raw = match align {
            Align::Start => placed.top,
            Align::Center => placed.top + placed.height / 2.0 - viewport_height / 2.0,
        };
        Some(raw.clamp(0.0, self.max_offset(viewport_height)))
    }

    /// Converts an absolute offset into the `0.0..=1.0` range used by
    /// relative scrolling.
    #[must_use]
    pub fn relative_y(&self, offset: f32, viewport_height: f32) -> f32 {
        let max = self.max_offset(viewport_height);
        if max <= 0.0 {
            0.0
        } else {
            (offset / max).clamp(0.0, 1.0)
        }
    }

    fn max_offset(&self, viewport_height: f32) -> f32 {
        (self.content_height - viewport_height).max(0.0)
    }

    fn find(&self, section: Section) -> Option<&Placed> {
        self.sections.iter().find(|placed| placed.section == section)
    }
}

fn grid_height(count: usize, columns: usize, card_height: f32) -> f32 {
    let rows = count.div_ceil(columns) as f32;
    SECTION_HEADER_HEIGHT + rows * card_height + (rows - 1.0).max(0.0) * GRID_GAP
}

fn faq_height(items: &[usize], open: usize) -> f32 {
    let headers: usize = items.iter().sum();
    SECTION_HEADER_HEIGHT
        + items.len() as f32 * FAQ_GROUP_TITLE_HEIGHT
        + headers as f32 * FAQ_HEADER_HEIGHT
        + open.min(headers) as f32 * FAQ_ANSWER_HEIGHT
}

/// Fraction of `height` starting at `top` that lies inside the viewport.
#[must_use]
pub fn intersection_ratio(top: f32, height: f32, viewport_top: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible_top = top.max(viewport_top);
    let visible_bottom = (top + height).min(viewport_top + viewport_height);
    ((visible_bottom - visible_top) / height).clamp(0.0, 1.0)
}

/// Number of card columns for a window width.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    if width < MOBILE_NAV_BREAKPOINT {
        1
    } else if width < MOBILE_SIDEBAR_BREAKPOINT {
        2
    } else {
        3
    }
}
