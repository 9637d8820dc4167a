// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of fixed-height sections whose heights
//! come from [`PageLayout`], so anchor targets and reveal geometry match what
//! is drawn. The navbar sits above the scrollable; the floating call to
//! action, the promo card and toasts are stacked over it.

use super::{Focus, Message, PAGE_SCROLLABLE_ID};
use crate::app::page::PageManifest;
use crate::ui::accordion::{self, FaqState};
use crate::ui::cards;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar;
use crate::ui::newsletter::{self, NewsletterForm, Slot};
use crate::ui::notifications::{self, Toast};
use crate::ui::page_layout::{BlockKind, PageLayout, Section, SECTION_HEADER_HEIGHT};
use crate::ui::promo::{self, PromoController};
use crate::ui::scroll::{RevealAppearance, RevealTracker, ScrollReactor};
use crate::ui::search_form::{self, SearchForm};
use crate::ui::styles;
use crate::ui::topics::{self, TopicsState};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, Column, Container, Id, Scrollable, Stack, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the page.
pub struct ViewContext<'a> {
    pub page: &'a PageManifest,
    pub layout: &'a PageLayout,
    pub navbar: Option<&'a navbar::State>,
    pub search: Option<&'a SearchForm>,
    pub topics: Option<&'a TopicsState>,
    pub faq: Option<&'a FaqState>,
    pub newsletter_main: Option<&'a NewsletterForm>,
    pub newsletter_footer: Option<&'a NewsletterForm>,
    pub promo: Option<&'a PromoController>,
    pub cta_enabled: bool,
    pub scroll: &'a ScrollReactor,
    pub reveal: &'a RevealTracker,
    pub focus: Focus,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
    pub columns: usize,
}

impl ViewContext<'_> {
    /// Appearance of a revealable card, by its position in the layout.
    fn appearance(&self, kind: BlockKind, index: usize) -> RevealAppearance {
        self.layout
            .blocks()
            .iter()
            .position(|block| block.kind == kind && block.index == index)
            .map_or(RevealAppearance::SHOWN, |global| {
                self.reveal.appearance(global, self.now)
            })
    }
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut sections = Column::new().width(Length::Fill);
    for section in Section::ALL {
        let Some(height) = ctx.layout.section_height(section) else {
            continue;
        };
        let Some(content) = view_section(&ctx, section) else {
            continue;
        };

        let mut container = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .padding([0.0, spacing::LG])
            .clip(true);
        if section == Section::Newsletter || section == Section::Footer {
            container = container.style(styles::container::band);
        }
        if ctx.focus == Focus::Section(section) {
            container = container.style(styles::container::focus_ring);
        }
        sections = sections.push(container);
    }

    let page = Scrollable::new(sections)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        });

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(layer) = view_corner_layer(&ctx) {
        stack = stack.push(layer);
    }
    stack = stack.push(Toast::view_overlay(ctx.notifications).map(Message::Notification));

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(state) = ctx.navbar {
        let links = ctx
            .page
            .navigation
            .as_ref()
            .map_or(&[][..], |nav| nav.links.as_slice());
        column = column.push(
            navbar::view(navbar::ViewContext {
                state,
                brand: ctx.page.brand.as_str(),
                links,
                hamburger_focus: ctx.focus == Focus::Hamburger,
            })
            .map(Message::Navbar),
        );
    }

    column.push(stack).into()
}

fn view_section<'a>(ctx: &ViewContext<'a>, section: Section) -> Option<Element<'a, Message>> {
    let page = ctx.page;
    let element = match section {
        Section::Search => search_form::view(search_form::ViewContext {
            form: ctx.search?,
            trip_focus: ctx.focus == Focus::TripToggle,
            depart_focus: ctx.focus == Focus::Departure,
        })
        .map(Message::Search),
        Section::Deals => {
            let cells = page
                .flight_cards
                .iter()
                .enumerate()
                .map(|(index, card)| {
                    cards::flight_card(index, card, ctx.appearance(BlockKind::FlightCard, index))
                        .map(Message::FlightCards)
                })
                .collect();
            with_header("Popular Flights", cards::grid(cells, ctx.columns))
        }
        Section::Topics => {
            let sidebar = page.sidebar.as_ref()?;
            topics::view(topics::ViewContext {
                state: ctx.topics?,
                topics: &sidebar.topics,
                title: sidebar.title.as_deref(),
                has_focus: ctx.focus == Focus::Topics,
            })
            .map(Message::Topics)
        }
        Section::Offers => {
            let cells = page
                .offers
                .iter()
                .enumerate()
                .map(|(index, offer)| cards::offer_card(offer, ctx.appearance(BlockKind::Offer, index)))
                .collect();
            with_header("Special Offers", cards::grid(cells, ctx.columns))
        }
        Section::Testimonials => {
            let cells = page
                .testimonials
                .iter()
                .enumerate()
                .map(|(index, testimonial)| {
                    cards::testimonial_card(
                        testimonial,
                        ctx.appearance(BlockKind::Testimonial, index),
                    )
                })
                .collect();
            with_header("What Travelers Say", cards::grid(cells, ctx.columns))
        }
        Section::Faq => with_header(
            "Frequently Asked Questions",
            accordion::view(accordion::ViewContext {
                state: ctx.faq?,
                groups: &page.faq,
                has_focus: ctx.focus == Focus::Faq,
            })
            .map(Message::Faq),
        ),
        Section::Newsletter => view_newsletter(ctx, Slot::Main)?,
        Section::Footer => view_footer(ctx),
    };
    Some(element)
}

fn with_header<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(
            Container::new(Text::new(title).size(typography::TITLE_LG))
                .height(Length::Fixed(SECTION_HEADER_HEIGHT))
                .align_y(Vertical::Center),
        )
        .push(body)
        .into()
}

fn view_newsletter<'a>(ctx: &ViewContext<'a>, slot: Slot) -> Option<Element<'a, Message>> {
    let form = match slot {
        Slot::Main => ctx.newsletter_main?,
        Slot::Footer => ctx.newsletter_footer?,
    };
    let copy = ctx.page.newsletter_copy(slot.is_footer())?;

    Some(
        Container::new(
            newsletter::view(newsletter::ViewContext { form, copy })
                .map(move |message| Message::Newsletter(slot, message)),
        )
        .padding([spacing::LG, 0.0])
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .into(),
    )
}

fn view_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding([spacing::LG, 0.0])
        .push(Text::new(ctx.page.brand.as_str()).size(typography::TITLE_MD));

    if let Some(form) = view_newsletter(ctx, Slot::Footer) {
        column = column.push(form);
    }

    column
        .push(Text::new(format!("© {}", ctx.page.brand)).size(typography::CAPTION))
        .into()
}

/// Floating call to action and promo card, bottom right.
fn view_corner_layer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let mut column = Column::new().spacing(spacing::SM).align_x(Horizontal::Right);
    let mut empty = true;

    let promo_copy = ctx.page.promo.as_ref();
    if let (Some(controller), Some(copy)) = (ctx.promo, promo_copy) {
        if controller.is_visible() {
            column = column.push(promo::view(promo::ViewContext { copy }).map(Message::Promo));
            empty = false;
        }
    }

    if let Some(cta) = ctx.page.floating_cta.as_ref() {
        if ctx.cta_enabled && ctx.scroll.cta_visible() {
            column = column.push(
                button(Text::new(cta.label.as_str()))
                    .on_press(Message::FloatingCtaPressed)
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::accent),
            );
            empty = false;
        }
    }

    if empty {
        return None;
    }

    Some(
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(spacing::LG)
            .into(),
    )
}
