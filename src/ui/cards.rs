// SPDX-License-Identifier: MPL-2.0
//! Card grids: popular flights, offers and testimonials.
//!
//! Every card plays the entrance animation, so each one is drawn with the
//! [`RevealAppearance`] of its block. Flight cards also carry a call to
//! action that pre-fills the search form.

use crate::app::page::{FlightCard, Offer, Testimonial};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::page_layout::{FLIGHT_CARD_HEIGHT, GRID_GAP, OFFER_CARD_HEIGHT, TESTIMONIAL_HEIGHT};
use crate::ui::scroll::RevealAppearance;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// Call to action of flight card `index`.
    Select(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Prefill { from: String, to: String },
}

pub fn update(cards: &[FlightCard], message: Message) -> Event {
    match message {
        Message::Select(index) => match cards.get(index) {
            Some(card) => Event::Prefill {
                from: card.from.clone(),
                to: card.to.clone(),
            },
            None => {
                tracing::debug!(index, "unknown flight card");
                Event::None
            }
        },
    }
}

/// Arranges `cells` in rows of `columns`.
pub fn grid<'a, M: 'a>(cells: Vec<Element<'a, M>>, columns: usize) -> Element<'a, M> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(GRID_GAP);
    let mut cells = cells.into_iter().peekable();

    while cells.peek().is_some() {
        let mut row = Row::new().spacing(GRID_GAP);
        for slot in 0..columns {
            match cells.next() {
                Some(cell) => row = row.push(cell),
                // Keep the last row aligned with the ones above
                None if slot > 0 => row = row.push(Space::new().width(Length::Fill)),
                None => break,
            }
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn revealed<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    height: f32,
    appearance: RevealAppearance,
) -> Element<'a, M> {
    let card = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height - appearance.translate))
        .padding(spacing::MD)
        .style(styles::container::card(appearance.alpha));

    // Translation is drawn as space above the card inside a fixed cell
    Column::new()
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .push(Space::new().height(Length::Fixed(appearance.translate)))
        .push(card)
        .into()
}

pub fn flight_card(
    index: usize,
    card: &FlightCard,
    appearance: RevealAppearance,
) -> Element<'_, Message> {
    let route = Row::new()
        .spacing(spacing::XS)
        .push(Text::new(card.from.as_str()).size(typography::TITLE_SM))
        .push(Text::new("→"))
        .push(Text::new(card.to.as_str()).size(typography::TITLE_SM));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(route)
        .push(Text::new(card.airline.as_str()).size(typography::CAPTION))
        .push(Text::new(format!("from {}", card.price)).size(typography::TITLE_MD))
        .push(
            button(Text::new("Book Now"))
                .on_press(Message::Select(index))
                .style(styles::button::accent),
        );

    revealed(content, FLIGHT_CARD_HEIGHT, appearance)
}

pub fn offer_card<'a, M: 'a>(offer: &'a Offer, appearance: RevealAppearance) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(offer.title.as_str()).size(typography::TITLE_SM))
        .push(Text::new(offer.body.as_str()).size(typography::BODY));

    revealed(content, OFFER_CARD_HEIGHT, appearance)
}

pub fn testimonial_card<'a, M: 'a>(
    testimonial: &'a Testimonial,
    appearance: RevealAppearance,
) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(format!("“{}”", testimonial.quote)).size(typography::BODY))
        .push(Text::new(testimonial.author.as_str()).size(typography::CAPTION));

    revealed(content, TESTIMONIAL_HEIGHT, appearance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<FlightCard> {
        vec![FlightCard {
            from: "Miami".into(),
            to: "Cancun".into(),
            price: "$219".into(),
            airline: "Sunline".into(),
        }]
    }

    #[test]
    fn select_prefills_route() {
        assert_eq!(
            update(&cards(), Message::Select(0)),
            Event::Prefill {
                from: "Miami".into(),
                to: "Cancun".into()
            }
        );
    }

    #[test]
    fn unknown_card_is_ignored() {
        assert_eq!(update(&cards(), Message::Select(3)), Event::None);
    }
}
