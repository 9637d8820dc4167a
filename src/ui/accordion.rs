// SPDX-License-Identifier: MPL-2.0
//! Frequently asked questions.
//!
//! Each FAQ group is its own accordion container: opening a question closes
//! the other questions of that group only.

use crate::app::page::FaqGroup;
use crate::domain::accordion::{Accordion, Expansion};
use crate::domain::group::NotAMember;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::page_layout::{FAQ_ANSWER_HEIGHT, FAQ_GROUP_TITLE_HEIGHT, FAQ_HEADER_HEIGHT};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Position of a question on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderId {
    pub container: usize,
    pub item: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FaqState {
    accordion: Accordion<HeaderId>,
}

impl FaqState {
    /// One container per group, every question collapsed.
    #[must_use]
    pub fn new(groups: &[FaqGroup]) -> Self {
        let mut accordion = Accordion::new();
        for (container, group) in groups.iter().enumerate() {
            accordion.add_container(
                (0..group.items.len())
                    .map(|item| HeaderId { container, item })
                    .collect(),
            );
        }
        Self { accordion }
    }

    /// Toggles a question.
    ///
    /// # Errors
    ///
    /// Returns [`NotAMember`] for a header that does not exist.
    pub fn toggle(&mut self, header: HeaderId) -> Result<Expansion, NotAMember> {
        self.accordion.activate(header)
    }

    /// Enter/Space on the focused question.
    pub fn activate_focused(&mut self) -> Option<(HeaderId, Expansion)> {
        self.accordion.activate_focused()
    }

    pub fn blur(&mut self) {
        self.accordion.blur();
    }

    #[must_use]
    pub fn aria_expanded(&self, header: HeaderId) -> bool {
        self.accordion.is_expanded(header)
    }

    #[must_use]
    pub fn focused(&self) -> Option<HeaderId> {
        self.accordion.focused()
    }

    /// Number of open answers across every group.
    #[must_use]
    pub fn open_total(&self) -> usize {
        (0..self.accordion.container_count())
            .map(|index| self.accordion.open_count(index))
            .sum()
    }

    #[must_use]
    pub fn open_count(&self, container: usize) -> usize {
        self.accordion.open_count(container)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle(HeaderId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The open answers changed, so the section height changed too.
    Resized,
}

pub fn update(state: &mut FaqState, message: Message) -> Event {
    match message {
        Message::Toggle(header) => match state.toggle(header) {
            Ok(_) => Event::Resized,
            Err(error) => {
                tracing::debug!(%error, ?header, "faq header");
                Event::None
            }
        },
    }
}

pub struct ViewContext<'a> {
    pub state: &'a FaqState,
    pub groups: &'a [FaqGroup],
    pub has_focus: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().width(Length::Fill);

    for (container, group) in ctx.groups.iter().enumerate() {
        column = column.push(
            Container::new(Text::new(group.title.as_str()).size(typography::TITLE_SM))
                .height(Length::Fixed(FAQ_GROUP_TITLE_HEIGHT)),
        );

        for (item, faq) in group.items.iter().enumerate() {
            let header = HeaderId { container, item };
            let expanded = ctx.state.aria_expanded(header);
            let focused = ctx.has_focus && ctx.state.focused() == Some(header);

            let label = Row::new()
                .push(Text::new(faq.question.as_str()).size(typography::BODY_LG))
                .push(Space::new().width(Length::Fill))
                .push(Text::new(if expanded { "−" } else { "+" }));

            column = column.push(
                button(label)
                    .width(Length::Fill)
                    .height(Length::Fixed(FAQ_HEADER_HEIGHT))
                    .padding([spacing::XS, spacing::SM])
                    .on_press(Message::Toggle(header))
                    .style(styles::button::with_focus(styles::button::link, focused)),
            );

            if expanded {
                column = column.push(
                    Container::new(Text::new(faq.answer.as_str()).size(typography::BODY))
                        .height(Length::Fixed(FAQ_ANSWER_HEIGHT))
                        .padding([spacing::XXS, spacing::SM]),
                );
            }
        }
    }

    column.into()
}
