// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! Wide windows show the section links inline. Below the mobile breakpoint
//! the links move into a menu opened by the hamburger button.

use crate::app::config::defaults::MOBILE_NAV_BREAKPOINT;
use crate::app::page::NavLink;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::page_layout::Section;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Mobile menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    menu_open: bool,
    narrow: bool,
}

impl State {
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Expanded state reported by the hamburger button.
    #[must_use]
    pub fn aria_expanded(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// Closes the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Tracks the window width; leaving the mobile layout closes the menu.
    pub fn set_width(&mut self, width: f32) {
        self.narrow = width < MOBILE_NAV_BREAKPOINT;
        if !self.narrow {
            self.menu_open = false;
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub brand: &'a str,
    pub links: &'a [NavLink],
    /// Keyboard focus is on the hamburger button.
    pub hamburger_focus: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    LinkPressed(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::LinkPressed(section) => {
            state.menu_open = false;
            Event::ScrollTo(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.state.narrow && ctx.state.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

/// Build the top bar with the brand and either inline links or the
/// hamburger button.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(Text::new(ctx.brand).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill));

    if ctx.state.narrow {
        let glyph = if ctx.state.menu_open { "✕" } else { "☰" };
        row = row.push(
            button(Text::new(glyph).size(typography::TITLE_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::with_focus(
                    styles::button::link,
                    ctx.hamburger_focus,
                )),
        );
    } else {
        for link in ctx.links {
            row = row.push(
                button(Text::new(link.label.as_str()))
                    .on_press(Message::LinkPressed(link.target))
                    .style(styles::button::link),
            );
        }
    }

    row.into()
}

/// Build the mobile menu listing every section link.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);
    for link in ctx.links {
        menu_column = menu_column.push(
            button(Text::new(link.label.as_str()))
                .on_press(Message::LinkPressed(link.target))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(menu_item_style),
        );
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}
