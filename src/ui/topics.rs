// SPDX-License-Identifier: MPL-2.0
//! Tabbed travel-information sidebar.
//!
//! Topic buttons form a radio group; the panel shown is derived from the
//! active button. On narrow windows the sidebar title collapses the topic
//! list and choosing a topic scrolls its panel into view.

use crate::app::config::defaults::MOBILE_SIDEBAR_BREAKPOINT;
use crate::app::page::Topic;
use crate::domain::group::{ExclusiveGroup, GroupKey, KeyOutcome, NotAMember};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct TopicsState {
    group: ExclusiveGroup<usize>,
    has_title: bool,
    narrow: bool,
    list_expanded: bool,
}

impl TopicsState {
    /// Creates the sidebar with the first topic active and the list expanded.
    #[must_use]
    pub fn new(topic_count: usize, has_title: bool) -> Self {
        Self {
            group: ExclusiveGroup::with_active((0..topic_count).collect(), 0),
            has_title,
            narrow: false,
            list_expanded: true,
        }
    }

    /// Activates topic `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NotAMember`] when there is no such topic.
    pub fn activate(&mut self, index: usize) -> Result<usize, NotAMember> {
        self.group.activate(index)
    }

    pub fn handle_key(&mut self, key: GroupKey) -> KeyOutcome<usize> {
        self.group.handle_key(key)
    }

    pub fn blur(&mut self) {
        self.group.blur();
    }

    /// Tracks the window width. Wide windows always show the list.
    pub fn set_width(&mut self, width: f32) {
        self.narrow = width < MOBILE_SIDEBAR_BREAKPOINT;
        if !self.narrow {
            self.list_expanded = true;
        }
    }

    /// The title only acts as a toggle on narrow windows.
    pub fn toggle_list(&mut self) -> bool {
        if !(self.narrow && self.has_title) {
            return false;
        }
        self.list_expanded = !self.list_expanded;
        true
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.group.active()
    }

    #[must_use]
    pub fn panel_visible(&self, index: usize) -> bool {
        self.group.is_active(index)
    }

    #[must_use]
    pub fn aria_selected(&self, index: usize) -> bool {
        self.group.is_active(index)
    }

    /// Expanded state reported by the title.
    #[must_use]
    pub fn aria_expanded(&self) -> bool {
        self.list_expanded
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.group.focused()
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.group.active_count()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TopicPressed(usize),
    TitlePressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// A topic was activated; `reveal` asks the page to scroll to the panel.
    Activated { index: usize, reveal: bool },
}

pub fn update(state: &mut TopicsState, message: Message) -> Event {
    match message {
        Message::TopicPressed(index) => match state.activate(index) {
            Ok(index) => Event::Activated {
                index,
                reveal: state.narrow,
            },
            Err(error) => {
                tracing::debug!(%error, index, "sidebar topic");
                Event::None
            }
        },
        Message::TitlePressed => {
            state.toggle_list();
            Event::None
        }
    }
}

pub struct ViewContext<'a> {
    pub state: &'a TopicsState,
    pub topics: &'a [Topic],
    pub title: Option<&'a str>,
    pub has_focus: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let mut list = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(title) = ctx.title {
        let marker = match (state.narrow, state.list_expanded) {
            (false, _) => "",
            (true, true) => " ▾",
            (true, false) => " ▸",
        };
        let heading = Text::new(format!("{title}{marker}")).size(typography::TITLE_SM);
        let heading = button(heading).style(styles::button::link);
        let heading = if state.narrow {
            heading.on_press(Message::TitlePressed)
        } else {
            heading
        };
        list = list.push(heading);
    }

    if state.list_expanded {
        for (index, topic) in ctx.topics.iter().enumerate() {
            let base = if state.aria_selected(index) {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            let focused = ctx.has_focus && state.focused() == Some(index);
            list = list.push(
                button(Text::new(topic.label.as_str()))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM])
                    .on_press(Message::TopicPressed(index))
                    .style(styles::button::with_focus(base, focused)),
            );
        }
    }

    let panel: Element<'a, Message> = match state.active().and_then(|i| ctx.topics.get(i)) {
        Some(topic) => Column::new()
            .spacing(spacing::SM)
            .push(Text::new(topic.label.as_str()).size(typography::TITLE_MD))
            .push(Text::new(topic.body.as_str()).size(typography::BODY))
            .into(),
        None => Column::new().into(),
    };

    let sidebar = Container::new(list)
        .width(if state.narrow {
            Length::Fill
        } else {
            Length::Fixed(sizing::SIDEBAR_WIDTH)
        })
        .padding(spacing::SM)
        .style(styles::container::panel);
    let panel = Container::new(panel).width(Length::Fill).padding(spacing::MD);

    if state.narrow {
        Column::new()
            .spacing(spacing::MD)
            .push(sidebar)
            .push(panel)
            .into()
    } else {
        Row::new()
            .spacing(spacing::LG)
            .push(sidebar)
            .push(panel)
            .into()
    }
}
