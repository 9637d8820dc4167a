// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn is_light(theme: &Theme) -> bool {
    matches!(theme, Theme::Light)
}

fn filled(background: Color, border: Color, raised: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: if raised { shadow::CARD } else { Shadow::default() },
        snap: true,
    }
}

/// Primary action (search, subscribe).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::SKY_500, palette::SKY_700, false)
        }
        button::Status::Hovered => filled(palette::SKY_700, palette::SKY_700, true),
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Accent action: floating call-to-action and deal buttons.
pub fn accent(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            border: Border {
                color: palette::SUNSET_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::FLOATING,
            ..filled(palette::SUNSET_500, palette::SUNSET_500, true)
        },
        button::Status::Hovered => button::Style {
            border: Border {
                color: palette::SUNSET_400,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::FLOATING,
            ..filled(palette::SUNSET_400, palette::SUNSET_400, true)
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Grayed out, non-interactive button (submitting, confirming).
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status: button::Status| disabled_style(theme)
}

fn disabled_style(theme: &Theme) -> button::Style {
    let background = if is_light(theme) {
        palette::SLATE_100
    } else {
        palette::SLATE_700
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color {
            a: opacity::DISABLED,
            ..palette::SLATE_500
        },
        border: Border {
            color: palette::SLATE_300,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Active member of a toggle group (trip type, sidebar topic).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::SKY_500, palette::SKY_700, true)
        }
        button::Status::Hovered => filled(palette::SKY_700, palette::SKY_700, true),
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Inactive member of a toggle group.
/// Adapts to light/dark theme while maintaining consistency.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let (bg_color, text_color) = if is_light(theme) {
        (palette::WHITE, palette::NAVY_900)
    } else {
        (palette::NAVY_800, palette::SLATE_50)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::SLATE_300,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::SKY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::CARD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Borderless text button for navigation links and accordion headers.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        button::Status::Disabled => palette.background.weak.text,
        button::Status::Active => palette.background.base.text,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Wraps `base` with a focus ring when `focused` is set.
///
/// Keyboard focus is application state, so the ring is drawn by style
/// rather than by the widget.
pub fn with_focus(
    base: fn(&Theme, button::Status) -> button::Style,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let style = base(theme, status);
        if focused {
            button::Style {
                border: Border {
                    color: palette::SUNSET_400,
                    width: 2.0,
                    ..style.border
                },
                ..style
            }
        } else {
            style
        }
    }
}
