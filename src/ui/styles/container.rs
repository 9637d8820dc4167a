// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Generic panel surface used for the sidebar and the open mobile menu.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sticky top bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Alternating section band.
pub fn band(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}

/// Card surface faded by `alpha` (entrance animation).
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;
        let text = palette.background.base.text;
        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            text_color: Some(Color { a: alpha, ..text }),
            border: Border {
                color: Color {
                    a: alpha,
                    ..palette.background.strong.color
                },
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: if alpha >= opacity::OPAQUE {
                shadow::CARD
            } else {
                Shadow::default()
            },
            snap: true,
        }
    }
}

/// Floating promotional card.
pub fn promo(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette::SUNSET_500,
            width: 2.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::FLOATING,
        ..Default::default()
    }
}

/// Keyboard focus outline around an input.
pub fn focus_ring(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::SUNSET_400,
            width: 2.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Invalid input outline.
pub fn field_error(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
