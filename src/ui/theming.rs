// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes for the landing page.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces
    pub page: Color,
    pub card: Color,
    pub band: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand
    pub brand: Color,
    pub accent: Color,

    // Semantic
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page: palette::SLATE_50,
            card: palette::WHITE,
            band: palette::SLATE_100,

            text_primary: palette::NAVY_900,
            text_secondary: palette::SLATE_500,

            brand: palette::SKY_500,
            accent: palette::SUNSET_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page: palette::NAVY_900,
            card: palette::NAVY_800,
            band: palette::SLATE_700,

            text_primary: palette::SLATE_50,
            text_secondary: palette::SLATE_300,

            brand: palette::SKY_300,
            accent: palette::SUNSET_400,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Scheme matching the effective mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Light unless the system explicitly reports dark.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_page() {
        let scheme = ColorScheme::light();
        assert!(scheme.page.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_page() {
        let scheme = ColorScheme::dark();
        assert!(scheme.page.r < 0.2);
    }

    #[test]
    fn brand_is_blue_in_both_schemes() {
        assert!(ColorScheme::light().brand.b > ColorScheme::light().brand.r);
        assert!(ColorScheme::dark().brand.b > ColorScheme::dark().brand.r);
    }

    #[test]
    fn explicit_modes_are_fixed() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_uses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"dark\"").expect("parse");
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
