// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by every landing-page section.

## Organization

- **Palette**: Sky blues, sunset accent and neutrals
- **Opacity**: Overlay and disabled-state levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Control and section sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Card and floating element shadows

## Examples

```
use skyway::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::NAVY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals
    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;
    pub const SLATE_50: Color = Color::from_rgb(0.97, 0.98, 0.99);
    pub const SLATE_100: Color = Color::from_rgb(0.93, 0.95, 0.97);
    pub const SLATE_300: Color = Color::from_rgb(0.80, 0.84, 0.88);
    pub const SLATE_500: Color = Color::from_rgb(0.39, 0.45, 0.55);
    pub const SLATE_700: Color = Color::from_rgb(0.20, 0.25, 0.33);
    pub const NAVY_800: Color = Color::from_rgb(0.09, 0.13, 0.22);
    pub const NAVY_900: Color = Color::from_rgb(0.06, 0.09, 0.16);

    // Brand (sky blue scale)
    pub const SKY_300: Color = Color::from_rgb(0.49, 0.78, 0.98);
    pub const SKY_500: Color = Color::from_rgb(0.05, 0.55, 0.91);
    pub const SKY_700: Color = Color::from_rgb(0.01, 0.41, 0.70);

    // Accent (sunset orange), used by the floating call-to-action and deals
    pub const SUNSET_400: Color = Color::from_rgb(0.98, 0.57, 0.24);
    pub const SUNSET_500: Color = Color::from_rgb(0.98, 0.45, 0.09);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.94, 0.27, 0.27);
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.62, 0.04);
    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Disabled controls and submitting buttons.
    pub const DISABLED: f32 = 0.5;
    /// Backdrop behind the open mobile menu.
    pub const SCRIM: f32 = 0.6;
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    pub const SIDEBAR_WIDTH: f32 = 260.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const PROMO_WIDTH: f32 = 340.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline
    pub const DISPLAY: f32 = 40.0;

    /// Section headings
    pub const TITLE_LG: f32 = 28.0;

    /// Card titles, brand name
    pub const TITLE_MD: f32 = 20.0;

    pub const TITLE_SM: f32 = 17.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Field errors, badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.25,
    };

    pub const CARD: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };

    pub const FLOATING: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 18.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DISABLED > 0.0 && opacity::DISABLED < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
