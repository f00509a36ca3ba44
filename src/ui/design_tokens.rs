// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and type token used by the card screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use parallax_card::ui::design_tokens::{palette, spacing};

let background = palette::NIGHT_900;
let padding = spacing::LG; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Screen background.
    pub const NIGHT_900: Color = Color::from_rgb(0.11, 0.11, 0.15);
    /// Button label on white pills.
    pub const INK_900: Color = Color::from_rgb(0.06, 0.07, 0.09);
    /// Share text.
    pub const MIST_100: Color = Color::from_rgb(0.94, 0.95, 0.96);
    /// "Or" divider lines.
    pub const SLATE_300: Color = Color::from_rgb(0.76, 0.76, 0.78);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and toasts
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of both pill buttons.
    pub const PILL_HEIGHT: f32 = 40.0;
    /// Avatar diameter on the card.
    pub const AVATAR: f32 = 40.0;
    /// Gap between the card top and the avatar.
    pub const AVATAR_TOP: f32 = 92.0;
    /// Width of the "Or" label between divider lines.
    pub const DIVIDER_LABEL_WIDTH: f32 = 34.0;
    pub const ICON_SM: f32 = 16.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Smallest window that shows the whole layout.
    pub const WINDOW_MIN_WIDTH: f32 = 360.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 820.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Card heading.
    pub const TITLE: f32 = 24.0;
    /// Share text and button labels.
    pub const BODY: f32 = 14.0;
    /// Card body and the debug readout.
    pub const CAPTION: f32 = 12.0;
    /// Extra line gap used by the multi-line card and share texts.
    pub const LINE_SPACING: f32 = 8.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Avatar ring, outlined pill, divider lines.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn background_is_darker_than_text() {
        assert!(palette::NIGHT_900.r < palette::MIST_100.r);
        assert!(palette::NIGHT_900.b < palette::SLATE_300.b);
    }
}
