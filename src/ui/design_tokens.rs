// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the enchanted page.
//!
//! ## Organization
//!
//! - **Palette**: base and brand colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Night surface scale (the page's deep-navy header family)
    pub const NIGHT_900: Color = Color::from_rgb8(8, 24, 48);
    pub const NIGHT_700: Color = Color::from_rgb8(15, 44, 82);
    pub const NIGHT_500: Color = Color::from_rgb8(26, 62, 110);

    // Brand colors, as the page names them
    pub const SPELL_PURPLE: Color = Color::from_rgb8(155, 89, 217);
    pub const FAIRY_PINK: Color = Color::from_rgb8(255, 128, 191);
    pub const WIZARD_BLUE: Color = Color::from_rgb8(77, 148, 255);
    pub const UNICORN_TEAL: Color = Color::from_rgb8(64, 224, 208);
    pub const ENCHANTED_GOLD: Color = Color::from_rgb8(255, 200, 87);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - semi-transparent panels and cards
    pub const SURFACE: f32 = 0.92;
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
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of info cards on the home and about sections
    pub const CARD_WIDTH: f32 = 260.0;

    /// Width of the Live-ID copy card
    pub const COPY_CARD_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading
    pub const TITLE_XL: f32 = 40.0;

    /// Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Brand text, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Card headers
    pub const TITLE_SM: f32 = 18.0;

    /// Emphasis text, the Live ID digits
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Hints, footer text
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// The purple-tinted halo the page calls a mystical shadow.
    pub const MYSTICAL: Shadow = Shadow {
        color: Color {
            a: 0.6,
            ..palette::SPELL_PURPLE
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 16.0,
    };

    /// Golden glow for fancy buttons under the cursor.
    pub const GLOW: Shadow = Shadow {
        color: Color {
            a: 0.8,
            ..palette::ENCHANTED_GOLD
        },
        offset: Vector { x: 0.0, y: 0.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::SPELL_PURPLE.r >= 0.0 && palette::SPELL_PURPLE.r <= 1.0);
};
