// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Info card with the page's purple halo ("mystical shadow").
pub fn mystical_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::NIGHT_700
        })),
        border: Border {
            color: palette::SPELL_PURPLE,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MYSTICAL,
        ..Default::default()
    }
}

/// Translucent pane over the backdrop ("frosted glass").
pub fn frosted_glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// The top navigation bar surface.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.95,
            ..palette::NIGHT_700
        })),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// The dropdown pane under the navbar menu toggle.
pub fn menu_dropdown(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NIGHT_700)),
        border: Border {
            color: palette::NIGHT_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
