// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// The page's fancy call-to-action button: gold pill, glowing under the cursor.
pub fn fancy(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ENCHANTED_GOLD)),
            text_color: palette::NIGHT_900,
            border: Border {
                color: palette::FAIRY_PINK,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::GLOW,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::FAIRY_PINK)),
            text_color: palette::NIGHT_900,
            border: Border {
                color: palette::ENCHANTED_GOLD,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::SPELL_PURPLE)),
            text_color: WHITE,
            border: Border {
                color: palette::ENCHANTED_GOLD,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Navigation link. Hover brightens into the brand teal.
pub fn nav_link(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if selected {
            palette::ENCHANTED_GOLD
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => palette::UNICORN_TEAL,
                _ => WHITE,
            }
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Language switcher control. The active code stays highlighted.
pub fn language(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if active {
            (palette::ENCHANTED_GOLD, palette::NIGHT_900)
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => {
                    (palette::NIGHT_500, palette::ENCHANTED_GOLD)
                }
                _ => (palette::NIGHT_500, WHITE),
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: palette::ENCHANTED_GOLD,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Item inside the collapsible navigation menu.
pub fn menu_item(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::NIGHT_500)),
            text_color: palette::UNICORN_TEAL,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::SPELL_PURPLE)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: WHITE,
            border: Border::default(),
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// The Live-ID copy card. Flips to a success border while the copied
/// confirmation is showing.
pub fn copy_card(copied: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = if copied {
            palette::SUCCESS_500
        } else {
            palette::WIZARD_BLUE
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette::NIGHT_500,
            _ => Color {
                a: 0.85,
                ..palette::NIGHT_700
            },
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: if copied { shadow::GLOW } else { shadow::MYSTICAL },
            snap: true,
        }
    }
}
