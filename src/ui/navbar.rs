// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! This module provides the brand text, the collapsible section menu, and the
//! language switcher. Choosing a section link collapses the menu.

use crate::app::Section;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, space::horizontal as horizontal_space, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// The currently visible section, highlighted in the menu.
    pub current: Section,
    /// Language codes a dictionary exists for, one switcher control each.
    pub languages: &'a [String],
    pub active_language: &'a str,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenSection(Section),
    SelectLanguage(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ShowSection(Section),
    SelectLanguage(String),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenSection(section) => {
            *menu_open = false;
            Event::ShowSection(section)
        }
        Message::SelectLanguage(code) => Event::SelectLanguage(code),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    // Dropdown menu (if open)
    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the top bar with the menu toggle, brand, and language switcher.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(Text::new("☰").size(typography::TITLE_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::menu_item);

    let brand = Text::new(ctx.i18n.tr("brand_title")).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(brand)
        .push(horizontal_space());

    for code in ctx.languages {
        let active = code == ctx.active_language;
        let control = button(Text::new(code.to_uppercase()).size(typography::CAPTION))
            .on_press(Message::SelectLanguage(code.clone()))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::language(active));
        row = row.push(control);
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::navbar)
        .into()
}

/// Build the dropdown menu with one link per section.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for section in Section::ALL {
        let selected = section == ctx.current;
        let label = Text::new(ctx.i18n.tr(section.nav_key())).size(typography::BODY);
        let item = button(label)
            .on_press(Message::OpenSection(section))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::button::nav_link(selected));
        menu_column = menu_column.push(item);
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(styles::container::menu_dropdown)
        .into()
}
