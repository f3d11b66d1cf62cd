// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar, the single visible section, and the decorative
//! backdrop underneath it all.

use super::{App, Message, Section};
use crate::ui::design_tokens::spacing;
use crate::ui::effects::backdrop;
use crate::ui::{about, contact, home, navbar};
use iced::widget::{Column, Container, Id, Scrollable};
use iced::{Element, Length};

/// Id of the shared section scrollable, snapped back to the top on every
/// section switch.
pub(super) const SECTION_SCROLLABLE_ID: &str = "page-sections";

impl App {
    pub(super) fn render(&self) -> Element<'_, Message> {
        let navbar_view = navbar::view(navbar::ViewContext {
            i18n: &self.i18n,
            menu_open: self.menu_open,
            current: self.section,
            languages: self.i18n.available_codes(),
            active_language: self.i18n.active_code(),
        })
        .map(Message::Navbar);

        let section_view: Element<'_, Message> = match self.section {
            Section::Home => home::view(home::ViewContext { i18n: &self.i18n }).map(Message::Home),
            Section::AboutPoppo => about::view(about::ViewContext { i18n: &self.i18n }),
            Section::Contact => contact::view(contact::ViewContext {
                i18n: &self.i18n,
                state: &self.contact,
            })
            .map(Message::Contact),
        };

        let sections = Scrollable::new(
            Container::new(section_view)
                .width(Length::Fill)
                .padding(spacing::LG),
        )
        .id(Id::new(SECTION_SCROLLABLE_ID))
        .height(Length::Fill);

        let page = Column::new().push(navbar_view).push(sections);

        backdrop::wrap(
            &self.effects,
            self.last_tick,
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        )
    }
}
