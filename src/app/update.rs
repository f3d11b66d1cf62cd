// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Section switching and language switching both live here, close to the main
//! update loop, so the user-facing policy (scroll restore, menu collapse,
//! last-write-wins installs) is easy to audit.

use super::{persistence, view, App, Message, Section};
use crate::ui::{contact, home, navbar};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

impl App {
    pub(super) fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message, &mut self.menu_open) {
                navbar::Event::None => Task::none(),
                navbar::Event::ShowSection(section) => self.show_section(section),
                navbar::Event::SelectLanguage(code) => self.load_language(code),
            },
            Message::Home(message) => match home::update(&message) {
                home::Event::SparkleBurst { anchor } => {
                    self.effects
                        .spawn_hover_burst(&mut rand::rng(), anchor, Instant::now());
                    Task::none()
                }
                home::Event::Activate { target, anchor } => {
                    self.effects.spawn_press_ripple(anchor, Instant::now());
                    self.show_section(target)
                }
            },
            Message::Contact(message) => match contact::update(&message) {
                contact::Event::CopyLiveId => {
                    self.contact.mark_copied(Instant::now());
                    iced::clipboard::write(contact::LIVE_ID.to_string())
                }
            },
            Message::ShowSection(section) => self.show_section(section),
            Message::DictionaryLoaded { code, result } => {
                match result {
                    Ok(dictionary) => {
                        persistence::apply_language_change(&mut self.i18n, &code, dictionary);
                    }
                    Err(error) => {
                        eprintln!("Error loading language file: {}", error);
                    }
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.last_tick = now;
                self.effects.prune(now);
                self.contact.tick(now);
                Task::none()
            }
        }
    }

    /// Makes `section` the visible one, scrolls back to the top, and collapses
    /// an open navigation menu.
    fn show_section(&mut self, section: Section) -> Task<Message> {
        self.section = section;
        self.menu_open = false;
        operation::snap_to(
            Id::new(view::SECTION_SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        )
    }
}
