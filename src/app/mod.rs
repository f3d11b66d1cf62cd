// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sections, the
//! localization store, and the decorative layer.
//!
//! The `App` struct wires the domains together and translates messages into
//! side effects like dictionary loads or config persistence. Policy decisions
//! (startup language resolution, last-write-wins installs, scroll restore on
//! section switches) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod persistence;
mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use section::Section;

use crate::config;
use crate::i18n::{self, DictionarySource, I18n};
use crate::ui::contact;
use crate::ui::effects::EffectsState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 540;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state bridging the navbar, the sections, the
/// localization store, and the decorative layer.
pub struct App {
    pub i18n: I18n,
    /// Where dictionary load tasks read from.
    source: DictionarySource,
    /// The single visible section.
    section: Section,
    /// Whether the collapsible navigation menu is open.
    menu_open: bool,
    /// The decorative layer, populated once at startup.
    effects: EffectsState,
    /// Contact section state (the copied confirmation).
    contact: contact::State,
    /// Timestamp of the last animation tick, driving the backdrop.
    last_tick: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("section", &self.section)
            .field("language", &self.i18n.active_code())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    config::init_cli_config_dir(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the initial dictionary
    /// load. Every decorative initializer runs here, exactly once.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            eprintln!("Config warning: {}", warning);
        }

        let source = flags
            .i18n_dir
            .map(DictionarySource::directory)
            .unwrap_or_default();
        let i18n = I18n::new(&source);
        let startup_code = i18n::resolve_language(
            flags.lang,
            config.general.language.as_deref(),
            i18n.available_codes(),
        );

        let effects = EffectsState::init(&config.effects, &mut rand::rng());

        let app = App {
            i18n,
            source,
            section: flags.section.unwrap_or(Section::Home),
            menu_open: false,
            effects,
            contact: contact::State::default(),
            last_tick: Instant::now(),
        };
        let task = app.load_language(startup_code);

        (app, task)
    }

    /// Spawns the asynchronous load for `code`. The result message carries the
    /// code so overlapping switches stay attributable.
    fn load_language(&self, code: String) -> Task<Message> {
        let source = self.source.clone();
        Task::perform(
            async move {
                let result = i18n::load_dictionary(source, code.clone()).await;
                (code, result)
            },
            |(code, result)| Message::DictionaryLoaded { code, result },
        )
    }

    /// Whether `section` is the visible one.
    pub fn is_visible(&self, section: Section) -> bool {
        self.section == section
    }

    fn title(&self) -> String {
        self.i18n.tr("brand_title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.handle_message(message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.render()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.effects.is_animating() || self.contact.is_copied(),
        )
    }
}
