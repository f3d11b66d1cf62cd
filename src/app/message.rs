// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::i18n::Dictionary;
use crate::ui::contact;
use crate::ui::home;
use crate::ui::navbar;
use std::time::Instant;

use super::Section;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Contact(contact::Message),
    /// Make `section` the visible one and hide every other.
    ShowSection(Section),
    /// A dictionary load task finished. Overlapping loads are unordered; the
    /// last result processed wins.
    DictionaryLoaded {
        code: String,
        result: Result<Dictionary, Error>,
    },
    /// Periodic tick for animations and transient-effect cleanup.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language-code override (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional startup section, already validated against the section set.
    pub section: Option<Section>,
    /// Optional directory containing `<code>.json` dictionaries for custom
    /// builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `POPPO_LIVE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
