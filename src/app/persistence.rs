// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module remembers the selected language across runs.

use crate::config;
use crate::i18n::{Dictionary, I18n};

/// Installs a freshly loaded dictionary and persists the selection.
///
/// Only called with a successfully loaded dictionary, so a failed load never
/// touches the persisted code. Guarded during tests to keep isolation: unit
/// tests exercise the install by calling it directly and assert on the store.
pub fn apply_language_change(i18n: &mut I18n, code: &str, dictionary: Dictionary) {
    i18n.install(code, dictionary);

    if cfg!(test) {
        return;
    }

    let (mut cfg, _) = config::load();
    cfg.general.language = Some(code.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }
}
