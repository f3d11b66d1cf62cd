// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities backed by flat JSON
//! dictionaries, one per language. It handles language resolution, dictionary
//! loading, and runtime language switching.
//!
//! # Features
//!
//! - Language resolution from CLI or persisted config, with a fixed fallback
//! - Asynchronous loading of `<code>.json` dictionary files
//! - Runtime language switching (the last completed load wins)
//! - Fallback to the built-in default dictionary for missing keys

pub mod dictionary;
pub mod store;

pub use dictionary::Dictionary;
pub use store::{load_dictionary, resolve_language, DictionarySource, I18n, FALLBACK_LANGUAGE};
