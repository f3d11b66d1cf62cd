// SPDX-License-Identifier: MPL-2.0
//! `poppo_live` is the Enchanted Poppo Live promotional page as a desktop
//! application, built with the Iced GUI framework.
//!
//! It renders the page's mutually exclusive sections as screens, loads flat
//! JSON language dictionaries with a persisted selection, and layers the
//! page's decorative sparkle effects behind the content.

#![doc(html_root_url = "https://docs.rs/poppo_live/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
