// SPDX-License-Identifier: MPL-2.0
//! UI modules: the navbar, the page sections, and the decorative layer.

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod effects;
pub mod home;
pub mod navbar;
pub mod styles;
