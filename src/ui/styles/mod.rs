// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page's visual "classes".

pub mod button;
pub mod container;
