// SPDX-License-Identifier: MPL-2.0
//! The dictionary store: one language's flat key-to-text mapping.

use crate::error::Result;
use std::collections::HashMap;

/// A flat translation-key to display-text mapping for one language.
///
/// Dictionaries are decoded in full from a JSON object whose values must all
/// be strings. They are replaced wholesale when another language is loaded and
/// are never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Decodes a dictionary from JSON text.
    ///
    /// Nested objects, arrays, and non-string values are decode failures, not
    /// partially applied documents.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    /// Looks up the display text for a translation key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
