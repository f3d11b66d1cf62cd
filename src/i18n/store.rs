// SPDX-License-Identifier: MPL-2.0
use crate::error::{Error, Result};
use crate::i18n::Dictionary;
use rust_embed::RustEmbed;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// The language applied when no valid selection is available.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Where dictionary files are read from.
///
/// Dictionaries are bundled into the binary by default; `--i18n-dir` swaps the
/// source to a directory with the same `<code>.json` layout for custom builds
/// and translation work.
#[derive(Debug, Clone, Default)]
pub enum DictionarySource {
    #[default]
    Bundled,
    Directory(PathBuf),
}

impl DictionarySource {
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self::Directory(dir.into())
    }
}

/// The localization store.
///
/// Holds the built-in fallback dictionary, the currently installed dictionary
/// (if any), and the list of language codes a dictionary exists for. Exactly
/// one language is active at any time.
pub struct I18n {
    fallback: Dictionary,
    active_code: String,
    active: Option<Dictionary>,
    available: Vec<String>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(&DictionarySource::Bundled)
    }
}

impl I18n {
    /// Builds the store, loading the bundled fallback dictionary and
    /// enumerating the language codes available from `source`.
    pub fn new(source: &DictionarySource) -> Self {
        let fallback_file = format!("{}.json", FALLBACK_LANGUAGE);
        let content = Asset::get(&fallback_file).expect("Missing bundled fallback dictionary.");
        let fallback = Dictionary::from_json(&String::from_utf8_lossy(content.data.as_ref()))
            .expect("Failed to parse bundled fallback dictionary.");

        let mut available = match source {
            DictionarySource::Bundled => Asset::iter()
                .filter_map(|file| parse_code(file.as_ref()))
                .collect::<Vec<_>>(),
            DictionarySource::Directory(dir) => list_directory_codes(dir),
        };
        available.sort();
        available.dedup();

        Self {
            fallback,
            active_code: FALLBACK_LANGUAGE.to_string(),
            active: None,
            available,
        }
    }

    /// Language codes a dictionary exists for, sorted.
    pub fn available_codes(&self) -> &[String] {
        &self.available
    }

    /// The code of the currently active language.
    pub fn active_code(&self) -> &str {
        &self.active_code
    }

    /// Installs a freshly loaded dictionary, discarding the previous one.
    pub fn install(&mut self, code: &str, dictionary: Dictionary) {
        self.active_code = code.to_string();
        self.active = Some(dictionary);
    }

    /// Resolves a translation key to display text.
    ///
    /// Keys absent from the active dictionary keep the fallback text, so a
    /// partial dictionary leaves the remaining strings untouched.
    pub fn tr(&self, key: &str) -> String {
        if let Some(active) = &self.active {
            if let Some(value) = active.get(key) {
                return value.to_string();
            }
        }
        if let Some(value) = self.fallback.get(key) {
            return value.to_string();
        }
        format!("MISSING: {}", key)
    }
}

/// Extracts a valid language code from a `<code>.json` file name.
fn parse_code(filename: &str) -> Option<String> {
    let code = filename.strip_suffix(".json")?;
    code.parse::<LanguageIdentifier>().ok()?;
    Some(code.to_string())
}

fn list_directory_codes(dir: &std::path::Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| {
            let name = entry.ok()?.file_name();
            parse_code(name.to_str()?)
        })
        .collect()
}

/// Picks the language to apply on startup.
///
/// Precedence: CLI argument, then the persisted selection, then
/// [`FALLBACK_LANGUAGE`]. A candidate that is not a well-formed language code,
/// or that no dictionary exists for, falls through to the next step.
pub fn resolve_language(
    cli_lang: Option<String>,
    persisted: Option<&str>,
    available: &[String],
) -> String {
    let candidates = [cli_lang.as_deref(), persisted];
    for candidate in candidates.into_iter().flatten() {
        if candidate.parse::<LanguageIdentifier>().is_ok()
            && available.iter().any(|code| code == candidate)
        {
            return candidate.to_string();
        }
    }
    FALLBACK_LANGUAGE.to_string()
}

/// Loads the dictionary for `code` from `source`.
///
/// This is the asynchronous half of a language switch: the caller installs the
/// result only when the load task completes, so a failed load leaves the
/// current dictionary and the persisted selection untouched.
pub async fn load_dictionary(source: DictionarySource, code: String) -> Result<Dictionary> {
    match source {
        DictionarySource::Bundled => {
            let file = format!("{}.json", code);
            let content = Asset::get(&file).ok_or_else(|| {
                Error::Dictionary(format!("no bundled dictionary for language '{}'", code))
            })?;
            Dictionary::from_json(&String::from_utf8_lossy(content.data.as_ref()))
        }
        DictionarySource::Directory(dir) => {
            let path = dir.join(format!("{}.json", code));
            let content = tokio::fs::read_to_string(&path).await?;
            Dictionary::from_json(&content)
        }
    }
}
