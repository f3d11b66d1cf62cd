// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - The selected language
//! - `[effects]` - The decorative layer (sparkle/orb counts, on/off switch)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Use `load_with_override()`/`save_with_override()` with an explicit directory
//! 3. Pass `--config-dir` on the command line (set via [`init_cli_config_dir`])
//! 4. Set the `POPPO_LIVE_CONFIG_DIR` environment variable
//! 5. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use poppo_live::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Remember a language switch
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "PoppoLive";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "POPPO_LIVE_CONFIG_DIR";

/// Default number of ambient sparkles spawned at startup.
pub const DEFAULT_SPARKLE_COUNT: u32 = 40;

/// Default number of ambient magic orbs spawned at startup.
pub const DEFAULT_ORB_COUNT: u32 = 12;

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the `--config-dir` CLI override.
///
/// This should be called once at application startup, before any config
/// load/save without an explicit path.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_config_dir(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// The selected UI language code (e.g. "en", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Decorative-layer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EffectsConfig {
    /// Master switch for the decorative layer.
    #[serde(default = "default_effects_enabled")]
    pub enabled: bool,

    /// Number of ambient sparkles.
    #[serde(
        default = "default_sparkle_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub sparkle_count: Option<u32>,

    /// Number of ambient magic orbs.
    #[serde(default = "default_orb_count", skip_serializing_if = "Option::is_none")]
    pub orb_count: Option<u32>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sparkle_count: Some(DEFAULT_SPARKLE_COUNT),
            orb_count: Some(DEFAULT_ORB_COUNT),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Decorative-layer settings.
    #[serde(default)]
    pub effects: EffectsConfig,
}

fn default_effects_enabled() -> bool {
    true
}

fn default_sparkle_count() -> Option<u32> {
    Some(DEFAULT_SPARKLE_COUNT)
}

fn default_orb_count() -> Option<u32> {
    Some(DEFAULT_ORB_COUNT)
}

/// Returns the config directory with an optional override.
///
/// Resolution order: explicit override, `--config-dir`, `POPPO_LIVE_CONFIG_DIR`,
/// platform config directory.
fn get_config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    if let Some(dir) = get_cli_config_dir() {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(override_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning). If loading fails, returns
/// the default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(override_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(override_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {}", path.display(), error)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, override_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(override_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language, Some("fr".to_string()));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert!(config.effects.enabled);
        assert_eq!(config.effects.sparkle_count, Some(DEFAULT_SPARKLE_COUNT));
        assert_eq!(config.effects.orb_count, Some(DEFAULT_ORB_COUNT));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
            },
            effects: EffectsConfig {
                enabled: false,
                sparkle_count: Some(5),
                orb_count: Some(2),
            },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert!(!loaded.effects.enabled);
        assert_eq!(loaded.effects.sparkle_count, Some(5));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_config_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"es\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert_eq!(loaded.general.language, Some("es".to_string()));
        assert!(loaded.effects.enabled);
        assert_eq!(loaded.effects.sparkle_count, Some(DEFAULT_SPARKLE_COUNT));
    }

    #[test]
    fn multiple_isolated_config_tests_dont_interfere() {
        let temp_dir_a = tempdir().expect("create temp dir A");
        let config_a = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            ..Config::default()
        };
        save_with_override(&config_a, Some(temp_dir_a.path().to_path_buf()))
            .expect("save A should succeed");

        let temp_dir_b = tempdir().expect("create temp dir B");
        let config_b = Config {
            general: GeneralConfig {
                language: Some("es".to_string()),
            },
            ..Config::default()
        };
        save_with_override(&config_b, Some(temp_dir_b.path().to_path_buf()))
            .expect("save B should succeed");

        let (loaded_a, _) = load_with_override(Some(temp_dir_a.path().to_path_buf()));
        let (loaded_b, _) = load_with_override(Some(temp_dir_b.path().to_path_buf()));

        assert_eq!(loaded_a.general.language, Some("fr".to_string()));
        assert_eq!(loaded_b.general.language, Some("es".to_string()));
    }
}
