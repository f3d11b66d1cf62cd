// SPDX-License-Identifier: MPL-2.0
use poppo_live::config::{self, Config, GeneralConfig};
use poppo_live::i18n::{self, DictionarySource, I18n, FALLBACK_LANGUAGE};
use tempfile::tempdir;

#[test]
fn test_language_resolution_follows_the_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_dir = dir.path().to_path_buf();

    // 1. Persist a French selection
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_with_override(&french_config, Some(config_dir.clone()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(config_dir.clone()));
    assert!(warning.is_none());

    let i18n = I18n::default();
    let resolved = i18n::resolve_language(
        None,
        loaded.general.language.as_deref(),
        i18n.available_codes(),
    );
    assert_eq!(resolved, "fr");

    // 2. A CLI override beats the persisted selection
    let resolved = i18n::resolve_language(
        Some("de".to_string()),
        loaded.general.language.as_deref(),
        i18n.available_codes(),
    );
    assert_eq!(resolved, "de");

    // 3. Nothing persisted resolves to the fallback
    let (empty, _) = config::load_with_override(Some(dir.path().join("missing")));
    let resolved = i18n::resolve_language(
        None,
        empty.general.language.as_deref(),
        i18n.available_codes(),
    );
    assert_eq!(resolved, FALLBACK_LANGUAGE);
}

#[test]
fn test_garbage_persisted_language_falls_back() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_dir = dir.path().to_path_buf();

    let config = Config {
        general: GeneralConfig {
            language: Some("definitely not a language code".to_string()),
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(config_dir.clone())).expect("Failed to write config");

    let (loaded, _) = config::load_with_override(Some(config_dir));
    let i18n = I18n::default();
    let resolved = i18n::resolve_language(
        None,
        loaded.general.language.as_deref(),
        i18n.available_codes(),
    );
    assert_eq!(resolved, FALLBACK_LANGUAGE);
}

#[tokio::test]
async fn test_language_switch_via_directory_dictionaries() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("fr.json"),
        r#"{"nav_home": "Accueil", "nav_contact": "Contact"}"#,
    )
    .expect("Failed to write fr dictionary");
    std::fs::write(dir.path().join("en.json"), r#"{"nav_home": "Home"}"#)
        .expect("Failed to write en dictionary");

    let source = DictionarySource::directory(dir.path());
    let mut i18n = I18n::new(&source);

    // Switch to French, then back to English; the later load wins.
    let french = i18n::load_dictionary(source.clone(), "fr".to_string())
        .await
        .expect("French dictionary should load");
    i18n.install("fr", french);
    assert_eq!(i18n.tr("nav_home"), "Accueil");

    let english = i18n::load_dictionary(source.clone(), "en".to_string())
        .await
        .expect("English dictionary should load");
    i18n.install("en", english);

    assert_eq!(i18n.active_code(), "en");
    assert_eq!(i18n.tr("nav_home"), "Home");

    // A failed load changes nothing.
    let missing = i18n::load_dictionary(source, "es".to_string()).await;
    assert!(missing.is_err());
    assert_eq!(i18n.active_code(), "en");
    assert_eq!(i18n.tr("nav_home"), "Home");
}
