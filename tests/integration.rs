// SPDX-License-Identifier: MPL-2.0
use polyglot_shelf::app::config::{self, Config};
use polyglot_shelf::app::paths;
use polyglot_shelf::domain::Language;
use polyglot_shelf::i18n::{I18n, LabelKey};
use tempfile::tempdir;

#[test]
fn save_language_persists_the_choice() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::env::set_var(paths::ENV_CONFIG_DIR, dir.path());

    config::save_language("fr").expect("Failed to save language");

    let (config, warning) = config::load();
    assert_eq!(warning, None);
    assert_eq!(config.general.language.as_deref(), Some("fr"));

    // A second save overwrites the language but nothing else.
    config::save_language("de").expect("Failed to save language again");
    let (config, _) = config::load();
    assert_eq!(config.general.language.as_deref(), Some("de"));

    std::env::remove_var(paths::ENV_CONFIG_DIR);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.language(), Language::English);

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.language(), Language::French);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn every_language_resolves_a_complete_label_set() {
    for language in Language::ALL {
        let mut i18n = I18n::new(Some(language.code().to_string()), None, &Config::default());
        assert_eq!(i18n.language(), language);

        i18n.set_language(language);
        for key in LabelKey::ALL {
            let value = i18n.label(key);
            assert!(
                !value.is_empty() && !value.starts_with("MISSING:"),
                "{language:?} is missing {key:?}"
            );
        }
    }
}

#[test]
fn i18n_dir_override_loads_custom_bundles() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // Only override English; the other three fall back to the embedded
    // bundles and must still pass load-time validation.
    let custom = "window-title = Custom Title\n\
        select-language = Select language\n\
        load-products = Load products\n\
        add-product = Add product\n\
        col-id = ID\n\
        col-name = Name\n\
        col-description = Description\n\
        instruction-message = Pick a language.\n\
        no-content = No content available.\n\
        name-placeholder = Product name\n\
        description-placeholder = Product description\n\
        product-added = Product added.\n\
        fields-required = Both fields are required.\n\
        error-storage-connection = Database unreachable.\n\
        error-storage-statement = Database rejected the request.\n";
    std::fs::write(dir.path().join("en.ftl"), custom).expect("write override bundle");

    let i18n = I18n::new(
        Some("en".to_string()),
        Some(dir.path().to_string_lossy().into_owned()),
        &Config::default(),
    );
    assert_eq!(i18n.label(LabelKey::WindowTitle), "Custom Title");
}
