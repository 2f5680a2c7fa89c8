// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use crate::domain::Language;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Every message id the UI requires from each locale bundle.
///
/// Keeping the key set as a closed enum lets [`I18n::new`] verify at load
/// time that all four bundles are complete, so label lookups cannot miss
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    WindowTitle,
    SelectLanguage,
    LoadProducts,
    AddProduct,
    ColumnId,
    ColumnName,
    ColumnDescription,
    InstructionMessage,
    NoContent,
    NamePlaceholder,
    DescriptionPlaceholder,
    ProductAdded,
    FieldsRequired,
    ErrorStorageConnection,
    ErrorStorageStatement,
}

impl LabelKey {
    pub const ALL: [LabelKey; 15] = [
        LabelKey::WindowTitle,
        LabelKey::SelectLanguage,
        LabelKey::LoadProducts,
        LabelKey::AddProduct,
        LabelKey::ColumnId,
        LabelKey::ColumnName,
        LabelKey::ColumnDescription,
        LabelKey::InstructionMessage,
        LabelKey::NoContent,
        LabelKey::NamePlaceholder,
        LabelKey::DescriptionPlaceholder,
        LabelKey::ProductAdded,
        LabelKey::FieldsRequired,
        LabelKey::ErrorStorageConnection,
        LabelKey::ErrorStorageStatement,
    ];

    /// The Fluent message id backing this key.
    pub fn message_id(self) -> &'static str {
        match self {
            LabelKey::WindowTitle => "window-title",
            LabelKey::SelectLanguage => "select-language",
            LabelKey::LoadProducts => "load-products",
            LabelKey::AddProduct => "add-product",
            LabelKey::ColumnId => "col-id",
            LabelKey::ColumnName => "col-name",
            LabelKey::ColumnDescription => "col-description",
            LabelKey::InstructionMessage => "instruction-message",
            LabelKey::NoContent => "no-content",
            LabelKey::NamePlaceholder => "name-placeholder",
            LabelKey::DescriptionPlaceholder => "description-placeholder",
            LabelKey::ProductAdded => "product-added",
            LabelKey::FieldsRequired => "fields-required",
            LabelKey::ErrorStorageConnection => "error-storage-connection",
            LabelKey::ErrorStorageStatement => "error-storage-statement",
        }
    }
}

/// Locale bundles for the four supported languages plus the current
/// selection. Bundles are loaded once and never mutated afterwards.
pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads all locale bundles and resolves the startup language.
    ///
    /// Translations come from the embedded `assets/i18n/*.ftl` files, or
    /// from `i18n_dir` when set (custom builds and tests). The startup
    /// language is resolved from, in order: the CLI `--lang` flag, the
    /// config file, the OS locale, and finally English.
    ///
    /// # Panics
    ///
    /// Panics if a bundle fails to parse or is missing a required label.
    /// The bundles ship inside the binary, so both conditions are build
    /// defects rather than runtime conditions.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for language in Language::ALL {
            let filename = format!("{}.ftl", language.code());
            let source = load_ftl_source(i18n_dir.as_deref(), &filename)
                .unwrap_or_else(|| panic!("missing translation bundle {filename}"));

            let res = FluentResource::try_new(source)
                .unwrap_or_else(|_| panic!("failed to parse {filename}"));
            let mut bundle = FluentBundle::new(vec![language.locale()]);
            bundle
                .add_resource(res)
                .unwrap_or_else(|_| panic!("failed to add resource {filename}"));

            for key in LabelKey::ALL {
                assert!(
                    bundle.get_message(key.message_id()).is_some(),
                    "bundle {filename} is missing required message {}",
                    key.message_id()
                );
            }

            bundles.insert(language, bundle);
        }

        let current = resolve_language(cli_lang, config);

        Self { bundles, current }
    }

    /// The currently selected language.
    pub fn language(&self) -> Language {
        self.current
    }

    /// Switches the current language. Infallible: every `Language` has a
    /// validated bundle.
    pub fn set_language(&mut self, language: Language) {
        self.current = language;
    }

    /// Looks up a message id in the current language's bundle.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }

    /// Typed lookup for a required label. Cannot miss after load-time
    /// validation.
    pub fn label(&self, key: LabelKey) -> String {
        self.tr(key.message_id())
    }
}

/// Reads an `.ftl` file from the override directory when one is set,
/// otherwise from the embedded assets.
fn load_ftl_source(i18n_dir: Option<&str>, filename: &str) -> Option<String> {
    if let Some(dir) = i18n_dir {
        let path = Path::new(dir).join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return Some(content),
            Err(e) => {
                eprintln!(
                    "Warning: could not read {} ({}), using embedded bundle",
                    path.display(),
                    e
                );
            }
        }
    }

    Asset::get(filename)
        .map(|content| String::from_utf8_lossy(content.data.as_ref()).to_string())
}

/// Resolves the startup language: CLI flag, then config file, then OS
/// locale, then English. Codes outside the supported set are ignored at
/// each step rather than reported.
fn resolve_language(cli_lang: Option<String>, config: &Config) -> Language {
    if let Some(lang) = cli_lang.as_deref().and_then(Language::from_code) {
        return lang;
    }

    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(Language::from_code)
    {
        return lang;
    }

    if let Some(lang) = sys_locale::get_locale()
        .as_deref()
        .and_then(Language::from_code)
    {
        return lang;
    }

    Language::English
}
