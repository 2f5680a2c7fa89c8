// SPDX-License-Identifier: MPL-2.0
//! The closed set of display languages and their storage routing.
//!
//! Each language maps 1:1 to a two-letter code, a Fluent locale, and the
//! name of the product table backing it. Table names exist only here: they
//! are derived from this enum and never from free-form input, which is what
//! keeps the unparameterized table position in the SQL statements safe.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// One of the four supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    German,
}

impl Language {
    /// Every supported language, in selector display order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::German,
    ];

    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::German => "de",
        }
    }

    /// English display name, as shown in the language selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
        }
    }

    /// Name of the product table backing this language.
    ///
    /// Always `product_<code>`. This is the only place a table name is
    /// produced, so the value space stays statically enumerable.
    pub fn table_name(self) -> &'static str {
        match self {
            Language::English => "product_en",
            Language::French => "product_fr",
            Language::Spanish => "product_es",
            Language::German => "product_de",
        }
    }

    /// Resolves a display name to a language.
    ///
    /// Unknown names fall back to English rather than failing; language
    /// resolution never signals an error.
    pub fn from_name(name: &str) -> Language {
        match name {
            "French" => Language::French,
            "Spanish" => Language::Spanish,
            "German" => Language::German,
            _ => Language::English,
        }
    }

    /// Resolves a BCP-47 style code (`fr`, `en-US`, ...) to a language.
    ///
    /// Used for startup resolution from CLI flags, config, or the OS
    /// locale. Only the primary language subtag is considered.
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code
            .parse::<LanguageIdentifier>()
            .map(|id| id.language.as_str().to_ascii_lowercase())
            .unwrap_or_else(|_| code.to_ascii_lowercase());

        match primary.as_str() {
            "en" => Some(Language::English),
            "fr" => Some(Language::French),
            "es" => Some(Language::Spanish),
            "de" => Some(Language::German),
            _ => None,
        }
    }

    /// The Fluent locale identifier for this language's bundle.
    pub fn locale(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("language codes are valid identifiers")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_documented_set() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::French.code(), "fr");
        assert_eq!(Language::Spanish.code(), "es");
        assert_eq!(Language::German.code(), "de");
    }

    #[test]
    fn table_names_derive_from_codes() {
        for lang in Language::ALL {
            assert_eq!(lang.table_name(), format!("product_{}", lang.code()));
        }
    }

    #[test]
    fn display_names_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_name(lang.display_name()), lang);
        }
    }

    #[test]
    fn unknown_name_falls_back_to_english() {
        assert_eq!(Language::from_name("Klingon"), Language::English);
        assert_eq!(Language::from_name(""), Language::English);
        assert_eq!(Language::from_name("french"), Language::English);
    }

    #[test]
    fn from_code_handles_region_subtags() {
        assert_eq!(Language::from_code("en-US"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), Some(Language::French));
        assert_eq!(Language::from_code("es-ES"), Some(Language::Spanish));
        assert_eq!(Language::from_code("de-DE"), Some(Language::German));
        assert_eq!(Language::from_code("ja"), None);
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
