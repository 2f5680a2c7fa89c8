// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{Language, Product};
use crate::error::StorageError;

/// Messages consumed by `App::update`. One user action produces at most one
/// storage task, whose outcome comes back as a `*Loaded`/`*Added` result.
#[derive(Debug, Clone)]
pub enum Message {
    /// A language was picked in the selector.
    LanguageSelected(Language),
    /// The load button was pressed.
    LoadProducts,
    /// Result of an asynchronous product fetch.
    ProductsLoaded(Result<Vec<Product>, StorageError>),
    /// The name input field changed.
    NameInputChanged(String),
    /// The description input field changed.
    DescriptionInputChanged(String),
    /// The add button was pressed.
    AddProduct,
    /// Result of an asynchronous product insert.
    ProductAdded(Result<(), StorageError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional path of the product database file.
    pub db_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for the database file).
    /// Takes precedence over `POLYGLOT_SHELF_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `POLYGLOT_SHELF_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
