// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the current language selection and the in-memory
//! product list, and translates user actions into repository calls. This
//! file keeps the user-facing policy decisions (list cleared on language
//! switch, inputs preserved on a failed add, reload after a successful add)
//! close to the update loop so behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::domain::{Language, Product};
use crate::error::StorageError;
use crate::i18n::{I18n, LabelKey};
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// What the product area is currently showing. Scoped to the selected
/// language; a language switch always resets it to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductView {
    /// No load requested yet for the current language.
    #[default]
    Idle,
    /// A load succeeded and returned at least one row.
    Loaded(Vec<Product>),
    /// A load succeeded but the table has no rows.
    Empty,
    /// A load failed; the list display is cleared.
    Error(StorageError),
}

/// Transient status-line notices layered on top of the product view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The last insert succeeded (shown across the follow-up reload).
    ProductAdded,
    /// Add was pressed with an empty name or description.
    FieldsRequired,
    /// The last insert failed; list and inputs were left untouched.
    AddFailed(StorageError),
}

/// Root application state bridging the language selector, the product
/// table, and the repository.
pub struct App {
    pub i18n: I18n,
    products: ProductView,
    name_input: String,
    description_input: String,
    notice: Option<Notice>,
    /// A storage task is in flight; load/add triggers are disabled so at
    /// most one operation runs at a time.
    loading: bool,
    db_path: PathBuf,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.i18n.language())
            .field("products", &self.products)
            .field("loading", &self.loading)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            products: ProductView::Idle,
            name_input: String::new(),
            description_input: String::new(),
            notice: None,
            loading: false,
            db_path: PathBuf::from(paths::DB_FILE),
        }
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from CLI flags and the config file.
    /// No storage access happens until the user requests a load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            eprintln!("Warning: {key}");
        }

        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let db_path = flags
            .db_path
            .map(PathBuf::from)
            .or_else(|| config.storage.db_path.clone())
            .or_else(paths::default_db_path)
            .unwrap_or_else(|| PathBuf::from(paths::DB_FILE));

        // The repository does not create directories; make sure the
        // database file's parent exists before the first connection.
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Warning: could not create {}: {}", parent.display(), e);
                }
            }
        }

        let app = App {
            i18n,
            db_path,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.label(LabelKey::WindowTitle)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Currently selected language.
    pub fn language(&self) -> Language {
        self.i18n.language()
    }

    /// Current product area state.
    pub fn products(&self) -> &ProductView {
        &self.products
    }

    /// Current status-line notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether a storage task is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Contents of the transient name input field.
    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Contents of the transient description input field.
    pub fn description_input(&self) -> &str {
        &self.description_input
    }
}
