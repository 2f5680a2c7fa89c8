// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! This module contains the main `update` function and the transition
//! rules of the product area state machine:
//!
//! - switching language clears the list and never touches storage
//! - a load ends in `Loaded`, `Empty`, or `Error`
//! - a successful add clears both inputs and immediately reloads
//! - a failed add leaves the list and both inputs untouched

use super::{config, App, Message, Notice, ProductView};
use crate::storage;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::LanguageSelected(language) => {
            app.i18n.set_language(language);
            app.products = ProductView::Idle;
            app.notice = None;
            if let Err(e) = config::save_language(language.code()) {
                eprintln!("Warning: could not save settings: {e}");
            }
            Task::none()
        }
        Message::LoadProducts => {
            app.notice = None;
            spawn_load(app)
        }
        Message::ProductsLoaded(result) => {
            app.loading = false;
            app.products = match result {
                Ok(products) if products.is_empty() => ProductView::Empty,
                Ok(products) => ProductView::Loaded(products),
                Err(e) => {
                    // A stale add-success notice must not mask the load
                    // failure message.
                    app.notice = None;
                    ProductView::Error(e)
                }
            };
            Task::none()
        }
        Message::NameInputChanged(value) => {
            app.name_input = value;
            Task::none()
        }
        Message::DescriptionInputChanged(value) => {
            app.description_input = value;
            Task::none()
        }
        Message::AddProduct => handle_add_product(app),
        Message::ProductAdded(result) => match result {
            Ok(()) => {
                app.loading = false;
                app.name_input.clear();
                app.description_input.clear();
                app.notice = Some(Notice::ProductAdded);
                // Reload so the table reflects the storage-assigned row.
                spawn_load(app)
            }
            Err(e) => {
                // List and inputs stay as they were so the user can retry.
                app.loading = false;
                app.notice = Some(Notice::AddFailed(e));
                Task::none()
            }
        },
    }
}

/// Starts an asynchronous fetch for the current language's table.
fn spawn_load(app: &mut App) -> Task<Message> {
    if app.loading {
        return Task::none();
    }
    app.loading = true;

    let db_path = app.db_path.clone();
    let language = app.language();
    Task::perform(
        storage::list_products(db_path, language),
        Message::ProductsLoaded,
    )
}

/// Validates presence of both fields, then starts an asynchronous insert.
fn handle_add_product(app: &mut App) -> Task<Message> {
    if app.loading {
        return Task::none();
    }

    let name = app.name_input.trim().to_string();
    let description = app.description_input.trim().to_string();
    if name.is_empty() || description.is_empty() {
        app.notice = Some(Notice::FieldsRequired);
        return Task::none();
    }

    app.notice = None;
    app.loading = true;

    let db_path = app.db_path.clone();
    let language = app.language();
    Task::perform(
        storage::insert_product(db_path, language, name, description),
        Message::ProductAdded,
    )
}
