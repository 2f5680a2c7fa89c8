// SPDX-License-Identifier: MPL-2.0
//! `polyglot_shelf` is a multilingual product viewer built with the Iced
//! GUI framework.
//!
//! The user picks one of four display languages, loads the products stored
//! in that language's SQLite table, and inserts new ones. The crate
//! demonstrates Fluent-based internationalization with load-time bundle
//! validation and a per-call SQLite repository routed through a closed
//! language-to-table mapping.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod storage;
