// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the UI and the storage layer.

pub mod language;
pub mod product;

pub use language::Language;
pub use product::Product;
