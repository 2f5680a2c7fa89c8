// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization through the Fluent system. One bundle
//! per supported language is loaded once at startup and treated as
//! immutable afterwards; bundle completeness is validated at load time so
//! no required label can be missing at runtime.

pub mod fluent;

pub use fluent::{I18n, LabelKey};
