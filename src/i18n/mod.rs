// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the studio site.
//!
//! ## Supported locales
//!
//! | Code | Language | Role            |
//! |------|----------|-----------------|
//! | es   | Spanish  | default locale  |
//! | en   | English  |                 |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"hero.title"`, `"nav.projects"`,
//! `"projects.filter.role"`. Lookups fall back to Spanish when a key is
//! missing in the requested locale. If the key is missing in Spanish too,
//! the key string itself is returned (fail-open, never panics).
//!
//! [`t`] reads the built-in static copy directly. [`Translator`] owns
//! per-locale [`Dictionary`] values so copy can be overridden from files,
//! audited for gaps, and made to warn on fallback during development.

mod catalog;
mod dictionary;
mod resolver;
mod routing;

pub use catalog::{t, Locale, DEFAULT_LOCALE};
pub use dictionary::{Dictionary, Entry, LabelTable};
pub use resolver::{MissingKey, Translator};
pub use routing::{get_lang_from_url, strip_locale_prefix, switch_locale_path, translated_path};
