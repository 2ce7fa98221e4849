// SPDX-License-Identifier: PMPL-1.0-or-later

//! URL-safe project identifiers.
//!
//! Folding rule: lowercase, NFD-decompose, drop combining marks, collapse
//! every run of characters outside `[a-z0-9]` into one `-`, trim `-` from
//! both ends. Titles that differ only by case or accents therefore share a
//! slug, and `slugify` is idempotent on its own output.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn separator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static slug regex is valid"))
}

/// Derive the slug for a project title.
///
/// # Examples
///
/// ```
/// use vizfolio::slug::slugify;
/// assert_eq!(slugify("Meat Frisbee"), "meat-frisbee");
/// assert_eq!(slugify("Casa Fénix, Ávila"), "casa-fenix-avila");
/// ```
pub fn slugify(title: &str) -> String {
    let folded: String = title
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    separator_runs()
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}
