// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale detection and localized paths.
//!
//! The default locale is served unprefixed (`/projects`), every other
//! locale under its code (`/en/projects`).

use super::catalog::{Locale, DEFAULT_LOCALE};

/// Locale named by the first segment of `path`, or the default locale.
///
/// # Examples
///
/// ```
/// use vizfolio::i18n::{get_lang_from_url, Locale};
/// assert_eq!(get_lang_from_url("/en/projects/haus"), Locale::En);
/// assert_eq!(get_lang_from_url("/projects"), Locale::Es);
/// ```
pub fn get_lang_from_url(path: &str) -> Locale {
    first_segment(path)
        .and_then(Locale::from_code)
        .unwrap_or(DEFAULT_LOCALE)
}

/// Path for `path` as served in `locale`.
pub fn translated_path(locale: Locale, path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    if locale.is_default() {
        path
    } else if path == "/" {
        format!("/{}/", locale.code())
    } else {
        format!("/{}{}", locale.code(), path)
    }
}

/// Same page in another locale: drops any locale prefix from `path`, then
/// applies [`translated_path`] for `target`.
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    translated_path(target, strip_locale_prefix(path))
}

/// `path` with its leading locale segment removed, if it has one.
pub fn strip_locale_prefix(path: &str) -> &str {
    let Some(segment) = first_segment(path) else {
        return if path.is_empty() { "/" } else { path };
    };
    if Locale::from_code(segment).is_none() {
        return path;
    }
    let rest = &path.trim_start_matches('/')[segment.len()..];
    if rest.is_empty() {
        "/"
    } else {
        rest
    }
}

fn first_segment(path: &str) -> Option<&str> {
    path.trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .filter(|segment| !segment.is_empty())
}
