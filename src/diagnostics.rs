// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content health checks for the site data (`vizfolio doctor`).

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::gallery::GalleryIndex;
use crate::i18n::{Locale, Translator};
use crate::slug::slugify;
use anyhow::{anyhow, Result};
use colored::*;
use std::collections::HashSet;
use std::path::Path;

pub fn run_site_diagnostics(config: &SiteConfig) -> Result<()> {
    println!("vizfolio site diagnostics");

    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("vizfolio {}", env!("CARGO_PKG_VERSION")),
    )];

    if let Some(path) = &config.catalog {
        checks.push(check_file("catalog file", path));
    }
    if let Some(path) = &config.gallery {
        checks.push(check_file("gallery index", path));
    }
    for path in config.dictionaries.values() {
        checks.push(check_file("dictionary file", path));
    }

    match (config.catalog(), config.translator()) {
        (Ok(catalog), Ok(translator)) => {
            checks.extend(check_content(&catalog, &translator, config.gallery.is_some()));
            let index = config
                .gallery
                .as_deref()
                .and_then(|path| GalleryIndex::load(path).ok());
            if let Some(index) = index {
                let orphans = orphan_gallery_slugs(&catalog, index.slugs());
                if !orphans.is_empty() {
                    checks.push(Diagnostic::warning(
                        "gallery slugs",
                        format!("no project for: {}", orphans.join(", ")),
                    ));
                }
            }
        }
        (Err(err), _) | (_, Err(err)) => {
            checks.push(Diagnostic::error("site data", format!("{:#}", err)));
        }
    }

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("site diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// Checks that only need loaded data.
pub fn check_content(
    catalog: &Catalog,
    translator: &Translator,
    expect_gallery: bool,
) -> Vec<Diagnostic> {
    let mut checks = vec![
        Diagnostic::ok("catalog", format!("{} projects", catalog.len())),
        check_translations(translator),
        check_descriptions(catalog, translator),
        check_slugs(catalog),
    ];
    if expect_gallery {
        checks.push(check_gallery(catalog));
    }
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

fn check_file(label: &'static str, path: &Path) -> Diagnostic {
    if path.is_file() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::warning(
            label,
            format!("{} exists but is not a regular file", path.display()),
        )
    } else {
        Diagnostic::error(label, format!("{} missing", path.display()))
    }
}

fn check_translations(translator: &Translator) -> Diagnostic {
    let missing = translator.missing_keys();
    if missing.is_empty() {
        return Diagnostic::ok("translations", "all locales complete".to_string());
    }
    let sample: Vec<String> = missing
        .iter()
        .take(3)
        .map(|gap| format!("{}:{}", gap.locale, gap.key))
        .collect();
    Diagnostic::warning(
        "translations",
        format!(
            "{} keys fall back to the default locale (e.g. {})",
            missing.len(),
            sample.join(", ")
        ),
    )
}

/// A description key that resolves to itself has no copy in any locale.
fn check_descriptions(catalog: &Catalog, translator: &Translator) -> Diagnostic {
    let unresolved: Vec<&str> = catalog
        .projects()
        .iter()
        .filter_map(|p| p.description_key.as_deref())
        .filter(|key| {
            Locale::all()
                .iter()
                .any(|&locale| translator.resolve(locale, key) == *key)
        })
        .collect();
    if unresolved.is_empty() {
        Diagnostic::ok("project descriptions", "all keys resolve".to_string())
    } else {
        Diagnostic::error(
            "project descriptions",
            format!("unresolved keys: {}", unresolved.join(", ")),
        )
    }
}

fn check_slugs(catalog: &Catalog) -> Diagnostic {
    let unstable: Vec<&str> = catalog
        .projects()
        .iter()
        .map(|p| p.slug.as_str())
        .filter(|slug| slugify(slug) != *slug)
        .collect();
    if unstable.is_empty() {
        Diagnostic::ok("slugs", "all slugs are URL-safe".to_string())
    } else {
        Diagnostic::warning(
            "slugs",
            format!("not in canonical form: {}", unstable.join(", ")),
        )
    }
}

fn check_gallery(catalog: &Catalog) -> Diagnostic {
    let without: Vec<&str> = catalog
        .projects()
        .iter()
        .filter(|p| p.gallery.is_empty())
        .map(|p| p.slug.as_str())
        .collect();
    if without.is_empty() {
        Diagnostic::ok("gallery", "every project has images".to_string())
    } else {
        Diagnostic::warning(
            "gallery",
            format!("no images for: {}", without.join(", ")),
        )
    }
}

/// Gallery slugs that match no project, usually a renamed title.
pub fn orphan_gallery_slugs<'a>(
    catalog: &Catalog,
    slugs: impl Iterator<Item = &'a str>,
) -> Vec<&'a str> {
    let known: HashSet<&str> = catalog.projects().iter().map(|p| p.slug.as_str()).collect();
    slugs.filter(|slug| !known.contains(slug)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Dictionary;

    #[test]
    fn builtin_content_is_healthy() {
        let checks = check_content(&Catalog::builtin(), &Translator::builtin(), false);
        assert!(checks.iter().all(|c| c.level == Level::Ok), "{:?}", checks);
    }

    #[test]
    fn missing_description_copy_is_an_error() {
        let mut es = Dictionary::new();
        es.insert_text("nav.home", "Inicio");
        let translator = Translator::empty().with_dictionary(Locale::Es, es);
        let check = check_descriptions(&Catalog::builtin(), &translator);
        assert_eq!(check.level, Level::Error);
        assert!(check.detail.contains("projects.meat-frisbee.description"));
    }

    #[test]
    fn empty_gallery_is_a_warning() {
        let check = check_gallery(&Catalog::builtin());
        assert_eq!(check.level, Level::Warn);
    }

    #[test]
    fn orphan_slugs_are_reported() {
        let catalog = Catalog::builtin();
        let orphans = orphan_gallery_slugs(&catalog, ["haus", "old-name"].into_iter());
        assert_eq!(orphans, vec!["old-name"]);
    }
}
