// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal formatting and file output

use super::generator::{ProjectListing, ProjectView};
use super::output::OutputFormat;
use crate::i18n::{Locale, MissingKey, Translator};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub struct ReportFormatter<'t> {
    translator: &'t Translator,
    locale: Locale,
}

impl<'t> ReportFormatter<'t> {
    pub fn new(translator: &'t Translator, locale: Locale) -> Self {
        Self { translator, locale }
    }

    fn label(&self, key: &str) -> String {
        self.translator.resolve(self.locale, key).to_string()
    }

    pub fn print_listing(&self, listing: &ProjectListing) {
        println!(
            "\n{}",
            format!("=== {} ===", listing.title.to_uppercase()).bold().cyan()
        );
        if !listing.selection.is_empty() {
            println!(
                "  {}: {}",
                self.label("projects.filter.title"),
                listing.selection.join(", ").yellow()
            );
        }
        println!(
            "  {}/{} {}",
            listing.visible.len(),
            listing.total,
            self.label("projects.count")
        );
        println!();

        if listing.visible.is_empty() {
            println!("  {}", self.label("projects.empty").dimmed());
            return;
        }

        for (i, view) in listing.visible.iter().enumerate() {
            let star = if view.featured { "*".yellow() } else { " ".normal() };
            println!(
                "  {:>2}.{} {} {}",
                i + 1,
                star,
                view.title.bold(),
                format!("({})", view.location).dimmed()
            );
            println!(
                "       {} · {} · {}",
                view.building_type_label.green(),
                view.role_label.blue(),
                view.date
            );
            println!("       {}", view.path.dimmed());
        }
    }

    pub fn print_project(&self, view: &ProjectView) {
        println!("\n{}", view.title.bold().cyan());
        if let Some(description) = &view.description {
            println!("  {}", description.italic());
        }
        println!();
        let rows = [
            ("project.location", view.location.as_str()),
            ("project.client", view.client.as_str()),
            ("project.date", view.date.as_str()),
            ("project.role", view.role_label.as_str()),
            ("project.building_type", view.building_type_label.as_str()),
        ];
        for (key, value) in rows {
            println!("  {:16} {}", format!("{}:", self.label(key)).bold(), value);
        }
        if !view.tags.is_empty() {
            println!(
                "  {:16} {}",
                format!("{}:", self.label("projects.filter.tags")).bold(),
                view.tags.join(", ")
            );
        }
        println!(
            "  {:16} {}",
            format!("{}:", self.label("project.gallery")).bold(),
            view.gallery
        );
        println!("  {}", view.path.dimmed());
    }

    pub fn print_missing_keys(&self, missing: &[MissingKey]) {
        if missing.is_empty() {
            println!("{}", "All locales cover the default locale's keys".green());
            return;
        }
        println!(
            "{}",
            format!("{} translation gaps", missing.len()).bold().red()
        );
        for gap in missing {
            let reason = if gap.kind_mismatch {
                "wrong entry kind"
            } else {
                "missing"
            };
            println!("  [{}] {} ({})", gap.locale, gap.key.yellow(), reason.dimmed());
        }
    }
}

/// Serialize `value` in `format` and write it to `path`.
pub fn save<T: Serialize, P: AsRef<Path>>(value: &T, format: OutputFormat, path: P) -> Result<()> {
    let payload = format.serialize(value)?;
    fs::write(path.as_ref(), payload)?;
    println!("Saved to: {}", path.as_ref().display());
    Ok(())
}
