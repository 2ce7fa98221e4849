// SPDX-License-Identifier: PMPL-1.0-or-later

//! Listing generation and output

pub mod formatter;
pub mod generator;
pub mod output;

pub use formatter::ReportFormatter;
pub use generator::{ListingGenerator, ProjectListing, ProjectView};
pub use output::OutputFormat;

use crate::catalog::CatalogFilter;
use crate::i18n::{Locale, Translator};

/// Localized listing of a filter session's visible projects.
pub fn build_listing(
    filter: &CatalogFilter<'_>,
    translator: &Translator,
    locale: Locale,
) -> ProjectListing {
    ListingGenerator::new(translator, locale).listing(filter)
}

/// Print or serialize a listing to stdout.
pub fn emit_listing(
    listing: &ProjectListing,
    translator: &Translator,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            ReportFormatter::new(translator, listing.locale).print_listing(listing);
        }
        other => println!("{}", other.serialize(listing)?),
    }
    Ok(())
}
