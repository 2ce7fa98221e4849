// SPDX-License-Identifier: PMPL-1.0-or-later

//! vizfolio: project catalog and bilingual copy tooling for the studio site
//!
//! Lists and filters the project catalog the way the site's gallery page
//! does, resolves copy per locale, derives slugs, and builds the gallery
//! index from the image asset tree.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vizfolio::config::SiteConfig;
use vizfolio::diagnostics;
use vizfolio::gallery::GalleryIndex;
use vizfolio::i18n::{get_lang_from_url, switch_locale_path, Locale};
use vizfolio::report::{self, formatter, ListingGenerator, OutputFormat, ReportFormatter};
use vizfolio::slug::slugify;

#[derive(Parser)]
#[command(name = "vizfolio")]
#[command(version)]
#[command(about = "Project catalog filtering and bilingual copy for the studio site")]
#[command(long_about = None)]
struct Cli {
    /// Site config file (JSON or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects visible under a facet selection
    Projects {
        /// Facet value to select (repeatable, OR-combined)
        #[arg(short, long = "filter", value_name = "VALUE")]
        filters: Vec<String>,

        /// Only author-featured projects
        #[arg(long, conflicts_with = "filters")]
        featured: bool,

        #[arg(short, long, default_value = "es")]
        lang: LocaleArg,

        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write the listing to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show one project by slug
    Project {
        #[arg(value_name = "SLUG")]
        slug: String,

        #[arg(short, long, default_value = "es")]
        lang: LocaleArg,

        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the facet values available for filtering
    Facets {
        #[arg(short, long, default_value = "es")]
        lang: LocaleArg,

        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Resolve a translation key
    Translate {
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(short, long, default_value = "es")]
        lang: LocaleArg,
    },

    /// Detect the locale of a site path
    Lang {
        #[arg(value_name = "PATH")]
        path: String,

        /// Also print the same page in this locale
        #[arg(long)]
        switch: Option<LocaleArg>,
    },

    /// Derive the slug for a project title
    Slugify {
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Build the gallery index from an image asset tree
    GalleryScan {
        /// Directory holding one sub-directory per project slug
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// URL prefix for emitted image paths (defaults to config, then /projects)
        #[arg(long)]
        prefix: Option<String>,

        /// Index file to write (JSON or YAML by extension); stdout when absent
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report keys the default locale has and other locales lack
    CheckTranslations,

    /// Run content health checks
    Doctor,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LocaleArg {
    Es,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Es => Locale::Es,
            LocaleArg::En => Locale::En,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "vizfolio=debug" } else { "vizfolio=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SiteConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Projects {
            filters,
            featured,
            lang,
            format,
            output,
        } => {
            let catalog = config.catalog()?;
            let translator = config.translator()?;
            let locale = Locale::from(lang);

            let listing = if featured {
                ListingGenerator::new(&translator, locale)
                    .featured(catalog.len(), catalog.featured())
            } else {
                let mut filter = catalog.filter();
                filter.set_selection(filters);
                report::build_listing(&filter, &translator, locale)
            };

            match output {
                Some(path) => {
                    let format = if format == OutputFormat::Text {
                        OutputFormat::Json
                    } else {
                        format
                    };
                    formatter::save(&listing, format, path)?;
                }
                None => report::emit_listing(&listing, &translator, format)?,
            }
        }

        Commands::Project { slug, lang, format } => {
            let catalog = config.catalog()?;
            let translator = config.translator()?;
            let locale = Locale::from(lang);

            let record = catalog.find_by_slug(&slug).ok_or_else(|| {
                anyhow!("{}: {}", translator.resolve(locale, "project.not_found"), slug)
            })?;
            let view = ListingGenerator::new(&translator, locale).view(record);
            match format {
                OutputFormat::Text => ReportFormatter::new(&translator, locale).print_project(&view),
                other => println!("{}", other.serialize(&view)?),
            }
        }

        Commands::Facets { lang, format } => {
            let catalog = config.catalog()?;
            let translator = config.translator()?;
            let locale = Locale::from(lang);
            let options = catalog.facet_options();

            if format != OutputFormat::Text {
                println!("{}", format.serialize(&options)?);
                return Ok(());
            }

            println!(
                "{}",
                translator.resolve(locale, "projects.filter.building_type").bold()
            );
            for bt in &options.building_types {
                println!(
                    "  {:32} {}",
                    bt.as_str(),
                    translator.building_type_label(locale, *bt).dimmed()
                );
            }
            println!("{}", translator.resolve(locale, "projects.filter.role").bold());
            for role in &options.roles {
                println!(
                    "  {:32} {}",
                    role.as_str(),
                    translator.role_label(locale, *role).dimmed()
                );
            }
            println!("{}", translator.resolve(locale, "projects.filter.date").bold());
            for date in &options.dates {
                println!("  {}", date);
            }
            println!("{}", translator.resolve(locale, "projects.filter.tags").bold());
            for tag in &options.tags {
                println!("  {}", tag);
            }
        }

        Commands::Translate { key, lang } => {
            let translator = config.translator()?;
            println!("{}", translator.resolve(lang.into(), &key));
        }

        Commands::Lang { path, switch } => {
            let locale = get_lang_from_url(&path);
            println!("{}", locale);
            if let Some(target) = switch {
                println!("{}", switch_locale_path(&path, target.into()));
            }
        }

        Commands::Slugify { title } => {
            println!("{}", slugify(&title));
        }

        Commands::GalleryScan {
            dir,
            prefix,
            output,
        } => {
            let prefix = prefix.unwrap_or_else(|| config.public_prefix().to_string());
            let index = GalleryIndex::scan(&dir, &prefix)?;
            let images: usize = index.images.values().map(Vec::len).sum();
            eprintln!(
                "Indexed {} images across {} projects",
                images,
                index.len()
            );
            match output {
                Some(path) => {
                    index.save(&path)?;
                    println!("Gallery index saved to: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&index)?),
            }
        }

        Commands::CheckTranslations => {
            let translator = config.translator()?;
            let missing = translator.missing_keys();
            ReportFormatter::new(&translator, Locale::default()).print_missing_keys(&missing);
            if !missing.is_empty() {
                return Err(anyhow!("{} translation gaps", missing.len()));
            }
        }

        Commands::Doctor => {
            diagnostics::run_site_diagnostics(&config)?;
        }
    }

    Ok(())
}
