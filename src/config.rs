// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration.
//!
//! Every field is optional: an empty config means "built-in catalog and
//! copy, no gallery". Relative paths are resolved against the directory of
//! the config file.

use crate::catalog::Catalog;
use crate::gallery::GalleryIndex;
use crate::i18n::{Dictionary, Locale, Translator};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PUBLIC_PREFIX: &str = "/projects";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SiteConfig {
    /// Project declarations file; the built-in catalog when absent.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Gallery index file.
    #[serde(default)]
    pub gallery: Option<PathBuf>,
    /// Per-locale dictionary files merged over the built-in copy.
    #[serde(default)]
    pub dictionaries: BTreeMap<Locale, PathBuf>,
    #[serde(default)]
    pub warn_missing_translations: bool,
    /// URL prefix used when scanning gallery assets.
    #[serde(default)]
    pub public_prefix: Option<String>,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading site config {}", path.display()))?;
        let mut config: SiteConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json site config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml site config {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported site config extension for {}",
                    path.display()
                ))
            }
        };
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Load from `path` when given, otherwise the empty config.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn rebase(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(p) = self.catalog.as_mut() {
            join(p);
        }
        if let Some(p) = self.gallery.as_mut() {
            join(p);
        }
        for p in self.dictionaries.values_mut() {
            join(p);
        }
    }

    pub fn public_prefix(&self) -> &str {
        self.public_prefix.as_deref().unwrap_or(DEFAULT_PUBLIC_PREFIX)
    }

    /// Catalog named by this config, enriched with its gallery index.
    pub fn catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };
        match &self.gallery {
            Some(path) => Ok(catalog.with_gallery(&GalleryIndex::load(path)?)),
            None => Ok(catalog),
        }
    }

    /// Built-in copy with this config's dictionary files merged over it.
    pub fn translator(&self) -> Result<Translator> {
        let mut translator = Translator::builtin().warn_on_fallback(self.warn_missing_translations);
        for (locale, path) in &self.dictionaries {
            translator = translator.with_overrides(*locale, Dictionary::load(path)?);
        }
        Ok(translator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_builtins() {
        let config = SiteConfig::default();
        assert_eq!(config.public_prefix(), "/projects");
        assert_eq!(config.catalog().unwrap(), Catalog::builtin());
        assert_eq!(
            config.translator().unwrap().resolve(Locale::En, "nav.home"),
            "Home"
        );
    }

    #[test]
    fn relative_paths_follow_config_directory() {
        let mut config: SiteConfig = serde_yaml::from_str(
            "catalog: data/projects.yaml\ndictionaries:\n  en: i18n/en.yaml\n",
        )
        .unwrap();
        config.rebase(Path::new("/srv/site"));
        assert_eq!(
            config.catalog.as_deref(),
            Some(Path::new("/srv/site/data/projects.yaml"))
        );
        assert_eq!(
            config.dictionaries.get(&Locale::En).map(PathBuf::as_path),
            Some(Path::new("/srv/site/i18n/en.yaml"))
        );
    }
}
