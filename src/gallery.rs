// SPDX-License-Identifier: PMPL-1.0-or-later

//! Gallery index: `slug -> [GalleryImage]`
//!
//! The index is produced once from the image asset tree (or read back from a
//! previously written index file) and only consulted by slug afterwards. A
//! slug with no entry simply has no gallery.

use crate::types::GalleryImage;
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif"];
const THUMBNAIL_DIR: &str = "thumbnails";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub images: BTreeMap<String, Vec<GalleryImage>>,
}

/// Accepted on-disk shapes: the full index, or a bare slug map.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndexFile {
    Full(GalleryIndex),
    Bare(BTreeMap<String, Vec<GalleryImage>>),
}

impl From<IndexFile> for GalleryIndex {
    fn from(file: IndexFile) -> Self {
        match file {
            IndexFile::Full(index) => index,
            IndexFile::Bare(images) => GalleryIndex {
                generated_at: None,
                images,
            },
        }
    }
}

impl GalleryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slug: impl Into<String>, images: Vec<GalleryImage>) {
        self.images.insert(slug.into(), images);
    }

    /// Images for `slug`, empty when the slug has no entry.
    pub fn lookup(&self, slug: &str) -> &[GalleryImage] {
        self.images.get(slug).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading gallery index {}", path.display()))?;
        let file: IndexFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json gallery index {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml gallery index {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported gallery index extension for {}",
                    path.display()
                ))
            }
        };
        let index = GalleryIndex::from(file);
        tracing::debug!(path = %path.display(), slugs = index.len(), "loaded gallery index");
        Ok(index)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let payload = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::to_string(self)?,
            _ => serde_json::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        fs::write(path, payload)
            .with_context(|| format!("writing gallery index {}", path.display()))
    }

    /// Build an index from an asset tree laid out as `root/<slug>/<image>`,
    /// with optional thumbnails at `root/<slug>/thumbnails/<image>`.
    ///
    /// Images are ordered by file name. A missing thumbnail falls back to the
    /// original. Emitted paths are `<public_prefix>/<slug>/<file>`.
    pub fn scan(root: &Path, public_prefix: &str) -> Result<Self> {
        if !root.is_dir() {
            return Err(anyhow!("gallery root not found: {}", root.display()));
        }
        let prefix = public_prefix.trim_end_matches('/');
        let mut index = GalleryIndex {
            generated_at: Some(Utc::now().to_rfc3339()),
            images: BTreeMap::new(),
        };

        let mut project_dirs: Vec<_> = fs::read_dir(root)
            .with_context(|| format!("reading {}", root.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        project_dirs.sort();

        for dir in project_dirs {
            let Some(slug) = dir.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let mut files: Vec<String> = WalkDir::new(&dir)
                .min_depth(1)
                .max_depth(1)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file() && is_image(entry.path()))
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .collect();
            if files.is_empty() {
                tracing::debug!(slug, "skipping project directory without images");
                continue;
            }
            files.sort();

            let images = files
                .into_iter()
                .map(|file| {
                    let original = format!("{}/{}/{}", prefix, slug, file);
                    let thumbnail = if dir.join(THUMBNAIL_DIR).join(&file).is_file() {
                        format!("{}/{}/{}/{}", prefix, slug, THUMBNAIL_DIR, file)
                    } else {
                        original.clone()
                    };
                    GalleryImage {
                        original,
                        thumbnail,
                    }
                })
                .collect();
            index.images.insert(slug.to_string(), images);
        }

        tracing::debug!(root = %root.display(), slugs = index.len(), "scanned gallery assets");
        Ok(index)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slug_yields_empty_gallery() {
        let index = GalleryIndex::new();
        assert!(index.lookup("no-such-project").is_empty());
    }

    #[test]
    fn bare_map_is_accepted() {
        let raw = r#"{"haus": [{"original": "/a.jpg", "thumbnail": "/t/a.jpg"}]}"#;
        let file: IndexFile = serde_json::from_str(raw).unwrap();
        let index = GalleryIndex::from(file);
        assert_eq!(index.lookup("haus").len(), 1);
        assert!(index.generated_at.is_none());
    }

    #[test]
    fn image_extensions_are_case_insensitive() {
        assert!(is_image(Path::new("render.JPG")));
        assert!(is_image(Path::new("render.webp")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("README")));
    }
}
