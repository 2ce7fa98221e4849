// SPDX-License-Identifier: PMPL-1.0-or-later

//! Project catalog: the immutable record list and per-session filtering.

mod filter;
mod projects;

pub use filter::{CatalogFilter, FacetSelection};

use crate::gallery::GalleryIndex;
use crate::slug::slugify;
use crate::types::{BuildingType, ProjectDate, ProjectRecord, Role};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A project as declared by the author, before slug derivation and gallery
/// enrichment.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSpec {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    pub location: String,
    pub client: String,
    pub date: ProjectDate,
    pub role: Role,
    #[serde(rename = "buildingType", alias = "building_type")]
    pub building_type: BuildingType,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub description_key: Option<String>,
}

impl ProjectSpec {
    fn into_record(self) -> ProjectRecord {
        let slug = self.slug.unwrap_or_else(|| slugify(&self.title));
        ProjectRecord {
            id: self.id,
            slug,
            title: self.title,
            location: self.location,
            client: self.client,
            date: self.date,
            role: self.role,
            building_type: self.building_type,
            featured: self.featured,
            tags: self.tags,
            description_key: self.description_key,
            gallery: Vec::new(),
        }
    }
}

/// Distinct facet values present in a catalog, for rendering filter
/// controls. Enum categories follow declaration order, tags first-seen
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub building_types: Vec<BuildingType>,
    pub roles: Vec<Role>,
    pub dates: Vec<ProjectDate>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// The studio's published projects.
    pub fn builtin() -> Self {
        Self {
            projects: projects::builtin_specs()
                .into_iter()
                .map(ProjectSpec::into_record)
                .collect(),
        }
    }

    pub fn from_specs(specs: Vec<ProjectSpec>) -> Result<Self> {
        Self::from_records(specs.into_iter().map(ProjectSpec::into_record).collect())
    }

    /// Build a catalog, rejecting empty or non-canonical slugs and duplicate
    /// ids or slugs.
    pub fn from_records(projects: Vec<ProjectRecord>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for project in &projects {
            if project.slug.is_empty() {
                return Err(anyhow!(
                    "project {} ({:?}) has an empty slug",
                    project.id,
                    project.title
                ));
            }
            if slugify(&project.slug) != project.slug {
                return Err(anyhow!(
                    "project {} has a slug that is not URL-safe: {:?} (expected {:?})",
                    project.id,
                    project.slug,
                    slugify(&project.slug)
                ));
            }
            if !ids.insert(project.id.as_str()) {
                return Err(anyhow!("duplicate project id: {}", project.id));
            }
            if !slugs.insert(project.slug.as_str()) {
                return Err(anyhow!(
                    "duplicate project slug: {} (project {})",
                    project.slug,
                    project.id
                ));
            }
        }
        Ok(Self { projects })
    }

    /// Load project declarations from a JSON or YAML list.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading project catalog {}", path.display()))?;
        let specs: Vec<ProjectSpec> = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json project catalog {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml project catalog {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported project catalog extension for {}",
                    path.display()
                ))
            }
        };
        let catalog = Self::from_specs(specs)
            .with_context(|| format!("validating project catalog {}", path.display()))?;
        tracing::debug!(path = %path.display(), projects = catalog.len(), "loaded project catalog");
        Ok(catalog)
    }

    /// Fill every record's gallery from `index` by slug. Records without an
    /// entry get an empty gallery.
    pub fn with_gallery(mut self, index: &GalleryIndex) -> Self {
        for project in &mut self.projects {
            project.gallery = index.lookup(&project.slug).to_vec();
        }
        self
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Author-flagged projects for the featured carousel, in catalog order.
    pub fn featured(&self) -> Vec<&ProjectRecord> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// A fresh filter session over this catalog.
    pub fn filter(&self) -> CatalogFilter<'_> {
        CatalogFilter::new(&self.projects)
    }

    pub fn facet_options(&self) -> FacetOptions {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.projects.iter().flat_map(|p| p.tags.iter().flatten()) {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        FacetOptions {
            building_types: BuildingType::all()
                .iter()
                .copied()
                .filter(|bt| self.projects.iter().any(|p| p.building_type == *bt))
                .collect(),
            roles: Role::all()
                .iter()
                .copied()
                .filter(|role| self.projects.iter().any(|p| p.role == *role))
                .collect(),
            dates: ProjectDate::all()
                .iter()
                .copied()
                .filter(|date| self.projects.iter().any(|p| p.date == *date))
                .collect(),
            tags,
        }
    }
}
