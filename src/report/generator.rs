// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized views of catalog data

use crate::catalog::CatalogFilter;
use crate::i18n::{translated_path, Locale, Translator};
use crate::types::ProjectRecord;
use serde::Serialize;

/// One project as presented in a given locale.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub path: String,
    pub location: String,
    pub client: String,
    pub date: String,
    pub role: String,
    pub role_label: String,
    pub building_type: String,
    pub building_type_label: String,
    pub featured: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub gallery: usize,
}

/// The visible subset of a filter session.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListing {
    pub locale: Locale,
    pub title: String,
    pub selection: Vec<String>,
    pub total: usize,
    pub visible: Vec<ProjectView>,
}

pub struct ListingGenerator<'t> {
    translator: &'t Translator,
    locale: Locale,
}

impl<'t> ListingGenerator<'t> {
    pub fn new(translator: &'t Translator, locale: Locale) -> Self {
        Self { translator, locale }
    }

    pub fn view(&self, record: &ProjectRecord) -> ProjectView {
        let tr = self.translator;
        ProjectView {
            id: record.id.clone(),
            slug: record.slug.clone(),
            title: record.title.clone(),
            path: translated_path(self.locale, &format!("/projects/{}", record.slug)),
            location: record.location.clone(),
            client: record.client.clone(),
            date: record.date.to_string(),
            role: record.role.to_string(),
            role_label: tr.role_label(self.locale, record.role).to_string(),
            building_type: record.building_type.to_string(),
            building_type_label: tr
                .building_type_label(self.locale, record.building_type)
                .to_string(),
            featured: record.featured,
            tags: record.tags.clone().unwrap_or_default(),
            description: record
                .description_key
                .as_deref()
                .map(|key| tr.resolve(self.locale, key).to_string()),
            gallery: record.gallery.len(),
        }
    }

    pub fn listing(&self, filter: &CatalogFilter<'_>) -> ProjectListing {
        self.listing_of(
            "projects.title",
            filter.selection().iter().map(str::to_string).collect(),
            filter.projects().len(),
            filter.visible_projects(),
        )
    }

    pub fn featured(&self, total: usize, featured: Vec<&ProjectRecord>) -> ProjectListing {
        self.listing_of("projects.featured", Vec::new(), total, featured)
    }

    fn listing_of(
        &self,
        title_key: &str,
        selection: Vec<String>,
        total: usize,
        records: Vec<&ProjectRecord>,
    ) -> ProjectListing {
        ProjectListing {
            locale: self.locale,
            title: self.translator.resolve(self.locale, title_key).to_string(),
            selection,
            total,
            visible: records.into_iter().map(|r| self.view(r)).collect(),
        }
    }
}
