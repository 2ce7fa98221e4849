// SPDX-License-Identifier: PMPL-1.0-or-later

//! Facet filtering over an immutable project list.
//!
//! A selection is a flat set of facet values with no notion of category. A
//! record is visible when the selection is empty, or when any of its facet
//! values (building type, role, date, tags) is selected. Values are OR-ed
//! across categories as well as within them.

use crate::types::ProjectRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Active facet values for one browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetSelection {
    values: BTreeSet<String>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Add `value` if absent, remove it if present. Returns whether the
    /// value is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.values.remove(value) {
            false
        } else {
            self.values.insert(value.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Whether `record` passes this selection.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.is_empty() || record.facet_values().any(|value| self.contains(value))
    }
}

impl<S: Into<String>> FromIterator<S> for FacetSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per-session filter state over a shared, read-only project list.
///
/// Create one per session; the project slice can be shared freely between
/// sessions.
#[derive(Debug, Clone)]
pub struct CatalogFilter<'a> {
    projects: &'a [ProjectRecord],
    selection: FacetSelection,
}

impl<'a> CatalogFilter<'a> {
    pub fn new(projects: &'a [ProjectRecord]) -> Self {
        Self {
            projects,
            selection: FacetSelection::new(),
        }
    }

    pub fn with_selection(projects: &'a [ProjectRecord], selection: FacetSelection) -> Self {
        Self {
            projects,
            selection,
        }
    }

    /// Replace the whole selection. Values are not validated; unknown ones
    /// simply match nothing.
    pub fn set_selection<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = values.into_iter().collect();
    }

    pub fn toggle_value(&mut self, value: &str) {
        let active = self.selection.toggle(value);
        tracing::trace!(value, active, "toggled facet value");
    }

    pub fn reset(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.selection.contains(value)
    }

    pub fn projects(&self) -> &'a [ProjectRecord] {
        self.projects
    }

    /// Records passing the current selection, in catalog order. Computed
    /// afresh on every call.
    pub fn visible_projects(&self) -> Vec<&'a ProjectRecord> {
        self.projects
            .iter()
            .filter(|record| self.selection.matches(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuildingType, ProjectDate, Role};

    fn record(id: &str, bt: BuildingType, role: Role, date: ProjectDate) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            slug: id.to_string(),
            title: id.to_string(),
            location: "Valencia".to_string(),
            client: "Particular".to_string(),
            date,
            role,
            building_type: bt,
            featured: false,
            tags: None,
            description_key: None,
            gallery: Vec::new(),
        }
    }

    fn ids(records: &[&ProjectRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = FacetSelection::new();
        assert!(selection.toggle("2024"));
        assert!(selection.contains("2024"));
        assert!(!selection.toggle("2024"));
        assert!(selection.is_empty());
    }

    #[test]
    fn matches_on_tags() {
        let mut rec = record("a", BuildingType::Industrial, Role::InteriorDesign, ProjectDate::Y2023);
        rec.tags = Some(vec!["reforma".to_string()]);
        let selection: FacetSelection = ["reforma"].into_iter().collect();
        assert!(selection.matches(&rec));
        let other: FacetSelection = ["retail"].into_iter().collect();
        assert!(!other.matches(&rec));
    }

    #[test]
    fn visible_is_recomputed_after_each_mutation() {
        let projects = vec![
            record("a", BuildingType::Residential, Role::InteriorDesign, ProjectDate::Y2023),
            record("b", BuildingType::Commercial, Role::InteriorDesign, ProjectDate::Y2024),
        ];
        let mut filter = CatalogFilter::new(&projects);
        assert_eq!(ids(&filter.visible_projects()), vec!["a", "b"]);

        filter.toggle_value("Comercial");
        assert_eq!(ids(&filter.visible_projects()), vec!["b"]);

        filter.set_selection(["2023"]);
        assert_eq!(ids(&filter.visible_projects()), vec!["a"]);
        assert!(!filter.is_active("Comercial"));

        filter.reset();
        assert_eq!(filter.visible_projects().len(), 2);
    }

    #[test]
    fn unknown_value_matches_nothing() {
        let projects = vec![record(
            "a",
            BuildingType::Residential,
            Role::InteriorDesign,
            ProjectDate::Y2023,
        )];
        let mut filter = CatalogFilter::new(&projects);
        filter.set_selection(["Residential"]);
        assert!(filter.visible_projects().is_empty());
    }

    #[test]
    fn selection_serializes_as_sorted_list() {
        let selection: FacetSelection = ["2025", "Comercial"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&selection).unwrap(),
            r#"["2025","Comercial"]"#
        );
    }
}
