// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for vizfolio
//!
//! Facet categories (building type, role, date) are closed enums. Their
//! canonical string form is the Spanish label the studio publishes, and it
//! is the value that travels through filter selections and serialized
//! catalogs.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of building a project was produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildingType {
    #[serde(rename = "Residencial")]
    Residential,
    #[serde(rename = "Comercial")]
    Commercial,
    #[serde(rename = "Industrial")]
    Industrial,
    #[serde(rename = "Institucional")]
    Institutional,
}

impl BuildingType {
    pub fn all() -> &'static [BuildingType] {
        &[
            BuildingType::Residential,
            BuildingType::Commercial,
            BuildingType::Industrial,
            BuildingType::Institutional,
        ]
    }

    /// Canonical facet value.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingType::Residential => "Residencial",
            BuildingType::Commercial => "Comercial",
            BuildingType::Industrial => "Industrial",
            BuildingType::Institutional => "Institucional",
        }
    }

    /// Key of this value inside the `building_types` translation table.
    pub fn label_key(&self) -> &'static str {
        match self {
            BuildingType::Residential => "residential",
            BuildingType::Commercial => "commercial",
            BuildingType::Industrial => "industrial",
            BuildingType::Institutional => "institutional",
        }
    }
}

/// Discipline the studio delivered on a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Visualización Arquitectónica")]
    ArchitecturalVisualization,
    #[serde(rename = "Proyecto y Dirección de Obra")]
    DesignAndSiteManagement,
    #[serde(rename = "Diseño de Interiores")]
    InteriorDesign,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::ArchitecturalVisualization,
            Role::DesignAndSiteManagement,
            Role::InteriorDesign,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ArchitecturalVisualization => "Visualización Arquitectónica",
            Role::DesignAndSiteManagement => "Proyecto y Dirección de Obra",
            Role::InteriorDesign => "Diseño de Interiores",
        }
    }

    /// Key of this value inside the `roles` translation table.
    pub fn label_key(&self) -> &'static str {
        match self {
            Role::ArchitecturalVisualization => "visualization",
            Role::DesignAndSiteManagement => "site_management",
            Role::InteriorDesign => "interiors",
        }
    }
}

/// Delivery year. Only the years declared here are valid project dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectDate {
    #[serde(rename = "2023")]
    Y2023,
    #[serde(rename = "2024")]
    Y2024,
    #[serde(rename = "2025")]
    Y2025,
}

impl ProjectDate {
    pub fn all() -> &'static [ProjectDate] {
        &[ProjectDate::Y2023, ProjectDate::Y2024, ProjectDate::Y2025]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectDate::Y2023 => "2023",
            ProjectDate::Y2024 => "2024",
            ProjectDate::Y2025 => "2025",
        }
    }
}

macro_rules! facet_string_impls {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(value: &str) -> Result<Self> {
                <$ty>::all()
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == value)
                    .ok_or_else(|| anyhow!("unknown {}: {}", $what, value))
            }
        }
    };
}

facet_string_impls!(BuildingType, "building type");
facet_string_impls!(Role, "role");
facet_string_impls!(ProjectDate, "project date");

/// One image of a project gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub original: String,
    pub thumbnail: String,
}

/// One portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub location: String,
    pub client: String,
    pub date: ProjectDate,
    pub role: Role,
    #[serde(rename = "buildingType")]
    pub building_type: BuildingType,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_key: Option<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

impl ProjectRecord {
    /// Every facet value this record can be matched on: building type,
    /// role, date, then each tag.
    pub fn facet_values(&self) -> impl Iterator<Item = &str> + '_ {
        [
            self.building_type.as_str(),
            self.role.as_str(),
            self.date.as_str(),
        ]
        .into_iter()
        .chain(self.tags.iter().flatten().map(String::as_str))
    }

    pub fn cover(&self) -> Option<&GalleryImage> {
        self.gallery.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_strings_roundtrip() {
        for bt in BuildingType::all() {
            assert_eq!(bt.as_str().parse::<BuildingType>().unwrap(), *bt);
        }
        for role in Role::all() {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
        }
        for date in ProjectDate::all() {
            assert_eq!(date.as_str().parse::<ProjectDate>().unwrap(), *date);
        }
    }

    #[test]
    fn unknown_facet_string_is_rejected() {
        assert!("Residential".parse::<BuildingType>().is_err());
        assert!("2019".parse::<ProjectDate>().is_err());
    }

    #[test]
    fn serde_uses_canonical_strings() {
        let json = serde_json::to_string(&Role::DesignAndSiteManagement).unwrap();
        assert_eq!(json, "\"Proyecto y Dirección de Obra\"");
        let date: ProjectDate = serde_json::from_str("\"2024\"").unwrap();
        assert_eq!(date, ProjectDate::Y2024);
    }

    #[test]
    fn facet_values_include_tags_last() {
        let record = ProjectRecord {
            id: "1".into(),
            slug: "haus".into(),
            title: "Haus".into(),
            location: "Valencia".into(),
            client: "Privado".into(),
            date: ProjectDate::Y2023,
            role: Role::InteriorDesign,
            building_type: BuildingType::Residential,
            featured: false,
            tags: Some(vec!["reforma".into()]),
            description_key: None,
            gallery: Vec::new(),
        };
        let values: Vec<&str> = record.facet_values().collect();
        assert_eq!(
            values,
            vec!["Residencial", "Diseño de Interiores", "2023", "reforma"]
        );
    }
}
