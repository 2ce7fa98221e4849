// SPDX-License-Identifier: PMPL-1.0-or-later

//! The studio's published projects.
//!
//! Order here is the order the site lists them in. Slugs are derived from
//! the titles.

use super::ProjectSpec;
use crate::types::BuildingType::{Commercial, Industrial, Institutional, Residential};
use crate::types::ProjectDate::{Y2023, Y2024, Y2025};
use crate::types::Role::{ArchitecturalVisualization, DesignAndSiteManagement, InteriorDesign};
use crate::types::{BuildingType, ProjectDate, Role};

struct Decl {
    id: &'static str,
    title: &'static str,
    location: &'static str,
    client: &'static str,
    date: ProjectDate,
    role: Role,
    building_type: BuildingType,
    featured: bool,
    tags: &'static [&'static str],
    description_key: Option<&'static str>,
}

const PROJECTS: &[Decl] = &[
    Decl {
        id: "p01",
        title: "Meat Frisbee",
        location: "Valencia",
        client: "Meat Frisbee S.L.",
        date: Y2024,
        role: ArchitecturalVisualization,
        building_type: Commercial,
        featured: true,
        tags: &["restauración", "interiorismo"],
        description_key: Some("projects.meat-frisbee.description"),
    },
    Decl {
        id: "p02",
        title: "Haus",
        location: "Madrid",
        client: "Particular",
        date: Y2023,
        role: DesignAndSiteManagement,
        building_type: Residential,
        featured: true,
        tags: &["vivienda unifamiliar"],
        description_key: None,
    },
    Decl {
        id: "p03",
        title: "Casa Fénix",
        location: "Ávila",
        client: "Particular",
        date: Y2025,
        role: DesignAndSiteManagement,
        building_type: Residential,
        featured: true,
        tags: &["rehabilitación", "vivienda unifamiliar"],
        description_key: Some("projects.casa-fenix.description"),
    },
    Decl {
        id: "p04",
        title: "Nave Logística Sur",
        location: "Getafe",
        client: "Grupo Tránsito",
        date: Y2023,
        role: ArchitecturalVisualization,
        building_type: Industrial,
        featured: false,
        tags: &["logística"],
        description_key: None,
    },
    Decl {
        id: "p05",
        title: "Biblioteca Municipal de Torrent",
        location: "Torrent",
        client: "Ayuntamiento de Torrent",
        date: Y2024,
        role: ArchitecturalVisualization,
        building_type: Institutional,
        featured: true,
        tags: &["equipamiento"],
        description_key: None,
    },
    Decl {
        id: "p06",
        title: "Ático Señorial",
        location: "Madrid",
        client: "Particular",
        date: Y2025,
        role: InteriorDesign,
        building_type: Residential,
        featured: false,
        tags: &["interiorismo", "reforma"],
        description_key: None,
    },
    Decl {
        id: "p07",
        title: "Showroom Lumen",
        location: "Barcelona",
        client: "Lumen Iluminación",
        date: Y2024,
        role: InteriorDesign,
        building_type: Commercial,
        featured: false,
        tags: &["retail"],
        description_key: None,
    },
    Decl {
        id: "p08",
        title: "Escuela Infantil El Roble",
        location: "Segovia",
        client: "Junta de Castilla y León",
        date: Y2023,
        role: DesignAndSiteManagement,
        building_type: Institutional,
        featured: false,
        tags: &[],
        description_key: None,
    },
    Decl {
        id: "p09",
        title: "Bodega Altamira",
        location: "Haro, La Rioja",
        client: "Bodegas Altamira",
        date: Y2025,
        role: ArchitecturalVisualization,
        building_type: Industrial,
        featured: true,
        tags: &["enoturismo"],
        description_key: None,
    },
];

pub(super) fn builtin_specs() -> Vec<ProjectSpec> {
    PROJECTS
        .iter()
        .map(|decl| ProjectSpec {
            id: decl.id.to_string(),
            slug: None,
            title: decl.title.to_string(),
            location: decl.location.to_string(),
            client: decl.client.to_string(),
            date: decl.date,
            role: decl.role,
            building_type: decl.building_type,
            featured: decl.featured,
            tags: (!decl.tags.is_empty())
                .then(|| decl.tags.iter().map(|tag| tag.to_string()).collect()),
            description_key: decl.description_key.map(str::to_string),
        })
        .collect()
}
