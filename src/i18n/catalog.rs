// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in copy for the studio site.
//!
//! All user-facing strings for both locales live here as compile-time
//! static tables. Lookup is a linear scan per locale, which is fine for the
//! few dozen keys the site has.
//!
//! ## Adding a new key
//!
//! 1. Add the Spanish entry to `ES` (Spanish is the default locale, every
//!    key must exist there)
//! 2. Add the English entry to `EN` (missing keys fall back to Spanish)
//!
//! Structured values (`roles`, `building_types`) are short-label tables
//! keyed by [`crate::types::Role::label_key`] and
//! [`crate::types::BuildingType::label_key`].

use serde::{Deserialize, Serialize};

/// Supported site locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
}

/// The locale used when a request names no locale, or a key is missing.
pub const DEFAULT_LOCALE: Locale = Locale::Es;

impl Locale {
    /// ISO 639-1 two-letter code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Parse a lowercase ISO 639-1 code. Returns `None` for unsupported
    /// codes.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Like [`Locale::from_code`] but degrades to [`DEFAULT_LOCALE`].
    pub fn from_code_or_default(code: &str) -> Locale {
        Locale::from_code(code).unwrap_or(DEFAULT_LOCALE)
    }

    /// All supported locales, default first.
    pub fn all() -> &'static [Locale] {
        &[Locale::Es, Locale::En]
    }

    /// Name of the language written in itself, for the language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Es => "Español",
            Locale::En => "English",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == DEFAULT_LOCALE
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A value in the static tables.
#[derive(Debug, Clone, Copy)]
pub(crate) enum StaticEntry {
    Text(&'static str),
    Table(&'static [(&'static str, &'static str)]),
}

pub(crate) type StaticTable = &'static [(&'static str, StaticEntry)];

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a key in the built-in copy.
///
/// Falls back to Spanish when the key is missing (or structured) in the
/// requested locale, and to the key itself when Spanish has no text for it
/// either. Never panics, never returns empty for a missing key.
///
/// # Examples
///
/// ```
/// use vizfolio::i18n::{t, Locale};
/// assert_eq!(t(Locale::En, "nav.projects"), "Projects");
/// assert_eq!(t(Locale::Es, "nav.projects"), "Proyectos");
/// assert_eq!(t(Locale::En, "nonexistent.key"), "nonexistent.key");
/// ```
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
    if let Some(value) = lookup_text(table_for(locale), key) {
        return value;
    }
    if locale != DEFAULT_LOCALE {
        if let Some(value) = lookup_text(table_for(DEFAULT_LOCALE), key) {
            return value;
        }
    }
    key
}

fn lookup_text(table: StaticTable, key: &str) -> Option<&'static str> {
    for &(k, v) in table {
        if k == key {
            return match v {
                StaticEntry::Text(text) => Some(text),
                StaticEntry::Table(_) => None,
            };
        }
    }
    None
}

pub(crate) fn table_for(locale: Locale) -> StaticTable {
    match locale {
        Locale::Es => ES,
        Locale::En => EN,
    }
}

use StaticEntry::{Table, Text};

// ─── Spanish (default locale — all keys defined here) ───────────────

const ES: StaticTable = &[
    // Navigation
    ("nav.home", Text("Inicio")),
    ("nav.about", Text("Estudio")),
    ("nav.projects", Text("Proyectos")),
    ("nav.contact", Text("Contacto")),
    ("nav.language", Text("Idioma")),
    // Hero
    ("hero.title", Text("Arquitectura que se ve antes de existir")),
    (
        "hero.subtitle",
        Text("Visualización arquitectónica, proyecto y dirección de obra"),
    ),
    ("hero.cta", Text("Ver proyectos")),
    // About
    ("about.title", Text("Sobre el estudio")),
    (
        "about.body",
        Text("Somos un estudio de arquitectura especializado en imagen fotorrealista y en acompañar cada obra desde el primer boceto hasta la entrega."),
    ),
    ("about.years", Text("años de experiencia")),
    ("about.projects_delivered", Text("proyectos entregados")),
    // Projects listing
    ("projects.title", Text("Proyectos")),
    ("projects.featured", Text("Proyectos destacados")),
    ("projects.view_all", Text("Ver todos los proyectos")),
    ("projects.filter.title", Text("Filtrar")),
    ("projects.filter.all", Text("Todos")),
    ("projects.filter.building_type", Text("Tipología")),
    ("projects.filter.role", Text("Rol")),
    ("projects.filter.date", Text("Año")),
    ("projects.filter.tags", Text("Etiquetas")),
    ("projects.filter.reset", Text("Limpiar filtros")),
    ("projects.empty", Text("Ningún proyecto coincide con los filtros seleccionados.")),
    ("projects.count", Text("proyectos")),
    // Project detail
    ("project.location", Text("Ubicación")),
    ("project.client", Text("Cliente")),
    ("project.date", Text("Año")),
    ("project.role", Text("Rol")),
    ("project.building_type", Text("Tipología")),
    ("project.gallery", Text("Galería")),
    ("project.back", Text("Volver a proyectos")),
    ("project.not_found", Text("Proyecto no encontrado")),
    // Contact
    ("contact.title", Text("Hablemos de tu proyecto")),
    ("contact.name", Text("Nombre")),
    ("contact.email", Text("Correo electrónico")),
    ("contact.message", Text("Mensaje")),
    ("contact.send", Text("Enviar")),
    ("contact.sending", Text("Enviando…")),
    ("contact.success", Text("Gracias, te responderemos pronto.")),
    ("contact.error", Text("No se pudo enviar el mensaje. Inténtalo de nuevo.")),
    // Footer
    ("footer.rights", Text("Todos los derechos reservados.")),
    // Project blurbs
    (
        "projects.meat-frisbee.description",
        Text("Restaurante de barrio con una cocina abierta como escenario."),
    ),
    (
        "projects.casa-fenix.description",
        Text("Vivienda unifamiliar reconstruida sobre los muros de una casa de labranza."),
    ),
    // Structured labels
    (
        "roles",
        Table(&[
            ("visualization", "Visualización"),
            ("site_management", "Proyecto y obra"),
            ("interiors", "Interiorismo"),
        ]),
    ),
    (
        "building_types",
        Table(&[
            ("residential", "Residencial"),
            ("commercial", "Comercial"),
            ("industrial", "Industrial"),
            ("institutional", "Institucional"),
        ]),
    ),
];

// ─── English ────────────────────────────────────────────────────────

const EN: StaticTable = &[
    ("nav.home", Text("Home")),
    ("nav.about", Text("Studio")),
    ("nav.projects", Text("Projects")),
    ("nav.contact", Text("Contact")),
    ("nav.language", Text("Language")),
    ("hero.title", Text("Architecture you can see before it exists")),
    (
        "hero.subtitle",
        Text("Architectural visualization, design and site management"),
    ),
    ("hero.cta", Text("See projects")),
    ("about.title", Text("About the studio")),
    (
        "about.body",
        Text("We are an architecture studio focused on photorealistic imagery and on seeing every build through from first sketch to handover."),
    ),
    ("about.years", Text("years of experience")),
    ("about.projects_delivered", Text("projects delivered")),
    ("projects.title", Text("Projects")),
    ("projects.featured", Text("Featured projects")),
    ("projects.view_all", Text("View all projects")),
    ("projects.filter.title", Text("Filter")),
    ("projects.filter.all", Text("All")),
    ("projects.filter.building_type", Text("Building type")),
    ("projects.filter.role", Text("Role")),
    ("projects.filter.date", Text("Year")),
    ("projects.filter.tags", Text("Tags")),
    ("projects.filter.reset", Text("Clear filters")),
    ("projects.empty", Text("No project matches the selected filters.")),
    ("projects.count", Text("projects")),
    ("project.location", Text("Location")),
    ("project.client", Text("Client")),
    ("project.date", Text("Year")),
    ("project.role", Text("Role")),
    ("project.building_type", Text("Building type")),
    ("project.gallery", Text("Gallery")),
    ("project.back", Text("Back to projects")),
    ("project.not_found", Text("Project not found")),
    ("contact.title", Text("Let's talk about your project")),
    ("contact.name", Text("Name")),
    ("contact.email", Text("Email")),
    ("contact.message", Text("Message")),
    ("contact.send", Text("Send")),
    ("contact.sending", Text("Sending…")),
    ("contact.success", Text("Thanks, we'll get back to you soon.")),
    ("contact.error", Text("The message could not be sent. Please try again.")),
    ("footer.rights", Text("All rights reserved.")),
    (
        "projects.meat-frisbee.description",
        Text("A neighbourhood restaurant staged around its open kitchen."),
    ),
    (
        "projects.casa-fenix.description",
        Text("A family home rebuilt inside the walls of an old farmhouse."),
    ),
    (
        "roles",
        Table(&[
            ("visualization", "Visualization"),
            ("site_management", "Design & build"),
            ("interiors", "Interiors"),
        ]),
    ),
    (
        "building_types",
        Table(&[
            ("residential", "Residential"),
            ("commercial", "Commercial"),
            ("industrial", "Industrial"),
            ("institutional", "Institutional"),
        ]),
    ),
];
