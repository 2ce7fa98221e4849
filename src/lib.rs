// SPDX-License-Identifier: PMPL-1.0-or-later

//! vizfolio — catalog and copy core for an architectural-visualization
//! studio site.
//!
//! Two independent pieces sit under the presentation layer:
//!
//! 1. **Catalog**: the studio's immutable project list, per-session facet
//!    filtering ([`catalog::CatalogFilter`]) and gallery enrichment by slug.
//! 2. **i18n**: Spanish/English copy with fallback to Spanish and then to
//!    the lookup key, plus locale-aware paths.
//!
//! The remaining modules load site data from files, derive slugs, and
//! render listings for the `vizfolio` CLI.

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod gallery;
pub mod i18n;
pub mod report;
pub mod slug;
pub mod types;
