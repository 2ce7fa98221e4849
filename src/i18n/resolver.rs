// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dictionary-backed translation resolver.
//!
//! Resolution order for `resolve(locale, key)`:
//!
//! 1. text stored under `key` for `locale`
//! 2. text stored under `key` for the default locale
//! 3. `key` itself
//!
//! A structured entry counts as "no text" at steps 1 and 2. Structured
//! entries are read through [`Translator::structured`], which never falls
//! back.

use super::catalog::{table_for, Locale, DEFAULT_LOCALE};
use super::dictionary::{Dictionary, Entry, LabelTable};
use crate::types::{BuildingType, Role};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Translator {
    dictionaries: BTreeMap<Locale, Dictionary>,
    warn_on_fallback: bool,
}

/// A default-locale key that another locale lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKey {
    pub locale: Locale,
    pub key: String,
    /// The locale has the key but with a different entry kind (text vs
    /// table).
    pub kind_mismatch: bool,
}

impl Default for Translator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Translator {
    /// Translator over the built-in site copy.
    pub fn builtin() -> Self {
        let dictionaries = Locale::all()
            .iter()
            .map(|&locale| (locale, Dictionary::from_static(table_for(locale))))
            .collect();
        Self {
            dictionaries,
            warn_on_fallback: false,
        }
    }

    /// Translator with no copy at all; every lookup returns the key until
    /// dictionaries are added.
    pub fn empty() -> Self {
        Self {
            dictionaries: BTreeMap::new(),
            warn_on_fallback: false,
        }
    }

    /// Replace the dictionary for `locale`.
    pub fn with_dictionary(mut self, locale: Locale, dictionary: Dictionary) -> Self {
        self.dictionaries.insert(locale, dictionary);
        self
    }

    /// Merge `overrides` over the current dictionary for `locale`.
    pub fn with_overrides(mut self, locale: Locale, overrides: Dictionary) -> Self {
        self.dictionaries
            .entry(locale)
            .or_default()
            .merge(overrides);
        self
    }

    /// Emit a `tracing` warning whenever a lookup falls back. Returned
    /// strings are unaffected.
    pub fn warn_on_fallback(mut self, enabled: bool) -> Self {
        self.warn_on_fallback = enabled;
        self
    }

    /// Resolve `key` to display text for `locale`. Total: the key itself is
    /// the last resort.
    pub fn resolve<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        if let Some(text) = self.text(locale, key) {
            return text;
        }
        if locale != DEFAULT_LOCALE {
            if let Some(text) = self.text(DEFAULT_LOCALE, key) {
                if self.warn_on_fallback {
                    tracing::warn!(
                        locale = %locale,
                        key,
                        fallback = %DEFAULT_LOCALE,
                        "translation missing, using default locale"
                    );
                }
                return text;
            }
        }
        if self.warn_on_fallback {
            tracing::warn!(locale = %locale, key, "translation missing, rendering key");
        }
        key
    }

    /// Raw structured entry for `locale`, without fallback.
    pub fn structured(&self, locale: Locale, key: &str) -> Option<&LabelTable> {
        self.dictionaries.get(&locale)?.table(key)
    }

    /// Short label for a role. Falls back to the canonical value when the
    /// `roles` table or its row is missing.
    pub fn role_label(&self, locale: Locale, role: Role) -> &str {
        self.structured(locale, "roles")
            .and_then(|table| table.get(role.label_key()))
            .map(String::as_str)
            .unwrap_or_else(|| role.as_str())
    }

    /// Short label for a building type, same fallback as [`Self::role_label`].
    pub fn building_type_label(&self, locale: Locale, building_type: BuildingType) -> &str {
        self.structured(locale, "building_types")
            .and_then(|table| table.get(building_type.label_key()))
            .map(String::as_str)
            .unwrap_or_else(|| building_type.as_str())
    }

    /// Every default-locale key missing from another locale, sorted by
    /// locale then key.
    pub fn missing_keys(&self) -> Vec<MissingKey> {
        let Some(reference) = self.dictionaries.get(&DEFAULT_LOCALE) else {
            return Vec::new();
        };
        let mut missing = Vec::new();
        for &locale in Locale::all() {
            if locale == DEFAULT_LOCALE {
                continue;
            }
            let target = self.dictionaries.get(&locale);
            for (key, entry) in reference.iter() {
                match target.and_then(|dict| dict.get(key)) {
                    Some(found) if found.same_kind(entry) => {}
                    Some(_) => missing.push(MissingKey {
                        locale,
                        key: key.to_string(),
                        kind_mismatch: true,
                    }),
                    None if covered_by_children(target, key, entry) => {}
                    None => missing.push(MissingKey {
                        locale,
                        key: key.to_string(),
                        kind_mismatch: false,
                    }),
                }
            }
        }
        missing
    }

    fn text(&self, locale: Locale, key: &str) -> Option<&str> {
        self.dictionaries.get(&locale)?.text(key)
    }
}

/// A table loaded from a nested file also exists as dotted text keys. When
/// the other locale has every one of those as text, only the aggregate is
/// absent and nothing renders differently.
fn covered_by_children(target: Option<&Dictionary>, key: &str, entry: &Entry) -> bool {
    let (Some(target), Some(table)) = (target, entry.as_table()) else {
        return false;
    };
    !table.is_empty()
        && table
            .keys()
            .all(|child| target.text(&format!("{}.{}", key, child)).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{self, Layer, SubscriberExt};

    fn partial_translator() -> Translator {
        let mut es = Dictionary::new();
        es.insert_text("hero.title", "Hola");
        es.insert_text("about.title", "Sobre nosotros");
        let mut en = Dictionary::new();
        en.insert_text("hero.title", "Hello");
        en.insert_table("about.title", LabelTable::new());
        Translator::empty()
            .with_dictionary(Locale::Es, es)
            .with_dictionary(Locale::En, en)
    }

    #[test]
    fn requested_locale_wins() {
        let tr = partial_translator();
        assert_eq!(tr.resolve(Locale::En, "hero.title"), "Hello");
        assert_eq!(tr.resolve(Locale::Es, "hero.title"), "Hola");
    }

    #[test]
    fn structured_value_falls_back_to_default_text() {
        let tr = partial_translator();
        assert_eq!(tr.resolve(Locale::En, "about.title"), "Sobre nosotros");
    }

    #[test]
    fn missing_everywhere_returns_key() {
        let tr = partial_translator();
        assert_eq!(tr.resolve(Locale::En, "nonexistent.key"), "nonexistent.key");
        assert_eq!(Translator::empty().resolve(Locale::Es, "x.y"), "x.y");
    }

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: layer::Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(tr: &Translator) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(tr.resolve(Locale::En, "hero.title"), "Hello");
            assert_eq!(tr.resolve(Locale::En, "about.title"), "Sobre nosotros");
            assert_eq!(tr.resolve(Locale::En, "nope"), "nope");
        });
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn fallback_warnings_are_opt_in() {
        assert_eq!(count_warnings(&partial_translator()), 0);
        assert_eq!(count_warnings(&partial_translator().warn_on_fallback(true)), 2);
    }

    #[test]
    fn structured_has_no_fallback() {
        let tr = Translator::builtin();
        assert!(tr.structured(Locale::En, "roles").is_some());
        assert!(tr.structured(Locale::En, "hero.title").is_none());
        let only_es = Translator::empty()
            .with_dictionary(Locale::Es, Dictionary::from_static(table_for(Locale::Es)));
        assert!(only_es.structured(Locale::En, "roles").is_none());
    }

    #[test]
    fn facet_labels_resolve_per_locale() {
        let tr = Translator::builtin();
        assert_eq!(
            tr.role_label(Locale::En, Role::ArchitecturalVisualization),
            "Visualization"
        );
        assert_eq!(
            tr.building_type_label(Locale::Es, BuildingType::Institutional),
            "Institucional"
        );
        assert_eq!(
            Translator::empty().role_label(Locale::En, Role::InteriorDesign),
            "Diseño de Interiores"
        );
    }

    #[test]
    fn builtin_copy_is_complete() {
        assert!(Translator::builtin().missing_keys().is_empty());
    }

    #[test]
    fn audit_reports_absent_and_mismatched_keys() {
        let missing = partial_translator().missing_keys();
        assert_eq!(
            missing,
            vec![MissingKey {
                locale: Locale::En,
                key: "about.title".to_string(),
                kind_mismatch: true,
            }]
        );

        let mut es = Dictionary::new();
        es.insert_text("contact.send", "Enviar");
        let tr = Translator::empty().with_dictionary(Locale::Es, es);
        let missing = tr.missing_keys();
        assert_eq!(missing.len(), 1);
        assert!(!missing[0].kind_mismatch);
    }

    #[test]
    fn nested_override_of_existing_namespace_is_not_a_gap() {
        let value = serde_json::json!({ "nav": { "home": "Portada" } });
        let patch = Dictionary::from_value(&value).unwrap();
        assert!(patch.table("nav").is_some());
        let tr = Translator::builtin().with_overrides(Locale::Es, patch);
        assert_eq!(tr.resolve(Locale::Es, "nav.home"), "Portada");
        assert!(tr.missing_keys().is_empty());
    }

    #[test]
    fn table_with_untranslated_child_is_still_reported() {
        let value = serde_json::json!({ "nav": { "home": "Portada", "blog": "Bitácora" } });
        let patch = Dictionary::from_value(&value).unwrap();
        let tr = Translator::builtin().with_overrides(Locale::Es, patch);
        let keys: Vec<String> = tr.missing_keys().into_iter().map(|gap| gap.key).collect();
        assert_eq!(keys, vec!["nav".to_string(), "nav.blog".to_string()]);
    }

    #[test]
    fn overrides_merge_over_builtin() {
        let mut patch = Dictionary::new();
        patch.insert_text("hero.cta", "Browse work");
        let tr = Translator::builtin().with_overrides(Locale::En, patch);
        assert_eq!(tr.resolve(Locale::En, "hero.cta"), "Browse work");
        assert_eq!(tr.resolve(Locale::En, "nav.home"), "Home");
    }
}
