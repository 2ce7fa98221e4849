// SPDX-License-Identifier: PMPL-1.0-or-later

//! Owned per-locale dictionaries.
//!
//! A dictionary maps dotted keys to either a display string or a small
//! label table. Dictionary files are nested JSON/YAML mappings; nesting is
//! flattened into dotted keys, and a mapping whose children are all strings
//! is additionally kept whole as a table under its own key:
//!
//! ```yaml
//! hero:
//!   title: Architecture you can see before it exists
//! roles:
//!   visualization: Visualization
//! ```
//!
//! yields `hero.title` (text), `roles.visualization` (text) and `roles`
//! (table).

use super::catalog::{StaticEntry, StaticTable};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Label table for structured values, e.g. role -> short label.
pub type LabelTable = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Table(LabelTable),
}

impl Entry {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Text(text) => Some(text.as_str()),
            Entry::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&LabelTable> {
        match self {
            Entry::Text(_) => None,
            Entry::Table(table) => Some(table),
        }
    }

    pub(crate) fn same_kind(&self, other: &Entry) -> bool {
        matches!(
            (self, other),
            (Entry::Text(_), Entry::Text(_)) | (Entry::Table(_), Entry::Table(_))
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, Entry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_static(table: StaticTable) -> Self {
        let entries = table
            .iter()
            .map(|&(key, entry)| {
                let entry = match entry {
                    StaticEntry::Text(text) => Entry::Text(text.to_string()),
                    StaticEntry::Table(rows) => Entry::Table(
                        rows.iter()
                            .map(|&(k, v)| (k.to_string(), v.to_string()))
                            .collect(),
                    ),
                };
                (key.to_string(), entry)
            })
            .collect();
        Self { entries }
    }

    pub fn insert_text(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), Entry::Text(text.into()));
    }

    pub fn insert_table(&mut self, key: impl Into<String>, table: LabelTable) {
        self.entries.insert(key.into(), Entry::Table(table));
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Entry::as_text)
    }

    pub fn table(&self, key: &str) -> Option<&LabelTable> {
        self.get(key).and_then(Entry::as_table)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge `other` over `self`; entries from `other` win.
    pub fn merge(&mut self, other: Dictionary) {
        self.entries.extend(other.entries);
    }

    /// Load a nested JSON or YAML dictionary file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading dictionary {}", path.display()))?;
        // YAML is parsed into the JSON value model so both formats share
        // one flattening pass.
        let value: Value = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json dictionary {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml dictionary {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported dictionary extension for {}",
                    path.display()
                ))
            }
        };
        let dictionary = Self::from_value(&value)
            .with_context(|| format!("flattening dictionary {}", path.display()))?;
        tracing::debug!(path = %path.display(), keys = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Flatten a nested value into a dictionary. The root must be a mapping.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(anyhow!("dictionary root must be a mapping"));
        };
        let mut dictionary = Dictionary::new();
        for (key, child) in root {
            flatten_into(&mut dictionary, key, child)?;
        }
        Ok(dictionary)
    }
}

fn flatten_into(dictionary: &mut Dictionary, key: &str, value: &Value) -> Result<()> {
    match value {
        Value::String(text) => {
            dictionary.insert_text(key, text.as_str());
        }
        Value::Object(children) => {
            let labels: Option<LabelTable> = children
                .iter()
                .map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect();
            if let Some(labels) = labels.filter(|l| !l.is_empty()) {
                dictionary.insert_table(key, labels);
            }
            for (child_key, child) in children {
                flatten_into(dictionary, &format!("{}.{}", key, child_key), child)?;
            }
        }
        Value::Null => {}
        other => {
            return Err(anyhow!(
                "unsupported value for key '{}': expected string or mapping, found {}",
                key,
                other
            ))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_mapping_flattens_to_dotted_keys() {
        let value = json!({
            "hero": { "title": "Hello", "cta": { "primary": "Go" } },
            "footer.rights": "All rights reserved."
        });
        let dict = Dictionary::from_value(&value).unwrap();
        assert_eq!(dict.text("hero.title"), Some("Hello"));
        assert_eq!(dict.text("hero.cta.primary"), Some("Go"));
        assert_eq!(dict.text("footer.rights"), Some("All rights reserved."));
    }

    #[test]
    fn string_only_mapping_is_kept_as_table() {
        let value = json!({ "roles": { "visualization": "Viz", "interiors": "Int" } });
        let dict = Dictionary::from_value(&value).unwrap();
        let roles = dict.table("roles").expect("roles table");
        assert_eq!(roles.get("visualization").map(String::as_str), Some("Viz"));
        assert_eq!(dict.text("roles"), None);
        assert_eq!(dict.text("roles.interiors"), Some("Int"));
    }

    #[test]
    fn mixed_mapping_is_not_a_table() {
        let value = json!({ "hero": { "title": "Hi", "cta": { "primary": "Go" } } });
        let dict = Dictionary::from_value(&value).unwrap();
        assert!(dict.table("hero").is_none());
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        assert!(Dictionary::from_value(&json!(["a", "b"])).is_err());
        assert!(Dictionary::from_value(&json!({ "count": 3 })).is_err());
    }

    #[test]
    fn merge_prefers_incoming_entries() {
        let mut base = Dictionary::new();
        base.insert_text("hero.title", "Old");
        base.insert_text("hero.cta", "Keep");
        let mut incoming = Dictionary::new();
        incoming.insert_text("hero.title", "New");
        base.merge(incoming);
        assert_eq!(base.text("hero.title"), Some("New"));
        assert_eq!(base.text("hero.cta"), Some("Keep"));
    }
}
