//! Translation catalog
//!
//! Labels are looked up by namespaced keys such as `general:createdAt`.
//! Catalog files nest keys by namespace and may be JSON or YAML.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// Label lookup used by the sort selector and the UI
pub trait Translator {
    fn t(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn t(&self, key: &str) -> String {
        self(key)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read translations from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON translations: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML translations: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("translation `{0}` must be a string or a nested table")]
    InvalidEntry(String),
}

const ENGLISH: &[(&str, &str)] = &[
    ("general:sortBy", "Sort"),
    ("general:documentTitle", "Title"),
    ("general:createdAt", "Created At"),
    ("general:updatedAt", "Updated At"),
    ("general:ascending", "Ascending"),
    ("general:descending", "Descending"),
    ("general:folders", "Folders"),
    ("general:documents", "Documents"),
    ("general:loading", "Loading"),
    ("general:noResults", "No folders or documents found"),
    ("general:sortedBy", "Sorted by"),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Catalog {
    /// Built-in English labels
    pub fn english() -> Self {
        let entries = ENGLISH
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Overlay the English defaults with the labels from a JSON or YAML file.
    /// Files ending in `.json` are read as JSON, everything else as YAML.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let mut catalog = Self::english();
        if is_json {
            catalog.merge_json(&contents)?;
        } else {
            catalog.merge_yaml(&contents)?;
        }
        tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded translations");
        Ok(catalog)
    }

    pub fn merge_json(&mut self, contents: &str) -> Result<(), CatalogError> {
        let value: serde_json::Value = serde_json::from_str(contents)?;
        flatten_json(&value, None, &mut self.entries)
    }

    pub fn merge_yaml(&mut self, contents: &str) -> Result<(), CatalogError> {
        let value: serde_yaml::Value = serde_yaml::from_str(contents)?;
        flatten_yaml(&value, None, &mut self.entries)
    }
}

impl Translator for Catalog {
    fn t(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn join_key(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, key),
        None => key.to_string(),
    }
}

fn flatten_json(
    value: &serde_json::Value,
    prefix: Option<&str>,
    out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let full = join_key(prefix, key);
                flatten_json(child, Some(&full), out)?;
            }
            Ok(())
        }
        serde_json::Value::String(s) => {
            if let Some(key) = prefix {
                out.insert(key.to_string(), s.clone());
            }
            Ok(())
        }
        _ => Err(CatalogError::InvalidEntry(prefix.unwrap_or("<root>").to_string())),
    }
}

fn flatten_yaml(
    value: &serde_yaml::Value,
    prefix: Option<&str>,
    out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = key.as_str() else {
                    return Err(CatalogError::InvalidEntry(format!("{:?}", key)));
                };
                let full = join_key(prefix, key);
                flatten_yaml(child, Some(&full), out)?;
            }
            Ok(())
        }
        serde_yaml::Value::String(s) => {
            if let Some(key) = prefix {
                out.insert(key.to_string(), s.clone());
            }
            Ok(())
        }
        // An empty document parses as null
        serde_yaml::Value::Null if prefix.is_none() => Ok(()),
        _ => Err(CatalogError::InvalidEntry(prefix.unwrap_or("<root>").to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_echoes_key() {
        let catalog = Catalog::english();
        assert_eq!(catalog.t("general:nope"), "general:nope");
        assert_eq!(catalog.t("general:createdAt"), "Created At");
    }

    #[test]
    fn test_json_overlay_flattens_namespaces() {
        let mut catalog = Catalog::english();
        catalog
            .merge_json(r#"{ "general": { "createdAt": "Erstellt am", "ascending": "Aufsteigend" } }"#)
            .unwrap();

        assert_eq!(catalog.t("general:createdAt"), "Erstellt am");
        assert_eq!(catalog.t("general:ascending"), "Aufsteigend");
        // Untouched defaults survive the overlay
        assert_eq!(catalog.t("general:updatedAt"), "Updated At");
    }

    #[test]
    fn test_yaml_overlay_flattens_namespaces() {
        let mut catalog = Catalog::english();
        catalog
            .merge_yaml("general:\n  documentTitle: Titre\n  descending: Décroissant\n")
            .unwrap();

        assert_eq!(catalog.t("general:documentTitle"), "Titre");
        assert_eq!(catalog.t("general:descending"), "Décroissant");
    }

    #[test]
    fn test_non_string_leaf_is_rejected() {
        let mut catalog = Catalog::english();
        let err = catalog.merge_json(r#"{ "general": { "createdAt": 3 } }"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry(ref k) if k == "general:createdAt"));
    }

    #[test]
    fn test_closure_translator() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.t("general:sortBy"), "GENERAL:SORTBY");
    }

    #[test]
    fn test_load_from_file_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("de.json");
        std::fs::write(&path, r#"{"general":{"updatedAt":"Aktualisiert am"}}"#).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.t("general:updatedAt"), "Aktualisiert am");

        let missing = Catalog::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, CatalogError::Io { .. }));
    }
}
