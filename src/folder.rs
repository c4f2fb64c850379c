//! Folder listing data
//!
//! Items shown by the folder view, directory scanning, and the context
//! through which the sort selector requests a new ordering.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Folder,
    Document,
}

/// A single entry of a folder listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderItem {
    pub name: String,
    pub kind: ItemKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FolderItem {
    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }
}

/// Query part of a refine request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineQuery {
    pub sort: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineOptions {
    pub query: RefineQuery,
    /// Also write the query into the shareable location
    pub update_url: bool,
}

impl RefineOptions {
    pub fn sort(sort: impl Into<String>, update_url: bool) -> Self {
        Self {
            query: RefineQuery { sort: sort.into() },
            update_url,
        }
    }
}

/// Owner of the current sort descriptor
pub trait FolderDataContext {
    fn sort(&self) -> &str;

    /// Apply new query options and refresh the listing
    fn refine_folder_data(&mut self, options: RefineOptions);
}

/// Compile exclude globs, skipping (and logging) invalid ones
pub fn compile_excludes(patterns: &[String]) -> Vec<glob::Pattern> {
    patterns
        .iter()
        .filter_map(|p| match glob::Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!(pattern = %p, error = %e, "ignoring invalid exclude pattern");
                None
            }
        })
        .collect()
}

/// Read the direct children of `root`
///
/// Hidden entries (leading '.') and names matching an exclude pattern are
/// skipped. Creation time falls back to modification time when the
/// filesystem does not record it.
pub fn scan_folder(root: &Path, exclude: &[glob::Pattern]) -> Result<Vec<FolderItem>> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("reading {}", root.display()))?;

    let mut items = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading {}", root.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if name.starts_with('.') || exclude.iter().any(|p| p.matches(&name)) {
            continue;
        }

        // Follow symlinks so a linked folder lists as a folder; a broken
        // link falls back to the link itself
        let metadata = match std::fs::metadata(entry.path()).or_else(|_| entry.metadata()) {
            Ok(m) => m,
            Err(e) => {
                // Entry vanished or is unreadable; the rest of the listing is still useful
                tracing::debug!(name = %name, error = %e, "skipping entry");
                continue;
            }
        };

        let updated = match metadata.modified() {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(name = %name, error = %e, "skipping entry without modification time");
                continue;
            }
        };
        let created = metadata.created().unwrap_or(updated);

        items.push(FolderItem {
            name,
            kind: if metadata.is_dir() {
                ItemKind::Folder
            } else {
                ItemKind::Document
            },
            created_at: DateTime::<Utc>::from(created),
            updated_at: DateTime::<Utc>::from(updated),
        });
    }

    tracing::debug!(root = %root.display(), count = items.len(), "scanned folder");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_skips_hidden_and_excluded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.md"), "x").unwrap();
        std::fs::write(dir.path().join("build.log"), "x").unwrap();
        std::fs::write(dir.path().join(".secret"), "x").unwrap();
        std::fs::create_dir(dir.path().join("drafts")).unwrap();

        let exclude = compile_excludes(&["*.log".to_string()]);
        let mut items = scan_folder(dir.path(), &exclude).unwrap();
        items.sort_by(|a, b| a.name.cmp(&b.name));

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["drafts", "notes.md"]);
        assert!(items[0].is_folder());
        assert_eq!(items[1].kind, ItemKind::Document);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_folder_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("dangling"))
            .unwrap();

        let mut items = scan_folder(dir.path(), &[]).unwrap();
        items.sort_by(|a, b| a.name.cmp(&b.name));

        // A broken link stays in the listing as a document
        let kinds: Vec<(&str, ItemKind)> =
            items.iter().map(|i| (i.name.as_str(), i.kind)).collect();
        assert_eq!(
            kinds,
            vec![("dangling", ItemKind::Document), ("linked", ItemKind::Folder)]
        );
    }

    #[test]
    fn test_scan_missing_folder_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_folder(&dir.path().join("gone"), &[]).is_err());
    }

    #[test]
    fn test_invalid_exclude_is_dropped() {
        let patterns = compile_excludes(&["[".to_string(), "*.tmp".to_string()]);
        assert_eq!(patterns.len(), 1);
        assert!(patterns[0].matches("a.tmp"));
    }
}
