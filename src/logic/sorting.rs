//! Sorting comparison logic
//!
//! Pure functions for ordering folder items by a sort descriptor.

use crate::folder::FolderItem;
use crate::logic::descriptor;
use crate::{SortDirection, SortField};
use std::cmp::Ordering;

/// Case-insensitive, then byte order so names differing only by case
/// keep a stable position across refreshes
fn compare_names(a: &FolderItem, b: &FolderItem) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Compare two folder items by a sort descriptor
///
/// # Sort Rules
/// - Folders always come before documents, in either direction
/// - Within the same kind, compare by the descriptor's field
///   (unknown keys compare by title, like the pill shows)
/// - Ties break alphabetically and are not reversed
pub fn compare_items(a: &FolderItem, b: &FolderItem, sort: &str) -> Ordering {
    if a.is_folder() != b.is_folder() {
        return if a.is_folder() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let by_field = match descriptor::field(sort) {
        SortField::DocumentTitle => compare_names(a, b),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };

    let by_field = match descriptor::direction(sort) {
        SortDirection::Asc => by_field,
        SortDirection::Desc => by_field.reverse(),
    };

    by_field.then_with(|| compare_names(a, b))
}

/// Sort items in place
pub fn sort_items(items: &mut [FolderItem], sort: &str) {
    items.sort_by(|a, b| compare_items(a, b, sort));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::ItemKind;
    use chrono::{DateTime, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn make_doc(name: &str, created: &str, updated: &str) -> FolderItem {
        FolderItem {
            name: name.to_string(),
            kind: ItemKind::Document,
            created_at: ts(created),
            updated_at: ts(updated),
        }
    }

    fn make_folder(name: &str) -> FolderItem {
        FolderItem {
            name: name.to_string(),
            kind: ItemKind::Folder,
            created_at: ts("2023-01-01T00:00:00Z"),
            updated_at: ts("2023-01-01T00:00:00Z"),
        }
    }

    #[test]
    fn test_folders_before_documents_in_both_directions() {
        let folder = make_folder("zeta");
        let doc = make_doc("alpha", "2023-01-01T00:00:00Z", "2023-01-01T00:00:00Z");

        for sort in ["documentTitle", "-documentTitle", "createdAt", "-updatedAt"] {
            assert_eq!(compare_items(&folder, &doc, sort), Ordering::Less, "{sort}");
            assert_eq!(compare_items(&doc, &folder, sort), Ordering::Greater, "{sort}");
        }
    }

    #[test]
    fn test_title_is_case_insensitive() {
        let a = make_doc("apple", "2023-01-01T00:00:00Z", "2023-01-01T00:00:00Z");
        let b = make_doc("Banana", "2023-01-01T00:00:00Z", "2023-01-01T00:00:00Z");

        assert_eq!(compare_items(&a, &b, "documentTitle"), Ordering::Less);
        assert_eq!(compare_items(&a, &b, "-documentTitle"), Ordering::Greater);
    }

    #[test]
    fn test_created_at_oldest_first_when_ascending() {
        let old = make_doc("b", "2023-01-01T00:00:00Z", "2024-06-01T00:00:00Z");
        let new = make_doc("a", "2023-12-31T23:59:59Z", "2023-02-01T00:00:00Z");

        assert_eq!(compare_items(&old, &new, "createdAt"), Ordering::Less);
        assert_eq!(compare_items(&old, &new, "-createdAt"), Ordering::Greater);
        // Updated timestamps order the other way round
        assert_eq!(compare_items(&old, &new, "updatedAt"), Ordering::Greater);
    }

    #[test]
    fn test_ties_break_by_name_ascending() {
        let a = make_doc("a", "2023-01-01T00:00:00Z", "2023-01-01T00:00:00Z");
        let b = make_doc("b", "2023-01-01T00:00:00Z", "2023-01-01T00:00:00Z");

        assert_eq!(compare_items(&a, &b, "createdAt"), Ordering::Less);
        assert_eq!(compare_items(&a, &b, "-createdAt"), Ordering::Less);
    }

    #[test]
    fn test_case_only_differences_sort_the_same_from_any_input_order() {
        let names = ["readme", "README", "Readme"];
        let make = |order: &[&str]| -> Vec<FolderItem> {
            order
                .iter()
                .map(|n| make_doc(n, "2023-01-01T00:00:00Z", "2023-01-01T00:00:00Z"))
                .collect()
        };

        let mut forward = make(&names[..]);
        let reversed: Vec<&str> = names.iter().rev().copied().collect();
        let mut backward = make(&reversed[..]);

        for sort in ["documentTitle", "-documentTitle", "createdAt"] {
            sort_items(&mut forward, sort);
            sort_items(&mut backward, sort);
            assert_eq!(forward, backward, "{sort}");
        }

        sort_items(&mut forward, "documentTitle");
        let sorted: Vec<&str> = forward.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(sorted, vec!["README", "Readme", "readme"]);
    }

    #[test]
    fn test_unknown_key_sorts_by_title() {
        let mut items = vec![
            make_doc("c", "2023-01-01T00:00:00Z", "2023-01-01T00:00:00Z"),
            make_folder("b"),
            make_doc("a", "2023-03-01T00:00:00Z", "2023-01-01T00:00:00Z"),
        ];
        sort_items(&mut items, "-title");

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }
}
