//! Sort descriptor parsing
//!
//! A sort descriptor is the string the folder view stores for its ordering:
//! an optional leading '-' for descending, followed by the field key.

use crate::{SortDirection, SortField};

/// Direction encoded by a descriptor
///
/// # Examples
/// ```
/// use folderview::SortDirection;
/// use folderview::logic::descriptor::direction;
///
/// assert_eq!(direction("-createdAt"), SortDirection::Desc);
/// assert_eq!(direction("title"), SortDirection::Asc);
/// ```
pub fn direction(descriptor: &str) -> SortDirection {
    if descriptor.starts_with('-') {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}

/// Field key of a descriptor: the descriptor with one leading '-' removed
///
/// # Examples
/// ```
/// use folderview::logic::descriptor::field_key;
///
/// assert_eq!(field_key("-createdAt"), "createdAt");
/// assert_eq!(field_key("title"), "title");
/// assert_eq!(field_key("--x"), "-x");
/// ```
pub fn field_key(descriptor: &str) -> &str {
    match direction(descriptor) {
        SortDirection::Desc => &descriptor[1..],
        SortDirection::Asc => descriptor,
    }
}

/// Field option selected by a descriptor, falling back to the first option
/// when the key matches none of them
pub fn field(descriptor: &str) -> SortField {
    SortField::from_key(field_key(descriptor)).unwrap_or_default()
}

/// Build a descriptor from a raw field key and a direction
pub fn format(key: &str, direction: SortDirection) -> String {
    match direction {
        SortDirection::Asc => key.to_string(),
        SortDirection::Desc => format!("-{}", key),
    }
}

/// Same field key, new direction
pub fn with_direction(descriptor: &str, direction: SortDirection) -> String {
    format(field_key(descriptor), direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_follows_leading_dash() {
        for d in ["-createdAt", "-", "--x", "-documentTitle"] {
            assert_eq!(direction(d), SortDirection::Desc, "{d}");
        }
        for d in ["createdAt", "", "title-", " -x"] {
            assert_eq!(direction(d), SortDirection::Asc, "{d}");
        }
    }

    #[test]
    fn test_field_key_strips_single_dash() {
        assert_eq!(field_key("-updatedAt"), "updatedAt");
        assert_eq!(field_key("updatedAt"), "updatedAt");
        assert_eq!(field_key("-"), "");
        assert_eq!(field_key(""), "");
        assert_eq!(field_key("--x"), "-x");
    }

    #[test]
    fn test_field_falls_back_to_first_option() {
        assert_eq!(field("-createdAt"), SortField::CreatedAt);
        assert_eq!(field("title"), SortField::DocumentTitle);
        assert_eq!(field(""), SortField::DocumentTitle);
        assert_eq!(field("-updatedAt"), SortField::UpdatedAt);
    }

    #[test]
    fn test_with_direction_keeps_unknown_keys() {
        assert_eq!(with_direction("title", SortDirection::Desc), "-title");
        assert_eq!(with_direction("-title", SortDirection::Asc), "title");
        assert_eq!(with_direction("-title", SortDirection::Desc), "-title");
    }
}
