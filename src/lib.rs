//! Folder View Library
//!
//! Exposes the sort selector, listing logic and models for the binary and tests

pub mod config;
pub mod folder;
pub mod i18n;
pub mod logic;
pub mod model;
pub mod services;

/// Sortable attribute of a folder listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    DocumentTitle,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Every field option, in menu order. The first one is the fallback.
    pub const ALL: [SortField; 3] = [
        SortField::DocumentTitle,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    /// Key used inside a sort descriptor
    pub fn key(&self) -> &'static str {
        match self {
            SortField::DocumentTitle => "documentTitle",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    /// Translation key for the option label
    pub fn label_key(&self) -> &'static str {
        match self {
            SortField::DocumentTitle => "general:documentTitle",
            SortField::CreatedAt => "general:createdAt",
            SortField::UpdatedAt => "general:updatedAt",
        }
    }

    /// Look up the option whose key matches exactly
    pub fn from_key(key: &str) -> Option<SortField> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl Default for SortField {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// Sort direction encoded by the descriptor's optional leading '-'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Asc, SortDirection::Desc];

    pub fn label_key(&self) -> &'static str {
        match self {
            SortDirection::Asc => "general:ascending",
            SortDirection::Desc => "general:descending",
        }
    }

    pub fn flipped(&self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}
