//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **ListingModel**: the folder being shown, its items and sort descriptor
//! - **UiModel**: preferences, the sort menu, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod listing;
pub mod ui;

pub use listing::ListingModel;
pub use ui::{SortMenuState, UiModel};

use std::path::PathBuf;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub listing: ListingModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(root: PathBuf, sort: String, vim_mode: bool) -> Self {
        Self {
            listing: ListingModel::new(root, sort),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Check if any modal is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }
}
