//! Listing Model
//!
//! The folder being shown, its items, and the sort descriptor that orders
//! them. The descriptor is the single source of truth for the sort pill.

use std::path::PathBuf;

use crate::folder::{FolderItem, RefineOptions};
use crate::logic::errors;
use crate::logic::location::{self, Location};
use crate::logic::sorting;

#[derive(Clone, Debug)]
pub struct ListingModel {
    pub root: PathBuf,

    /// Current sort descriptor
    pub sort: String,

    pub items: Vec<FolderItem>,

    pub selected_index: Option<usize>,

    /// Shareable location mirroring the query
    pub location: Location,

    /// Id of the most recent refresh request
    pub generation: u64,

    /// A refresh for `generation` is in flight
    pub loading: bool,

    pub last_error: Option<String>,
}

impl ListingModel {
    pub fn new(root: PathBuf, sort: String) -> Self {
        let location = Location::new(location::folder_path(&root));
        Self {
            root,
            sort,
            items: Vec::new(),
            selected_index: None,
            location,
            generation: 0,
            loading: false,
            last_error: None,
        }
    }

    pub fn selected_item(&self) -> Option<&FolderItem> {
        self.selected_index.and_then(|idx| self.items.get(idx))
    }

    /// Start a new refresh; returns its generation
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Whether a response belongs to the latest request
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Apply refine options: store the sort, mirror it into the location
    /// when asked, re-order what is on screen and start a refresh.
    /// Returns the generation the refresh must answer to.
    pub fn refine(&mut self, options: RefineOptions) -> u64 {
        self.sort = options.query.sort;
        if options.update_url {
            self.location.set("sort", self.sort.clone());
        }
        self.resort();
        self.begin_refresh()
    }

    /// Apply the answer to a refresh request
    ///
    /// Answers to superseded requests are dropped and `false` is returned.
    /// A failed scan keeps the previous items on screen.
    pub fn apply_response(
        &mut self,
        generation: u64,
        items: anyhow::Result<Vec<FolderItem>>,
    ) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(generation, current = self.generation, "dropping stale listing");
            return false;
        }

        self.loading = false;
        match items {
            Ok(items) => {
                tracing::debug!(generation, count = items.len(), "listing updated");
                self.replace_items(items);
                self.last_error = None;
            }
            Err(e) => {
                tracing::debug!(generation, error = %e, "listing failed");
                self.last_error = Some(errors::format_error_message(&e));
            }
        }
        true
    }

    /// Replace items, keeping the selection on the same name
    pub fn replace_items(&mut self, items: Vec<FolderItem>) {
        let selected_name = self.selected_item().map(|item| item.name.clone());
        self.items = items;
        self.restore_selection(selected_name);
    }

    /// Re-order the current items by the current sort
    pub fn resort(&mut self) {
        let selected_name = self.selected_item().map(|item| item.name.clone());
        sorting::sort_items(&mut self.items, &self.sort);
        self.restore_selection(selected_name);
    }

    fn restore_selection(&mut self, name: Option<String>) {
        if self.items.is_empty() {
            self.selected_index = None;
            return;
        }
        let found = name.and_then(|name| self.items.iter().position(|item| item.name == name));
        self.selected_index = found.or(Some(0)); // Default to first item if not found
    }
}
