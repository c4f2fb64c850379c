//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - descriptor: Sort descriptor parsing and formatting
//! - errors: Listing error classification for display
//! - location: Shareable location updated on sort changes
//! - sort_selector: Sort pill state derivation and menu actions
//! - sorting: Folder item ordering by descriptor
//! - ui: UI state transitions (menu cursor, toast expiry)

pub mod descriptor;
pub mod errors;
pub mod location;
pub mod sort_selector;
pub mod sorting;
pub mod ui;
