//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in folderview::model)
//! - The listing service
//! - Logic (pure business logic in folderview::logic)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod listing;
pub(crate) mod sorting;
