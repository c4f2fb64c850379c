//! Background Services
//!
//! This module contains workers that run off the UI thread:
//! - listing: Folder scan and ordering for refresh requests

pub mod listing;

// Re-export commonly used types for convenience
pub use listing::{spawn_listing_service, ListingRequest, ListingResponse};
