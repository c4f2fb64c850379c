//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - listing: Responses from the listing service

pub mod keyboard;
pub mod listing;

// Re-export for convenience
pub use keyboard::handle_key;
pub use listing::handle_listing_response;
