//! Listing Response Handler
//!
//! Applies answers from the listing service to the model.

use folderview::services::ListingResponse;

use crate::App;

/// Handle a listing response; answers to superseded requests are dropped
pub fn handle_listing_response(app: &mut App, response: ListingResponse) {
    app.model
        .listing
        .apply_response(response.generation, response.items);
}
