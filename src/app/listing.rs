//! Listing refresh requests

use folderview::services::ListingRequest;

use crate::App;

impl App {
    /// Ask the listing service for the current folder, tagged with `generation`
    pub(crate) fn request_listing(&mut self, generation: u64) {
        let request = ListingRequest {
            generation,
            root: self.model.listing.root.clone(),
            sort: self.model.listing.sort.clone(),
            exclude: self.exclude.clone(),
        };

        if let Err(e) = self.listing_tx.send(request) {
            tracing::error!(generation, error = %e, "listing service is gone");
            self.model.listing.loading = false;
            self.model.listing.last_error = Some("Listing service stopped".to_string());
        }
    }
}
