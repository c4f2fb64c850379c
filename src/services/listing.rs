//! Listing refresh worker
//!
//! Scans the folder off the UI thread and answers with ordered items.
//! Requests carry a generation so the UI can drop answers to requests
//! that were superseded ("last click wins").

use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::folder::{self, FolderItem};
use crate::logic::sorting;

#[derive(Debug, Clone)]
pub struct ListingRequest {
    pub generation: u64,
    pub root: PathBuf,
    pub sort: String,
    pub exclude: Vec<glob::Pattern>,
}

#[derive(Debug)]
pub struct ListingResponse {
    pub generation: u64,
    pub items: Result<Vec<FolderItem>, anyhow::Error>,
}

async fn execute_request(request: ListingRequest) -> ListingResponse {
    let generation = request.generation;

    let items = tokio::task::spawn_blocking(move || {
        let mut items = folder::scan_folder(&request.root, &request.exclude)?;
        sorting::sort_items(&mut items, &request.sort);
        Ok::<_, anyhow::Error>(items)
    })
    .await
    .unwrap_or_else(|e| Err(anyhow::anyhow!("listing task failed: {}", e)));

    ListingResponse { generation, items }
}

/// Spawn the listing worker
pub fn spawn_listing_service() -> (
    mpsc::UnboundedSender<ListingRequest>,
    mpsc::UnboundedReceiver<ListingResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ListingRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ListingResponse>();

    tokio::spawn(async move {
        while let Some(mut request) = request_rx.recv().await {
            // Requests queued behind this one supersede it
            while let Ok(newer) = request_rx.try_recv() {
                tracing::debug!(
                    skipped = request.generation,
                    next = newer.generation,
                    "coalescing listing requests"
                );
                request = newer;
            }

            tracing::debug!(generation = request.generation, root = %request.root.display(), sort = %request.sort, "listing request");

            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                let response = execute_request(request).await;
                if let Err(e) = &response.items {
                    tracing::warn!(generation = response.generation, error = %e, "listing failed");
                }
                let _ = response_tx.send(response);
            });
        }
        tracing::debug!("listing service stopped");
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_service_answers_with_sorted_items() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.md"), "x").unwrap();
        std::fs::write(dir.path().join("a.md"), "x").unwrap();
        std::fs::create_dir(dir.path().join("z")).unwrap();

        let (tx, mut rx) = spawn_listing_service();
        tx.send(ListingRequest {
            generation: 7,
            root: dir.path().to_path_buf(),
            sort: "-documentTitle".to_string(),
            exclude: Vec::new(),
        })
        .unwrap();

        let response = rx.recv().await.unwrap();
        assert_eq!(response.generation, 7);
        let names: Vec<String> = response
            .items
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["z", "b.md", "a.md"]);
    }

    #[tokio::test]
    async fn test_service_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = spawn_listing_service();
        tx.send(ListingRequest {
            generation: 1,
            root: dir.path().join("missing"),
            sort: String::new(),
            exclude: Vec::new(),
        })
        .unwrap();

        let response = rx.recv().await.unwrap();
        assert!(response.items.is_err());
    }
}
