//! Background fetch coordination.
//!
//! One tokio task per requested fetch, each resolving to a [`FetchOutcome`]
//! on an mpsc channel that the UI event loop drains between input events.
//! The outcome carries the sequence number issued by
//! [`crate::dataset::Dataset::begin_fetch`], so the dataset — not the
//! orchestrator — decides whether a result is still current.

use std::sync::Arc;

use lens_data::client::{FetchPayload, ListingSource};
use tokio::sync::mpsc;

/// Terminal state of one fetch task.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The fetch completed; commit if the sequence number is still current.
    Loaded { seq: u64, payload: FetchPayload },
    /// The fetch failed; reset the dataset if the sequence number is still
    /// current.
    Failed { seq: u64, message: String },
}

/// Spawns fetch tasks and funnels their outcomes to a single receiver.
pub struct FetchOrchestrator {
    source: Arc<ListingSource>,
    tx: mpsc::Sender<FetchOutcome>,
}

impl FetchOrchestrator {
    /// Create an orchestrator over `source` with a bounded outcome channel.
    pub fn new(source: ListingSource, buffer: usize) -> (Self, mpsc::Receiver<FetchOutcome>) {
        let (tx, rx) = mpsc::channel(buffer);
        (
            Self {
                source: Arc::new(source),
                tx,
            },
            rx,
        )
    }

    /// Start a fetch for `suburb` on a background task.
    ///
    /// `seq` must come from `Dataset::begin_fetch` for the same request; it
    /// travels with the outcome untouched.
    pub fn spawn_fetch(&self, seq: u64, suburb: String, property_type: Option<String>) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            tracing::debug!(seq, %suburb, "fetch task started");
            let outcome = match source.fetch(&suburb, property_type.as_deref()).await {
                Ok(payload) => FetchOutcome::Loaded { seq, payload },
                Err(e) => FetchOutcome::Failed {
                    seq,
                    message: e.to_string(),
                },
            };
            if tx.send(outcome).await.is_err() {
                tracing::debug!(seq, "outcome receiver dropped; discarding fetch result");
            }
        });
    }
}
