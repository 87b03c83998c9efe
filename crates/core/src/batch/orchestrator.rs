//! Sequential multi-document publishing

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use ghostpress_domain::constants::DIAGNOSTICS_TARGET;
use ghostpress_domain::{
    BatchSummary, Document, FolderEntry, PublishConfig, PublishProgress, PublishResult,
    UnreadableNote,
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::errors::BatchError;
use crate::publish::ports::{PostPublisher, PublishObserver};

/// Publishes documents one at a time, isolating each failure.
///
/// Documents are never sent concurrently. A failed (or panicking) publish is
/// recorded and the batch moves on to the next document.
pub struct BatchOrchestrator {
    publisher: Arc<dyn PostPublisher>,
    observer: Arc<dyn PublishObserver>,
}

impl BatchOrchestrator {
    /// Orchestrator sending through `publisher` and reporting to `observer`.
    pub fn new(publisher: Arc<dyn PostPublisher>, observer: Arc<dyn PublishObserver>) -> Self {
        Self { publisher, observer }
    }

    /// Publish every document in order and summarize the outcome.
    ///
    /// The observer sees `on_batch_started`, one `on_progress` per document
    /// (before the next one starts), then `on_summary`.
    ///
    /// # Errors
    ///
    /// [`BatchError::NoDocuments`] for an empty slice; nothing is sent.
    pub async fn publish_many(
        &self,
        documents: &[Document],
        config: &PublishConfig,
    ) -> Result<BatchSummary, BatchError> {
        self.run(documents.iter().map(Ok).collect(), config).await
    }

    /// Like [`BatchOrchestrator::publish_many`], for folder entries.
    ///
    /// An unreadable entry is recorded as a failed result in its position;
    /// the rest of the batch still runs.
    ///
    /// # Errors
    ///
    /// [`BatchError::NoDocuments`] for an empty slice; nothing is sent.
    pub async fn publish_entries(
        &self,
        entries: &[FolderEntry],
        config: &PublishConfig,
    ) -> Result<BatchSummary, BatchError> {
        self.run(entries.iter().map(FolderEntry::as_document).collect(), config).await
    }

    #[instrument(skip_all, fields(batch_id = %Uuid::new_v4(), total = items.len()))]
    async fn run(
        &self,
        items: Vec<Result<&Document, &UnreadableNote>>,
        config: &PublishConfig,
    ) -> Result<BatchSummary, BatchError> {
        if items.is_empty() {
            return Err(BatchError::NoDocuments);
        }

        let total = items.len();
        info!("Starting batch publish");
        self.observer.on_batch_started(total);

        let mut results = Vec::with_capacity(total);

        for (position, item) in items.into_iter().enumerate() {
            let (identifier, result) = match item {
                Ok(document) => {
                    (&document.identifier, self.publish_isolated(document, config).await)
                }
                Err(note) => (&note.identifier, PublishResult::unreadable(note)),
            };

            if result.success {
                debug!(%identifier, "Published document");
            } else {
                warn!(
                    %identifier,
                    kind = ?result.error_kind,
                    "Publishing document failed"
                );
            }

            let progress = PublishProgress {
                index: position + 1,
                total,
                identifier: identifier.clone(),
                outcome: result.outcome(),
            };
            self.observer.on_progress(&progress);
            results.push(result);
        }

        let summary = BatchSummary::from_results(results);
        info!(
            successful = summary.successful,
            failed = summary.failed,
            "Batch publish completed"
        );
        self.observer.on_summary(&summary);

        if config.debug_log && !summary.all_succeeded() {
            for failure in summary.failures() {
                debug!(
                    target: DIAGNOSTICS_TARGET,
                    file_name = %failure.file_name,
                    error = failure.error.as_deref().unwrap_or_default(),
                    "Failed publish"
                );
            }
        }

        Ok(summary)
    }

    async fn publish_isolated(&self, document: &Document, config: &PublishConfig) -> PublishResult {
        match AssertUnwindSafe(self.publisher.publish_one(document, config)).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(identifier = %document.identifier, panic = %message, "Publisher panicked");
                PublishResult::transport_failure(&document.identifier, "Panic", &message)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "publisher panicked".to_string()
    }
}
