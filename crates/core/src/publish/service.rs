//! Publishing use cases: one note, or every note in a folder

use std::sync::Arc;

use ghostpress_domain::{
    BatchPlan, BatchSummary, Document, FolderEntry, PublishConfig, PublishResult,
};
use tracing::{info, instrument};

use super::ports::{ConfirmPublish, PostPublisher, PublishObserver};
use crate::batch::{BatchError, BatchOrchestrator};

/// Result of a folder publish request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderPublishOutcome {
    /// The folder holds no notes
    NoDocuments,
    /// Exactly one note; the single-note command should be used instead
    SingleDocument,
    /// The user refused the confirmation prompt
    Declined,
    /// The batch ran; the summary holds every result
    Completed(BatchSummary),
}

impl FolderPublishOutcome {
    /// Message shown to the user for this outcome.
    pub fn notice(&self) -> String {
        match self {
            Self::NoDocuments => BatchError::NoDocuments.to_string(),
            Self::SingleDocument => "Only one markdown file found in this folder. \
                                     Use `ghostpress publish` for single files."
                .to_string(),
            Self::Declined => "Batch publish cancelled.".to_string(),
            Self::Completed(summary) => summary.notice().to_string(),
        }
    }

    /// True when nothing was attempted or every attempt succeeded.
    pub fn is_success(&self) -> bool {
        match self {
            Self::Completed(summary) => summary.all_succeeded(),
            _ => true,
        }
    }
}

/// Publishing service wiring a publisher to the batch orchestrator.
pub struct PublishService {
    publisher: Arc<dyn PostPublisher>,
    orchestrator: BatchOrchestrator,
}

impl PublishService {
    /// Service publishing through `publisher`; batch events go to `observer`.
    pub fn new(publisher: Arc<dyn PostPublisher>, observer: Arc<dyn PublishObserver>) -> Self {
        let orchestrator = BatchOrchestrator::new(Arc::clone(&publisher), observer);
        Self { publisher, orchestrator }
    }

    /// Publish a single note.
    #[instrument(skip_all, fields(identifier = %document.identifier))]
    pub async fn publish_note(&self, document: &Document, config: &PublishConfig) -> PublishResult {
        let result = self.publisher.publish_one(document, config).await;
        info!(success = result.success, "Single publish finished");
        result
    }

    /// Publish every note of a folder after confirmation.
    ///
    /// Empty and single-note folders are turned away before prompting. Notes
    /// that could not be read count as failures of the batch.
    pub async fn publish_folder(
        &self,
        entries: &[FolderEntry],
        config: &PublishConfig,
        confirm: &dyn ConfirmPublish,
    ) -> FolderPublishOutcome {
        match BatchPlan::for_count(entries.len()) {
            BatchPlan::Empty => return FolderPublishOutcome::NoDocuments,
            BatchPlan::Single => return FolderPublishOutcome::SingleDocument,
            BatchPlan::Batch { count } => {
                if !confirm.confirm(entries) {
                    info!(count, "Batch publish declined");
                    return FolderPublishOutcome::Declined;
                }
            }
        }

        match self.orchestrator.publish_entries(entries, config).await {
            Ok(summary) => FolderPublishOutcome::Completed(summary),
            Err(BatchError::NoDocuments) => FolderPublishOutcome::NoDocuments,
        }
    }
}
