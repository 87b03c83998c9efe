//! Port interfaces for the publishing pipeline

use async_trait::async_trait;
use ghostpress_domain::{
    BatchSummary, Document, FolderEntry, PublishConfig, PublishProgress, PublishResult,
};

/// Sends one document to the blog.
///
/// Implementations never fail outright: every problem, local or remote, is
/// folded into the returned [`PublishResult`].
#[async_trait]
pub trait PostPublisher: Send + Sync {
    /// Publish `document` and report what happened.
    async fn publish_one(&self, document: &Document, config: &PublishConfig) -> PublishResult;
}

/// Receives batch lifecycle events.
///
/// Called from the orchestrator's task, in order. All methods default to
/// doing nothing.
pub trait PublishObserver: Send + Sync {
    /// A batch of `total` notes is about to start.
    fn on_batch_started(&self, _total: usize) {}

    /// One note finished.
    fn on_progress(&self, _progress: &PublishProgress) {}

    /// Every note finished.
    fn on_summary(&self, _summary: &BatchSummary) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PublishObserver for NoopObserver {}

/// Asks the user whether a multi-document publish should go ahead.
pub trait ConfirmPublish: Send + Sync {
    /// True to go ahead with publishing `entries`.
    fn confirm(&self, entries: &[FolderEntry]) -> bool;
}

/// Confirmation that always answers yes (`--yes` on the command line)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmPublish for AlwaysConfirm {
    fn confirm(&self, _entries: &[FolderEntry]) -> bool {
        true
    }
}
