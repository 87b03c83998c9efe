//! Domain types and models

pub mod document;
pub mod post;
pub mod publish;

pub use document::{Document, FolderEntry, NoteMetadata, UnreadableNote};
pub use post::{PostEnvelope, PostPayload, PostStatus};
pub use publish::{
    BatchPlan, BatchSummary, PublishErrorKind, PublishOutcome, PublishProgress, PublishResult,
    SummaryNotice,
};
