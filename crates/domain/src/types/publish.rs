//! Publish outcomes, progress events, and batch summaries

use std::fmt;

use serde::{Deserialize, Serialize};

use super::document::{Document, UnreadableNote};
use super::post::PostStatus;
use crate::constants::{CONNECT_FAILURE_PREFIX, PUBLISH_FALLBACK_ERROR, UNREADABLE_NOTE_PREFIX};
use crate::impl_wire_str_conversions;

/// Classification of a failed publish attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishErrorKind {
    /// Credential is not `<id>:<secret>`; no request was sent
    InvalidKeyFormat,
    /// Credential secret is not valid hex; no request was sent
    InvalidSecretEncoding,
    /// Server answered with a structured `errors` body
    RemoteRejected,
    /// Network, DNS, timeout, or response parsing failure
    TransportFailure,
    /// The note file could not be read; nothing was sent
    Unreadable,
    /// Server answered, but with neither posts nor errors
    Unknown,
}

impl_wire_str_conversions!(PublishErrorKind {
    InvalidKeyFormat => "invalid_key_format",
    InvalidSecretEncoding => "invalid_secret_encoding",
    RemoteRejected => "remote_rejected",
    TransportFailure => "transport_failure",
    Unreadable => "unreadable",
    Unknown => "unknown",
});

/// Outcome of publishing one document. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    /// True when the Admin API created the post
    pub success: bool,
    /// Identifier of the published document
    pub file_name: String,
    /// Title echoed by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Status echoed by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    /// User-facing error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Classification of the failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<PublishErrorKind>,
}

impl PublishResult {
    /// Successful publish; `title` and `status` are the values echoed by the server.
    pub fn succeeded(
        file_name: impl Into<String>,
        title: Option<String>,
        status: Option<PostStatus>,
    ) -> Self {
        Self {
            success: true,
            file_name: file_name.into(),
            title,
            status,
            error: None,
            error_kind: None,
        }
    }

    /// Failed publish with an already composed message.
    pub fn failed(
        file_name: impl Into<String>,
        kind: PublishErrorKind,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            file_name: file_name.into(),
            title: None,
            status: None,
            error: Some(error.into()),
            error_kind: Some(kind),
        }
    }

    /// Failure that never produced a usable response.
    ///
    /// `name` is the error class (`ConnectError`, `JsonParseError`, ...).
    pub fn transport_failure(file_name: impl Into<String>, name: &str, message: &str) -> Self {
        Self::failed(
            file_name,
            PublishErrorKind::TransportFailure,
            format!("{CONNECT_FAILURE_PREFIX}\n\n{name}: {message}"),
        )
    }

    /// Note that could not be read from disk.
    pub fn unreadable(note: &UnreadableNote) -> Self {
        Self::failed(
            note.identifier.clone(),
            PublishErrorKind::Unreadable,
            format!("{UNREADABLE_NOTE_PREFIX} {}", note.reason),
        )
    }

    /// Progress outcome for this result.
    pub fn outcome(&self) -> PublishOutcome {
        if self.success {
            PublishOutcome::Succeeded
        } else {
            PublishOutcome::Failed
        }
    }

    /// One-line message for the single-publish path.
    pub fn notice(&self) -> String {
        if self.success {
            let title = self.title.as_deref().unwrap_or(&self.file_name);
            match self.status {
                Some(status) => format!("\"{title}\" has been {status} successfully!"),
                None => format!("\"{title}\" has been sent successfully!"),
            }
        } else {
            self.error.clone().unwrap_or_else(|| PUBLISH_FALLBACK_ERROR.to_string())
        }
    }
}

/// Whether a single document made it to the blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishOutcome {
    /// Post created
    Succeeded,
    /// Any failure
    Failed,
}

/// Emitted after each document of a batch completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishProgress {
    /// 1-based position of the document in the batch
    pub index: usize,
    /// Number of documents in the batch
    pub total: usize,
    /// Document identifier
    pub identifier: String,
    /// Whether it was published
    pub outcome: PublishOutcome,
}

impl fmt::Display for PublishProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.outcome {
            PublishOutcome::Succeeded => "Published",
            PublishOutcome::Failed => "Failed",
        };
        write!(f, "[{}/{}] {}: {}", self.index, self.total, verb, self.identifier)
    }
}

/// How many documents a caller is about to publish.
///
/// Lets hosts redirect empty or single-document selections before starting a
/// batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPlan {
    /// Nothing to publish
    Empty,
    /// One document
    Single,
    /// Two or more documents
    Batch {
        /// Number of documents
        count: usize,
    },
}

impl BatchPlan {
    /// Plan for a list of documents.
    pub fn of(documents: &[Document]) -> Self {
        Self::for_count(documents.len())
    }

    /// Plan for `count` notes, whether or not they could be read.
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::Single,
            count => Self::Batch { count },
        }
    }
}

/// Aggregate result of a batch.
///
/// `total == successful + failed == results.len()`, results in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Documents attempted
    pub total: usize,
    /// Documents published
    pub successful: usize,
    /// Documents that failed
    pub failed: usize,
    /// Per-document results
    pub results: Vec<PublishResult>,
}

impl BatchSummary {
    /// Summarize results kept in input order.
    pub fn from_results(results: Vec<PublishResult>) -> Self {
        let successful = results.iter().filter(|r| r.success).count();
        Self { total: results.len(), successful, failed: results.len() - successful, results }
    }

    /// Failed results, in input order.
    pub fn failures(&self) -> impl Iterator<Item = &PublishResult> {
        self.results.iter().filter(|r| !r.success)
    }

    /// Identifiers of the failed documents.
    pub fn failed_identifiers(&self) -> Vec<String> {
        self.failures().map(|r| r.file_name.clone()).collect()
    }

    /// True when nothing failed.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Final message for the user.
    pub fn notice(&self) -> SummaryNotice {
        if self.failed == 0 {
            SummaryNotice::AllSucceeded { count: self.successful }
        } else if self.successful == 0 {
            SummaryNotice::AllFailed { count: self.failed, failed: self.failed_identifiers() }
        } else {
            SummaryNotice::Mixed {
                successful: self.successful,
                total: self.total,
                failed: self.failed_identifiers(),
            }
        }
    }
}

/// Final user-facing message of a batch. Always lists failed identifiers so
/// the user can re-run selectively.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SummaryNotice {
    /// Every document was published
    AllSucceeded { count: usize },
    /// Nothing was published
    AllFailed { count: usize, failed: Vec<String> },
    /// Some documents failed
    Mixed { successful: usize, total: usize, failed: Vec<String> },
}

impl fmt::Display for SummaryNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllSucceeded { count } => {
                write!(f, "Successfully published all {count} posts to Ghost!")
            }
            Self::AllFailed { count, failed } => write!(
                f,
                "Failed to publish all {count} posts.\nFailed files: {}",
                failed.join(", ")
            ),
            Self::Mixed { successful, total, failed } => {
                write!(f, "Published {successful}/{total} posts.\nFailed: {}", failed.join(", "))
            }
        }
    }
}
