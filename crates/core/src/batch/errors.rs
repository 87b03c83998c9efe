use ghostpress_domain::GhostPressError;
use thiserror::Error;

/// Reasons a batch cannot start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// Empty input
    #[error("No markdown files found in this folder.")]
    NoDocuments,
}

impl From<BatchError> for GhostPressError {
    fn from(err: BatchError) -> Self {
        GhostPressError::InvalidInput(err.to_string())
    }
}
