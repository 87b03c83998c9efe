//! Adapter errors
//!
//! Everything that can go wrong between a [`Document`] and a parsed Admin
//! API response. These never escape a publish call: the Ghost client folds
//! them into a failed [`PublishResult`].
//!
//! [`Document`]: ghostpress_domain::Document

pub mod conversions;

use ghostpress_core::AuthError;
use ghostpress_domain::{PublishErrorKind, PublishResult};
use thiserror::Error;

/// Broad classes of adapter failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishErrorCategory {
    /// Credential could not be turned into a token; nothing was sent
    Authentication,
    /// Request or response never completed, or the body was not JSON
    Transport,
    /// Local setup problem (client construction, invalid config)
    Config,
}

/// Failure inside one publish call
#[derive(Debug, Error)]
pub enum PublishError {
    /// Token signing failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// `name` is the error class shown to users, e.g. `ConnectError`
    #[error("{name}: {message}")]
    Transport { name: String, message: String },

    /// HTTP client could not be set up
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PublishError {
    /// Transport failure named by its error class.
    pub fn transport(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport { name: name.into(), message: message.into() }
    }

    /// Broad class of this failure.
    pub fn category(&self) -> PublishErrorCategory {
        match self {
            Self::Auth(_) => PublishErrorCategory::Authentication,
            Self::Transport { .. } => PublishErrorCategory::Transport,
            Self::Config(_) => PublishErrorCategory::Config,
        }
    }

    /// Failed result for `file_name` describing this error.
    pub fn into_result(self, file_name: &str) -> PublishResult {
        match self {
            Self::Auth(err) => PublishResult::failed(file_name, err.kind(), err.to_string()),
            Self::Transport { name, message } => {
                PublishResult::transport_failure(file_name, &name, &message)
            }
            Self::Config(message) => {
                PublishResult::failed(file_name, PublishErrorKind::Unknown, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            PublishError::from(AuthError::InvalidKeyFormat).category(),
            PublishErrorCategory::Authentication
        );
        assert_eq!(
            PublishError::transport("ConnectError", "refused").category(),
            PublishErrorCategory::Transport
        );
        assert_eq!(PublishError::Config("bad".into()).category(), PublishErrorCategory::Config);
    }

    #[test]
    fn test_auth_error_keeps_its_kind() {
        let result = PublishError::from(AuthError::InvalidSecretEncoding("odd".into()))
            .into_result("note");
        assert!(!result.success);
        assert_eq!(result.error_kind, Some(PublishErrorKind::InvalidSecretEncoding));
    }

    #[test]
    fn test_transport_error_message() {
        let result = PublishError::transport("TimeoutError", "deadline elapsed").into_result("n");
        let message = result.error.unwrap();
        assert!(message.starts_with("Couldn't connect to the Ghost API."));
        assert!(message.ends_with("\n\nTimeoutError: deadline elapsed"));
    }
}
