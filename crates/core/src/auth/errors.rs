//! Admin token signing errors

use ghostpress_domain::{GhostPressError, PublishErrorKind};
use thiserror::Error;

/// Failures while turning an Admin API key into a signed token.
///
/// None of these involve network I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Error: Ghost Admin API key is invalid (expected `<id>:<secret>`).")]
    InvalidKeyFormat,

    #[error("Error: Ghost Admin API key secret is not valid hex: {0}")]
    InvalidSecretEncoding(String),

    #[error("Error: failed to sign Admin API token: {0}")]
    Signing(String),
}

impl AuthError {
    /// Publish error kind reported for this failure
    pub fn kind(&self) -> PublishErrorKind {
        match self {
            Self::InvalidKeyFormat => PublishErrorKind::InvalidKeyFormat,
            Self::InvalidSecretEncoding(_) => PublishErrorKind::InvalidSecretEncoding,
            Self::Signing(_) => PublishErrorKind::Unknown,
        }
    }
}

impl From<AuthError> for GhostPressError {
    fn from(err: AuthError) -> Self {
        GhostPressError::Auth(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AuthError::InvalidKeyFormat.kind(), PublishErrorKind::InvalidKeyFormat);
        assert_eq!(
            AuthError::InvalidSecretEncoding("odd length".into()).kind(),
            PublishErrorKind::InvalidSecretEncoding
        );
        assert_eq!(AuthError::Signing("boom".into()).kind(), PublishErrorKind::Unknown);
    }

    #[test]
    fn test_converts_to_domain_auth_error() {
        let err: GhostPressError = AuthError::InvalidKeyFormat.into();
        assert!(matches!(err, GhostPressError::Auth(_)));
    }
}
