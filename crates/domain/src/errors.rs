//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ghostpress
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GhostPressError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for GhostPressError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(err.to_string()),
            _ => Self::Io(err.to_string()),
        }
    }
}

/// Result type alias for ghostpress operations
pub type Result<T> = std::result::Result<T, GhostPressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let err: GhostPressError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "note.md").into();
        assert!(matches!(err, GhostPressError::NotFound(_)));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(GhostPressError::Config("missing url".into())).unwrap();
        assert_eq!(json["type"], "Config");
        assert_eq!(json["message"], "missing url");
    }
}
