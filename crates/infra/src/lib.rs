//! # ghostpress Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The Ghost Admin API client (`PostPublisher` over HTTP)
//! - The HTTP transport and its error conversions
//! - Configuration loading from environment and files
//! - Markdown note loading from the filesystem
//!
//! ## Architecture
//! - Implements traits defined in `ghostpress-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod config;
pub mod documents;
pub mod errors;
pub mod ghost;
pub mod http;

// Re-export commonly used items
pub use documents::{folder_documents, folder_of, load_document};
pub use errors::{PublishError, PublishErrorCategory};
pub use ghost::GhostAdminClient;
pub use http::{HttpClient, HttpClientBuilder};
