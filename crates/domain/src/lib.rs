//! # ghostpress Domain
//!
//! Business domain types for publishing notes to a Ghost blog.
//!
//! This crate contains:
//! - Note and post data types (`Document`, `PostPayload`, etc.)
//! - Publish outcomes and batch summaries
//! - Domain error types and Result definitions
//! - Configuration structures and API constants
//!
//! ## Architecture
//! - No dependencies on other ghostpress crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use secrecy::ExposeSecret;
