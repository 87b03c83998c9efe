//! # ghostpress Core
//!
//! Publishing logic with no HTTP or filesystem code.
//!
//! This crate contains:
//! - Admin API token signing
//! - Note → post transformation
//! - Port interfaces (traits) for publishers, observers and confirmation
//! - The batch orchestrator and publishing use cases
//!
//! ## Architecture Principles
//! - Only depends on `ghostpress-domain`
//! - All I/O reaches this crate through traits

pub mod auth;
pub mod batch;
pub mod publish;

pub use auth::{AdminClaims, AuthError, SignedToken, TokenSigner};
pub use batch::{BatchError, BatchOrchestrator};
pub use publish::{
    AlwaysConfirm, ConfirmPublish, FolderPublishOutcome, NoopObserver, PostPublisher,
    PostTransformer, PublishObserver, PublishService,
};
