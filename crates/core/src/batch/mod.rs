//! Batch publishing
//!
//! Runs the single-document publisher over a list of notes, in order, and
//! reports progress and a summary through a [`PublishObserver`].
//!
//! [`PublishObserver`]: crate::publish::ports::PublishObserver

pub mod errors;
pub mod orchestrator;

pub use errors::BatchError;
pub use orchestrator::BatchOrchestrator;
