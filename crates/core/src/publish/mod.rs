//! Note publishing
//!
//! Front-matter parsing, Markdown rendering, the publisher/observer ports,
//! and the single-note and folder use cases built on them.

pub mod front_matter;
pub mod ports;
pub mod service;
pub mod transformer;

pub use ports::{AlwaysConfirm, ConfirmPublish, NoopObserver, PostPublisher, PublishObserver};
pub use service::{FolderPublishOutcome, PublishService};
pub use transformer::PostTransformer;
