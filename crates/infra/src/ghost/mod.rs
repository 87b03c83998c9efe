//! Ghost Admin API adapter

pub mod client;
pub mod response;

pub use client::GhostAdminClient;
pub use response::interpret_response;
