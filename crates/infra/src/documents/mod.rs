//! Local note sources

pub mod folder;

pub use folder::{folder_documents, folder_of, load_document};
