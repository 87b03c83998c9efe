//! Note documents handed to the publishing pipeline

use serde::{Deserialize, Serialize};

/// Metadata parsed from a note's front matter.
///
/// Every field is optional in the source note; absent values take the
/// defaults below (no tags, not featured, draft).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteMetadata {
    /// Post title; the identifier is used when absent
    pub title: Option<String>,
    /// Tag names
    pub tags: Vec<String>,
    /// Mark the post as featured
    pub featured: bool,
    /// Publish immediately instead of saving a draft
    pub published: bool,
    /// Custom excerpt
    pub excerpt: Option<String>,
    /// Feature image URL
    pub feature_image: Option<String>,
}

/// A note to publish. Read-only input to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display name, usually the file name without extension
    pub identifier: String,
    /// Full note text, including any front-matter block
    pub raw_text: String,
    /// Metadata already parsed by the host; `None` means "parse `raw_text`"
    pub metadata: Option<NoteMetadata>,
}

impl Document {
    /// Note with no host metadata; front matter is parsed from `raw_text`.
    pub fn new(identifier: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), raw_text: raw_text.into(), metadata: None }
    }

    /// Attach metadata already parsed by the host.
    pub fn with_metadata(mut self, metadata: NoteMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// A note that was found but could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadableNote {
    /// File name without extension
    pub identifier: String,
    /// Why the read failed
    pub reason: String,
}

/// One note of a folder: its contents, or the reason they are missing.
///
/// Unreadable notes still take their place in a batch and are reported as
/// failed results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderEntry {
    /// Note read successfully
    Loaded(Document),
    /// Note that could not be read
    Unreadable(UnreadableNote),
}

impl FolderEntry {
    /// Identifier shown in progress lines and summaries.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Loaded(document) => &document.identifier,
            Self::Unreadable(note) => &note.identifier,
        }
    }

    /// Borrow the document, or the read failure.
    pub fn as_document(&self) -> Result<&Document, &UnreadableNote> {
        match self {
            Self::Loaded(document) => Ok(document),
            Self::Unreadable(note) => Err(note),
        }
    }
}

impl From<Document> for FolderEntry {
    fn from(document: Document) -> Self {
        Self::Loaded(document)
    }
}
