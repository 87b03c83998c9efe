//! Markdown notes on the local filesystem

use std::path::{Path, PathBuf};

use ghostpress_domain::{Document, FolderEntry, GhostPressError, Result, UnreadableNote};
use tracing::{debug, warn};

const MARKDOWN_EXTENSION: &str = "md";

/// Read one note. The identifier is the file name without its extension.
///
/// # Errors
///
/// Returns [`GhostPressError::NotFound`] for a missing file,
/// [`GhostPressError::InvalidInput`] for a non-UTF-8 file name or contents,
/// and [`GhostPressError::Io`] otherwise.
pub fn load_document(path: &Path) -> Result<Document> {
    let identifier = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            GhostPressError::InvalidInput(format!("not a note file: {}", path.display()))
        })?
        .to_string();

    let raw_text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => {
            GhostPressError::InvalidInput(format!("{} is not valid UTF-8", path.display()))
        }
        _ => GhostPressError::from(e),
    })?;

    Ok(Document::new(identifier, raw_text))
}

/// Every Markdown note directly inside `dir`, ordered by file name.
///
/// Subdirectories are not searched. A note that cannot be read is returned
/// as [`FolderEntry::Unreadable`] so the rest of the folder still publishes.
///
/// # Errors
///
/// Fails only if the directory itself cannot be listed.
pub fn folder_documents(dir: &Path) -> Result<Vec<FolderEntry>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_markdown(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(dir = %dir.display(), count = paths.len(), "Collected folder notes");
    Ok(paths.iter().map(PathBuf::as_path).map(folder_entry).collect())
}

fn folder_entry(path: &Path) -> FolderEntry {
    match load_document(path) {
        Ok(document) => FolderEntry::Loaded(document),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Note could not be read");
            FolderEntry::Unreadable(UnreadableNote {
                identifier: path.file_stem().map_or_else(
                    || path.display().to_string(),
                    |stem| stem.to_string_lossy().into_owned(),
                ),
                reason: err.to_string(),
            })
        }
    }
}

/// Folder that contains `path`; a directory is its own folder.
///
/// # Errors
///
/// Returns [`GhostPressError::NotFound`] when `path` has no parent.
pub fn folder_of(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }

    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Ok(PathBuf::from(".")),
        Some(parent) => Ok(parent.to_path_buf()),
        None => Err(GhostPressError::NotFound(format!("no folder for {}", path.display()))),
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(MARKDOWN_EXTENSION)
}
