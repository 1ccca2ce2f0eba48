use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IndexerError, Result};

/// Name suffix that marks a directory entry as a document.
pub const DOC_EXTENSION: &str = ".md";

/// A Markdown document discovered in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display title, the file name with the extension stripped.
    pub title: String,
    /// Bare file name, extension included.
    pub file_name: String,
    /// Location of the document on disk.
    pub path: PathBuf,
}

impl Document {
    /// Read the full document body.
    pub fn read_content(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| IndexerError::DocumentRead {
            path: self.path.clone(),
            source,
        })
    }
}

/// Derive a document title from its file name.
///
/// Returns `None` when the name does not end in the document extension
/// (the suffix match is case-sensitive).
pub fn document_title(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(DOC_EXTENSION)
}

/// List the documents directly inside `dir`, sorted by file name.
///
/// Selection goes by entry name alone, so a directory named `foo.md`
/// is listed too and surfaces later as a read error. Subdirectories
/// and files without the extension are skipped.
pub fn scan_documents(dir: &Path) -> Result<Vec<Document>> {
    let entries = fs::read_dir(dir).map_err(|source| IndexerError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IndexerError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        let title = match document_title(&file_name) {
            Some(title) => title.to_string(),
            None => continue,
        };
        documents.push(Document {
            title,
            file_name,
            path: entry.path(),
        });
    }

    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(documents)
}
