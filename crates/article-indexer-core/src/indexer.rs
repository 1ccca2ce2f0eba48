use std::path::Path;

use crate::category::Classifier;
use crate::document::scan_documents;
use crate::error::Result;
use crate::index::{Index, IndexEntry};

/// Builds a category index from a directory of Markdown documents.
pub struct Indexer {
    classifier: Classifier,
}

impl Indexer {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::builtin(),
        }
    }

    /// Scan `source_dir`, classify every document and build the index.
    ///
    /// Documents are processed in file name order. Each body is read
    /// once, classified and dropped before the next one is loaded, and
    /// any failure aborts the whole build.
    pub fn build_index(&self, source_dir: &Path) -> Result<Index> {
        let documents = scan_documents(source_dir)?;
        let dir_name = source_dir_name(source_dir);

        let mut index = Index::new();
        for doc in &documents {
            let content = doc.read_content()?;
            let category = self.classifier.classify(&doc.file_name, &content);
            index.push(
                category,
                IndexEntry {
                    title: doc.title.clone(),
                    file: format!("{}/{}", dir_name, doc.file_name),
                },
            );
        }

        Ok(index)
    }
}

impl Default for Indexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Last path component of the source directory, used as the entry
/// path prefix in the generated index.
fn source_dir_name(dir: &Path) -> String {
    match dir.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => dir.display().to_string(),
    }
}
