use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("Failed to read source directory: {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read document: {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write index: {path}: {source}")]
    IndexWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexerError>;

impl IndexerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DirectoryAccess { .. } => 2,
            Self::DocumentRead { .. } => 3,
            Self::IndexWrite { .. } => 4,
            _ => 1,
        }
    }
}
