pub mod category;
pub mod document;
pub mod error;
pub mod index;
pub mod indexer;

pub use category::{BuiltinCategory, Classifier, BUILTIN_CATEGORIES};
pub use document::{document_title, scan_documents, Document, DOC_EXTENSION};
pub use error::{IndexerError, Result};
pub use index::{Index, IndexEntry};
pub use indexer::Indexer;
