use std::fs;
use std::path::{Path, PathBuf};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::category::{BuiltinCategory, BUILTIN_CATEGORIES};
use crate::error::{IndexerError, Result};

/// A single article entry in the generated index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub title: String,
    pub file: String,
}

#[derive(Debug, Clone)]
struct CategoryBucket {
    name: &'static str,
    entries: Vec<IndexEntry>,
}

/// The category index, one bucket per builtin category.
///
/// Buckets keep the builtin table order, which is also the key order
/// of the serialized JSON. Every category is present even when empty.
#[derive(Debug, Clone)]
pub struct Index {
    buckets: Vec<CategoryBucket>,
}

impl Index {
    /// Create an empty index covering all builtin categories.
    pub fn new() -> Self {
        let buckets = BUILTIN_CATEGORIES
            .iter()
            .map(|cat| CategoryBucket {
                name: cat.name,
                entries: Vec::new(),
            })
            .collect();
        Self { buckets }
    }

    /// Append an entry to the bucket of `category`.
    pub fn push(&mut self, category: &BuiltinCategory, entry: IndexEntry) {
        let bucket = self
            .buckets
            .iter_mut()
            .find(|b| b.name == category.name)
            .expect("index has a bucket for every builtin category");
        bucket.entries.push(entry);
    }

    /// Entries of one category, `None` for an unknown category name.
    pub fn entries(&self, category: &str) -> Option<&[IndexEntry]> {
        self.buckets
            .iter()
            .find(|b| b.name == category)
            .map(|b| b.entries.as_slice())
    }

    /// Category names with their entries, in output order.
    pub fn buckets(&self) -> impl Iterator<Item = (&'static str, &[IndexEntry])> {
        self.buckets.iter().map(|b| (b.name, b.entries.as_slice()))
    }

    /// Total number of indexed articles.
    pub fn document_count(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }

    /// Render the index as JSON indented with four spaces.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf).expect("serialized JSON is valid UTF-8"))
    }

    /// Write the rendered index to `dest`, replacing any previous file.
    ///
    /// The JSON goes to a `.tmp` sibling first and lands via rename, so
    /// a failed run never leaves a partial index behind.
    pub fn write_to(&self, dest: &Path) -> Result<()> {
        let json = self.to_json_string()?;

        let mut tmp = dest.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, &json).map_err(|source| IndexerError::IndexWrite {
            path: dest.to_path_buf(),
            source,
        })?;
        if let Err(source) = fs::rename(&tmp, dest) {
            let _ = fs::remove_file(&tmp);
            return Err(IndexerError::IndexWrite {
                path: dest.to_path_buf(),
                source,
            });
        }

        Ok(())
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Index {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(bucket.name, &bucket.entries)?;
        }
        map.end()
    }
}
