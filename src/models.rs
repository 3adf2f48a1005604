//! Data models for collection scans and the generated index.
//!
//! - [`CollectionScan`]: Outcome of listing one collection folder
//! - [`IndexDocument`]: Ordered mapping of collection names to Markdown paths
//!
//! The index is serialized as a JSON object whose keys keep the configured
//! collection order, so the output is stable between runs.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io;

/// Result of listing a single collection folder.
///
/// The scanner keeps missing and unreadable folders apart so callers can log
/// the difference, but both are tolerated: see [`CollectionScan::into_files`].
#[derive(Debug)]
pub enum CollectionScan {
    /// The folder was listed; holds the Markdown file names in listing order.
    Found(Vec<String>),
    /// The folder does not exist.
    Missing,
    /// The folder exists but could not be listed.
    Unreadable(io::Error),
}

impl CollectionScan {
    /// Collapse the scan into a list of file names, treating any failure as empty.
    pub fn into_files(self) -> Vec<String> {
        match self {
            CollectionScan::Found(files) => files,
            CollectionScan::Missing | CollectionScan::Unreadable(_) => Vec::new(),
        }
    }
}

/// The generated content index.
///
/// Every configured collection has an entry, even when its folder is missing
/// or holds no Markdown files. Entries are kept in insertion order; inserting
/// a collection name twice replaces the earlier entry in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    entries: Vec<(String, Vec<String>)>,
}

impl IndexDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the relative paths for a collection.
    pub fn insert(&mut self, collection: impl Into<String>, paths: Vec<String>) {
        let collection = collection.into();
        match self.entries.iter_mut().find(|(name, _)| *name == collection) {
            Some((_, existing)) => *existing = paths,
            None => self.entries.push((collection, paths)),
        }
    }

    /// Relative paths recorded for `collection`, if it is part of the index.
    #[cfg(test)]
    pub fn get(&self, collection: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == collection)
            .map(|(_, paths)| paths.as_slice())
    }

    /// Number of collections in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of Markdown files across all collections.
    pub fn total_files(&self) -> usize {
        self.entries.iter().map(|(_, paths)| paths.len()).sum()
    }

    /// Serialize with two-space indentation and no trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for IndexDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, paths) in &self.entries {
            map.serialize_entry(name, paths)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndexDocument {
        let mut doc = IndexDocument::new();
        doc.insert("articles", vec!["articles/x.md".to_string()]);
        doc.insert("teams", Vec::new());
        doc.insert("services", Vec::new());
        doc
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"articles":["articles/x.md"],"teams":[],"services":[]}"#
        );
    }

    #[test]
    fn test_pretty_json_uses_two_spaces() {
        let pretty = sample().to_pretty_json().unwrap();
        let expected = "{\n  \"articles\": [\n    \"articles/x.md\"\n  ],\n  \"teams\": [],\n  \"services\": []\n}";
        assert_eq!(pretty, expected);
    }

    #[test]
    fn test_empty_document_serializes_to_empty_object() {
        let doc = IndexDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.to_pretty_json().unwrap(), "{}");
    }

    #[test]
    fn test_insert_replaces_existing_collection() {
        let mut doc = sample();
        doc.insert("articles", vec!["articles/y.md".to_string()]);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.get("articles").unwrap(), ["articles/y.md".to_string()]);
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"articles":["articles/y.md"],"teams":[],"services":[]}"#
        );
    }

    #[test]
    fn test_total_files_and_lookup() {
        let doc = sample();
        assert_eq!(doc.total_files(), 1);
        assert_eq!(doc.get("teams").unwrap().len(), 0);
        assert!(doc.get("blog").is_none());
    }

    #[test]
    fn test_scan_failures_collapse_to_empty() {
        assert!(CollectionScan::Missing.into_files().is_empty());
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let scan = CollectionScan::Unreadable(err);
        assert!(scan.into_files().is_empty());
        let found = CollectionScan::Found(vec!["a.md".to_string()]);
        assert_eq!(found.into_files(), vec!["a.md"]);
    }
}
