use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique document identifier: the document's `location` (URI or path)
pub type DocumentId = String;

/// A documentation entry as produced by an external extractor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique location of the entry, e.g. "index.html#Keys.Key"
    pub location: DocumentId,
    /// Human-readable page title, e.g. "Home"
    pub page: String,
    /// Symbol or entry name, e.g. "Keys.Key"
    pub title: String,
    /// Entry kind: "page", "type", "method", "macro", "section", ...
    /// An open set; treated as an opaque string.
    pub category: String,
    /// Rendered free-form content, may contain embedded examples
    pub text: String,
}

impl Document {
    pub fn new(
        location: impl Into<String>,
        page: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            page: page.into(),
            title: title.into(),
            category: category.into(),
            text: text.into(),
        }
    }
}

/// Inverted index entry: the documents containing a term, with per-document
/// term frequency. Keyed by location so iteration order is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingList {
    pub term_frequencies: BTreeMap<DocumentId, u32>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term occurrence count for a document
    pub fn add_document(&mut self, doc_id: DocumentId, frequency: u32) {
        self.term_frequencies.insert(doc_id, frequency);
    }

    /// Remove a document from this posting list
    pub fn remove_document(&mut self, doc_id: &str) {
        self.term_frequencies.remove(doc_id);
    }

    /// Term frequency for a document, if present
    pub fn frequency(&self, doc_id: &str) -> Option<u32> {
        self.term_frequencies.get(doc_id).copied()
    }

    /// Number of documents containing this term
    pub fn document_frequency(&self) -> usize {
        self.term_frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term_frequencies.is_empty()
    }

    /// Merge another posting list into this one. Commutative and associative
    /// as long as the two lists cover disjoint documents (the parallel build
    /// shards documents, so they always do); on overlap the other side wins.
    pub fn merge(&mut self, other: PostingList) {
        self.term_frequencies.extend(other.term_frequencies);
    }
}
