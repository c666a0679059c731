//! Immutable index snapshot and the swappable holder around it
//!
//! A `SearchIndex` is fully built before anyone can query it; readers never
//! see a partial index. Rebuilds produce a fresh value and publish it through
//! `IndexHolder`, so in-flight queries keep observing the snapshot they
//! started with.

use std::collections::BTreeMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::error::{DocdexError, Result};
use crate::models::{Document, DocumentId, PostingList};

/// One indexed document plus data derived at build time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocEntry {
    pub doc: Document,
    /// Normalized title token sequence, for the exact-title boost
    pub title_key: String,
}

/// A fully built, immutable inverted index over one corpus snapshot
///
/// Both maps are ordered by key, so iteration (and thus serialization and
/// tie-breaking) is deterministic for a given corpus.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchIndex {
    postings: BTreeMap<String, PostingList>,
    docs: BTreeMap<DocumentId, DocEntry>,
}

impl SearchIndex {
    pub(crate) fn new(
        postings: BTreeMap<String, PostingList>,
        docs: BTreeMap<DocumentId, DocEntry>,
    ) -> Self {
        Self { postings, docs }
    }

    /// Posting list for a term, if any document contains it
    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Indexed entry for a location
    pub fn entry(&self, location: &str) -> Option<&DocEntry> {
        self.docs.get(location)
    }

    /// Document for a location
    pub fn document(&self, location: &str) -> Option<&Document> {
        self.docs.get(location).map(|e| &e.doc)
    }

    /// Number of documents in the corpus snapshot
    pub fn total_docs(&self) -> usize {
        self.docs.len()
    }

    /// Number of distinct terms
    pub fn total_terms(&self) -> usize {
        self.postings.len()
    }

    /// Iterate all indexed entries in location order
    pub fn entries(&self) -> impl Iterator<Item = (&DocumentId, &DocEntry)> {
        self.docs.iter()
    }

    /// Verify the referential invariant: every location referenced by a
    /// posting list resolves in the document map. Run on every deserialized
    /// index before it is handed to queries.
    pub fn validate(&self) -> Result<()> {
        for (term, posting) in &self.postings {
            for location in posting.term_frequencies.keys() {
                if !self.docs.contains_key(location) {
                    return Err(DocdexError::CorruptIndex(format!(
                        "posting for term \"{}\" references unknown document \"{}\"",
                        term, location
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Atomically swappable reference to the current index snapshot
///
/// Readers call `load()` and get a consistent snapshot without locking;
/// `store()` publishes a rebuilt index. The process-wide "current index" of a
/// live search service is one of these, never a mutable global.
pub struct IndexHolder {
    inner: ArcSwap<SearchIndex>,
}

impl IndexHolder {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            inner: ArcSwap::from_pointee(index),
        }
    }

    pub fn load(&self) -> arc_swap::Guard<Arc<SearchIndex>> {
        self.inner.load()
    }

    pub fn store(&self, index: SearchIndex) {
        self.inner.store(Arc::new(index));
    }
}
