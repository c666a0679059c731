//! Batch index construction
//!
//! Indexing is a pure function over a corpus snapshot: documents in, fully
//! built `SearchIndex` out. There is no incremental path; a corpus change
//! means a rebuild, and the new snapshot is published through `IndexHolder`.

use std::collections::BTreeMap;
use std::thread;

use crossbeam::channel;
use tracing::debug;

use super::snapshot::{DocEntry, SearchIndex};
use crate::config::IndexSettings;
use crate::error::{DocdexError, Result};
use crate::models::{Document, DocumentId, PostingList};
use crate::tokenizer::Tokenizer;

/// Builds immutable `SearchIndex` values from document corpora
pub struct IndexBuilder {
    settings: IndexSettings,
}

impl IndexBuilder {
    pub fn new(settings: IndexSettings) -> Self {
        Self { settings }
    }

    pub fn default_settings() -> Self {
        Self::new(IndexSettings::default())
    }

    /// Build an index from a corpus snapshot
    ///
    /// Fails with `EmptyCorpus` if no documents are supplied. Duplicate
    /// locations are resolved last-write-wins *before* tokenization, so a
    /// replaced document never leaves stale postings behind.
    pub fn build(&self, documents: impl IntoIterator<Item = Document>) -> Result<SearchIndex> {
        let deduped = dedup_by_location(documents)?;
        let tokenizer = Tokenizer::new(&self.settings.tokenizer_config);

        let mut postings: BTreeMap<String, PostingList> = BTreeMap::new();
        let mut docs: BTreeMap<DocumentId, DocEntry> = BTreeMap::new();

        for doc in deduped.into_values() {
            index_document(&tokenizer, doc, &mut postings, &mut docs);
        }

        debug!(
            docs = docs.len(),
            terms = postings.len(),
            "built index snapshot"
        );
        Ok(SearchIndex::new(postings, docs))
    }

    /// Build an index by sharding the corpus across worker threads
    ///
    /// Documents are deduplicated first, then partitioned; each worker builds
    /// partial posting and document maps with its own tokenizer, and the
    /// partials are merged. Shards are disjoint, so the posting-list merge is
    /// commutative and the result is identical to the serial `build`.
    pub fn build_parallel(
        &self,
        documents: impl IntoIterator<Item = Document>,
        workers: usize,
    ) -> Result<SearchIndex> {
        let deduped = dedup_by_location(documents)?;
        let workers = workers.max(1).min(deduped.len());

        let mut shards: Vec<Vec<Document>> = (0..workers).map(|_| Vec::new()).collect();
        for (i, doc) in deduped.into_values().enumerate() {
            shards[i % workers].push(doc);
        }

        let (tx, rx) = channel::unbounded();
        let tokenizer_config = &self.settings.tokenizer_config;

        thread::scope(|scope| {
            for shard in shards {
                let tx = tx.clone();
                scope.spawn(move || {
                    // Dedicated tokenizer per worker thread
                    let tokenizer = Tokenizer::new(tokenizer_config);
                    let mut postings: BTreeMap<String, PostingList> = BTreeMap::new();
                    let mut docs: BTreeMap<DocumentId, DocEntry> = BTreeMap::new();
                    for doc in shard {
                        index_document(&tokenizer, doc, &mut postings, &mut docs);
                    }
                    let _ = tx.send((postings, docs));
                });
            }
        });
        drop(tx);

        let mut postings: BTreeMap<String, PostingList> = BTreeMap::new();
        let mut docs: BTreeMap<DocumentId, DocEntry> = BTreeMap::new();
        while let Ok((shard_postings, shard_docs)) = rx.recv() {
            for (term, posting) in shard_postings {
                postings.entry(term).or_default().merge(posting);
            }
            docs.extend(shard_docs);
        }

        debug!(
            docs = docs.len(),
            terms = postings.len(),
            workers, "built index snapshot (parallel)"
        );
        Ok(SearchIndex::new(postings, docs))
    }
}

/// Collapse duplicate locations, keeping the later document
fn dedup_by_location(
    documents: impl IntoIterator<Item = Document>,
) -> Result<BTreeMap<DocumentId, Document>> {
    let mut deduped = BTreeMap::new();
    for doc in documents {
        deduped.insert(doc.location.clone(), doc);
    }
    if deduped.is_empty() {
        return Err(DocdexError::EmptyCorpus);
    }
    Ok(deduped)
}

/// Tokenize one document into the partial index maps
///
/// Title and text share one normalization; term frequency is the combined
/// count, so a document is always findable by its title tokens.
fn index_document(
    tokenizer: &Tokenizer,
    doc: Document,
    postings: &mut BTreeMap<String, PostingList>,
    docs: &mut BTreeMap<DocumentId, DocEntry>,
) {
    let mut term_freqs = tokenizer.compute_term_frequencies(&doc.title);
    for (term, count) in tokenizer.compute_term_frequencies(&doc.text) {
        *term_freqs.entry(term).or_insert(0) += count;
    }

    for (term, count) in term_freqs {
        postings
            .entry(term)
            .or_default()
            .add_document(doc.location.clone(), count);
    }

    let title_key = tokenizer.normalized_key(&doc.title);
    docs.insert(doc.location.clone(), DocEntry { doc, title_key });
}
