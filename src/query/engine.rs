//! Query execution over an immutable index snapshot
//!
//! Searching is a pure read: the engine never mutates the index, so any
//! number of queries can run concurrently against one snapshot.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use tracing::debug;

use crate::config::IndexSettings;
use crate::error::{DocdexError, Result};
use crate::index::SearchIndex;
use crate::models::{Filter, SearchHit, SearchRequest, SearchResponse};
use crate::query::scoring::{idf, tf_idf};
use crate::tokenizer::Tokenizer;

/// Ranked search over `SearchIndex` snapshots
///
/// Holds the tokenizer (the same normalization the index was built with) and
/// the ranking policy. Stateless across queries.
pub struct QueryEngine {
    tokenizer: Tokenizer,
    settings: IndexSettings,
}

impl QueryEngine {
    pub fn new(settings: IndexSettings) -> Self {
        let tokenizer = Tokenizer::new(&settings.tokenizer_config);
        Self {
            tokenizer,
            settings,
        }
    }

    pub fn default_settings() -> Self {
        Self::new(IndexSettings::default())
    }

    /// Search the index, returning at most `limit` hits
    ///
    /// `limit == 0` fails with `InvalidLimit`; an empty or all-stopword query
    /// returns an empty hit list, not an error.
    pub fn search(&self, index: &SearchIndex, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        if limit == 0 {
            return Err(DocdexError::InvalidLimit { requested: limit });
        }
        let mut hits = self.ranked_hits(index, query, &[]);
        hits.truncate(limit);
        Ok(hits)
    }

    /// Search the index, returning every match
    pub fn search_all(&self, index: &SearchIndex, query: &str) -> Result<Vec<SearchHit>> {
        Ok(self.ranked_hits(index, query, &[]))
    }

    /// Execute a full request: filters, optional limit, timing
    pub fn execute(&self, index: &SearchIndex, request: &SearchRequest) -> Result<SearchResponse> {
        if let Some(0) = request.limit {
            return Err(DocdexError::InvalidLimit { requested: 0 });
        }

        let start = Instant::now();
        let mut hits = self.ranked_hits(index, &request.query, &request.filters);
        let total_hits = hits.len() as u64;
        if let Some(limit) = request.limit {
            hits.truncate(limit);
        }

        Ok(SearchResponse {
            hits,
            took_ms: start.elapsed().as_millis() as u64,
            total_hits,
        })
    }

    /// Score every matching document and order deterministically
    fn ranked_hits(&self, index: &SearchIndex, query: &str, filters: &[Filter]) -> Vec<SearchHit> {
        // Distinct query terms, via the same normalization the index used
        let terms: BTreeSet<String> = self.tokenizer.tokenize(query).into_iter().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let total_docs = index.total_docs();
        let mut scores: HashMap<&str, f32> = HashMap::new();

        for term in &terms {
            let Some(posting) = index.postings(term) else {
                continue;
            };
            let weight = idf(total_docs, posting.document_frequency());
            for (location, tf) in &posting.term_frequencies {
                *scores.entry(location.as_str()).or_insert(0.0) += tf_idf(*tf, weight);
            }
        }

        let query_key = self.tokenizer.normalized_key(query);
        let ranking = &self.settings.ranking_config;

        let mut hits: Vec<SearchHit> = scores
            .into_iter()
            .filter_map(|(location, base_score)| {
                let entry = index.entry(location)?;
                if !filters.iter().all(|f| f.matches(&entry.doc)) {
                    return None;
                }

                let mut score = base_score * ranking.category_weight(&entry.doc.category);
                // Symbol-name lookups outrank incidental text mentions
                if entry.title_key == query_key {
                    score *= ranking.title_boost;
                }

                Some(SearchHit {
                    location: entry.doc.location.clone(),
                    page: entry.doc.page.clone(),
                    title: entry.doc.title.clone(),
                    category: entry.doc.category.clone(),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.location.cmp(&b.location))
        });

        debug!(query, hits = hits.len(), "ranked query");
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RankingConfig;
    use crate::index::IndexBuilder;
    use crate::models::Document;

    fn doc(location: &str, title: &str, category: &str, text: &str) -> Document {
        Document::new(location, "Home", title, category, text)
    }

    fn fixture_index() -> SearchIndex {
        IndexBuilder::default_settings()
            .build(vec![
                doc("a", "Key", "type", "a typed key struct"),
                doc("b", "Keyed", "type", "alias for key value pair"),
                doc("c", "Tutorial", "section", "introduction to typed keys"),
            ])
            .unwrap()
    }

    #[test]
    fn test_zero_limit_rejected() {
        let engine = QueryEngine::default_settings();
        let err = engine.search(&fixture_index(), "key", 0).unwrap_err();
        assert!(matches!(err, DocdexError::InvalidLimit { requested: 0 }));
    }

    #[test]
    fn test_empty_query_returns_no_hits() {
        let engine = QueryEngine::default_settings();
        let hits = engine.search(&fixture_index(), "", 10).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_exact_title_outranks_text_mention() {
        let engine = QueryEngine::default_settings();
        let hits = engine.search(&fixture_index(), "key", 10).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].location, "a");
        assert_eq!(hits[1].location, "b");
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_unmatched_documents_excluded() {
        let engine = QueryEngine::default_settings();
        let hits = engine.search(&fixture_index(), "tutorial", 10).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location, "c");
    }

    #[test]
    fn test_limit_truncates() {
        let engine = QueryEngine::default_settings();
        let hits = engine.search(&fixture_index(), "typed key", 1).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_category_filter() {
        let engine = QueryEngine::default_settings();
        let request = SearchRequest::new("typed").with_filter(Filter::category("section"));
        let response = engine.execute(&fixture_index(), &request).unwrap();

        assert_eq!(response.total_hits, 1);
        assert_eq!(response.hits[0].location, "c");
    }

    #[test]
    fn test_category_weight_policy() {
        let mut settings = IndexSettings::default();
        settings.ranking_config = RankingConfig::default().with_category_weight("section", 100.0);
        let engine = QueryEngine::new(settings);

        let hits = engine.search(&fixture_index(), "typed", 10).unwrap();
        assert_eq!(hits[0].location, "c");
    }

    #[test]
    fn test_request_limit_zero_rejected() {
        let engine = QueryEngine::default_settings();
        let request = SearchRequest::new("key").with_limit(0);
        let err = engine.execute(&fixture_index(), &request).unwrap_err();
        assert!(matches!(err, DocdexError::InvalidLimit { .. }));
    }
}
