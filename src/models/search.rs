use serde::{Deserialize, Serialize};

use super::filter::Filter;

/// Search hit with relevance score, shaped for direct serialization to a
/// client wire format
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub location: String,
    pub page: String,
    pub title: String,
    pub category: String,
    pub score: f32,
}

/// Search request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub filters: Vec<Filter>,
    /// Maximum number of hits; `None` returns all matches
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: Vec::new(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }
}

/// Search response with timing information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
    pub took_ms: u64,
    pub total_hits: u64,
}
