use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index settings configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexSettings {
    pub tokenizer_config: TokenizerConfig,
    pub ranking_config: RankingConfig,
}

/// Tokenizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub stem: bool,
    pub min_token_length: usize,
    pub max_token_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_stopwords: true,
            // Stemming stays off by default: documentation corpora are full of
            // symbol names ("Key" vs "Keyed") that must remain distinct terms.
            stem: false,
            min_token_length: 2,
            max_token_length: 50,
        }
    }
}

/// Ranking configuration
///
/// `category_weights` is the per-category scoring policy: a multiplier keyed
/// by category string (e.g. "type", "method"). Categories without an entry
/// get weight 1.0. Category strings are otherwise opaque to ranking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankingConfig {
    pub title_boost: f32,
    pub category_weights: HashMap<String, f32>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            title_boost: 3.0,
            category_weights: HashMap::new(),
        }
    }
}

impl RankingConfig {
    /// Weight multiplier for a category, defaulting to 1.0
    pub fn category_weight(&self, category: &str) -> f32 {
        self.category_weights.get(category).copied().unwrap_or(1.0)
    }

    /// Set the weight for a category
    pub fn with_category_weight(mut self, category: impl Into<String>, weight: f32) -> Self {
        self.category_weights.insert(category.into(), weight);
        self
    }

    /// Set the exact-title boost
    pub fn with_title_boost(mut self, boost: f32) -> Self {
        self.title_boost = boost;
        self
    }
}
