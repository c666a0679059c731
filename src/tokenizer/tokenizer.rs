use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashMap;
use std::collections::HashSet;
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::TokenizerConfig;

/// Text tokenizer with stopword removal and optional stemming
///
/// One tokenizer instance serves both indexing and querying: indexed terms
/// and query terms must come out of the same normalization or they stop
/// being comparable.
pub struct Tokenizer {
    config: TokenizerConfig,
    stemmer: Option<Stemmer>,
    stopwords: HashSet<String>,
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        let stemmer = if config.stem {
            Some(Stemmer::create(Algorithm::English))
        } else {
            None
        };

        let stopwords = if config.remove_stopwords {
            get(LANGUAGE::English)
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect()
        } else {
            HashSet::new()
        };

        Self {
            config: config.clone(),
            stemmer,
            stopwords,
        }
    }

    /// Tokenize text into a vector of terms
    ///
    /// Unicode word boundaries first, then a split on any remaining
    /// non-alphanumeric characters: UAX-29 keeps "Keys.Key" and
    /// "keyed_tuple" as single words, but symbol names must index as
    /// their parts.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = text
            .unicode_words()
            .flat_map(|word| word.split(|c: char| !c.is_alphanumeric()))
            .filter(|part| !part.is_empty())
            .map(|word| {
                let mut token = word.to_string();

                if self.config.lowercase {
                    token = token.to_lowercase();
                }

                token
            })
            .filter(|token| {
                token.len() >= self.config.min_token_length
                    && token.len() <= self.config.max_token_length
                    && !self.stopwords.contains(token)
            })
            .collect();

        if let Some(stemmer) = &self.stemmer {
            tokens = tokens
                .into_iter()
                .map(|token| stemmer.stem(&token).to_string())
                .collect();
        }

        tokens
    }

    /// Compute term frequencies for a tokenized text
    pub fn compute_term_frequencies(&self, text: &str) -> HashMap<String, u32> {
        let tokens = self.tokenize(text);
        let mut freq = HashMap::new();
        for token in tokens {
            *freq.entry(token).or_insert(0) += 1;
        }
        freq
    }

    /// Normalized form of a text: its token sequence joined by single spaces.
    /// Comparing two keys tells whether two texts tokenize identically; used
    /// for the exact-title match check.
    pub fn normalized_key(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }
}
