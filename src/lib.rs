pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod persistence;
pub mod query;
pub mod tokenizer;

pub use config::{IndexSettings, RankingConfig, TokenizerConfig};
pub use error::{DocdexError, Result};
pub use index::{IndexBuilder, IndexHolder, SearchIndex};
pub use models::*;
pub use query::QueryEngine;
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
