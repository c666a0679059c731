//! Ranked query execution

mod engine;
mod scoring;

pub use engine::QueryEngine;
pub use scoring::{idf, tf_idf};
