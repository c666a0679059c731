//! Index construction and the immutable snapshot it produces

mod builder;
mod snapshot;

pub use builder::IndexBuilder;
pub use snapshot::{DocEntry, IndexHolder, SearchIndex};
