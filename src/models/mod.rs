pub mod document;
pub mod filter;
pub mod search;

pub use document::{Document, DocumentId, PostingList};
pub use filter::Filter;
pub use search::{SearchHit, SearchRequest, SearchResponse};
