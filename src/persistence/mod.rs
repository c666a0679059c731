//! Persistence: serialized index files and generated corpus artifacts

mod corpus;
mod index_file;

pub use corpus::{load_corpus, parse_corpus};
pub use index_file::{load_index, save_index, IndexFile};
