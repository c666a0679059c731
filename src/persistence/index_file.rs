use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::IndexSettings;
use crate::error::Result;
use crate::index::SearchIndex;

/// On-disk form of an index: the snapshot plus the settings it was built
/// with, so a reloading process queries with the exact same normalization
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexFile {
    pub settings: IndexSettings,
    pub index: SearchIndex,
}

/// Write an index to a JSON file
pub fn save_index(index: &SearchIndex, settings: &IndexSettings, path: &Path) -> Result<()> {
    let file = IndexFile {
        settings: settings.clone(),
        index: index.clone(),
    };
    let json = serde_json::to_string(&file)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), docs = index.total_docs(), "saved index");
    Ok(())
}

/// Load an index from a JSON file, re-validating the referential invariant
///
/// A posting that references a location missing from the document map fails
/// with `CorruptIndex` rather than surfacing later as a broken search result.
pub fn load_index(path: &Path) -> Result<IndexFile> {
    let raw = fs::read_to_string(path)?;
    let file: IndexFile = serde_json::from_str(&raw)?;
    file.index.validate()?;
    debug!(path = %path.display(), docs = file.index.total_docs(), "loaded index");
    Ok(file)
}
