use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::models::Document;

/// Top-level shape of a generated corpus artifact
#[derive(Deserialize)]
struct CorpusFile {
    docs: Vec<Document>,
}

/// Load a corpus artifact from disk
///
/// Accepts plain JSON (`{"docs": [...]}` or a bare array) as well as the
/// JS-assignment wrapper documentation generators emit
/// (`var someSearchIndex = {"docs": [...]}`).
pub fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path)?;
    let docs = parse_corpus(&raw)?;
    debug!(path = %path.display(), docs = docs.len(), "loaded corpus");
    Ok(docs)
}

/// Parse corpus text into documents
pub fn parse_corpus(raw: &str) -> Result<Vec<Document>> {
    let json = strip_js_assignment(raw);
    if json.starts_with('[') {
        let docs: Vec<Document> = serde_json::from_str(json)?;
        Ok(docs)
    } else {
        let file: CorpusFile = serde_json::from_str(json)?;
        Ok(file.docs)
    }
}

/// Strip a leading `var name =` / `const name =` wrapper and any trailing
/// semicolon, leaving the JSON payload
fn strip_js_assignment(raw: &str) -> &str {
    let trimmed = raw.trim();
    let is_assignment = ["var ", "const ", "let "]
        .iter()
        .any(|kw| trimmed.starts_with(kw));
    if !is_assignment {
        return trimmed;
    }
    match trimmed.split_once('=') {
        Some((_, rest)) => rest.trim().trim_end_matches(';').trim_end(),
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"{
        "location": "index.html#Keys.Key",
        "page": "Home",
        "title": "Keys.Key",
        "category": "type",
        "text": "struct Key{K}\n\nA typed key."
    }"#;

    #[test]
    fn test_parse_wrapped_object() {
        let raw = format!("var documenterSearchIndex = {{\"docs\": [{}]}};", ENTRY);
        let docs = parse_corpus(&raw).unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].location, "index.html#Keys.Key");
        assert_eq!(docs[0].category, "type");
    }

    #[test]
    fn test_parse_plain_object() {
        let raw = format!("{{\"docs\": [{}]}}", ENTRY);
        assert_eq!(parse_corpus(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_bare_array() {
        let raw = format!("[{}]", ENTRY);
        assert_eq!(parse_corpus(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        assert!(parse_corpus("var x = {nope").is_err());
    }
}
