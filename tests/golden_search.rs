use docdex::{Document, IndexBuilder, QueryEngine, SearchIndex};

fn create_doc(location: &str, page: &str, title: &str, category: &str, text: &str) -> Document {
    Document::new(location, page, title, category, text)
}

/// Corpus shaped like a generated documentation search artifact
fn index_fixture() -> SearchIndex {
    let docs = vec![
        create_doc("index.html#", "Home", "Home", "page", ""),
        create_doc(
            "index.html#Keys.Key",
            "Home",
            "Keys.Key",
            "type",
            "struct Key{K}\n\nA typed key. Use to create Keyed values.",
        ),
        create_doc(
            "index.html#Keys.Keyed",
            "Home",
            "Keys.Keyed",
            "type",
            "struct Keyed{K, V}\n\nan alias for a Key-value pair.",
        ),
        create_doc(
            "index.html#Keys.haskey",
            "Home",
            "Keys.haskey",
            "method",
            "haskey(keyed_tuple, key)\n\nCheck whether a keyed tuple contains a key.",
        ),
        create_doc(
            "guide.html#Usage-1",
            "Guide",
            "Usage",
            "section",
            "Create typed keys and look them up in keyed tuples.",
        ),
        create_doc("changelog.html#", "Changelog", "Changelog", "page", ""),
    ];

    IndexBuilder::default_settings().build(docs).unwrap()
}

#[test]
fn golden_symbol_lookup_ranks_exact_title_first() {
    let index = index_fixture();
    let engine = QueryEngine::default_settings();

    let hits = engine.search(&index, "Keys.Keyed", 10).unwrap();

    assert!(!hits.is_empty());
    assert_eq!(hits[0].location, "index.html#Keys.Keyed");
}

#[test]
fn golden_text_mention_is_findable() {
    let index = index_fixture();
    let engine = QueryEngine::default_settings();

    let hits = engine.search(&index, "alias", 10).unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].location, "index.html#Keys.Keyed");
}

#[test]
fn golden_page_entry_with_empty_text_found_by_title() {
    let index = index_fixture();
    let engine = QueryEngine::default_settings();

    let hits = engine.search(&index, "changelog", 10).unwrap();

    assert!(hits.iter().any(|h| h.location == "changelog.html#"));
}

#[test]
fn golden_key_outranks_keyed_on_title_boost() {
    // The documented ranking example: exact-title boost and term frequency
    // put "Key" ahead of "Keyed" for the query "key".
    let docs = vec![
        create_doc("a", "Home", "Key", "type", "a typed key struct"),
        create_doc("b", "Home", "Keyed", "type", "alias for key value pair"),
    ];
    let index = IndexBuilder::default_settings().build(docs).unwrap();
    let engine = QueryEngine::default_settings();

    let hits = engine.search(&index, "key", 10).unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].location, "a");
    assert_eq!(hits[1].location, "b");
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn golden_hit_shape_matches_wire_format() {
    let index = index_fixture();
    let engine = QueryEngine::default_settings();

    let hits = engine.search(&index, "alias", 1).unwrap();
    let json = serde_json::to_value(&hits[0]).unwrap();

    for field in ["location", "page", "title", "category", "score"] {
        assert!(json.get(field).is_some(), "missing field {}", field);
    }
}
