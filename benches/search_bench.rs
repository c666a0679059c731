use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use docdex::{Document, IndexBuilder, QueryEngine};

const WORDS: &[&str] = &[
    "struct", "method", "macro", "tuple", "key", "index", "search", "token", "typed", "alias",
    "module", "field", "trait", "query", "corpus",
];

fn synthetic_corpus(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            let text: Vec<&str> = (0..30).map(|j| WORDS[(i * 7 + j) % WORDS.len()]).collect();
            Document::new(
                format!("page{}.html#entry{}", i % 20, i),
                format!("Page {}", i % 20),
                format!("Mod.Entry{}", i),
                if i % 5 == 0 { "method" } else { "type" },
                text.join(" "),
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(1000);

    c.bench_function("build_1k_docs", |b| {
        b.iter(|| {
            IndexBuilder::default_settings()
                .build(black_box(corpus.clone()))
                .unwrap()
        })
    });

    c.bench_function("build_1k_docs_parallel_4", |b| {
        b.iter(|| {
            IndexBuilder::default_settings()
                .build_parallel(black_box(corpus.clone()), 4)
                .unwrap()
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let corpus = synthetic_corpus(1000);
    let index = IndexBuilder::default_settings().build(corpus).unwrap();
    let engine = QueryEngine::default_settings();

    c.bench_function("search_1k_docs_top10", |b| {
        b.iter(|| {
            engine
                .search(black_box(&index), "typed key struct", 10)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
