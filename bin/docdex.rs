use anyhow::Result;
use clap::{Parser, Subcommand};
use docdex::persistence::{load_corpus, load_index, save_index};
use docdex::{Filter, IndexBuilder, IndexSettings, QueryEngine, SearchRequest};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "docdex")]
#[command(about = "Documentation full-text index builder and query engine", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build an index from a generated corpus artifact
    Index {
        /// Corpus file (plain JSON or a generated search_index.js)
        corpus: PathBuf,

        /// Output index file
        #[arg(long, default_value = "docdex-index.json")]
        out: PathBuf,

        /// Worker threads for the build (1 = serial)
        #[arg(long, default_value = "1")]
        workers: usize,
    },
    /// Query a built index
    Search {
        /// Index file produced by `docdex index`
        index: PathBuf,

        /// Query string
        query: String,

        /// Maximum number of hits (all matches if omitted)
        #[arg(long)]
        limit: Option<usize>,

        /// Restrict hits to one category (e.g. "type", "method")
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Index {
            corpus,
            out,
            workers,
        } => {
            info!("Starting docdex v{}", docdex::VERSION);

            let docs = load_corpus(&corpus)?;
            info!("Loaded {} documents from {}", docs.len(), corpus.display());

            let settings = IndexSettings::default();
            let builder = IndexBuilder::new(settings.clone());
            let index = if workers > 1 {
                builder.build_parallel(docs, workers)?
            } else {
                builder.build(docs)?
            };
            info!(
                "Indexed {} documents, {} distinct terms",
                index.total_docs(),
                index.total_terms()
            );

            save_index(&index, &settings, &out)?;
            info!("Wrote index to {}", out.display());
        }
        Command::Search {
            index,
            query,
            limit,
            category,
        } => {
            let file = load_index(&index)?;
            let engine = QueryEngine::new(file.settings);

            let mut request = SearchRequest::new(query);
            request.limit = limit;
            if let Some(category) = category {
                request = request.with_filter(Filter::category(category));
            }

            let response = engine.execute(&file.index, &request)?;
            for hit in &response.hits {
                println!("{}", serde_json::to_string(hit)?);
            }
            info!(
                "{} total hits ({} returned) in {} ms",
                response.total_hits,
                response.hits.len(),
                response.took_ms
            );
        }
    }

    Ok(())
}
