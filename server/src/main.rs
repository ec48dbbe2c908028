use anyhow::Result;
use axum::Router;
use clap::Parser;
use rank_core::loader::load_path;
use rank_core::sample::sample_documents;
use rank_core::{Algorithm, EngineConfig, SearchEngine, TermFrequencyMode};
use rank_server::build_app;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Corpus file (.json/.jsonl) or directory; the built-in sample corpus if omitted
    #[arg(long)]
    corpus: Option<PathBuf>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Default scoring algorithm: tfidf or bm25
    #[arg(long, default_value_t = Algorithm::TfIdf)]
    algorithm: Algorithm,
    #[arg(long, default_value_t = rank_core::config::DEFAULT_K1)]
    k1: f64,
    #[arg(long, default_value_t = rank_core::config::DEFAULT_K2)]
    k2: f64,
    /// Default number of results per query
    #[arg(long, default_value_t = rank_core::config::DEFAULT_LIMIT)]
    limit: usize,
    /// Count term frequency by whole tokens instead of substrings
    #[arg(long, default_value_t = false)]
    token_tf: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let documents = match &args.corpus {
        Some(path) => load_path(path)?,
        None => sample_documents(),
    };
    let config = EngineConfig {
        algorithm: args.algorithm,
        k1: args.k1,
        k2: args.k2,
        limit: args.limit,
        term_frequency: if args.token_tf { TermFrequencyMode::Token } else { TermFrequencyMode::Substring },
    };
    let engine = Arc::new(SearchEngine::new(documents, config)?);
    let app: Router = build_app(engine);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
