use anyhow::Result;
use clap::Parser;
use rank_core::loader::load_path;
use rank_core::sample::sample_documents;
use rank_core::{Algorithm, EngineConfig, SearchEngine, SearchResult, TermFrequencyMode};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rank-repl")]
#[command(about = "Search a document corpus interactively with TF-IDF or BM25 ranking", long_about = None)]
struct Cli {
    /// Corpus file (.json/.jsonl) or directory; the built-in sample corpus if omitted
    #[arg(long)]
    corpus: Option<PathBuf>,
    /// Scoring algorithm: tfidf or bm25
    #[arg(long, default_value_t = Algorithm::TfIdf)]
    algorithm: Algorithm,
    /// BM25 term-frequency saturation
    #[arg(long, default_value_t = rank_core::config::DEFAULT_K1)]
    k1: f64,
    /// BM25 length-normalization weight
    #[arg(long, default_value_t = rank_core::config::DEFAULT_K2)]
    k2: f64,
    /// Maximum results per query
    #[arg(long, default_value_t = rank_core::config::DEFAULT_LIMIT)]
    limit: usize,
    /// Count term frequency by whole tokens instead of substrings
    #[arg(long, default_value_t = false)]
    token_tf: bool,
    /// Run these queries and exit instead of prompting
    #[arg(long = "query", short = 'q')]
    queries: Vec<String>,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            algorithm: self.algorithm,
            k1: self.k1,
            k2: self.k2,
            limit: self.limit,
            term_frequency: if self.token_tf { TermFrequencyMode::Token } else { TermFrequencyMode::Substring },
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries results
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let documents = match &cli.corpus {
        Some(path) => load_path(path)?,
        None => sample_documents(),
    };
    let engine = SearchEngine::new(documents, cli.engine_config())?;
    tracing::debug!(algorithm = %cli.algorithm, limit = cli.limit, "engine ready");

    let mut out = io::stdout().lock();
    if !cli.queries.is_empty() {
        for query in &cli.queries {
            print_results(&mut out, query, &engine.search(query))?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        write!(out, "Enter a search query: ")?;
        out.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }
        print_results(&mut out, query, &engine.search(query))?;
    }
    Ok(())
}

fn print_results<W: Write>(out: &mut W, query: &str, results: &[SearchResult]) -> io::Result<()> {
    writeln!(out, "{} results for query '{}':", results.len(), query)?;
    for result in results {
        writeln!(out, "- {result}")?;
    }
    Ok(())
}
