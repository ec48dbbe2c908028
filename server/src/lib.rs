use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use rank_core::{Algorithm, DocId, SearchEngine};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

const MAX_K: usize = 100;
const SNIPPET_LEAD: usize = 100;
const SNIPPET_LEN: usize = 300;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    /// Result count; the engine's configured limit when absent
    pub k: Option<usize>,
    /// tfidf or bm25; the engine's configured algorithm when absent
    pub algo: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub algorithm: String,
    pub took_ms: u128,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f64,
    pub content: String,
    pub snippet: String,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

pub fn build_app(engine: Arc<SearchEngine>) -> Router {
    let app_state = AppState { engine };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let start = std::time::Instant::now();
    let engine = &state.engine;
    let algorithm = match params.algo.as_deref() {
        Some(name) => name.parse::<Algorithm>().map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
        None => engine.config().algorithm,
    };
    let k = params.k.unwrap_or(engine.config().limit).clamp(1, MAX_K);

    let hits = engine.search_with(&params.q, algorithm, k);
    let pattern = highlight_pattern(&params.q);
    let results = hits
        .results
        .into_iter()
        .map(|r| {
            let snippet = snippet(&r.content, pattern.as_ref());
            SearchHit { doc_id: r.doc_id, score: r.score, content: r.content, snippet }
        })
        .collect();

    let elapsed = start.elapsed();
    Ok(Json(SearchResponse {
        query: params.q,
        algorithm: algorithm.to_string(),
        took_ms: elapsed.as_millis(),
        took_s: elapsed.as_secs_f64(),
        total_hits: hits.total_hits,
        results,
    }))
}

pub async fn doc_handler(
    State(state): State<AppState>,
    Path(doc_id): Path<DocId>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match state.engine.document(doc_id) {
        Some(doc) => Ok(Json(serde_json::json!({
            "doc_id": doc.id,
            "content": doc.content,
            "length": state.engine.corpus().document_length(doc.id),
        }))),
        None => Err((StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "not found" })))),
    }
}

/// Case-insensitive alternation of the raw query words, longest first.
fn highlight_pattern(query: &str) -> Option<Regex> {
    let mut terms: Vec<&str> = query.split_whitespace().collect();
    if terms.is_empty() {
        return None;
    }
    terms.sort_by_key(|t| std::cmp::Reverse(t.len()));
    let alternation = terms.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|");
    RegexBuilder::new(&alternation).case_insensitive(true).build().ok()
}

/// A window of the content around the first query match, with matches wrapped in `<em>`.
fn snippet(content: &str, pattern: Option<&Regex>) -> String {
    let Some(re) = pattern else {
        return content.chars().take(SNIPPET_LEN).collect();
    };
    let first = re.find(content).map_or(0, |m| m.start());
    let start = floor_char_boundary(content, first.saturating_sub(SNIPPET_LEAD));
    let end = floor_char_boundary(content, (start + SNIPPET_LEN).min(content.len()));
    re.replace_all(&content[start..end], "<em>$0</em>").into_owned()
}

fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
