use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rank_core::loader::load_path;
use rank_core::{Document, SearchEngine};
use rank_server::SearchResponse;
use serde_json::Value;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;
use tower::ServiceExt;

fn tiny_app() -> Router {
    let engine = SearchEngine::with_defaults(vec![
        Document::new(0, "Rust is great. rust systems programming."),
        Document::new(1, "Learning rust"),
        Document::new(2, "Gardening for beginners"),
    ])
    .unwrap();
    rank_server::build_app(Arc::new(engine))
}

async fn call(app: Router, uri: &str) -> (StatusCode, Bytes) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let (status, body) = call(tiny_app(), "/search?q=rust&k=2").await;
    assert_eq!(status, StatusCode::OK);
    let resp: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(resp.algorithm, "tfidf");
    assert_eq!(resp.total_hits, 2);
    assert_eq!(resp.results.len(), 2);
    // doc 0 contains "rust" twice
    assert_eq!(resp.results[0].doc_id, 0);
    assert_eq!(resp.results[1].doc_id, 1);
    assert!(resp.results[0].score > resp.results[1].score);
    assert_eq!(resp.results[1].snippet, "Learning <em>rust</em>");
}

#[tokio::test]
async fn search_clamps_k_and_accepts_bm25() {
    let (status, body) = call(tiny_app(), "/search?q=rust&k=0&algo=BM25").await;
    assert_eq!(status, StatusCode::OK);
    let resp: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(resp.algorithm, "bm25");
    assert_eq!(resp.total_hits, 2);
    assert_eq!(resp.results.len(), 1);
}

#[tokio::test]
async fn empty_query_has_no_hits() {
    let (status, body) = call(tiny_app(), "/search").await;
    assert_eq!(status, StatusCode::OK);
    let resp: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(resp.total_hits, 0);
    assert!(resp.results.is_empty());
}

#[tokio::test]
async fn unknown_algorithm_is_rejected() {
    let (status, _) = call(tiny_app(), "/search?q=rust&algo=cosine").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn doc_lookup() {
    let (status, body) = call(tiny_app(), "/doc/1").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["content"], "Learning rust");
    assert_eq!(json["length"], 2);

    let (status, body) = call(tiny_app(), "/doc/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "not found");
}

#[tokio::test]
async fn health() {
    let (status, body) = call(tiny_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn serves_a_corpus_loaded_from_disk() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("corpus.jsonl");
    fs::write(&file, "{\"id\": 10, \"content\": \"the quick brown fox\"}\n{\"id\": 11, \"content\": \"the lazy dog\"}\n").unwrap();
    let engine = SearchEngine::with_defaults(load_path(&file).unwrap()).unwrap();
    let app = rank_server::build_app(Arc::new(engine));

    let (status, body) = call(app, "/search?q=fox").await;
    assert_eq!(status, StatusCode::OK);
    let resp: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(resp.results.len(), 1);
    assert_eq!(resp.results[0].doc_id, 10);
}
