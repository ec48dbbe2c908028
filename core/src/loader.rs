//! Load corpus documents from JSON or JSONL files, or from a directory of them.
//!
//! A JSONL file holds one `{"id": .., "content": ..}` object per line (blank lines skipped).
//! A JSON file holds either an array of such objects or a single object. Directories are
//! walked recursively and their `.json`/`.jsonl` files read in sorted path order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::corpus::Document;
use crate::error::{EngineError, Result};

pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let files = if path.is_dir() {
        corpus_files(path)
    } else if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        return Err(EngineError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("corpus path {} does not exist", path.display()),
        )));
    };

    let mut documents = Vec::new();
    for file in files {
        let loaded = if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            load_jsonl(&file)?
        } else {
            load_json(&file)?
        };
        tracing::debug!(file = %file.display(), docs = loaded.len(), "loaded corpus file");
        documents.extend(loaded);
    }
    tracing::info!(path = %path.display(), num_docs = documents.len(), "loaded corpus");
    Ok(documents)
}

fn corpus_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")))
        .collect();
    files.sort();
    files
}

pub fn load_jsonl(path: &Path) -> Result<Vec<Document>> {
    let text = fs::read_to_string(path)?;
    let mut documents = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let doc: Document = serde_json::from_str(line).map_err(|source| EngineError::ParseLine {
            path: path.to_path_buf(),
            line: lineno + 1,
            source,
        })?;
        documents.push(doc);
    }
    Ok(documents)
}

pub fn load_json(path: &Path) -> Result<Vec<Document>> {
    let text = fs::read_to_string(path)?;
    let parse_err = |source: serde_json::Error| EngineError::Parse { path: path.to_path_buf(), source };
    let json: serde_json::Value = serde_json::from_str(&text).map_err(parse_err)?;
    match json {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<Document>, _>>()
            .map_err(parse_err),
        other => serde_json::from_value(other).map(|doc| vec![doc]).map_err(parse_err),
    }
}
