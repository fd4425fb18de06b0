use anyhow::{Context, Result};
use search_core::{paginate, DocId, Document, DocumentStatus, RequestQueue, SearchConfig, SearchServer};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One input record, read from `.json` (object or array) or `.jsonl` files.
#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: DocId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub results: Vec<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub queries: Vec<QueryReport>,
    pub no_result_requests: usize,
}

#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub query: String,
    pub document_id: DocId,
    pub words: Vec<String>,
    pub status: DocumentStatus,
}

/// Input files under `input` (a file or a directory), in path order.
pub fn collect_input_files(input: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
        files.sort();
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files
}

pub fn read_documents(file: &Path) -> Result<Vec<InputDoc>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        let mut docs = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let doc = serde_json::from_str(&line)
                .with_context(|| format!("{}:{}: malformed document", file.display(), number + 1))?;
            docs.push(doc);
        }
        return Ok(docs);
    }
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let docs = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<InputDoc>, _>>()?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)?],
        _ => Vec::new(),
    };
    Ok(docs)
}

/// Build a server from every document under `input`. Documents the engine
/// rejects are logged and skipped; unreadable files abort the load.
pub fn load_server(input: &Path, stop_words: &str, config: SearchConfig) -> Result<(SearchServer, IngestStats)> {
    let stop = search_core::tokenizer::split_into_words(stop_words)?;
    let mut server = SearchServer::with_config(stop, config)?;
    let mut stats = IngestStats::default();
    for file in collect_input_files(input) {
        for doc in read_documents(&file)? {
            match server.add_document(doc.id, &doc.text, doc.status, &doc.ratings) {
                Ok(()) => stats.accepted += 1,
                Err(err) => {
                    tracing::warn!(file = %file.display(), document_id = doc.id, %err, "document rejected");
                    stats.rejected += 1;
                }
            }
        }
    }
    tracing::info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        max_results = server.config().max_result_document_count,
        "ingested documents"
    );
    Ok((server, stats))
}

/// Run every query through a request history filtered by `status`. Malformed
/// queries are reported and do not stop the session.
pub fn run_queries(server: &SearchServer, queries: &[String], status: DocumentStatus) -> Result<SessionReport> {
    let mut history = RequestQueue::new(server);
    let mut reports = Vec::with_capacity(queries.len());
    for query in queries {
        let report = match history.add_find_request_by_status(query, status) {
            Ok(results) => QueryReport { query: query.clone(), results, error: None },
            Err(err) if err.is_query_error() => {
                tracing::warn!(query = %query, %err, "query rejected");
                QueryReport { query: query.clone(), results: Vec::new(), error: Some(err.to_string()) }
            }
            Err(err) => return Err(err.into()),
        };
        reports.push(report);
    }
    Ok(SessionReport { queries: reports, no_result_requests: history.no_result_requests() })
}

pub fn match_document(server: &SearchServer, query: &str, id: DocId) -> Result<MatchReport> {
    let (words, status) = server.match_document(query, id)?;
    Ok(MatchReport { query: query.to_string(), document_id: id, words, status })
}

/// Plain-text rendering: each query's results page by page.
pub fn render_session(report: &SessionReport, page_size: usize) -> Result<String> {
    let mut out = String::new();
    for query in &report.queries {
        writeln!(out, "query: {}", query.query)?;
        if let Some(err) = &query.error {
            writeln!(out, "  error: {err}")?;
            continue;
        }
        if query.results.is_empty() {
            writeln!(out, "  no documents found")?;
            continue;
        }
        for (number, page) in paginate(&query.results, page_size)?.iter().enumerate() {
            writeln!(out, "  page {}: {}", number + 1, page)?;
        }
    }
    writeln!(out, "empty requests: {}", report.no_result_requests)?;
    Ok(out)
}
