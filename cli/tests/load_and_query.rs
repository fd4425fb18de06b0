use search_cli::{collect_input_files, load_server, match_document, render_session, run_queries, IngestStats};
use search_core::{DocumentStatus, SearchConfig};
use std::fs;
use tempfile::tempdir;

fn write_corpus(dir: &std::path::Path) {
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(
        dir.join("docs.jsonl"),
        concat!(
            r#"{"id": 0, "text": "белый кот и модный ошейник", "ratings": [8, -3]}"#, "\n",
            "\n",
            r#"{"id": 1, "text": "пушистый кот пушистый хвост", "status": "actual", "ratings": [7, 2, 7]}"#, "\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.join("nested/more.json"),
        r#"[
            {"id": 2, "text": "ухоженный пёс выразительные глаза", "ratings": [5, -12, 2, 1]},
            {"id": 3, "text": "ухоженный скворец евгений", "status": "banned", "ratings": [9]},
            {"id": 1, "text": "повтор", "ratings": []},
            {"id": -4, "text": "отрицательный"}
        ]"#,
    )
    .unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();
}

#[test]
fn collects_only_json_inputs() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let files = collect_input_files(dir.path());
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap() != "txt"));
}

#[test]
fn loads_and_skips_rejected_documents() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let (server, stats) = load_server(dir.path(), "и в на", SearchConfig::default()).unwrap();
    assert_eq!(stats, IngestStats { accepted: 4, rejected: 2 });
    assert_eq!(server.document_count(), 4);
}

#[test]
fn runs_queries_and_counts_empty_requests() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let (server, _) = load_server(dir.path(), "и в на", SearchConfig::default()).unwrap();
    let queries = vec!["пушистый ухоженный кот".to_string(), "мышь".to_string(), "кот --пёс".to_string()];
    let report = run_queries(&server, &queries, DocumentStatus::Actual).unwrap();

    let ids: Vec<_> = report.queries[0].results.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 0, 2]);
    assert!(report.queries[1].results.is_empty());
    assert!(report.queries[2].error.is_some());
    assert_eq!(report.no_result_requests, 1);

    let text = render_session(&report, 2).unwrap();
    assert!(text.contains("  page 2: { document_id = 2,"));
    assert!(text.contains("  no documents found"));
    assert!(text.ends_with("empty requests: 1\n"));
}

#[test]
fn matches_a_document() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let (server, _) = load_server(dir.path(), "", SearchConfig::default()).unwrap();
    let report = match_document(&server, "ухоженный евгений -кот", 3).unwrap();
    assert_eq!(report.words, vec!["евгений", "ухоженный"]);
    assert_eq!(report.status, DocumentStatus::Banned);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "banned");
}

#[test]
fn malformed_input_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.jsonl"), "{not json}\n").unwrap();
    assert!(load_server(dir.path(), "", SearchConfig::default()).is_err());
}
