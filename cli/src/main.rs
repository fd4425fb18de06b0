use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use search_core::{DocId, DocumentStatus, SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
use search_cli::{load_server, match_document, render_session, run_queries};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank documents against free-text queries with TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IndexArgs {
    /// Input path (JSON/JSONL file or directory)
    #[arg(long)]
    input: PathBuf,
    /// Space-separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    /// Maximum results per query
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Run queries and print the top documents page by page
    Query {
        #[command(flatten)]
        index: IndexArgs,
        /// Only documents with this status are returned
        #[arg(long, default_value = "actual")]
        status: DocumentStatus,
        /// Documents per printed page
        #[arg(long, default_value = "2")]
        page_size: NonZeroUsize,
        /// Print JSON instead of pages
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Queries; prefix a word with `-` to exclude documents containing it
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Show which query words a document contains
    Match {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long)]
        id: DocId,
        query: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { index, status, page_size, json, queries } => {
            let (server, _) = load_server(&index.input, &index.stop_words, config(&index))?;
            let report = run_queries(&server, &queries, status)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_session(&report, page_size.get())?);
            }
        }
        Commands::Match { index, id, query } => {
            let (server, _) = load_server(&index.input, &index.stop_words, config(&index))?;
            let report = match_document(&server, &query, id)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn config(index: &IndexArgs) -> SearchConfig {
    SearchConfig { max_result_document_count: index.max_results, ..SearchConfig::default() }
}
