//! # docqa CLI
//!
//! Question answering over uploaded documents. PDF and DOCX files (and
//! ZIP archives containing them) are parsed, chunked, embedded, and
//! indexed once; questions are then answered from the most relevant
//! chunks via a language model.
//!
//! ## Commands
//!
//! - `docqa ask <QUESTION> <FILES>...` - process files and answer one question
//! - `docqa chat <FILES>...` - process files, then answer questions interactively
//!
//! ## Examples
//!
//! ```bash
//! # One-shot question over a report
//! docqa ask "What was Q3 revenue?" report.pdf
//!
//! # Interactive session over an archive of documents
//! docqa chat contracts.zip notes.docx
//!
//! # JSON output with the retrieved context
//! docqa ask "Who signed the contract?" contract.pdf --format json
//! ```
//!
//! Requires `GROQ_API_KEY` in the environment or a `.env` file.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docqa_answer::GroqCompleter;
use docqa_core::{Answer, Completer, Embedder, RawFile};
use docqa_embed::{HashEmbedder, HttpEmbedder};
use docqa_session::{DocumentPipeline, SessionStore};
use serde::Serialize;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "docqa")]
#[command(about = "Question answering over uploaded documents")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Process documents and answer a single question
    Ask {
        /// Question to answer
        question: String,

        /// Documents to process (.pdf, .docx, .zip)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of chunks retrieved as context
        #[arg(short = 'k', long, default_value = "3")]
        top_k: usize,
    },

    /// Process documents, then answer questions interactively
    Chat {
        /// Documents to process (.pdf, .docx, .zip)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of chunks retrieved as context
        #[arg(short = 'k', long, default_value = "3")]
        top_k: usize,
    },
}

/// Output structure for a single answer.
#[derive(Serialize)]
struct AnswerOutput {
    question: String,
    answer: String,
    sources: Vec<SourceItem>,
}

#[derive(Serialize)]
struct SourceItem {
    source: String,
    chunk_index: u32,
    text: String,
}

/// Read uploaded files from disk into memory.
fn read_files(paths: &[PathBuf]) -> Result<Vec<RawFile>> {
    paths
        .iter()
        .map(|path| {
            let content = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            Ok(RawFile::new(name, content))
        })
        .collect()
}

/// Build the embedder from configuration.
///
/// Falls back to the deterministic offline embedder when no embeddings
/// endpoint is configured, so the tool stays usable without one.
fn create_embedder(config: &Config) -> Arc<dyn Embedder> {
    match &config.embedding_api_url {
        Some(url) => Arc::new(HttpEmbedder::new(
            url.clone(),
            config.embedding_api_key.clone(),
            config.embedding_model.clone(),
            config.embedding_dim,
        )),
        None => {
            warn!("EMBEDDING_API_URL not set, using offline hash embedder");
            Arc::new(HashEmbedder::with_dimension(config.embedding_dim))
        }
    }
}

fn print_answer(question: &str, answer: &Answer, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = AnswerOutput {
                question: question.to_string(),
                answer: answer.answer.clone(),
                sources: answer
                    .context
                    .iter()
                    .map(|chunk| SourceItem {
                        source: chunk.source().unwrap_or("unknown").to_string(),
                        chunk_index: chunk.chunk_index,
                        text: truncate(&chunk.text, 200),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{}", answer.answer);
            if !answer.context.is_empty() {
                println!();
                println!("Sources:");
                for chunk in &answer.context {
                    println!(
                        "  {} (chunk {})",
                        chunk.source().unwrap_or("unknown"),
                        chunk.chunk_index
                    );
                }
            }
        }
    }
    Ok(())
}

async fn create_session(
    store: &SessionStore,
    paths: &[PathBuf],
) -> Result<String> {
    let files = read_files(paths)?;
    info!("Processing {} file(s)...", files.len());

    let id = store
        .create(&files)
        .await
        .context("Document processing failed")?;

    let session = store.get(&id).await?;
    info!(
        "Ready: {} chunks indexed at {}",
        session.chunk_count(),
        session.created_at().format("%Y-%m-%d %H:%M:%S")
    );
    Ok(id)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = Config::from_env()?;
    let embedder = create_embedder(&config);
    let completer: Arc<dyn Completer> = Arc::new(GroqCompleter::new(
        config.groq_api_key.clone(),
        config.llm_model.clone(),
    ));

    match cli.command {
        Commands::Ask {
            question,
            files,
            top_k,
        } => {
            let pipeline = DocumentPipeline::new(embedder, completer).with_top_k(top_k);
            let store = SessionStore::new(pipeline);

            let id = create_session(&store, &files).await?;
            let answer = store.query(&id, &question).await?;
            print_answer(&question, &answer, cli.format)?;
        }

        Commands::Chat { files, top_k } => {
            let pipeline = DocumentPipeline::new(embedder, completer).with_top_k(top_k);
            let store = SessionStore::new(pipeline);

            let id = create_session(&store, &files).await?;
            println!("Documents processed. Ask questions (empty line to exit).");

            let stdin = std::io::stdin();
            loop {
                print!("> ");
                std::io::stdout().flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                let question = line.trim();
                if question.is_empty() {
                    break;
                }

                match store.query(&id, question).await {
                    Ok(answer) => print_answer(question, &answer, cli.format)?,
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
        }
    }

    Ok(())
}

/// Truncate a string to max length, adding ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    let s = s.replace('\n', " ").replace('\r', "");
    if s.chars().count() <= max_len {
        s
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
