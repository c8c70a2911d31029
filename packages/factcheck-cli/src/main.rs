//! Command-line surface for the fact-check engine.
//!
//! One-shot mode takes free text, a text file, an image file, or one of
//! the dedicated analysis flags, and prints the resulting record as
//! pretty-printed JSON. With no arguments it drops into a REPL that reads
//! inputs until an exit keyword.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use factcheck::ai::GeminiReasoner;
use factcheck::{FactCheckConfig, FactChecker, StoredRecord};
use gemini_client::GeminiClient;

#[derive(Parser)]
#[command(name = "factcheck", about = "Fact-check claims, URLs, keywords, and images")]
struct Cli {
    /// Free-text claim, URL, or keyword to check
    input: Vec<String>,

    /// Read the input text from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Fact-check an image file (jpg, png, gif, webp)
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Run credibility analysis on a URL
    #[arg(long, value_name = "URL")]
    analyze: Option<String>,

    /// Search the web and fact-check each result
    #[arg(long, value_name = "QUERY")]
    research: Option<String>,

    /// Result store path
    #[arg(long, value_name = "PATH", default_value = "results.json")]
    store: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "factcheck=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = GeminiClient::from_env()
        .context("GEMINI_API_KEY must be set (environment or .env file)")?;
    let config = FactCheckConfig::new().with_store_path(&cli.store);
    let checker = FactChecker::with_config(GeminiReasoner::new(client), config);

    if let Some(url) = cli.analyze {
        print_outcome(checker.analyze_page(&url).await);
    } else if let Some(query) = cli.research {
        print_outcome(checker.research(&query).await);
    } else if let Some(path) = cli.image {
        let input = encode_image(&path)?;
        print_outcome(checker.check(&input).await);
    } else if let Some(path) = cli.file {
        let input = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        print_outcome(checker.check(input.trim()).await);
    } else if !cli.input.is_empty() {
        let input = cli.input.join(" ");
        print_outcome(checker.check(&input).await);
    } else {
        repl(&checker).await?;
    }

    Ok(())
}

/// Print the final record (or an error-shaped record) as pretty JSON.
/// Pipeline failures never produce a non-zero exit.
fn print_outcome(outcome: factcheck::Result<StoredRecord>) {
    let json = match outcome {
        Ok(record) => serde_json::to_string_pretty(&record),
        Err(e) => serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() })),
    }
    .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"));
    println!("{json}");
}

/// Read an image file into an embedded data URL.
fn encode_image(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read image {}", path.display()))?;

    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    };

    Ok(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
}

/// Interactive loop: one input per line until an exit keyword.
async fn repl<R: factcheck::Reasoner>(checker: &FactChecker<R>) -> Result<()> {
    println!("{}", "=== Fact Checker with Intent Detection ===".bright_cyan());
    println!("Type 'exit' to quit.\n");

    let stdin = std::io::stdin();
    loop {
        print!("{} ", "> Enter a claim, URL, or promo:".bright_green());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Exiting...");
            break;
        }
        if input.is_empty() {
            println!("{}", "Please enter a valid input.".yellow());
            continue;
        }

        print_outcome(checker.check(input).await);
    }

    Ok(())
}
