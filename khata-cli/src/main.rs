//! khata: parse a bank/payment-app statement into a normalized ledger.
//!
//! Prints the JSON result to stdout and exits 0; on failure prints a JSON
//! `{error, details}` object to stderr and exits 1, so shell pipelines and
//! wrapping services get a uniform contract either way.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use khata_ingest::{ParseOptions, StatementNormalizer};

#[derive(Parser, Debug)]
#[command(name = "khata", version, about = "Statement parsing and categorization engine")]
struct Cli {
    /// Path to a PDF or CSV statement
    file: PathBuf,

    /// Provider context (e.g. "paytm", "phonepe") for the mismatch guardrail
    #[arg(long)]
    provider: Option<String>,

    /// Maximum accepted file size in megabytes
    #[arg(long, default_value_t = 20)]
    max_size_mb: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let details: Vec<String> = e.chain().skip(1).map(|c| c.to_string()).collect();
            let error = serde_json::json!({
                "error": e.to_string(),
                "details": details,
            });
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("reading {}", cli.file.display()))?;
    let filename = cli
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let normalizer = StatementNormalizer::new(ParseOptions {
        provider_context: cli.provider.clone(),
        max_file_bytes: cli.max_size_mb * 1024 * 1024,
        today: None,
    });
    let result = normalizer.parse(&bytes, filename)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(json)
}
