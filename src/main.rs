//! # Content Index
//!
//! Builds a manifest of the Markdown content files of a static site. Each
//! collection (`articles`, `teams`, `services` by default) is a folder under
//! the content root; the tool lists the `.md` files in each and writes
//! `content/index.json`:
//!
//! ```json
//! {
//!   "articles": ["articles/hello-world.md"],
//!   "teams": [],
//!   "services": []
//! }
//! ```
//!
//! ## Usage
//!
//! ```sh
//! content_index
//! content_index -d ./site/content -c articles,events --sort
//! ```
//!
//! ## Pipeline
//!
//! 1. **Configuration**: defaults, then an optional YAML file, then CLI flags
//! 2. **Scanning**: list every collection folder; missing folders are empty
//! 3. **Output**: create the content root if needed and write the index
//!
//! Loading or validating the configuration and the output step are the only
//! ones that can fail. On failure the error is printed to stderr
//! and the process exits with status 1.

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod scanner;
mod utils;

use cli::Cli;
use config::{ConfigOverrides, IndexConfig};
use outputs::json;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed to generate content index");
            eprintln!("Failed to generate content index: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();

    let mut config = IndexConfig::default();
    if let Some(path) = &args.config {
        config = config.extends(ConfigOverrides::load(path).await?);
        info!(path = %path.display(), "Loaded configuration file");
    }
    let config = config.extends(args.overrides());
    config.validate()?;
    debug!(?config, "Resolved configuration");

    info!(
        content_dir = %config.content_dir.display(),
        collections = ?config.collections,
        "Generating content index"
    );

    let document = scanner::build_index(&config).await;
    if document.is_empty() {
        warn!("No collections configured; writing an empty index");
    }
    let output_path = json::write_index(&document, &config).await?;

    println!("{} created successfully!", output_path.display());
    println!("{}", document.to_pretty_json()?);

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        collections = document.len(),
        files = document.total_files(),
        "Execution complete"
    );

    Ok(())
}
