//! PriceLens CLI - product listing analysis
//!
//! Compares listings in a category and price band, then summarizes top
//! picks, price statistics and review sentiment.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing with optional file logging.
///
/// Only the web server logs to stdout. Every other command writes logs to
/// stderr without ANSI codes so report and JSON output stay clean.
fn init_tracing(log_file: Option<&std::path::Path>, server_mode: bool, verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "pricelens=debug,pricelens_core=debug,pricelens_llm=debug,pricelens_web=debug"
    } else {
        "pricelens=info,pricelens_core=info,pricelens_web=debug"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        // Log to both stdout and file when --log is used
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else if server_mode {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) if args.log => Some(
            args.log_file
                .clone()
                .unwrap_or_else(|| std::path::PathBuf::from("pricelens-serve.log")),
        ),
        _ => None,
    };

    let server_mode = matches!(&cli.command, Commands::Serve(_));
    init_tracing(log_file.as_deref(), server_mode, cli.verbose)?;

    cli.execute().await
}
