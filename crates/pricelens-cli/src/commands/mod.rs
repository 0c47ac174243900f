//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use pricelens_core::Settings;

pub mod analyze;
pub mod catalog;
pub mod serve;

/// PriceLens - compare product listings, prices and review sentiment
#[derive(Parser)]
#[command(name = "pricelens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ./pricelens.toml when present)
    #[arg(short, long, global = true, env = "PRICELENS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze listings in a category and price band
    Analyze(analyze::AnalyzeArgs),

    /// Inspect the built-in sample catalog
    #[command(subcommand)]
    Catalog(catalog::CatalogCommands),

    /// Start the web front end
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        // Flags are applied by each command, which validates afterwards.
        let settings = Settings::resolve(self.config.as_deref())?;
        debug!(
            provider = ?settings.llm.provider,
            delay_ms = settings.catalog.delay_ms,
            seed = ?settings.catalog.seed,
            "Resolved settings"
        );

        match self.command {
            Commands::Analyze(args) => analyze::execute(args, settings).await,
            Commands::Catalog(cmd) => catalog::execute(cmd, settings),
            Commands::Serve(args) => serve::execute(args, settings).await,
        }
    }
}
