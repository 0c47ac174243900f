//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use pricelens_core::config::LlmProvider;
use pricelens_core::{Analyzer, Settings};
use pricelens_web::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (defaults to server.port, 3030)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (defaults to server.host, 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./pricelens-serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,

    /// Skip the language model and use the heuristic summary
    #[arg(long)]
    pub no_llm: bool,
}

pub async fn execute(args: ServeArgs, mut settings: Settings) -> Result<()> {
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if args.no_llm {
        settings.llm.provider = LlmProvider::Disabled;
    }
    settings.validate()?;

    let completion = pricelens_llm::build_completion(&settings.llm)?;
    let analyzer = Analyzer::from_settings(&settings, completion);
    let model = if analyzer.has_model() {
        analyzer.engine_label().green()
    } else {
        analyzer.engine_label().yellow()
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;

    println!();
    println!("  {} {}", "PriceLens".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  http://{}:{}", "Search".green(), host, port);
    println!("  {}     http://{}:{}/api", "API".green(), host, port);
    println!("  {}   {}", "Engine".green(), model);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    pricelens_web::run_server(AppState::new(analyzer), &host, port).await?;

    Ok(())
}
