//! Analysis command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use pricelens_core::catalog::DEFAULT_MAX_PRICE;
use pricelens_core::config::LlmProvider;
use pricelens_core::{Analyzer, Settings};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Product category, e.g. "gaming laptops"
    pub category: String,

    /// Storefront to search (Amazon.in or Flipkart)
    #[arg(long, default_value = "Amazon.in")]
    pub platform: String,

    /// Minimum price in rupees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min: f64,

    /// Maximum price in rupees
    #[arg(long, default_value_t = DEFAULT_MAX_PRICE, allow_negative_numbers = true)]
    pub max: f64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the language model and use the heuristic summary
    #[arg(long)]
    pub no_llm: bool,

    /// Seed for placeholder listings
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated catalog latency in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

pub async fn execute(args: AnalyzeArgs, mut settings: Settings) -> Result<()> {
    if args.no_llm {
        settings.llm.provider = LlmProvider::Disabled;
    }
    if let Some(seed) = args.seed {
        settings.catalog.seed = Some(seed);
    }
    if let Some(delay_ms) = args.delay_ms {
        settings.catalog.delay_ms = delay_ms;
    }
    settings.validate()?;

    let completion = pricelens_llm::build_completion(&settings.llm)?;
    let analyzer = Analyzer::from_settings(&settings, completion);

    if !args.json {
        println!(
            "{}",
            format!(
                "Analyzing {} on {} ({} to {})...",
                args.category.trim(),
                args.platform,
                output::rupees(args.min),
                output::rupees(args.max)
            )
            .dimmed()
        );
    }

    let result = analyzer
        .analyze(&args.platform, &args.category, args.min, args.max)
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_analysis(&result, &analyzer.engine_label());
    }

    Ok(())
}
