//! Sample catalog commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use pricelens_core::catalog::{self, FixtureCatalog, DEFAULT_MAX_PRICE, FIXTURE_GROUPS};
use pricelens_core::Settings;

use crate::output;

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List the sample groups and the keywords that select them
    List,

    /// Show the listings a category and price band resolve to
    Show {
        /// Product category
        category: String,

        /// Minimum price in rupees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min: f64,

        /// Maximum price in rupees
        #[arg(long, default_value_t = DEFAULT_MAX_PRICE, allow_negative_numbers = true)]
        max: f64,

        /// Seed for placeholder listings
        #[arg(long)]
        seed: Option<u64>,

        /// Print the listings as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn execute(cmd: CatalogCommands, settings: Settings) -> Result<()> {
    settings.validate()?;

    match cmd {
        CatalogCommands::List => {
            output::print_groups(FIXTURE_GROUPS);
            Ok(())
        }
        CatalogCommands::Show {
            category,
            min,
            max,
            seed,
            json,
        } => {
            catalog::check_query(&category, min, max)?;

            let mut provider = FixtureCatalog::from_settings(&settings.catalog);
            if let Some(seed) = seed {
                provider = provider.with_seed(seed);
            }
            let products = provider.lookup(category.trim(), min, max);

            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
                return Ok(());
            }

            match catalog::classify(&category) {
                Some(group) => println!("{} {}", "Group:".bold(), group.label.cyan()),
                None => println!("{} {}", "Group:".bold(), "generated placeholders".yellow()),
            }
            println!();
            output::print_products_table(&products);
            Ok(())
        }
    }
}
