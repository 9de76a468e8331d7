use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use company_intel::cli::Cli;
use company_intel::{CompanyScraper, ScraperConfig};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the JSON report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(symbol) = cli.resolved_symbol() else {
        bail!("Please provide a stock symbol\nUsage: company-intel AAPL");
    };

    let config = ScraperConfig::from_env(symbol);
    info!("Scraping company intelligence for {}", config.symbol());

    let scraper = CompanyScraper::new(config)?;
    let report = scraper.full_report();
    if report.has_errors() {
        warn!("Report for {} contains degraded sections", report.symbol);
    }

    println!("{}", report.render(cli.output)?);
    Ok(())
}
