use clap::Parser;

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "company-intel")]
#[command(
    version,
    about = "Scrape company intelligence data for a stock ticker"
)]
#[command(
    long_about = "Fetch the profile, key statistics and recent news for a ticker from Yahoo Finance pages and print them as a single JSON document."
)]
pub struct Cli {
    /// Stock symbol (e.g., AAPL)
    pub symbol: Option<String>,

    /// Stock symbol (alternative to the positional argument)
    #[arg(short = 's', long = "symbol", value_name = "SYMBOL")]
    pub symbol_flag: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

impl Cli {
    /// Positional symbol first, then `--symbol`; blank values count as missing
    pub fn resolved_symbol(&self) -> Option<&str> {
        [self.symbol.as_deref(), self.symbol_flag.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_symbol_and_default_output() {
        let cli = Cli::try_parse_from(["company-intel", "aapl"]).unwrap();
        assert_eq!(cli.resolved_symbol(), Some("aapl"));
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_flag_symbol_and_pretty_output() {
        let cli = Cli::try_parse_from(["company-intel", "-s", "MSFT", "-o", "pretty"]).unwrap();
        assert_eq!(cli.resolved_symbol(), Some("MSFT"));
        assert_eq!(cli.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_positional_wins_over_flag() {
        let cli = Cli::try_parse_from(["company-intel", "nvda", "--symbol", "amd"]).unwrap();
        assert_eq!(cli.resolved_symbol(), Some("nvda"));
    }

    #[test]
    fn test_missing_symbol_is_none() {
        let cli = Cli::try_parse_from(["company-intel"]).unwrap();
        assert_eq!(cli.resolved_symbol(), None);

        let cli = Cli::try_parse_from(["company-intel", "  "]).unwrap();
        assert_eq!(cli.resolved_symbol(), None);
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["company-intel", "AAPL", "--output", "yaml"]).is_err());
    }
}
