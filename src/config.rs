//! Immutable scraper configuration
//!
//! One `ScraperConfig` is built per run and handed to every extractor.

use std::time::Duration;
use tracing::warn;

/// Provider origin used for page URLs and for absolutizing news links
pub const DEFAULT_BASE_URL: &str = "https://finance.yahoo.com";

/// Browser identity sent with every page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Human-readable provider name, used in the report and as the news source fallback
pub const SOURCE_NAME: &str = "Yahoo Finance";

const BASE_URL_ENV: &str = "COMPANY_INTEL_BASE_URL";
const TIMEOUT_ENV: &str = "COMPANY_INTEL_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    symbol: String,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl ScraperConfig {
    /// Configuration with the built-in provider defaults.
    ///
    /// The symbol is trimmed and uppercased; no validation against an
    /// exchange listing is attempted.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Defaults overridden by `COMPANY_INTEL_BASE_URL` and
    /// `COMPANY_INTEL_TIMEOUT_SECS` when set.
    pub fn from_env(symbol: &str) -> Self {
        let base_url = std::env::var(BASE_URL_ENV).ok();
        let timeout = std::env::var(TIMEOUT_ENV).ok();
        Self::new(symbol).with_overrides(base_url.as_deref(), timeout.as_deref())
    }

    /// Apply raw override values; a blank base URL or an invalid timeout
    /// leaves the current value in place.
    pub fn with_overrides(mut self, base_url: Option<&str>, timeout: Option<&str>) -> Self {
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            self = self.with_base_url(base_url);
        }

        if let Some(raw) = timeout {
            match parse_timeout(raw) {
                Some(timeout) => self = self.with_timeout(timeout),
                None => warn!("Ignoring invalid {}={:?}", TIMEOUT_ENV, raw),
            }
        }

        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn profile_url(&self) -> String {
        self.quote_url("profile")
    }

    pub fn statistics_url(&self) -> String {
        self.quote_url("key-statistics")
    }

    pub fn news_url(&self) -> String {
        self.quote_url("news")
    }

    fn quote_url(&self, page: &str) -> String {
        format!("{}/quote/{}/{}", self.base_url, self.symbol, page)
    }
}

/// Positive whole number of seconds
pub fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_is_uppercased() {
        let config = ScraperConfig::new(" aapl ");
        assert_eq!(config.symbol(), "AAPL");
    }

    #[test]
    fn test_default_page_urls() {
        let config = ScraperConfig::new("msft");
        assert_eq!(
            config.profile_url(),
            "https://finance.yahoo.com/quote/MSFT/profile"
        );
        assert_eq!(
            config.statistics_url(),
            "https://finance.yahoo.com/quote/MSFT/key-statistics"
        );
        assert_eq!(config.news_url(), "https://finance.yahoo.com/quote/MSFT/news");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let config = ScraperConfig::new("brk.b").with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(
            config.news_url(),
            "http://127.0.0.1:8080/quote/BRK.B/news"
        );
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("5"), Some(Duration::from_secs(5)));
        assert_eq!(parse_timeout(" 30 "), Some(Duration::from_secs(30)));
        assert_eq!(parse_timeout("abc"), None);
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("-3"), None);
        assert_eq!(parse_timeout(""), None);
    }

    #[test]
    fn test_invalid_timeout_override_keeps_default() {
        for raw in ["abc", "0", "1.5"] {
            let config = ScraperConfig::new("AAPL").with_overrides(None, Some(raw));
            assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        }

        let config = ScraperConfig::new("AAPL")
            .with_timeout(Duration::from_secs(3))
            .with_overrides(None, Some("nope"));
        assert_eq!(config.timeout(), Duration::from_secs(3));

        let config = ScraperConfig::new("AAPL").with_overrides(None, Some("7"));
        assert_eq!(config.timeout(), Duration::from_secs(7));
    }

    #[test]
    fn test_blank_base_url_override_keeps_default() {
        for raw in ["", "   "] {
            let config = ScraperConfig::new("AAPL").with_overrides(Some(raw), None);
            assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        }

        let config = ScraperConfig::new("AAPL").with_overrides(Some("http://localhost:9000/"), None);
        assert_eq!(config.profile_url(), "http://localhost:9000/quote/AAPL/profile");
    }
}
