// Scraping module for provider quote pages
//
// Three independent page extractors (profile, key statistics, news). Each one
// absorbs its own fetch failure into a degraded record, so nothing here
// returns an error to the caller once the scraper is built.

pub mod news;
pub mod profile;
pub mod select;
pub mod statistics;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::config::{ScraperConfig, SOURCE_NAME};
use crate::error::ScrapeError;
use crate::report::CompanyReport;

pub use news::{NewsArticle, NewsItem};
pub use profile::{CompanyProfile, Executive, ProfileRecord};
pub use statistics::{KeyStatistics, StatisticsRecord};

/// Scraper bound to one ticker symbol
pub struct CompanyScraper {
    config: ScraperConfig,
    client: Client,
}

impl CompanyScraper {
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, client })
    }

    pub fn symbol(&self) -> &str {
        self.config.symbol()
    }

    pub fn scrape_profile(&self) -> ProfileRecord {
        let url = self.config.profile_url();
        match self.fetch_html(&url) {
            Ok(html) => ProfileRecord::Found(profile::parse_profile(&html, self.symbol())),
            Err(err) => {
                warn!("Profile for {} unavailable: {:#}", self.symbol(), err);
                ProfileRecord::unavailable(self.symbol(), &err)
            }
        }
    }

    pub fn scrape_statistics(&self) -> StatisticsRecord {
        let url = self.config.statistics_url();
        match self.fetch_html(&url) {
            Ok(html) => StatisticsRecord::Found(statistics::parse_statistics(&html)),
            Err(err) => {
                warn!("Statistics for {} unavailable: {:#}", self.symbol(), err);
                StatisticsRecord::unavailable(&err)
            }
        }
    }

    pub fn scrape_news(&self) -> Vec<NewsItem> {
        let url = self.config.news_url();
        match self.fetch_html(&url) {
            Ok(html) => news::parse_news(&html, self.config.base_url(), SOURCE_NAME),
            Err(err) => {
                warn!("News for {} unavailable: {:#}", self.symbol(), err);
                vec![NewsItem::unavailable(&err)]
            }
        }
    }

    /// Run the three extractors one after another and merge them into a report
    pub fn full_report(&self) -> CompanyReport {
        let profile = self.scrape_profile();
        let statistics = self.scrape_statistics();
        let news = self.scrape_news();

        CompanyReport::new(self.symbol(), profile, statistics, news)
    }

    fn fetch_html(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            }
            .into());
        }

        let body = response.text().map_err(|source| ScrapeError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(body)
    }
}
