//! Company Intel - company intelligence scraper
//!
//! This library fetches a ticker's profile, key statistics and news pages from
//! Yahoo Finance, extracts a fixed set of fields with HTML selectors, and
//! merges them into one JSON report.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scraping;

pub use config::ScraperConfig;
pub use report::{CompanyReport, OutputFormat};
pub use scraping::CompanyScraper;
