//! Aggregate company report and its JSON rendering

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, Timelike};
use clap::ValueEnum;
use serde::Serialize;

use crate::config::SOURCE_NAME;
use crate::scraping::{NewsItem, ProfileRecord, StatisticsRecord};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const TIMESTAMP_MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// JSON layout written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact single-line JSON
    #[default]
    Json,
    /// JSON indented by two spaces
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyReport {
    pub symbol: String,
    pub timestamp: String,
    pub profile: ProfileRecord,
    pub statistics: StatisticsRecord,
    pub news: Vec<NewsItem>,
    pub source: String,
}

impl CompanyReport {
    /// Assemble a report stamped with the current local time
    pub fn new(
        symbol: &str,
        profile: ProfileRecord,
        statistics: StatisticsRecord,
        news: Vec<NewsItem>,
    ) -> Self {
        Self::at(Local::now().naive_local(), symbol, profile, statistics, news)
    }

    pub fn at(
        generated_at: NaiveDateTime,
        symbol: &str,
        profile: ProfileRecord,
        statistics: StatisticsRecord,
        news: Vec<NewsItem>,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            timestamp: format_timestamp(generated_at),
            profile,
            statistics,
            news,
            source: SOURCE_NAME.to_string(),
        }
    }

    /// True when any extractor had to fall back to a degraded record
    pub fn has_errors(&self) -> bool {
        self.profile.error().is_some()
            || self.statistics.error().is_some()
            || self.news.iter().any(|item| item.error().is_some())
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Pretty => serde_json::to_string_pretty(self),
        };
        rendered.context("Failed to serialize company report")
    }
}

/// ISO-8601 local time; the fraction is omitted when there are no microseconds
fn format_timestamp(generated_at: NaiveDateTime) -> String {
    let format = if generated_at.nanosecond() / 1_000 == 0 {
        TIMESTAMP_FORMAT
    } else {
        TIMESTAMP_MICROS_FORMAT
    };
    generated_at.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraping::statistics::KeyStatistics;
    use crate::scraping::{CompanyProfile, NewsArticle};
    use chrono::NaiveDate;

    fn sample_report() -> CompanyReport {
        let generated_at = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_micro_opt(9, 30, 5, 42)
            .unwrap();
        let profile = ProfileRecord::Found(CompanyProfile {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            sector: "Technology".to_string(),
            industry: String::new(),
            website: String::new(),
            description: String::new(),
            employees: String::new(),
            headquarters: String::new(),
            executives: Vec::new(),
        });
        let statistics = StatisticsRecord::Found(KeyStatistics {
            beta: "1.21".to_string(),
            ..KeyStatistics::default()
        });
        let news = vec![NewsItem::Article(NewsArticle {
            title: "Apple unveils".to_string(),
            url: "https://finance.yahoo.com/news/a.html".to_string(),
            source: "Reuters".to_string(),
        })];

        CompanyReport::at(generated_at, "AAPL", profile, statistics, news)
    }

    #[test]
    fn test_report_keys_in_order() {
        let json = sample_report().render(OutputFormat::Json).unwrap();

        let positions: Vec<usize> = [
            "\"symbol\"",
            "\"timestamp\"",
            "\"profile\"",
            "\"statistics\"",
            "\"news\"",
            "\"source\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.ends_with(r#""source":"Yahoo Finance"}"#));
    }

    #[test]
    fn test_timestamp_is_iso_8601_local() {
        let report = sample_report();
        assert_eq!(report.timestamp, "2025-03-14T09:30:05.000042");
    }

    #[test]
    fn test_timestamp_without_micros_has_no_fraction() {
        let whole_second = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap();
        assert_eq!(format_timestamp(whole_second), "2025-03-14T09:30:05");

        let sub_micro = whole_second.with_nanosecond(999).unwrap();
        assert_eq!(format_timestamp(sub_micro), "2025-03-14T09:30:05");

        let half_second = whole_second.with_nanosecond(500_000_000).unwrap();
        assert_eq!(format_timestamp(half_second), "2025-03-14T09:30:05.500000");
    }

    #[test]
    fn test_pretty_and_compact_carry_same_data() {
        let report = sample_report();
        let compact = report.render(OutputFormat::Json).unwrap();
        let pretty = report.render(OutputFormat::Pretty).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains("\n  \"timestamp\""));

        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);

        let stripped: String = pretty.lines().map(str::trim_start).collect::<Vec<_>>().join("");
        assert_eq!(stripped.replace("\": ", "\":"), compact);
    }

    #[test]
    fn test_has_errors_checks_each_news_entry() {
        let mut report = sample_report();
        assert!(!report.has_errors());

        report
            .news
            .push(NewsItem::unavailable(&anyhow::anyhow!("boom")));
        assert!(report.has_errors());
    }
}
