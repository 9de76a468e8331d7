// Key statistics page extraction
//
// Rows are matched by label against a fixed table of lowercase substrings.
// The first matching pattern claims the row; rows matching nothing are dropped.

use scraper::Html;
use serde::Serialize;
use tracing::debug;

use super::select::{element_text, select_all, select_all_in};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    MarketCap,
    PeRatio,
    Eps,
    DividendYield,
    Beta,
    WeekHigh52,
    WeekLow52,
    AvgVolume,
}

/// Label patterns in match priority order; every substring must occur in the label
const LABEL_PATTERNS: &[(&[&str], StatField)] = &[
    (&["market cap"], StatField::MarketCap),
    (&["trailing p/e"], StatField::PeRatio),
    (&["eps", "diluted"], StatField::Eps),
    (&["dividend yield"], StatField::DividendYield),
    (&["beta"], StatField::Beta),
    (&["52 week high"], StatField::WeekHigh52),
    (&["52 week low"], StatField::WeekLow52),
    (&["avg vol"], StatField::AvgVolume),
];

/// Field a row label maps to, if any.
///
/// `label` must already be lowercased.
pub fn match_label(label: &str) -> Option<StatField> {
    LABEL_PATTERNS
        .iter()
        .find(|(needles, _)| needles.iter().all(|needle| label.contains(needle)))
        .map(|(_, field)| *field)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyStatistics {
    pub market_cap: String,
    pub pe_ratio: String,
    pub eps: String,
    pub dividend_yield: String,
    pub beta: String,
    #[serde(rename = "52_week_high")]
    pub week_high_52: String,
    #[serde(rename = "52_week_low")]
    pub week_low_52: String,
    pub avg_volume: String,
}

impl KeyStatistics {
    fn set(&mut self, field: StatField, value: String) {
        let slot = match field {
            StatField::MarketCap => &mut self.market_cap,
            StatField::PeRatio => &mut self.pe_ratio,
            StatField::Eps => &mut self.eps,
            StatField::DividendYield => &mut self.dividend_yield,
            StatField::Beta => &mut self.beta,
            StatField::WeekHigh52 => &mut self.week_high_52,
            StatField::WeekLow52 => &mut self.week_low_52,
            StatField::AvgVolume => &mut self.avg_volume,
        };
        *slot = value;
    }
}

/// Error-only object returned when the statistics page could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsUnavailable {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatisticsRecord {
    Found(KeyStatistics),
    Unavailable(StatisticsUnavailable),
}

impl StatisticsRecord {
    pub fn unavailable(error: &anyhow::Error) -> Self {
        StatisticsRecord::Unavailable(StatisticsUnavailable {
            error: format!("{:#}", error),
        })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            StatisticsRecord::Found(_) => None,
            StatisticsRecord::Unavailable(unavailable) => Some(&unavailable.error),
        }
    }
}

/// Scan every row of every table on the page.
///
/// A later row matching the same field overwrites an earlier one.
pub fn parse_statistics(html: &str) -> KeyStatistics {
    let document = Html::parse_document(html);
    let mut stats = KeyStatistics::default();
    let mut matched = 0;

    for table in select_all(&document, "table") {
        for row in select_all_in(table, "tr") {
            let cells = select_all_in(row, "td");
            if cells.len() < 2 {
                continue;
            }
            let label = element_text(cells[0]).to_lowercase();
            if let Some(field) = match_label(&label) {
                stats.set(field, element_text(cells[1]));
                matched += 1;
            }
        }
    }

    debug!("Matched {} statistics row(s)", matched);
    stats
}
