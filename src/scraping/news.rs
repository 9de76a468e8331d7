// News page extraction

use scraper::Html;
use serde::Serialize;
use tracing::debug;

use super::select::{first_text_in, select_all, select_all_in};

const MAX_NEWS_ITEMS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsUnavailable {
    pub error: String,
}

/// One entry of the news list.
///
/// A failed fetch is reported as a single `Unavailable` entry rather than an
/// empty list, so consumers check each entry for an `error` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NewsItem {
    Article(NewsArticle),
    Unavailable(NewsUnavailable),
}

impl NewsItem {
    pub fn unavailable(error: &anyhow::Error) -> Self {
        NewsItem::Unavailable(NewsUnavailable {
            error: format!("{:#}", error),
        })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            NewsItem::Article(_) => None,
            NewsItem::Unavailable(unavailable) => Some(&unavailable.error),
        }
    }
}

/// Extract at most five articles from the news page.
///
/// Only the first five stream items are considered; an item without a
/// headline is skipped. Relative links are prefixed with `origin`.
pub fn parse_news(html: &str, origin: &str, default_source: &str) -> Vec<NewsItem> {
    let document = Html::parse_document(html);

    let items: Vec<NewsItem> = select_all(&document, "li.stream-item")
        .into_iter()
        .take(MAX_NEWS_ITEMS)
        .filter_map(|item| {
            let title = first_text_in(item, "h3")?;
            let url = select_all_in(item, "a")
                .first()
                .map(|link| {
                    format!("{}{}", origin, link.value().attr("href").unwrap_or_default())
                })
                .unwrap_or_default();
            let source = first_text_in(item, "div.publishing")
                .unwrap_or_else(|| default_source.to_string());

            Some(NewsItem::Article(NewsArticle { title, url, source }))
        })
        .collect();

    debug!("Parsed {} news item(s)", items.len());
    items
}
