//! Error handling for company-intel
//!
//! Every provider page can fail in exactly one way from the caller's point of
//! view: the page could not be fetched. The variants below name the ways that
//! happens; anyhow carries the context chain up to the extractor, which turns
//! it into a degraded record.

use thiserror::Error;

/// Failures while fetching a provider page
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{status} for url ({url})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed reading response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Result type alias for scraping operations
pub type Result<T> = anyhow::Result<T>;
