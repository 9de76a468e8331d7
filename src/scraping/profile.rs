// Company profile page extraction

use scraper::Html;
use serde::Serialize;
use tracing::debug;

use super::select::{element_text, first_text, select_all, select_all_in, truncate_chars};

const DESCRIPTION_MAX_CHARS: usize = 500;
const MAX_EXECUTIVES: usize = 5;

pub const UNAVAILABLE_DESCRIPTION: &str =
    "Unable to fetch company profile. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Executive {
    pub name: String,
    pub title: String,
}

/// Profile fields found on the page; anything not found is an empty string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
    pub website: String,
    pub description: String,
    pub employees: String,
    pub headquarters: String,
    pub executives: Vec<Executive>,
}

/// Stand-in profile returned when the page could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUnavailable {
    pub symbol: String,
    pub error: String,
    pub name: String,
    pub description: String,
    pub executives: Vec<Executive>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProfileRecord {
    Found(CompanyProfile),
    Unavailable(ProfileUnavailable),
}

impl ProfileRecord {
    pub fn unavailable(symbol: &str, error: &anyhow::Error) -> Self {
        ProfileRecord::Unavailable(ProfileUnavailable {
            symbol: symbol.to_string(),
            error: format!("{:#}", error),
            name: symbol.to_string(),
            description: UNAVAILABLE_DESCRIPTION.to_string(),
            executives: Vec::new(),
        })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProfileRecord::Found(_) => None,
            ProfileRecord::Unavailable(unavailable) => Some(&unavailable.error),
        }
    }
}

/// Extract the profile fields from a profile page.
///
/// Each field is looked up independently; a selector that matches nothing
/// leaves that field empty without affecting the others.
pub fn parse_profile(html: &str, symbol: &str) -> CompanyProfile {
    let document = Html::parse_document(html);

    let profile = CompanyProfile {
        symbol: symbol.to_string(),
        name: company_name(&document).unwrap_or_default(),
        sector: sector(&document).unwrap_or_default(),
        industry: industry(&document).unwrap_or_default(),
        website: website(&document).unwrap_or_default(),
        description: description(&document).unwrap_or_default(),
        employees: employees(&document).unwrap_or_default(),
        headquarters: headquarters(&document).unwrap_or_default(),
        executives: executives(&document),
    };

    debug!(
        "Parsed profile for {}: name={:?}, {} executive(s)",
        symbol,
        profile.name,
        profile.executives.len()
    );

    profile
}

fn company_name(document: &Html) -> Option<String> {
    first_text(document, "h1.yf-xxbei9")
}

fn description(document: &Html) -> Option<String> {
    first_text(document, r#"section[data-testid="description"] p"#)
        .map(|text| truncate_chars(&text, DESCRIPTION_MAX_CHARS))
}

fn sector(document: &Html) -> Option<String> {
    first_text(document, r#"a[data-testid="sector-link"]"#)
}

fn industry(document: &Html) -> Option<String> {
    first_text(document, r#"a[data-testid="industry-link"]"#)
}

fn website(document: &Html) -> Option<String> {
    select_all(document, r#"div.address a[href^="http"]"#)
        .into_iter()
        .find_map(|link| link.value().attr("href").map(|href| href.trim().to_string()))
        .filter(|href| !href.is_empty())
}

fn headquarters(document: &Html) -> Option<String> {
    let lines: Vec<String> = select_all(document, "div.address > div")
        .into_iter()
        .map(element_text)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(", "))
    }
}

fn employees(document: &Html) -> Option<String> {
    for list in select_all(document, "dl") {
        let labels = select_all_in(list, "dt");
        let values = select_all_in(list, "dd");
        for (label, value) in labels.into_iter().zip(values) {
            if element_text(label).to_lowercase().contains("employees") {
                return Some(element_text(value));
            }
        }
    }
    None
}

fn executives(document: &Html) -> Vec<Executive> {
    select_all(document, "table tbody tr")
        .into_iter()
        .take(MAX_EXECUTIVES)
        .filter_map(|row| {
            let cells = select_all_in(row, "td");
            if cells.len() < 2 {
                return None;
            }
            Some(Executive {
                name: element_text(cells[0]),
                title: element_text(cells[1]),
            })
        })
        .collect()
}
