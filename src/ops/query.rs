//! Query composition for the OPS published-data search endpoint.
//!
//! OPS uses a CQL-like syntax where each search field has a short code,
//! e.g. `ti="battery"` for a title search. The front-end exposes friendly
//! aliases and maps them to those codes here.

use crate::types::{AppError, AppResult};

/// Results per page, fixed by the front-end.
pub const PAGE_SIZE: u32 = 10;

/// Search fields exposed by the front-end, with their OPS query codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Keyword,
    Inventor,
    Applicant,
    Ipc,
    Country,
    Year,
}

impl SearchField {
    /// Map a form alias to a field, rejecting anything outside the fixed set.
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "keyword" => Some(SearchField::Keyword),
            "inventor" => Some(SearchField::Inventor),
            "applicant" => Some(SearchField::Applicant),
            "ipc" => Some(SearchField::Ipc),
            "country" => Some(SearchField::Country),
            "year" => Some(SearchField::Year),
            _ => None,
        }
    }

    /// The OPS query-syntax code for this field.
    pub fn code(&self) -> &'static str {
        match self {
            SearchField::Keyword => "ti",
            SearchField::Inventor => "in",
            SearchField::Applicant => "pa",
            SearchField::Ipc => "ipc",
            SearchField::Country => "pncc",
            SearchField::Year => "ap",
        }
    }
}

/// Compose the OPS query string `<code>="<text>"`.
///
/// Embedded quotes in `text` are passed through as-is; OPS is authoritative
/// on rejecting malformed queries.
pub fn build_query(alias: &str, text: &str) -> AppResult<String> {
    let field = SearchField::from_alias(alias)
        .ok_or_else(|| AppError::Validation(format!("unknown search field '{}'", alias)))?;

    if text.trim().is_empty() {
        return Err(AppError::Validation("search text must not be empty".into()));
    }

    Ok(format!("{}=\"{}\"", field.code(), text))
}

/// Compose the OPS result range `"start-end"` for a 1-based page number.
///
/// Widened to u64 so the largest accepted page number cannot overflow.
pub fn build_range(page: u32) -> String {
    let start = (page as u64 - 1) * PAGE_SIZE as u64 + 1;
    let end = page as u64 * PAGE_SIZE as u64;
    format!("{}-{}", start, end)
}

/// Coerce the raw `page` query value: missing defaults to 1, anything that
/// is not a positive integer is rejected.
pub fn parse_page(raw: Option<&str>) -> AppResult<u32> {
    match raw {
        None => Ok(1),
        Some(s) => match s.trim().parse::<u32>() {
            Ok(page) if page >= 1 => Ok(page),
            _ => Err(AppError::Validation(format!(
                "page must be a positive integer, got '{}'",
                s
            ))),
        },
    }
}
