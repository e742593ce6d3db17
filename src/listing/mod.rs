//! Server-side listing queries: the single place where free-text search,
//! status filtering, sorting and pagination are turned into SQL.
//!
//! The count and the slice of every listing are produced from the same
//! predicate function, so the reported page count can never disagree with
//! the rows actually returned.

pub mod customers;
pub mod dashboard;
pub mod invoices;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Fixed page size shared by both entity listings.
pub const ITEMS_PER_PAGE: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `asc`/`desc`, falling back to the given default for anything else.
    pub fn parse_or(raw: Option<&str>, default: SortDirection) -> SortDirection {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(s) if s.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => default,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Normalizes a raw page parameter: absent, non-numeric or below 1 becomes 1.
pub fn normalize_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

pub fn page_offset(page: i64) -> i64 {
    (page - 1) * ITEMS_PER_PAGE
}

/// ceil(count / page size). Zero matching rows yield zero pages.
pub fn total_pages(count: i64) -> i64 {
    (count + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
}

/// One page of rows plus the page count computed from the matching total.
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_pages: i64,
}

/// A free-text query interpreted for matching.
///
/// The branches are independent: "2024-03-01" carries both a substring
/// branch and a date-equality branch, and "666" carries both a substring
/// branch and an amount-equality branch. Substring matching uses the query
/// as received; only the numeric/date interpretation works on the trimmed
/// form.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    pub text: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}

impl SearchTerm {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SearchTerm {
                text: None,
                amount: None,
                date: None,
            };
        }

        let amount = trimmed.parse::<f64>().ok().filter(|n| n.is_finite());
        let date = parse_query_date(trimmed)
            .filter(|_| trimmed.chars().any(|c| c.is_ascii_digit()));

        SearchTerm {
            text: Some(raw.to_string()),
            amount,
            date,
        }
    }
}

/// Accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` day, the latter
/// interpreted at UTC midnight.
fn parse_query_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    s.parse::<NaiveDate>()
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Builds the `%…%` pattern for a case-insensitive substring match, with
/// LIKE wildcards escaped so the query text matches literally.
pub(crate) fn contains_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
