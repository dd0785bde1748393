//! Offset-based pagination over fully loaded, id-ordered result sets.
//!
//! The window is computed in memory after the store returns every matching
//! row. Pages are 1-indexed; the window for page `n` starts at
//! `(n - 1) * QUESTIONS_PER_PAGE`. Windows are not stable under concurrent
//! inserts or deletes between page requests.

use serde::Deserialize;

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page used when the `page` query parameter is absent or not an integer.
pub const DEFAULT_PAGE: i64 = 1;

/// Query parameters accepted by paginated endpoints (`?page=`).
///
/// `page` is kept as a raw string so that a malformed value falls back to
/// [`DEFAULT_PAGE`] instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// The requested page number, leniently parsed.
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

/// Parse a raw `page` value, falling back to [`DEFAULT_PAGE`].
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Select the window of `items` for the 1-indexed `page`.
///
/// Pages below 1 and pages past the end produce an empty window. Negative
/// pages do not count back from the end of `items`.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));

    match start {
        Some(start) => items
            .into_iter()
            .skip(start)
            .take(QUESTIONS_PER_PAGE)
            .collect(),
        None => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
