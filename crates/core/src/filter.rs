//! Filter inputs and the predicate shared by both listing backends.
//!
//! A [`FilterSpec`] is built once per request from loosely-typed inputs.
//! [`FilterSpec::resolve`] anchors it to a point in time and produces a
//! [`ResolvedFilter`], the single predicate contract: the remote backend
//! compiles it into SQL and the in-memory backend evaluates
//! [`ResolvedFilter::matches`] directly.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::activity::{updated_within, ActivityWindow};
use crate::date_range::{resolve_date_window, DateFilter, DateWindow};
use crate::paging::{PageWindow, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::project::ProjectRecord;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Search text
// ---------------------------------------------------------------------------

/// Which text columns a search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFields {
    Name,
    #[default]
    NameOrDescription,
}

/// A non-blank search term, matched as a literal case-insensitive substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    lowered: String,
}

impl SearchTerm {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            lowered: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive substring test.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.lowered)
    }

    /// `ILIKE` pattern `%term%` with `\`, `%` and `_` escaped, for use with
    /// `ESCAPE '\'`.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.raw.len() + 2);
        pattern.push('%');
        for c in self.raw.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// Drop blank search text.
pub fn normalize_search(raw: Option<&str>) -> Option<String> {
    raw.and_then(SearchTerm::new).map(|term| term.raw)
}

// ---------------------------------------------------------------------------
// Lenient parameter parsing
// ---------------------------------------------------------------------------

/// Parse an `offset` parameter. Missing, malformed or negative values
/// become `0`.
pub fn parse_offset(raw: Option<&str>) -> u64 {
    match parse_integer("offset", raw) {
        Some(v) if v > 0 => v as u64,
        _ => 0,
    }
}

/// Parse a `limit` parameter. Missing, malformed or non-positive values
/// become [`DEFAULT_PAGE_LIMIT`]; large values are capped at
/// [`MAX_PAGE_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> u64 {
    match parse_integer("limit", raw) {
        Some(v) if v > 0 => (v as u64).min(MAX_PAGE_LIMIT),
        _ => DEFAULT_PAGE_LIMIT,
    }
}

/// Parse a boolean flag parameter (`true`/`1`/`yes`, case-insensitive).
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(|s| s.trim().to_ascii_lowercase())
        .is_some_and(|s| matches!(s.as_str(), "true" | "1" | "yes"))
}

fn parse_integer(field: &str, raw: Option<&str>) -> Option<i64> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse::<i64>() {
        Ok(v) => Some(v),
        // Out-of-range integers saturate.
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Some(i64::MIN),
        Err(_) => {
            tracing::warn!(field, value = raw, "Ignoring malformed pagination parameter");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// FilterSpec
// ---------------------------------------------------------------------------

/// Normalized listing input, immutable for the duration of one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search_text: Option<String>,
    pub search_fields: SearchFields,
    pub date_filter: DateFilter,
    pub activity: ActivityWindow,
    pub favorite_only: bool,
    pub window: PageWindow,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.search_text = normalize_search(Some(text));
        self
    }

    pub fn with_search_fields(mut self, fields: SearchFields) -> Self {
        self.search_fields = fields;
        self
    }

    pub fn with_date_filter(mut self, filter: DateFilter) -> Self {
        self.date_filter = filter;
        self
    }

    pub fn with_activity(mut self, activity: ActivityWindow) -> Self {
        self.activity = activity;
        self
    }

    pub fn with_favorite_only(mut self, favorite_only: bool) -> Self {
        self.favorite_only = favorite_only;
        self
    }

    pub fn with_window(mut self, window: PageWindow) -> Self {
        self.window = window;
        self
    }

    /// Anchor the spec to `now`, resolving named periods and rolling
    /// windows into concrete bounds.
    pub fn resolve(&self, now: Timestamp) -> ResolvedFilter {
        ResolvedFilter {
            search: self.search_text.as_deref().and_then(SearchTerm::new),
            search_fields: self.search_fields,
            end_date_window: resolve_date_window(&self.date_filter, now.date_naive()),
            updated_since: self.activity.cutoff(now),
            favorite_only: self.favorite_only,
        }
    }
}

// ---------------------------------------------------------------------------
// ResolvedFilter
// ---------------------------------------------------------------------------

/// A [`FilterSpec`] with every relative input turned into a concrete bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilter {
    pub search: Option<SearchTerm>,
    pub search_fields: SearchFields,
    /// Inclusive bounds on the record's `end_date`.
    pub end_date_window: DateWindow,
    /// Earliest admitted `updated_at`.
    pub updated_since: Option<Timestamp>,
    pub favorite_only: bool,
}

impl ResolvedFilter {
    /// Evaluate the predicate: text, end-date window, activity window, then
    /// the favorite flag.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.matches_search(record)
            && self.end_date_window.contains(record.end_date)
            && updated_within(self.updated_since, record.updated_at)
            && (!self.favorite_only || record.is_favorite)
    }

    fn matches_search(&self, record: &ProjectRecord) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        if term.matches(&record.name) {
            return true;
        }
        match self.search_fields {
            SearchFields::Name => false,
            SearchFields::NameOrDescription => record
                .description
                .as_deref()
                .is_some_and(|d| term.matches(d)),
        }
    }
}

/// Records matching `filter`, in their incoming order.
pub fn filter_records<'a>(
    records: &'a [ProjectRecord],
    filter: &ResolvedFilter,
) -> Vec<&'a ProjectRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
