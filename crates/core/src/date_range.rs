//! Date-range resolution for the project end-date filter.
//!
//! A [`DateFilter`] is the user's selection (a named period or a custom
//! range); [`resolve_date_window`] turns it into a concrete [`DateWindow`]
//! anchored to a given "today". Named periods are calendar aligned: `year`
//! spans January 1 to December 31 and `month` spans the first to the last
//! day of the current month.

use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::CalendarDate;

/// `strftime` pattern for every date this module reads or writes.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Value of the `dateFilter` parameter selecting the current calendar year.
pub const DATE_FILTER_YEAR: &str = "year";

/// Value of the `dateFilter` parameter selecting the current calendar month.
pub const DATE_FILTER_MONTH: &str = "month";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A named or custom date selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Year,
    Month,
    Custom(DateRange),
}

/// A user-supplied range. Either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
}

/// A resolved, inclusive window. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
}

impl DateWindow {
    /// A window with no bounds at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// Whether `date` falls inside the window.
    ///
    /// A missing date only passes an unbounded window, mirroring SQL
    /// comparison semantics against `NULL`.
    pub fn contains(&self, date: Option<CalendarDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        match date {
            None => false,
            Some(d) => {
                self.start_date.map_or(true, |start| d >= start)
                    && self.end_date.map_or(true, |end| d <= end)
            }
        }
    }

    /// Lower bound rendered as `yyyy-mm-dd`.
    pub fn start_str(&self) -> Option<String> {
        self.start_date.map(format_date)
    }

    /// Upper bound rendered as `yyyy-mm-dd`.
    pub fn end_str(&self) -> Option<String> {
        self.end_date.map(format_date)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl DateFilter {
    /// Build a filter from the raw `dateFilter`, `startDate` and `endDate`
    /// query parameters.
    ///
    /// `year` and `month` take precedence over explicit bounds. Any other
    /// `dateFilter` value (including `all`) falls through to the bounds: a
    /// custom range is formed when at least one bound is present, otherwise
    /// the filter is [`DateFilter::All`]. The bounds are independent: an
    /// `endDate` without a `startDate` still narrows the listing.
    pub fn from_params(
        date_filter: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, CoreError> {
        match date_filter.map(str::trim) {
            Some(DATE_FILTER_YEAR) => return Ok(Self::Year),
            Some(DATE_FILTER_MONTH) => return Ok(Self::Month),
            _ => {}
        }

        let start_date = parse_bound("startDate", start_date)?;
        let end_date = parse_bound("endDate", end_date)?;

        if start_date.is_none() && end_date.is_none() {
            Ok(Self::All)
        } else {
            Ok(Self::Custom(DateRange {
                start_date,
                end_date,
            }))
        }
    }
}

fn parse_bound(field: &str, raw: Option<&str>) -> Result<Option<CalendarDate>, CoreError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse_date(s).map(Some).ok_or_else(|| {
            CoreError::Validation(format!("{field} must be a yyyy-mm-dd date, got '{s}'"))
        }),
    }
}

/// Parse a `yyyy-mm-dd` string.
pub fn parse_date(s: &str) -> Option<CalendarDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Render a date as `yyyy-mm-dd`.
pub fn format_date(date: CalendarDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve `filter` into a concrete window anchored to `today`.
pub fn resolve_date_window(filter: &DateFilter, today: CalendarDate) -> DateWindow {
    match filter {
        DateFilter::All => DateWindow::unbounded(),
        DateFilter::Year => DateWindow {
            start_date: Some(first_day_of_year(today)),
            end_date: Some(last_day_of_year(today)),
        },
        DateFilter::Month => DateWindow {
            start_date: Some(first_day_of_month(today)),
            end_date: Some(last_day_of_month(today)),
        },
        DateFilter::Custom(range) => DateWindow {
            start_date: range.start_date,
            end_date: range.end_date,
        },
    }
}

/// Resolve `filter` against the current UTC date.
pub fn resolve_date_window_now(filter: &DateFilter) -> DateWindow {
    resolve_date_window(filter, Utc::now().date_naive())
}

fn first_day_of_year(date: CalendarDate) -> CalendarDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

fn last_day_of_year(date: CalendarDate) -> CalendarDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(NaiveDate::MAX)
}

fn first_day_of_month(date: CalendarDate) -> CalendarDate {
    date - Duration::days(i64::from(date.day0()))
}

/// The day before the first day of the following month.
fn last_day_of_month(date: CalendarDate) -> CalendarDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
