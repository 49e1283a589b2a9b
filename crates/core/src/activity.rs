//! Rolling "recently updated" windows matched against `updated_at`.
//!
//! Unlike the calendar-aligned [`DateFilter`](crate::date_range::DateFilter),
//! these windows subtract a fixed number of days from "now".

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityWindow {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl ActivityWindow {
    /// Parse the `activity` query parameter. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "all" => Some(Self::All),
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    /// Length of the window in days, `None` for [`ActivityWindow::All`].
    pub fn days(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Today => Some(1),
            Self::Week => Some(7),
            Self::Month => Some(30),
        }
    }

    /// Earliest `updated_at` admitted by the window.
    pub fn cutoff(self, now: Timestamp) -> Option<Timestamp> {
        self.days().map(|days| now - Duration::days(days))
    }
}

/// Whether a record last updated at `updated_at` falls inside a window
/// starting at `cutoff`. Records without `updated_at` fail any active window.
pub fn updated_within(cutoff: Option<Timestamp>, updated_at: Option<Timestamp>) -> bool {
    match (cutoff, updated_at) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(cutoff), Some(updated)) => updated >= cutoff,
    }
}
