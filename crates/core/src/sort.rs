//! Sort orders for project listings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::project::ProjectRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// A sort key and direction. Defaults to most recently created first, the
/// order both listing backends return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            key: SortKey::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortOrder {
    /// Column-header toggle: the active key flips direction, a new key
    /// starts ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Asc,
            }
        }
    }

    /// Compare two records. Missing values sort last in either direction.
    pub fn compare(&self, a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
        match self.key {
            SortKey::Name => self.directed(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            SortKey::Status => self.directed(a.status.cmp(&b.status)),
            SortKey::CreatedAt => self.directed(a.created_at.cmp(&b.created_at)),
            SortKey::UpdatedAt => self.compare_optional(a.updated_at, b.updated_at),
            SortKey::EndDate => self.compare_optional(a.end_date, b.end_date),
        }
    }

    /// Sort `records` in place. The sort is stable, so ties keep their
    /// incoming order.
    pub fn sort(&self, records: &mut [&ProjectRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    fn compare_optional<T: Ord>(&self, a: Option<T>, b: Option<T>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => self.directed(a.cmp(&b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    fn directed(&self, ord: Ordering) -> Ordering {
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}
