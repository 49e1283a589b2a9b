//! The project record shared by both listing backends.

use serde::{Deserialize, Serialize};

use crate::types::{CalendarDate, DbId, Timestamp};

/// A project as returned by a listing backend.
///
/// `team_name` and `task_count` are denormalized from the `teams` and
/// `tasks` tables at read time. Records are read-only to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: DbId,
    pub team_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub team_name: Option<String>,
    pub task_count: i64,
    pub is_favorite: bool,
}
