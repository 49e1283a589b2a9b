//! Project row models and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use teamboard_core::project::ProjectRecord;
use teamboard_core::types::{CalendarDate, DbId, Timestamp};

/// A project joined with its team name and task count.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub team_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    pub is_favorite: bool,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub team_name: Option<String>,
    pub task_count: i64,
}

impl From<ProjectRow> for ProjectRecord {
    fn from(row: ProjectRow) -> Self {
        ProjectRecord {
            id: row.id,
            team_id: row.team_id,
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            status: row.status,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            team_name: row.team_name,
            task_count: row.task_count,
            is_favorite: row.is_favorite,
        }
    }
}

/// One row of the combined page-and-count listing query.
///
/// The count is always present. Project columns are `NULL` on the single
/// placeholder row returned when the requested page is empty.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectPageRow {
    pub total_count: i64,
    pub id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    pub is_favorite: Option<bool>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub team_name: Option<String>,
    pub task_count: i64,
}

impl ProjectPageRow {
    /// The project on this row, `None` for the empty-page placeholder.
    pub fn into_record(self) -> Option<ProjectRecord> {
        Some(ProjectRecord {
            id: self.id?,
            team_id: self.team_id?,
            name: self.name?,
            description: self.description,
            image_url: self.image_url,
            status: self.status?,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at?,
            updated_at: self.updated_at,
            team_name: self.team_name,
            task_count: self.task_count,
            is_favorite: self.is_favorite?,
        })
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub team_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Defaults to `active` if omitted.
    pub status: Option<String>,
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    /// Defaults to `false` if omitted.
    pub is_favorite: Option<bool>,
}
