//! Repository for the `tasks` table.

use sqlx::PgPool;

use crate::models::task::{CreateTask, Task};

const COLUMNS: &str = "id, project_id, title, status, created_at, updated_at";

/// Inserts tasks. Per-project counts come from the listing query.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a task. `status` defaults to `todo`.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, title, status) \
             VALUES ($1, $2, COALESCE($3, 'todo')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }
}
