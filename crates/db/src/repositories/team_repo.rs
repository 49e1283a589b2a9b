//! Repository for the `teams` table.

use sqlx::PgPool;

use crate::models::team::{CreateTeam, Team};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Inserts teams.
pub struct TeamRepo;

impl TeamRepo {
    pub async fn create(pool: &PgPool, input: &CreateTeam) -> Result<Team, sqlx::Error> {
        let query = format!("INSERT INTO teams (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Team>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }
}
