//! Repository for the `projects` table.

use sqlx::PgPool;
use teamboard_core::backend::ResultPage;
use teamboard_core::filter::{ResolvedFilter, SearchFields};
use teamboard_core::paging::PageWindow;
use teamboard_core::project::ProjectRecord;
use teamboard_core::types::{CalendarDate, DbId, Timestamp};

use crate::models::project::{CreateProject, ProjectPageRow, ProjectRow};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list of `projects`, qualified with the `p` alias.
const COLUMNS: &str = "\
    p.id, p.team_id, p.name, p.description, p.image_url, p.status, \
    p.start_date, p.end_date, p.is_favorite, p.created_at, p.updated_at";

/// Joined columns appended to [`COLUMNS`] for detail reads.
const JOINED_COLUMNS: &str = "\
    t.name AS team_name, \
    (SELECT COUNT(*) FROM tasks k WHERE k.project_id = p.id)::BIGINT AS task_count";

// ---------------------------------------------------------------------------
// ProjectRepo
// ---------------------------------------------------------------------------

/// Provides listing and CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning it with its team name.
    ///
    /// `status` defaults to `active` and `is_favorite` to `false`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<ProjectRecord, sqlx::Error> {
        let query = "\
            WITH p AS ( \
                INSERT INTO projects \
                    (team_id, name, description, image_url, status, start_date, end_date, is_favorite) \
                VALUES ($1, $2, $3, $4, COALESCE($5, 'active'), $6, $7, COALESCE($8, FALSE)) \
                RETURNING * \
            ) \
            SELECT p.id, p.team_id, p.name, p.description, p.image_url, p.status, \
                   p.start_date, p.end_date, p.is_favorite, p.created_at, p.updated_at, \
                   t.name AS team_name, 0::BIGINT AS task_count \
            FROM p LEFT JOIN teams t ON t.id = p.team_id";
        let row = sqlx::query_as::<_, ProjectRow>(query)
            .bind(input.team_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_favorite)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find a project by ID, with its team name and task count.
    pub async fn find_details(pool: &PgPool, id: DbId) -> Result<Option<ProjectRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, {JOINED_COLUMNS} \
             FROM projects p LEFT JOIN teams t ON t.id = p.team_id \
             WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Set the favorite flag. Returns `true` if the project exists.
    ///
    /// `updated_at` is left untouched so marking a favorite does not count
    /// as activity.
    pub async fn set_favorite(pool: &PgPool, id: DbId, favorite: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET is_favorite = $2 WHERE id = $1")
            .bind(id)
            .bind(favorite)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// One page of projects matching `filter`, newest first, together with
    /// the size of the whole filtered set.
    ///
    /// Page and count come from a single statement. When the window lies
    /// past the end, the query still yields one placeholder row carrying
    /// the count, so `total_count` is exact for empty pages too.
    pub async fn list_page(
        pool: &PgPool,
        filter: &ResolvedFilter,
        window: PageWindow,
    ) -> Result<ResultPage, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_list_filter(filter);

        let query = format!(
            "WITH filtered AS ( \
                 SELECT {COLUMNS} FROM projects p {where_clause} \
             ), \
             page AS ( \
                 SELECT * FROM filtered \
                 ORDER BY created_at DESC, id DESC \
                 LIMIT ${bind_idx} OFFSET ${} \
             ) \
             SELECT c.total_count, pg.*, t.name AS team_name, \
                    (SELECT COUNT(*) FROM tasks k WHERE k.project_id = pg.id)::BIGINT AS task_count \
             FROM (SELECT COUNT(*)::BIGINT AS total_count FROM filtered) c \
             LEFT JOIN page pg ON TRUE \
             LEFT JOIN teams t ON t.id = pg.team_id \
             ORDER BY pg.created_at DESC, pg.id DESC",
            bind_idx + 1
        );

        let q = bind_list_values(sqlx::query_as::<_, ProjectPageRow>(&query), &bind_values);
        let rows = q
            .bind(to_sql_bigint(window.limit))
            .bind(to_sql_bigint(window.offset))
            .fetch_all(pool)
            .await?;

        let total_count = rows.first().map_or(0, |r| r.total_count.max(0) as u64);
        let items = rows.into_iter().filter_map(ProjectPageRow::into_record).collect();
        Ok(ResultPage { items, total_count })
    }
}

// ---------------------------------------------------------------------------
// Filter builder
// ---------------------------------------------------------------------------

/// A dynamically-typed bind value for the listing filter.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Date(CalendarDate),
    Timestamp(Timestamp),
}

/// Build a WHERE clause from a resolved filter.
///
/// Returns `(where_clause, bind_values, next_bind_idx)`. A blank search, an
/// unbounded date window, an `all` activity window and a cleared favorite
/// flag each contribute nothing.
pub fn build_list_filter(filter: &ResolvedFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref term) = filter.search {
        let clause = match filter.search_fields {
            SearchFields::Name => format!("p.name ILIKE ${bind_idx} ESCAPE '\\'"),
            SearchFields::NameOrDescription => format!(
                "(p.name ILIKE ${bind_idx} ESCAPE '\\' OR p.description ILIKE ${bind_idx} ESCAPE '\\')"
            ),
        };
        conditions.push(clause);
        bind_idx += 1;
        bind_values.push(BindValue::Text(term.like_pattern()));
    }

    if let Some(start) = filter.end_date_window.start_date {
        conditions.push(format!("p.end_date >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Date(start));
    }

    if let Some(end) = filter.end_date_window.end_date {
        conditions.push(format!("p.end_date <= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Date(end));
    }

    if let Some(since) = filter.updated_since {
        conditions.push(format!("p.updated_at >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Timestamp(since));
    }

    if filter.favorite_only {
        conditions.push("p.is_favorite = TRUE".to_string());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_list_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Date(v) => q = q.bind(*v),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}

fn to_sql_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
