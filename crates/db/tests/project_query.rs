//! Integration tests for the project listing query.
//!
//! Exercises `ProjectRepo` and `RemoteQueryBackend` against a real database:
//! - Page windows and exact totals, including windows past the end
//! - Search, calendar date, activity and favorite filters
//! - Session gating and store failures
//! - Agreement with the in-memory backend over the same rows

use assert_matches::assert_matches;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sqlx::PgPool;
use teamboard_core::activity::ActivityWindow;
use teamboard_core::backend::{
    InMemoryBackend, ListOutcome, ProjectBackend, ResultPage, SessionUser,
};
use teamboard_core::date_range::DateFilter;
use teamboard_core::filter::{FilterSpec, SearchFields};
use teamboard_core::paging::PageWindow;
use teamboard_core::types::{CalendarDate, DbId, Timestamp};
use teamboard_db::backend::RemoteQueryBackend;
use teamboard_db::models::project::CreateProject;
use teamboard_db::models::task::CreateTask;
use teamboard_db::models::team::CreateTeam;
use teamboard_db::repositories::{ProjectRepo, TaskRepo, TeamRepo};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixed_now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn session() -> SessionUser {
    SessionUser {
        user_id: Uuid::new_v4(),
    }
}

fn backend(pool: &PgPool) -> RemoteQueryBackend {
    RemoteQueryBackend::new(pool.clone()).with_clock(fixed_now)
}

fn new_project(team_id: DbId, name: &str) -> CreateProject {
    CreateProject {
        team_id,
        name: name.to_string(),
        description: None,
        image_url: None,
        status: None,
        start_date: None,
        end_date: Some(date(2024, 6, 30)),
        is_favorite: None,
    }
}

async fn new_team(pool: &PgPool) -> DbId {
    TeamRepo::create(
        pool,
        &CreateTeam {
            name: "Core Team".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

/// Pin `created_at` to `hours_ago` before the fixed clock and `updated_at`
/// to `days_ago` days before it.
async fn backdate(pool: &PgPool, id: DbId, hours_ago: i64, days_ago: i64) {
    sqlx::query("UPDATE projects SET created_at = $2, updated_at = $3 WHERE id = $1")
        .bind(id)
        .bind(fixed_now() - Duration::hours(hours_ago))
        .bind(fixed_now() - Duration::days(days_ago))
        .execute(pool)
        .await
        .unwrap();
}

/// Insert `count` projects named `project 1..=count`; higher numbers are newer.
async fn seed_numbered(pool: &PgPool, count: i64) -> DbId {
    let team_id = new_team(pool).await;
    for i in 1..=count {
        let project = ProjectRepo::create(pool, &new_project(team_id, &format!("project {i}")))
            .await
            .unwrap();
        backdate(pool, project.id, count - i + 1, 0).await;
    }
    team_id
}

async fn list(pool: &PgPool, spec: FilterSpec) -> ResultPage {
    let outcome = backend(pool).list_projects(Some(&session()), &spec).await;
    assert_matches!(outcome, ListOutcome::Success(page) => page)
}

fn names(page: &ResultPage) -> Vec<&str> {
    page.items.iter().map(|p| p.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_first_and_last_page_of_twenty_five(pool: PgPool) {
    seed_numbered(&pool, 25).await;

    let first = list(&pool, FilterSpec::new().with_window(PageWindow::new(0, 10))).await;
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_count, 25);
    assert_eq!(first.items[0].name, "project 25");
    assert_eq!(first.items[9].name, "project 16");

    let last = list(&pool, FilterSpec::new().with_window(PageWindow::new(20, 10))).await;
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.total_count, 25);
    assert_eq!(last.items[4].name, "project 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_window_past_end_reports_total(pool: PgPool) {
    seed_numbered(&pool, 25).await;

    let page = list(&pool, FilterSpec::new().with_window(PageWindow::new(30, 10))).await;
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 25);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_table_is_success_with_zero_total(pool: PgPool) {
    let page = list(&pool, FilterSpec::new()).await;
    assert_eq!(page, ResultPage::default());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rows_carry_team_name_and_task_count(pool: PgPool) {
    let team_id = new_team(&pool).await;
    let project = ProjectRepo::create(&pool, &new_project(team_id, "Tasks"))
        .await
        .unwrap();
    for title in ["one", "two", "three"] {
        TaskRepo::create(
            &pool,
            &CreateTask {
                project_id: project.id,
                title: title.to_string(),
                status: None,
            },
        )
        .await
        .unwrap();
    }

    let page = list(&pool, FilterSpec::new()).await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].team_name.as_deref(), Some("Core Team"));
    assert_eq!(page.items[0].task_count, 3);
    assert_eq!(page.items[0].status, "active");
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_name_or_description(pool: PgPool) {
    let team_id = new_team(&pool).await;
    ProjectRepo::create(&pool, &new_project(team_id, "Alpha launch"))
        .await
        .unwrap();
    let mut described = new_project(team_id, "Beta");
    described.description = Some("follow-up to ALPHA".to_string());
    ProjectRepo::create(&pool, &described).await.unwrap();
    ProjectRepo::create(&pool, &new_project(team_id, "Gamma"))
        .await
        .unwrap();

    let page = list(&pool, FilterSpec::new().with_search("alpha")).await;
    assert_eq!(page.total_count, 2);

    let name_only = FilterSpec::new()
        .with_search("alpha")
        .with_search_fields(SearchFields::Name);
    let page = list(&pool, name_only).await;
    assert_eq!(names(&page), vec!["Alpha launch"]);

    let blank = list(&pool, FilterSpec::new().with_search("   ")).await;
    assert_eq!(blank.total_count, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    let team_id = new_team(&pool).await;
    ProjectRepo::create(&pool, &new_project(team_id, "50% off"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project(team_id, "500 units"))
        .await
        .unwrap();

    let page = list(&pool, FilterSpec::new().with_search("0%")).await;
    assert_eq!(names(&page), vec!["50% off"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_month_and_custom_date_filters(pool: PgPool) {
    let team_id = new_team(&pool).await;
    let mut june = new_project(team_id, "June");
    june.end_date = Some(date(2024, 6, 1));
    let mut july = new_project(team_id, "July");
    july.end_date = Some(date(2024, 7, 1));
    let mut undated = new_project(team_id, "Undated");
    undated.end_date = None;
    for input in [&june, &july, &undated] {
        ProjectRepo::create(&pool, input).await.unwrap();
    }

    let month = list(&pool, FilterSpec::new().with_date_filter(DateFilter::Month)).await;
    assert_eq!(names(&month), vec!["June"]);

    let year = list(&pool, FilterSpec::new().with_date_filter(DateFilter::Year)).await;
    assert_eq!(year.total_count, 2);

    let from_july = DateFilter::from_params(None, Some("2024-07-01"), None).unwrap();
    let page = list(&pool, FilterSpec::new().with_date_filter(from_july)).await;
    assert_eq!(names(&page), vec!["July"]);

    let all = list(&pool, FilterSpec::new()).await;
    assert_eq!(all.total_count, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activity_window_uses_updated_at(pool: PgPool) {
    let team_id = new_team(&pool).await;
    let fresh = ProjectRepo::create(&pool, &new_project(team_id, "Fresh"))
        .await
        .unwrap();
    let stale = ProjectRepo::create(&pool, &new_project(team_id, "Stale"))
        .await
        .unwrap();
    backdate(&pool, fresh.id, 2, 3).await;
    backdate(&pool, stale.id, 1, 20).await;

    let week = list(&pool, FilterSpec::new().with_activity(ActivityWindow::Week)).await;
    assert_eq!(names(&week), vec!["Fresh"]);

    let month = list(&pool, FilterSpec::new().with_activity(ActivityWindow::Month)).await;
    assert_eq!(names(&month), vec!["Stale", "Fresh"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_favorite_only(pool: PgPool) {
    let team_id = new_team(&pool).await;
    let starred = ProjectRepo::create(&pool, &new_project(team_id, "Starred"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project(team_id, "Plain"))
        .await
        .unwrap();

    assert!(ProjectRepo::set_favorite(&pool, starred.id, true).await.unwrap());

    let page = list(&pool, FilterSpec::new().with_favorite_only(true)).await;
    assert_eq!(names(&page), vec!["Starred"]);
    assert!(page.items[0].is_favorite);
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_session_is_unauthenticated(pool: PgPool) {
    seed_numbered(&pool, 3).await;
    let outcome = backend(&pool).list_projects(None, &FilterSpec::new()).await;
    assert_eq!(outcome, ListOutcome::Unauthenticated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_closed_pool_is_backend_error(pool: PgPool) {
    let backend = backend(&pool);
    pool.close().await;
    let outcome = backend.list_projects(Some(&session()), &FilterSpec::new()).await;
    assert_matches!(outcome, ListOutcome::BackendError(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_agrees_with_in_memory_backend(pool: PgPool) {
    let team_id = seed_numbered(&pool, 12).await;
    let mut described = new_project(team_id, "Described");
    described.description = Some("project notes".to_string());
    described.end_date = Some(date(2024, 8, 1));
    let extra = ProjectRepo::create(&pool, &described).await.unwrap();
    backdate(&pool, extra.id, 30, 10).await;

    let everything = list(&pool, FilterSpec::new().with_window(PageWindow::new(0, 100))).await;
    let in_memory = InMemoryBackend::new(everything.items.clone()).with_clock(fixed_now);

    let specs = [
        FilterSpec::new().with_window(PageWindow::new(5, 4)),
        FilterSpec::new().with_search("project 1"),
        FilterSpec::new().with_search("notes"),
        FilterSpec::new().with_date_filter(DateFilter::Month),
        FilterSpec::new().with_activity(ActivityWindow::Week),
        FilterSpec::new().with_window(PageWindow::new(40, 10)),
    ];
    for spec in specs {
        let remote = list(&pool, spec.clone()).await;
        assert_eq!(remote, in_memory.query(&spec), "spec: {spec:?}");
    }
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_details_and_missing(pool: PgPool) {
    let team_id = new_team(&pool).await;
    let created = ProjectRepo::create(&pool, &new_project(team_id, "Detail"))
        .await
        .unwrap();

    let found = ProjectRepo::find_details(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));

    assert_eq!(ProjectRepo::find_details(&pool, Uuid::new_v4()).await.unwrap(), None);
    assert!(!ProjectRepo::set_favorite(&pool, Uuid::new_v4(), true).await.unwrap());
}
