//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use teamboard_core::backend::{ListOutcome, ProjectBackend};
use teamboard_core::error::CoreError;
use teamboard_core::project::ProjectRecord;
use teamboard_core::types::DbId;
use teamboard_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeSession};
use crate::query::ProjectListQuery;
use crate::response::{DataResponse, ProjectListResponse};
use crate::state::AppState;

/// GET /api/v1/projects
///
/// The session is passed through to the backend, which decides whether the
/// caller may list.
pub async fn list(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Query(params): Query<ProjectListQuery>,
) -> AppResult<Json<DataResponse<ProjectListResponse>>> {
    let spec = params.to_filter_spec()?;

    match state.projects.list_projects(session.as_ref(), &spec).await {
        ListOutcome::Success(page) => Ok(Json(DataResponse {
            data: ProjectListResponse::new(page, spec.window),
        })),
        ListOutcome::Unauthenticated => Err(AppError::Unauthenticated {
            login_path: state.config.login_path.clone(),
        }),
        ListOutcome::BackendError(msg) => Err(AppError::InternalError(msg)),
    }
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectRecord>>> {
    let project = ProjectRepo::find_details(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// Body of `PUT /projects/{id}/favorite`.
#[derive(Debug, Deserialize)]
pub struct FavoriteInput {
    pub is_favorite: bool,
}

/// PUT /api/v1/projects/{id}/favorite
pub async fn set_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<FavoriteInput>,
) -> AppResult<Json<DataResponse<ProjectRecord>>> {
    if !ProjectRepo::set_favorite(&state.pool, id, input.is_favorite).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    tracing::info!(user_id = %user.user_id, project_id = %id, is_favorite = input.is_favorite, "Favorite updated");

    let project = ProjectRepo::find_details(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}
