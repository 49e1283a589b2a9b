//! Handlers for the caller's team/project selection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use teamboard_core::selection::Selection;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/selection
pub async fn get(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Selection>>> {
    let store = state.selections.store_for(user.user_id).await;
    Ok(Json(DataResponse {
        data: store.current(),
    }))
}

/// PUT /api/v1/selection
///
/// Replaces the whole selection; subscribers see one update.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<Selection>,
) -> AppResult<Json<DataResponse<Selection>>> {
    let store = state.selections.store_for(user.user_id).await;
    store.set(input);
    Ok(Json(DataResponse {
        data: store.current(),
    }))
}

/// DELETE /api/v1/selection
pub async fn clear(State(state): State<AppState>, user: AuthUser) -> AppResult<StatusCode> {
    state.selections.remove(user.user_id).await;
    Ok(StatusCode::NO_CONTENT)
}
