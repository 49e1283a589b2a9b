use axum::routing::get;
use axum::Router;

use crate::handlers::selection;
use crate::state::AppState;

/// Routes mounted at `/selection`.
///
/// ```text
/// GET    /   -> get
/// PUT    /   -> update
/// DELETE /   -> clear
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(selection::get)
            .put(selection::update)
            .delete(selection::clear),
    )
}
