pub mod health;
pub mod project;
pub mod selection;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                        list (session optional)
/// /projects/{id}                   get (auth required)
/// /projects/{id}/favorite          set favorite flag (PUT, auth required)
///
/// /selection                       get, replace, clear (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/selection", selection::router())
}
