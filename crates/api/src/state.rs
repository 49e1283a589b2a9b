use std::sync::Arc;

use teamboard_db::backend::RemoteQueryBackend;

use crate::config::ServerConfig;
use crate::selection::SelectionRegistry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: teamboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Listing backend over `pool`.
    pub projects: RemoteQueryBackend,
    /// Team/project selection per user.
    pub selections: Arc<SelectionRegistry>,
}

impl AppState {
    pub fn new(pool: teamboard_db::DbPool, config: ServerConfig) -> Self {
        Self {
            projects: RemoteQueryBackend::new(pool.clone()),
            pool,
            config: Arc::new(config),
            selections: Arc::new(SelectionRegistry::new()),
        }
    }
}
