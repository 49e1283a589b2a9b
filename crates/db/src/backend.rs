//! [`ProjectBackend`] over PostgreSQL.

use teamboard_core::backend::{system_clock, Clock, ListOutcome, ProjectBackend, SessionUser};
use teamboard_core::filter::FilterSpec;

use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Resolves listing requests with one query against the shared pool.
#[derive(Debug, Clone)]
pub struct RemoteQueryBackend {
    pool: DbPool,
    clock: Clock,
}

impl RemoteQueryBackend {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            clock: system_clock,
        }
    }

    /// Replace the clock that anchors named periods and activity windows.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

impl ProjectBackend for RemoteQueryBackend {
    async fn list_projects(&self, session: Option<&SessionUser>, spec: &FilterSpec) -> ListOutcome {
        let Some(session) = session else {
            tracing::debug!("No session, skipping project query");
            return ListOutcome::Unauthenticated;
        };

        let resolved = spec.resolve((self.clock)());
        match ProjectRepo::list_page(&self.pool, &resolved, spec.window).await {
            Ok(page) => {
                tracing::debug!(
                    user_id = %session.user_id,
                    offset = spec.window.offset,
                    limit = spec.window.limit,
                    returned = page.items.len(),
                    total_count = page.total_count,
                    "Listed projects",
                );
                ListOutcome::Success(page)
            }
            Err(e) => {
                tracing::error!(user_id = %session.user_id, error = %e, "Project query failed");
                ListOutcome::BackendError(e.to_string())
            }
        }
    }
}
