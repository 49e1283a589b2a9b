//! The listing backend interface and its in-memory implementation.
//!
//! A [`ProjectBackend`] turns a [`FilterSpec`] into a [`ListOutcome`]. Two
//! implementations exist: [`InMemoryBackend`] here, over an already
//! materialized record set, and `RemoteQueryBackend` in the `db` crate,
//! which compiles the same [`ResolvedFilter`](crate::filter::ResolvedFilter)
//! into a single SQL statement.

use std::future::Future;

use chrono::Utc;
use serde::Serialize;

use crate::filter::{filter_records, FilterSpec};
use crate::project::ProjectRecord;
use crate::sort::SortOrder;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Session & results
// ---------------------------------------------------------------------------

/// The identity resolved from the caller's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: DbId,
}

/// One page of matching records plus the size of the whole filtered set.
///
/// Invariant: `items.len() <= min(limit, total_count - offset)` for the
/// window that produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultPage {
    pub items: Vec<ProjectRecord>,
    pub total_count: u64,
}

/// Result of a listing call.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// No session was supplied; no data was read.
    Unauthenticated,
    /// The store rejected or failed the query.
    BackendError(String),
    Success(ResultPage),
}

impl ListOutcome {
    /// Collapse to the "no result" sentinel view: `None` for both failure
    /// kinds, `Some` (possibly empty) on success.
    pub fn into_page(self) -> Option<ResultPage> {
        match self {
            Self::Success(page) => Some(page),
            Self::Unauthenticated | Self::BackendError(_) => None,
        }
    }
}

/// Clock used to anchor relative filters. Swappable for tests.
pub type Clock = fn() -> Timestamp;

/// The system clock.
pub fn system_clock() -> Timestamp {
    Utc::now()
}

// ---------------------------------------------------------------------------
// ProjectBackend
// ---------------------------------------------------------------------------

/// A source of filtered, paginated project listings.
///
/// Implementations must return [`ListOutcome::Unauthenticated`] without
/// reading any data when `session` is `None`, order results by `created_at`
/// descending, and report `total_count` over the whole filtered set.
pub trait ProjectBackend: Send + Sync {
    fn list_projects(
        &self,
        session: Option<&SessionUser>,
        spec: &FilterSpec,
    ) -> impl Future<Output = ListOutcome> + Send;
}

// ---------------------------------------------------------------------------
// InMemoryBackend
// ---------------------------------------------------------------------------

/// Backend over a record set fetched without filters.
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    records: Vec<ProjectRecord>,
    clock: Clock,
}

impl InMemoryBackend {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self {
            records,
            clock: system_clock,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Filter, order and window the records. Never fails.
    pub fn query(&self, spec: &FilterSpec) -> ResultPage {
        let resolved = spec.resolve((self.clock)());
        let mut matching = filter_records(&self.records, &resolved);
        SortOrder::default().sort(&mut matching);

        ResultPage {
            total_count: matching.len() as u64,
            items: spec
                .window
                .slice(&matching)
                .iter()
                .map(|r| (*r).clone())
                .collect(),
        }
    }
}

impl ProjectBackend for InMemoryBackend {
    async fn list_projects(&self, session: Option<&SessionUser>, spec: &FilterSpec) -> ListOutcome {
        if session.is_none() {
            tracing::debug!("No session, skipping in-memory project listing");
            return ListOutcome::Unauthenticated;
        }
        ListOutcome::Success(self.query(spec))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
