//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope.

use serde::Serialize;
use teamboard_core::backend::ResultPage;
use teamboard_core::paging::{page_numbers, total_pages, PageMarker, PageWindow};
use teamboard_core::project::ProjectRecord;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// One page of the project listing with pagination metadata.
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub items: Vec<ProjectRecord>,
    pub total_count: u64,
    pub offset: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub page_numbers: Vec<PageMarker>,
}

impl ProjectListResponse {
    pub fn new(page: ResultPage, window: PageWindow) -> Self {
        let pages = total_pages(page.total_count, window.limit);
        Self {
            page_numbers: page_numbers(pages, window.page()),
            total_pages: pages,
            items: page.items,
            total_count: page.total_count,
            offset: window.offset,
            limit: window.limit,
        }
    }
}
