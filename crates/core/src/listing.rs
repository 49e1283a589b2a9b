//! In-memory listing engine: filter, sort and paginate a materialized record
//! set, recomputing the visible page on every input change.
//!
//! Every filter or sort change sends the user back to page 1 so the current
//! page never points past the end of a shrunken result set.

use serde::Serialize;

use crate::activity::ActivityWindow;
use crate::backend::{system_clock, Clock};
use crate::date_range::DateFilter;
use crate::filter::{filter_records, normalize_search, FilterSpec, SearchFields};
use crate::paging::{page_numbers, total_pages, PageMarker, PageWindow};
use crate::project::ProjectRecord;
use crate::sort::{SortKey, SortOrder};

/// Default number of cards per page in the project grid.
pub const DEFAULT_PAGE_SIZE: u64 = 6;

/// A computed view of the listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListingView<'a> {
    pub visible_items: Vec<&'a ProjectRecord>,
    pub total_filtered_count: u64,
    pub page: u64,
    pub total_pages: u64,
    pub page_numbers: Vec<PageMarker>,
}

/// Listing state over an already fetched, unfiltered set of projects.
#[derive(Debug, Clone)]
pub struct ProjectListing {
    records: Vec<ProjectRecord>,
    search_text: Option<String>,
    activity: ActivityWindow,
    date_filter: DateFilter,
    favorite_only: bool,
    sort: SortOrder,
    page: u64,
    page_size: u64,
    clock: Clock,
}

impl ProjectListing {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self {
            records,
            search_text: None,
            activity: ActivityWindow::All,
            date_filter: DateFilter::All,
            favorite_only: false,
            sort: SortOrder::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            clock: system_clock,
        }
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    // -- accessors -----------------------------------------------------------

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }

    // -- inputs that reset the page ------------------------------------------

    pub fn set_search(&mut self, text: &str) {
        self.search_text = normalize_search(Some(text));
        self.page = 1;
    }

    pub fn set_activity(&mut self, activity: ActivityWindow) {
        self.activity = activity;
        self.page = 1;
    }

    pub fn set_date_filter(&mut self, filter: DateFilter) {
        self.date_filter = filter;
        self.page = 1;
    }

    pub fn set_favorite_only(&mut self, favorite_only: bool) {
        self.favorite_only = favorite_only;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    /// Header-click sorting: flip the active key or switch to a new one.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.set_sort(self.sort.toggle(key));
    }

    /// Replace the materialized records, e.g. after a refetch.
    pub fn replace_records(&mut self, records: Vec<ProjectRecord>) {
        self.records = records;
        self.page = 1;
    }

    // -- paging --------------------------------------------------------------

    /// Move to `page`. Values below 1 become 1; pages past the end are kept
    /// and render as an empty slice.
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// The filter spec equivalent to the current inputs and page.
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            search_text: self.search_text.clone(),
            search_fields: SearchFields::Name,
            date_filter: self.date_filter,
            activity: self.activity,
            favorite_only: self.favorite_only,
            window: PageWindow::from_page(self.page, self.page_size),
        }
    }

    /// Recompute the visible page from scratch.
    pub fn view(&self) -> ListingView<'_> {
        let spec = self.filter_spec();
        let resolved = spec.resolve((self.clock)());

        let mut matching = filter_records(&self.records, &resolved);
        self.sort.sort(&mut matching);

        let total_filtered_count = matching.len() as u64;
        let total_pages = total_pages(total_filtered_count, self.page_size);
        let visible_items = spec.window.slice(&matching).to_vec();

        ListingView {
            visible_items,
            total_filtered_count,
            page: self.page,
            total_pages,
            page_numbers: page_numbers(total_pages, self.page),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
