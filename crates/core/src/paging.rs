//! Offset/limit windows and the compact page-number list used by
//! pagination controls.

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Page size used when the caller supplies none (or an unusable one).
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Upper bound on a single page.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Up to this many pages every page number is listed.
pub const COMPACT_PAGE_THRESHOLD: u64 = 5;

/// Marker rendered in place of elided page numbers.
pub const ELLIPSIS: &str = "...";

// ---------------------------------------------------------------------------
// PageWindow
// ---------------------------------------------------------------------------

/// A half-open window `[offset, offset + limit)` over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageWindow {
    /// Build a window. A zero limit is raised to 1.
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit: limit.max(1),
        }
    }

    /// Window covering the 1-based `page` of `page_size` items.
    pub fn from_page(page: u64, page_size: u64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        Self {
            offset: (page - 1).saturating_mul(page_size),
            limit: page_size,
        }
    }

    /// Exclusive end of the window.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.limit)
    }

    /// The 1-based page the window's offset falls on.
    pub fn page(&self) -> u64 {
        self.offset / self.limit.max(1) + 1
    }

    /// The part of `items` inside the window. Windows past the end yield an
    /// empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as u64;
        let start = self.offset.min(len) as usize;
        let end = self.end().min(len) as usize;
        &items[start..end]
    }
}

/// Number of pages needed for `total` items. Zero items means zero pages.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

// ---------------------------------------------------------------------------
// Page-number list
// ---------------------------------------------------------------------------

/// One entry in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u64),
    Ellipsis,
}

impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Compact list of page markers for `total_pages` pages with `current`
/// selected.
///
/// - Five pages or fewer: every page.
/// - `current <= 3`: `1 2 3 4 ... last`.
/// - `current >= total_pages - 2`: `1 ... last-3 last-2 last-1 last`.
/// - Otherwise: `1 ... current-1 current current+1 ... last`.
pub fn page_numbers(total_pages: u64, current: u64) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Page};

    if total_pages <= COMPACT_PAGE_THRESHOLD {
        return (1..=total_pages).map(Page).collect();
    }

    let last = total_pages;
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(last)]
    } else if current >= last - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(last - 3),
            Page(last - 2),
            Page(last - 1),
            Page(last),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(last),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Page};
    use super::*;

    // -- page_numbers --------------------------------------------------------

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(page_numbers(3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_numbers(5, 4).len(), 5);
        assert!(page_numbers(0, 1).is_empty());
    }

    #[test]
    fn near_start_shows_leading_cluster() {
        assert_eq!(
            page_numbers(10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(page_numbers(10, 3), page_numbers(10, 1));
    }

    #[test]
    fn middle_shows_neighbours() {
        assert_eq!(
            page_numbers(10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn near_end_shows_trailing_cluster() {
        assert_eq!(
            page_numbers(10, 9),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(page_numbers(10, 8), page_numbers(10, 10));
    }

    #[test]
    fn markers_serialize_as_numbers_and_ellipsis() {
        let json = serde_json::to_value(page_numbers(10, 1)).unwrap();
        assert_eq!(json, serde_json::json!([1, 2, 3, 4, "...", 10]));
    }

    // -- PageWindow ----------------------------------------------------------

    #[test]
    fn from_page_is_one_based() {
        assert_eq!(PageWindow::from_page(1, 6), PageWindow::new(0, 6));
        assert_eq!(PageWindow::from_page(3, 6), PageWindow::new(12, 6));
        assert_eq!(PageWindow::from_page(0, 6), PageWindow::new(0, 6));
    }

    #[test]
    fn slice_clamps_to_available_items() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(PageWindow::new(0, 10).slice(&items).len(), 10);
        assert_eq!(PageWindow::new(20, 10).slice(&items), &[20, 21, 22, 23, 24]);
        assert!(PageWindow::new(40, 10).slice(&items).is_empty());
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        assert_eq!(PageWindow::new(5, 0).limit, 1);
    }

    #[test]
    fn page_of_offset() {
        assert_eq!(PageWindow::new(0, 10).page(), 1);
        assert_eq!(PageWindow::new(20, 10).page(), 3);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 0);
    }
}
