//! Pagination guards for the list pages.
//!
//! The upstream page size is fixed at 10; the client never requests a page
//! outside `1..=total_pages`, so an out-of-range request is a local bug,
//! not a network round trip.

/// Clamp a requested page into `1..=total_pages`. A catalog with zero pages
/// still clamps to page 1 (the upstream serves an empty first page).
pub fn clamp_page(page: u64, total_pages: u64) -> u64 {
    page.clamp(1, total_pages.max(1))
}

/// The window of page numbers the pagination bar shows: at most `5`,
/// centered on the current page, pinned to the ends of the range.
pub fn page_window(current: u64, total_pages: u64) -> Vec<u64> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= 5 {
        return (1..=total_pages).collect();
    }
    let start = if current <= 3 {
        1
    } else if current >= total_pages - 2 {
        total_pages - 4
    } else {
        current - 2
    };
    (start..start + 5).collect()
}
