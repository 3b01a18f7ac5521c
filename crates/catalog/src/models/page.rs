use serde::Deserialize;

/// Fixed page size of the upstream catalog. Not configurable client-side.
pub const PAGE_SIZE: u64 = 10;

/// One page of a paginated list response.
///
/// `count` is the total item count across all pages; `next` and `previous`
/// are upstream-provided page URLs (null at either end of the range).
/// `results` preserves upstream ordering and is never re-sorted.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Total number of pages implied by `count`.
    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(PAGE_SIZE)
    }
}
