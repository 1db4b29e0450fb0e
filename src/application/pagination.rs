//! Fixed-size pagination over the filtered character list.

/// Number of records shown per catalog page.
pub const PAGE_SIZE: usize = 12;

/// One page of a sliced collection plus derived navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Slices `records` into fixed-size pages.
///
/// `page` is 1-based. `total_pages` is at least 1 even for an empty input.
/// Requesting a page past the end yields empty `items` with
/// `has_next = false`; callers are expected to clamp `page` to
/// `[1, total_pages]` via the reset-on-filter-change rule.
pub fn paginate<T: Clone>(records: &[T], page: u32, page_size: usize) -> Page<T> {
    debug_assert!(page >= 1, "pages are 1-based");
    debug_assert!(page_size >= 1, "page size must be positive");

    let total_pages = (records.len().div_ceil(page_size)).max(1) as u32;

    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(records.len());
    let items = if start < records.len() {
        records[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items,
        total_pages,
        has_next: page < total_pages,
        has_previous: page > 1,
    }
}
