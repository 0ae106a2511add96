//! Page-count math for catalog listings.

/// Records per catalog page, fixed by the catalog service.
pub const PAGE_SIZE: u64 = 20;

/// Number of pages needed to show `count` records.
///
/// An empty result set still counts as one page, so `current_page = 1` is
/// always in range.
pub fn total_pages(count: u64) -> u32 {
    let pages = count.div_ceil(PAGE_SIZE).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Whether navigation controls make sense for `total_pages`.
pub fn has_pagination(total_pages: u32) -> bool {
    total_pages > 1
}
