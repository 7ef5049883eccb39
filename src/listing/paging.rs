/// Number of pages needed for `count` records; never less than 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if count == 0 || page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size)
}

/// Clamp a 1-based page number into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Records shown on `page` (1-based), or all of them when `show_all` is set.
/// Pages past the end yield an empty slice.
pub fn paginate<T>(records: &[T], page: usize, page_size: usize, show_all: bool) -> &[T] {
    if show_all {
        return records;
    }

    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(records.len());
    let end = start.saturating_add(page_size).min(records.len());

    &records[start..end]
}
