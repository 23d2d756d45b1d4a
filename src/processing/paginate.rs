//! Page slicing.

use std::ops::Range;

/// Index range of page `current_page` (1-based) for `len` items.
///
/// - `page_size == 0` means no pagination: the whole range.
/// - Page `0` is read as page `1`.
/// - Pages past the end give an empty range.
pub fn page_range(len: usize, current_page: usize, page_size: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..len;
    }
    let start = current_page.max(1).saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// The rows visible on `current_page`. See [`page_range`] for the bounds rules.
pub fn paginate_rows<T: Clone>(rows: &[T], current_page: usize, page_size: usize) -> Vec<T> {
    rows[page_range(rows.len(), current_page, page_size)].to_vec()
}

/// Number of pages needed for `len` items; `1` when pagination is off and rows exist.
pub fn page_count(len: usize, page_size: usize) -> usize {
    match page_size {
        0 => usize::from(len > 0),
        size => len.div_ceil(size),
    }
}
