//! Page slicing and page navigation.
//!
//! Pages are 1-indexed. A list always has at least one page, so an empty list
//! shows a single empty page and every navigation control is a no-op.

/// Maximum number of page buttons shown by the pager.
pub const PAGE_WINDOW: usize = 5;

/// Number of pages needed for `len` items, never less than one.
#[must_use]
pub const fn total_pages(len: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    let pages = len.div_ceil(size);
    if pages == 0 {
        1
    } else {
        pages
    }
}

/// Returns the items on `page` and the total page count.
///
/// Pages past the end yield an empty slice.
///
/// # Examples
///
/// ```
/// use talentscope::domain::paginate;
///
/// let items: Vec<u32> = (1..=8).collect();
/// assert_eq!(paginate(&items, 2, 6), (&[7, 8][..], 2));
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    (&items[start..end], total_pages(items.len(), size))
}

/// Page numbers for the pager, at most [`PAGE_WINDOW`] of them around `current`.
#[must_use]
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    if total <= PAGE_WINDOW {
        return (1..=total).collect();
    }
    let half = PAGE_WINDOW / 2;
    let start = if current <= half + 1 {
        1
    } else if current + half >= total {
        total + 1 - PAGE_WINDOW
    } else {
        current - half
    };
    (start..start + PAGE_WINDOW).collect()
}

/// Page cursor over a list of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Replaces the list length and returns to page one.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current_page == 1
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// Jumps to `page`, clamped into range. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total_pages());
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages())
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// Pager buttons for the current position.
    #[must_use]
    pub fn window(&self) -> Vec<usize> {
        page_window(self.current_page, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_reconstruct_input() {
        for len in 0..=30 {
            let items: Vec<usize> = (0..len).collect();
            for size in 1..=10 {
                let (_, total) = paginate(&items, 1, size);
                assert_eq!(total, len.div_ceil(size).max(1), "len {len} size {size}");

                let mut joined = Vec::with_capacity(len);
                for page in 1..=total {
                    let (slice, _) = paginate(&items, page, size);
                    assert!(slice.len() <= size);
                    joined.extend_from_slice(slice);
                }
                assert_eq!(joined, items, "len {len} size {size}");
            }
        }
    }

    #[test]
    fn eight_items_two_pages() {
        let items: Vec<usize> = (1..=8).collect();
        let (first, total) = paginate(&items, 1, 6);
        assert_eq!(first, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(total, 2);
        assert_eq!(paginate(&items, 2, 6).0, &[7, 8]);
    }

    #[test]
    fn empty_list_has_one_page() {
        let items: Vec<u8> = vec![];
        assert_eq!(paginate(&items, 1, 6), (&[][..], 1));
        assert_eq!(total_pages(0, 6), 1);
    }

    #[test]
    fn page_past_end_is_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 4, 2).0.is_empty());
    }

    #[test]
    fn navigation_is_clamped() {
        let mut p = Pagination::new(6);
        p.reset(8);
        assert!(!p.prev());
        assert!(p.next());
        assert_eq!(p.current_page(), 2);
        assert!(!p.next());
        assert_eq!(p.current_page(), 2);
        assert!(p.first());
        assert!(p.last());
        assert!(p.is_last());
        assert!(!p.go_to(99));
        p.go_to(0);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut p = Pagination::new(2);
        p.reset(10);
        p.go_to(4);
        p.reset(3);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 2);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let p = Pagination::new(0);
        assert_eq!(p.page_size(), 1);
    }

    #[test]
    fn window_shapes() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(1, 0), vec![1]);
    }
}
