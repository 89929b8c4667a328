/// One rendered page of an already-fetched result set.
///
/// Borrowed view, derived fresh per request; nothing here is stored. The
/// caller hands the full (capped) candidate list to [`paginate`] and gets
/// back the visible slice plus the metadata needed for a range line and
/// previous/next links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub total_count: usize,
    pub page_size: usize,
    /// 1-based, always within `[1, total_pages]`.
    pub current_page: usize,
    /// Always at least 1, even for an empty result set.
    pub total_pages: usize,
}

impl<T> PageView<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based index of the first visible item; 0 when the page is empty.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last visible item; 0 when the page is empty.
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }

    /// Human-readable range line, e.g. "Results 11–20 of 47".
    pub fn range_label(&self) -> String {
        format!(
            "Results {}–{} of {}",
            self.first_index(),
            self.last_index(),
            self.total_count
        )
    }
}

/// Slices one page out of an already-fetched result set.
///
/// `requested_page` comes straight from a query string and may be anything:
/// zero, negative, or far past the end. It is clamped into `[1, total_pages]`
/// rather than rejected, so a stale or hand-edited URL still renders a page.
/// An empty `items` yields a single empty page.
pub fn paginate<T>(items: &[T], requested_page: i64, page_size: usize) -> PageView<'_, T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size).max(1);

    let current_page = requested_page.clamp(1, total_pages as i64) as usize;

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_count);

    PageView {
        items: &items[start..end],
        total_count,
        page_size,
        current_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_middle_page_of_47() {
        let items = numbers(47);
        let page = paginate(&items, 2, 10);

        assert_eq!(page.items, &items[10..20]);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.current_page, 2);
        assert!(page.has_previous());
        assert!(page.has_next());
        assert_eq!(page.range_label(), "Results 11–20 of 47");
    }

    #[test]
    fn test_last_partial_page() {
        let items = numbers(47);
        let page = paginate(&items, 5, 10);

        assert_eq!(page.items, &items[40..47]);
        assert!(page.has_previous());
        assert!(!page.has_next());
        assert_eq!(page.range_label(), "Results 41–47 of 47");
    }

    #[test]
    fn test_out_of_range_page_clamps_high() {
        let items = numbers(5);
        let page = paginate(&items, 99, 10);

        assert_eq!(page.current_page, 1);
        assert_eq!(page.items.len(), 5);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_zero_and_negative_pages_clamp_low() {
        let items = numbers(30);

        let page = paginate(&items, 0, 10);
        assert_eq!(page.current_page, 1);

        let page = paginate(&items, -7, 10);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items, &items[0..10]);
    }

    #[test]
    fn test_far_out_of_range_clamps_to_last_page() {
        let items = numbers(25);
        let page = paginate(&items, i64::MAX, 10);

        assert_eq!(page.current_page, 3);
        assert_eq!(page.items, &items[20..25]);
    }

    #[test]
    fn test_empty_items_yield_single_empty_page() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 3, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.first_index(), 0);
        assert_eq!(page.last_index(), 0);
        assert_eq!(page.range_label(), "Results 0–0 of 0");
    }

    #[test]
    fn test_exact_multiple_has_no_phantom_page() {
        let items = numbers(20);
        let page = paginate(&items, 2, 10);

        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next());
    }

    #[test]
    fn test_nonempty_items_never_give_empty_page() {
        let items = numbers(7);
        for requested in [-3, 0, 1, 2, 50] {
            let page = paginate(&items, requested, 3);
            assert!(!page.items.is_empty());
            assert!(page.current_page >= 1 && page.current_page <= page.total_pages);
        }
    }

    #[test]
    fn test_zero_page_size_normalized() {
        let items = numbers(4);
        let page = paginate(&items, 1, 0);

        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.items, &items[0..1]);
    }
}
