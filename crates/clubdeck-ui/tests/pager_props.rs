//! Property tests for the table pager: page bounds, slice arithmetic,
//! and filter behaviour over arbitrary row sets.

#![forbid(unsafe_code)]

use clubdeck_ui::table_pager::{
    Row, TablePager, TableSpec, slice_bounds, total_pages,
};
use proptest::prelude::*;

fn pager_with(rows: usize, per_page: usize) -> TablePager {
    let rows = (0..rows)
        .map(|i| Row::new([format!("user{i}@club{}.test", i % 5), format!("club{}", i % 5)]))
        .collect();
    TablePager::new(TableSpec::users(), rows).per_page(per_page)
}

proptest! {
    #[test]
    fn test_page_arithmetic_invariants(
        len in 0usize..500,
        per_page in 1usize..50,
        page in 1usize..100
    ) {
        let pages = total_pages(len, per_page);
        // Ceiling division, never zero pages for a non-empty set.
        prop_assert_eq!(pages, len.div_ceil(per_page));

        let (start, end) = slice_bounds(page, per_page, len);
        prop_assert!(start <= end);
        prop_assert!(end <= len);
        if page <= pages {
            prop_assert!(end - start >= 1);
            prop_assert!(end - start <= per_page);
        }
    }

    #[test]
    fn test_view_stays_in_bounds(
        rows in 0usize..200,
        per_page in 1usize..30,
        jumps in proptest::collection::vec(0usize..40, 0..10)
    ) {
        let mut pager = pager_with(rows, per_page);
        for jump in jumps {
            pager.go_to_page(jump);
        }

        let view = pager.page_view();
        prop_assert!(view.current_page >= 1);
        prop_assert!(view.current_page <= view.total_pages.max(1));
        prop_assert!(view.visible.len() <= per_page);
        prop_assert_eq!(view.total, rows);
        // The readout slice matches the visible rows.
        if view.total > 0 {
            prop_assert_eq!(view.end - view.start + 1, view.visible.len());
        }
        // Page buttons cover exactly 1..=total_pages.
        let expected: Vec<usize> = (1..=view.total_pages).collect();
        prop_assert_eq!(view.pages, expected);
        // Prev/next disabled exactly at the edges.
        prop_assert_eq!(view.prev_enabled, view.current_page > 1);
        prop_assert_eq!(view.next_enabled, view.current_page < view.total_pages);
    }

    #[test]
    fn test_filter_is_subset_and_reversible(
        rows in 1usize..200,
        per_page in 1usize..30,
        club in 0usize..8
    ) {
        let mut pager = pager_with(rows, per_page);
        let all = pager.page_view().total;

        pager.filter(&format!("club{club}"));
        let filtered = pager.page_view();
        prop_assert!(filtered.total <= all);
        prop_assert_eq!(pager.current_page(), 1);
        // Matches keep their original order.
        let visible = &filtered.visible;
        prop_assert!(visible.windows(2).all(|w| w[0] < w[1]));

        // Clearing the term restores the full set.
        pager.filter("   ");
        prop_assert_eq!(pager.page_view().total, all);
    }

    #[test]
    fn test_visibility_flags_match_page(
        rows in 0usize..120,
        per_page in 1usize..20,
        page in 1usize..20
    ) {
        let mut pager = pager_with(rows, per_page);
        pager.go_to_page(page);

        // Every mutation re-applies visibility: exactly the page rows
        // carry the visible flag.
        let view = pager.page_view();
        let shown: Vec<usize> = pager
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_visible())
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(shown, view.visible);
    }

    #[test]
    fn test_paging_never_skips_or_repeats_rows(
        rows in 1usize..150,
        per_page in 1usize..25
    ) {
        let mut pager = pager_with(rows, per_page);
        let mut seen = Vec::new();
        for page in 1..=pager.total_pages() {
            pager.go_to_page(page);
            seen.extend(pager.page_view().visible);
        }
        let expected: Vec<usize> = (0..rows).collect();
        prop_assert_eq!(seen, expected);
    }
}
