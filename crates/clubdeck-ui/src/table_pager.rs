//! Searchable, paginated table over a fixed row set.
//!
//! The pager snapshots its rows once, in document order, and never creates
//! or destroys them afterwards; paging and searching only decide which rows
//! are visible. State transitions (filtering, page clamping, slice bounds)
//! are plain data operations kept apart from rendering, so they are
//! testable without any host UI.
//!
//! # Example
//!
//! ```rust
//! use clubdeck_ui::table_pager::{Row, TablePager, TableSpec};
//!
//! let rows = vec![
//!     Row::new(["acme@club.test", "admin"]),
//!     Row::new(["beta@club.test", "coach"]),
//! ];
//! let mut pager = TablePager::new(TableSpec::users(), rows);
//!
//! pager.filter("ACME ");
//! let view = pager.page_view();
//! assert_eq!((view.start, view.end, view.total), (1, 1, 1));
//! ```

use unicode_width::UnicodeWidthStr;

/// Default number of rows per page.
pub const DEFAULT_PER_PAGE: usize = 10;

/// One rendered table record: ordered cell texts plus a visibility flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
    visible: bool,
}

impl Row {
    /// Creates a visible row from its cell texts.
    #[must_use]
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            visible: true,
        }
    }

    /// Returns the cell text at `index`, if the row has that many cells.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Returns all cell texts in order.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Returns whether the row is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Names a table and the column its search box matches against.
///
/// The search column is configuration, not a magic cell offset: the users
/// table searches the email column, the clubs table the name column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    kind: String,
    search_column: usize,
}

impl TableSpec {
    /// Creates a spec for a table `kind` searching `search_column`.
    #[must_use]
    pub fn new(kind: impl Into<String>, search_column: usize) -> Self {
        Self {
            kind: kind.into(),
            search_column,
        }
    }

    /// The admin users table; search matches the email column.
    #[must_use]
    pub fn users() -> Self {
        Self::new("users", 0)
    }

    /// The admin clubs table; search matches the name column.
    #[must_use]
    pub fn clubs() -> Self {
        Self::new("clubs", 0)
    }

    /// Returns the table kind, used to derive control names.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the searched column index.
    #[must_use]
    pub fn search_column(&self) -> usize {
        self.search_column
    }
}

/// Everything a host needs to render one page of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// 1-based ordinal of the first shown result, 0 when there are none.
    pub start: usize,
    /// 1-based ordinal of the last shown result, 0 when there are none.
    pub end: usize,
    /// Size of the filtered set.
    pub total: usize,
    /// Current page, 1-based.
    pub current_page: usize,
    /// Number of pages in the filtered set (0 when it is empty).
    pub total_pages: usize,
    /// Page numbers for the button strip, `1..=total_pages`.
    pub pages: Vec<usize>,
    /// Whether the previous control is enabled.
    pub prev_enabled: bool,
    /// Whether the next control is enabled.
    pub next_enabled: bool,
    /// Whether the no-results placeholder is shown (empty filtered set
    /// with a non-empty search term).
    pub no_results: bool,
    /// Indices into the full row set for the rows on this page, in order.
    pub visible: Vec<usize>,
}

/// Number of pages needed for `total` items at `per_page` items each.
#[must_use]
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}

/// Slice bounds `[start, end)` of 1-based `page` over `len` items.
#[must_use]
pub fn slice_bounds(page: usize, per_page: usize, len: usize) -> (usize, usize) {
    let start = (page.saturating_sub(1)) * per_page;
    let end = (start + per_page).min(len);
    (start.min(len), end)
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Pagination and search engine for one table.
#[derive(Debug, Clone)]
pub struct TablePager {
    spec: TableSpec,
    rows: Vec<Row>,
    /// Indices into `rows`, always an order-preserving subsequence.
    filtered: Vec<usize>,
    current_page: usize,
    per_page: usize,
    search_term: String,
}

impl TablePager {
    /// Creates a pager over `rows`, snapshotted in the given order, with
    /// the default page size. Everything starts visible on page 1.
    #[must_use]
    pub fn new(spec: TableSpec, rows: Vec<Row>) -> Self {
        let filtered = (0..rows.len()).collect();
        let mut pager = Self {
            spec,
            rows,
            filtered,
            current_page: 1,
            per_page: DEFAULT_PER_PAGE,
            search_term: String::new(),
        };
        pager.apply_visibility();
        pager
    }

    /// Sets the page size (clamped to at least 1).
    #[must_use]
    pub fn per_page(mut self, n: usize) -> Self {
        self.per_page = n.max(1);
        self.apply_visibility();
        self
    }

    /// Returns the table spec.
    #[must_use]
    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    /// Returns the full row set in document order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the active (normalized) search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the current page, 1-based.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the number of pages in the filtered set.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.per_page)
    }

    /// Filters the rows by `term` and resets to page 1.
    ///
    /// The term is trimmed and lower-cased; an empty term restores the
    /// full set. Otherwise a row matches when its search cell contains the
    /// term, case-insensitively. Rows without that cell never match.
    pub fn filter(&mut self, term: &str) {
        self.search_term = normalize_term(term);
        if self.search_term.is_empty() {
            self.filtered = (0..self.rows.len()).collect();
        } else {
            let col = self.spec.search_column;
            let term = &self.search_term;
            self.filtered = (0..self.rows.len())
                .filter(|&i| {
                    self.rows[i]
                        .cell(col)
                        .is_some_and(|text| text.to_lowercase().contains(term))
                })
                .collect();
        }
        self.current_page = 1;
        self.apply_visibility();
    }

    /// Jumps to 1-based page `n`; out-of-range pages are a no-op.
    pub fn go_to_page(&mut self, n: usize) {
        if n < 1 || n > self.total_pages() {
            return;
        }
        self.current_page = n;
        self.apply_visibility();
    }

    /// Moves to the next page, if there is one.
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    /// Moves to the previous page, if there is one.
    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// Builds the render model for the current state.
    #[must_use]
    pub fn page_view(&self) -> PageView {
        let total = self.filtered.len();
        let total_pages = self.total_pages();
        let (start_idx, end_idx) = slice_bounds(self.current_page, self.per_page, total);
        let visible = self.filtered[start_idx..end_idx].to_vec();

        PageView {
            start: if total > 0 { start_idx + 1 } else { 0 },
            end: end_idx,
            total,
            current_page: self.current_page,
            total_pages,
            pages: (1..=total_pages).collect(),
            prev_enabled: self.current_page > 1,
            next_enabled: self.current_page < total_pages,
            no_results: total == 0 && !self.search_term.is_empty(),
            visible,
        }
    }

    /// Re-applies visibility flags: hide everything, then show exactly the
    /// rows on the current page.
    fn apply_visibility(&mut self) {
        let view = self.page_view();
        for row in &mut self.rows {
            row.visible = false;
        }
        for &i in &view.visible {
            self.rows[i].visible = true;
        }
    }

    /// Renders the current page as plain text: the visible rows in aligned
    /// columns, the results readout, and the page-button strip.
    #[must_use]
    pub fn view(&self) -> String {
        let view = self.page_view();
        let mut out = String::new();

        if view.no_results {
            out.push_str(&format!("No {} found.\n", self.spec.kind));
        } else {
            let widths = self.column_widths(&view.visible);
            for &i in &view.visible {
                let row = &self.rows[i];
                let mut line = String::new();
                for (c, width) in widths.iter().enumerate() {
                    let text = row.cell(c).unwrap_or("");
                    line.push_str(text);
                    let pad = width.saturating_sub(text.width());
                    if c + 1 < widths.len() {
                        line.push_str(&" ".repeat(pad + 2));
                    }
                }
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }

        out.push_str(&format!(
            "Showing {}-{} of {} results\n",
            view.start, view.end, view.total
        ));
        out.push_str(&page_strip(&view));
        out.push('\n');
        out
    }

    fn column_widths(&self, visible: &[usize]) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for &i in visible {
            for (c, cell) in self.rows[i].cells().iter().enumerate() {
                if c == widths.len() {
                    widths.push(0);
                }
                widths[c] = widths[c].max(cell.width());
            }
        }
        widths
    }
}

fn page_strip(view: &PageView) -> String {
    let mut strip = String::new();
    strip.push_str(if view.prev_enabled { "< " } else { "  " });
    for &page in &view.pages {
        if page == view.current_page {
            strip.push_str(&format!("[{page}]"));
        } else {
            strip.push_str(&format!(" {page} "));
        }
    }
    strip.push_str(if view.next_enabled { " >" } else { "  " });
    strip
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row::new([format!("user{i}@club.test"), format!("user {i}")]))
            .collect()
    }

    #[test]
    fn test_init_shows_everything_on_page_one() {
        let pager = TablePager::new(TableSpec::users(), user_rows(4));
        let view = pager.page_view();

        assert_eq!(view.current_page, 1);
        assert_eq!(view.total, 4);
        assert_eq!(view.visible, vec![0, 1, 2, 3]);
        assert!(pager.rows().iter().all(Row::is_visible));
    }

    #[test]
    fn test_empty_filter_restores_full_set() {
        let mut pager = TablePager::new(TableSpec::users(), user_rows(5));
        pager.filter("user3");
        pager.filter("");

        assert_eq!(pager.page_view().total, 5);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_trimmed() {
        let rows = vec![
            Row::new(["Acme Gym", "acme"]),
            Row::new(["Beta Club", "beta"]),
        ];
        let mut pager = TablePager::new(TableSpec::clubs(), rows);
        pager.filter("  ACME ");

        let view = pager.page_view();
        assert_eq!(view.visible, vec![0]);
        assert!(!view.no_results);
        assert_eq!(pager.search_term(), "acme");
    }

    #[test]
    fn test_filter_preserves_row_order() {
        let rows = vec![
            Row::new(["alpha@x.test"]),
            Row::new(["beta@x.test"]),
            Row::new(["alphabet@x.test"]),
        ];
        let mut pager = TablePager::new(TableSpec::users(), rows);
        pager.filter("alpha");

        assert_eq!(pager.page_view().visible, vec![0, 2]);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut pager = TablePager::new(TableSpec::users(), user_rows(25)).per_page(10);
        pager.go_to_page(3);
        pager.filter("user");

        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_filter_idempotent() {
        let mut pager = TablePager::new(TableSpec::users(), user_rows(25)).per_page(10);
        pager.filter("user1");
        let first = pager.page_view();
        let visible_first: Vec<bool> = pager.rows().iter().map(Row::is_visible).collect();

        pager.filter("user1");
        assert_eq!(pager.page_view(), first);
        let visible_second: Vec<bool> = pager.rows().iter().map(Row::is_visible).collect();
        assert_eq!(visible_first, visible_second);
    }

    #[test]
    fn test_no_results_needs_nonempty_term() {
        let mut pager = TablePager::new(TableSpec::users(), Vec::new());
        // Zero underlying rows with an empty search: no placeholder.
        pager.filter("");
        assert!(!pager.page_view().no_results);

        pager.filter("zzz");
        assert!(pager.page_view().no_results);
    }

    #[test]
    fn test_no_results_on_nonmatching_term() {
        let mut pager = TablePager::new(TableSpec::users(), user_rows(3));
        pager.filter("zzz");

        let view = pager.page_view();
        assert!(view.no_results);
        assert_eq!((view.start, view.end, view.total), (0, 0, 0));
        assert!(!view.prev_enabled);
        assert!(!view.next_enabled);
        assert!(pager.rows().iter().all(|r| !r.is_visible()));
    }

    #[test]
    fn test_out_of_range_pages_are_noops() {
        let mut pager = TablePager::new(TableSpec::users(), user_rows(23)).per_page(10);

        pager.go_to_page(0);
        assert_eq!(pager.current_page(), 1);
        pager.go_to_page(4);
        assert_eq!(pager.current_page(), 1);

        pager.go_to_page(2);
        pager.go_to_page(99);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_last_page_readout_and_controls() {
        // 23 rows at 10 per page: page 3 shows rows 21-23.
        let mut pager = TablePager::new(TableSpec::users(), user_rows(23)).per_page(10);
        pager.go_to_page(3);

        let view = pager.page_view();
        assert_eq!((view.start, view.end, view.total), (21, 23, 23));
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.visible, vec![20, 21, 22]);
        assert!(view.prev_enabled);
        assert!(!view.next_enabled);
        assert_eq!(view.pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_next_prev_navigation() {
        let mut pager = TablePager::new(TableSpec::users(), user_rows(23)).per_page(10);

        pager.next_page();
        assert_eq!(pager.current_page(), 2);
        pager.next_page();
        pager.next_page(); // already on the last page
        assert_eq!(pager.current_page(), 3);

        pager.prev_page();
        pager.prev_page();
        pager.prev_page(); // already on page 1
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_visibility_matches_page_slice() {
        let mut pager = TablePager::new(TableSpec::users(), user_rows(23)).per_page(10);
        pager.go_to_page(2);

        let shown: Vec<usize> = pager
            .rows()
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.is_visible().then_some(i))
            .collect();
        assert_eq!(shown, (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_row_without_search_cell_never_matches() {
        let rows = vec![Row::new::<[&str; 0], &str>([]), Row::new(["acme@x.test"])];
        let mut pager = TablePager::new(TableSpec::users(), rows);
        pager.filter("acme");

        assert_eq!(pager.page_view().visible, vec![1]);
    }

    #[test]
    fn test_slice_bounds_and_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);

        assert_eq!(slice_bounds(1, 10, 23), (0, 10));
        assert_eq!(slice_bounds(3, 10, 23), (20, 23));
        assert_eq!(slice_bounds(1, 10, 0), (0, 0));
    }

    #[test]
    fn test_view_readout_text() {
        let mut pager = TablePager::new(TableSpec::users(), user_rows(23)).per_page(10);
        pager.go_to_page(3);

        let rendered = pager.view();
        assert!(rendered.contains("Showing 21-23 of 23 results"));
        assert!(rendered.contains("[3]"));

        pager.filter("zzz");
        let rendered = pager.view();
        assert!(rendered.contains("No users found."));
        assert!(rendered.contains("Showing 0-0 of 0 results"));
    }
}
