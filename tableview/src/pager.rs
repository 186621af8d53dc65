//! Pagination engine: shows one fixed-size window of the Row Collection.

use std::str::FromStr;

use crate::body::{PagerView, RowSet, TableBody};
use crate::layout::PageSize;
use crate::notify::Notification;

/// Page size used when none, or an invalid one, is given.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Parse a page-size selector value.
///
/// Positive integers and `"all"` are accepted; anything else falls back to
/// [`DEFAULT_PAGE_SIZE`].
pub fn parse_page_size(value: &str) -> usize {
    PageSize::from_str(value)
        .map(|size| size.rows())
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Pagination state.
///
/// After every state-changing operation `1 <= current_page <= total_pages`
/// and `total_pages >= 1`, even for an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_size: usize,
    pub current_page: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl PageState {
    /// Text of the "page/total" indicator.
    pub fn label(&self) -> String {
        format!("{}/{}", self.current_page, self.total_pages)
    }

    /// Positions of the Row Collection shown on the current page.
    pub fn window(&self) -> std::ops::Range<usize> {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        start..self.current_page.saturating_mul(self.page_size)
    }
}

/// Relative page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
}

/// Pagination engine.
///
/// Every change of the current page goes through [`Pager::set_page`], which
/// clamps the page and redraws.
#[derive(Debug, Clone)]
pub struct Pager {
    state: PageState,
}

impl Pager {
    /// Create a pager with no rows counted yet.
    pub fn new(page_size: usize) -> Self {
        Self {
            state: PageState {
                page_size: sanitize(page_size),
                current_page: 1,
                total_count: 0,
                total_pages: 1,
            },
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Count the rows and show the first window at the configured size.
    pub fn init<B: TableBody + PagerView>(&mut self, rows: &RowSet, body: &mut B) {
        self.state.total_count = rows.eligible(body).len();
        let size = self.state.page_size;
        self.set_page_size(size, rows, body);
    }

    /// Jump to page `page`, clamped into `[1, total_pages]`.
    pub fn set_page<B: TableBody + PagerView>(&mut self, page: usize, rows: &RowSet, body: &mut B) {
        let clamped = page.clamp(1, self.state.total_pages);
        if clamped != page {
            log::trace!(
                "[pager] page {} clamped to {} of {}",
                page,
                clamped,
                self.state.total_pages
            );
        }
        self.state.current_page = clamped;
        body.set_page_label(&self.state.label());
        self.apply_visibility(rows, body);
    }

    /// Change the page size, keeping the first row of the current page in view.
    pub fn set_page_size<B: TableBody + PagerView>(
        &mut self,
        page_size: usize,
        rows: &RowSet,
        body: &mut B,
    ) {
        let first_row = (self.state.current_page - 1).saturating_mul(self.state.page_size);
        self.state.page_size = sanitize(page_size);
        self.state.total_pages = total_pages(self.state.total_count, self.state.page_size);
        log::debug!(
            "[pager] page size {} ({} pages, first row {})",
            self.state.page_size,
            self.state.total_pages,
            first_row
        );
        self.set_page(first_row / self.state.page_size + 1, rows, body);
    }

    /// Recount the eligible rows and redraw the current page.
    pub fn recompute<B: TableBody + PagerView>(&mut self, rows: &RowSet, body: &mut B) {
        self.state.total_count = rows.eligible(body).len();
        self.state.total_pages = total_pages(self.state.total_count, self.state.page_size);
        let page = self.state.current_page;
        self.set_page(page, rows, body);
    }

    /// Move relative to the current page.
    pub fn navigate<B: TableBody + PagerView>(&mut self, nav: PageNav, rows: &RowSet, body: &mut B) {
        let target = match nav {
            PageNav::First => 1,
            PageNav::Prev => self.state.current_page.saturating_sub(1),
            PageNav::Next => self.state.current_page.saturating_add(1),
            PageNav::Last => self.state.total_pages,
        };
        self.set_page(target, rows, body);
    }

    /// React to a notification. Both kinds recount and redraw: a reorder keeps
    /// the count but changes which rows fall in the window.
    pub fn handle<B: TableBody + PagerView>(
        &mut self,
        notification: Notification,
        rows: &RowSet,
        body: &mut B,
    ) {
        log::debug!("[pager] handling {:?}", notification);
        self.recompute(rows, body);
    }

    fn apply_visibility<B: TableBody>(&self, rows: &RowSet, body: &mut B) {
        let window = self.state.window();
        let mut position = 0;
        for row in body.rows() {
            if rows.is_excluded(row) {
                body.set_visible(row, false);
                continue;
            }
            body.set_visible(row, window.contains(&position));
            position += 1;
        }
        body.content_changed();
    }
}

fn sanitize(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size).max(1)
}
