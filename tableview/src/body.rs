//! The rendering collaborator contract and the Row Collection.

use std::collections::HashSet;

use crate::header::SortState;

/// Opaque identity of one row in a table body.
///
/// Rows are never copied by the engines, only moved or hidden, so the
/// collaborator decides what the number means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single table body as seen by the sort and pagination engines.
///
/// Implementations own the actual rows and whatever surface shows them.
pub trait TableBody {
    /// All rows of the body in their current order, excluded rows included.
    fn rows(&self) -> Vec<RowId>;

    /// Whether the row is currently shown.
    ///
    /// Only consulted once, when a [`RowSet`] is scanned.
    fn is_shown(&self, row: RowId) -> bool;

    /// Text content of the cell at `position`, or `None` if the row is shorter.
    fn cell_text(&self, row: RowId, position: usize) -> Option<String>;

    /// Show or hide a row.
    fn set_visible(&mut self, row: RowId, visible: bool);

    /// Move `row` so that it ends up at `position` within the body.
    fn move_row(&mut self, row: RowId, position: usize);

    /// Reflect a header's sort indicator.
    fn show_sort_state(&mut self, _header: usize, _state: SortState, _in_progress: bool) {}

    /// Signal that the visible content of the body changed.
    fn content_changed(&mut self) {}
}

/// The pager's display and page-size selector.
pub trait PagerView {
    /// Write the "page/total" indicator.
    fn set_page_label(&mut self, label: &str);

    /// Raw value of the page-size selector.
    fn page_size_value(&self) -> String;

    /// Set the raw value of the page-size selector.
    fn set_page_size_value(&mut self, value: &str);
}

/// The Row Collection of one table body.
///
/// Rows that were hidden when the set was scanned are excluded for good: they
/// are never sorted, counted or shown. Every other row, including rows added
/// after the scan, is eligible.
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    excluded: HashSet<RowId>,
}

impl RowSet {
    /// Scan the body once and record the rows that are already hidden.
    pub fn scan<B: TableBody + ?Sized>(body: &B) -> Self {
        let excluded: HashSet<RowId> = body
            .rows()
            .into_iter()
            .filter(|row| !body.is_shown(*row))
            .collect();
        log::debug!("[rows] {} rows excluded at scan", excluded.len());
        Self { excluded }
    }

    /// Check if a row was excluded at scan time.
    pub fn is_excluded(&self, row: RowId) -> bool {
        self.excluded.contains(&row)
    }

    /// Number of excluded rows.
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// Eligible rows of the body in their current order.
    pub fn eligible<B: TableBody + ?Sized>(&self, body: &B) -> Vec<RowId> {
        body.rows()
            .into_iter()
            .filter(|row| !self.is_excluded(*row))
            .collect()
    }
}
