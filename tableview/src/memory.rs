//! In-memory table body.
//!
//! `MemoryTable` keeps rows, visibility, header indicators and the pager's
//! display state in plain collections. It backs the demo binary and is handy
//! anywhere a headless table is enough.

use std::collections::BTreeMap;

use unicode_width::UnicodeWidthStr;

use crate::body::{PagerView, RowId, TableBody};
use crate::header::{HeaderCell, SortState};

#[derive(Debug, Clone)]
struct MemoryRow {
    id: RowId,
    cells: Vec<String>,
    shown: bool,
}

/// A table body held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    headers: Vec<HeaderCell>,
    rows: Vec<MemoryRow>,
    next_id: usize,
    indicators: BTreeMap<usize, (SortState, bool)>,
    page_label: String,
    page_size_value: String,
    content_changes: usize,
}

impl MemoryTable {
    pub fn new(headers: Vec<HeaderCell>) -> Self {
        Self {
            headers,
            ..Default::default()
        }
    }

    pub fn headers(&self) -> &[HeaderCell] {
        &self.headers
    }

    /// Append a shown row.
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) -> RowId {
        self.push(cells, true)
    }

    /// Append a hidden row, e.g. one filtered out before the engines start.
    pub fn push_hidden_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) -> RowId {
        self.push(cells, false)
    }

    fn push<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>, shown: bool) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(MemoryRow {
            id,
            cells: cells.into_iter().map(Into::into).collect(),
            shown,
        });
        id
    }

    /// Remove a row. Returns false if it does not exist.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    /// Force a row's visibility from outside the engines.
    pub fn set_shown(&mut self, id: RowId, shown: bool) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.shown = shown;
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of a row.
    pub fn cells(&self, id: RowId) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.cells.as_slice())
    }

    /// Ids of the shown rows, in order.
    pub fn visible_rows(&self) -> Vec<RowId> {
        self.rows.iter().filter(|row| row.shown).map(|row| row.id).collect()
    }

    /// Text at `position` of every shown row, in order.
    pub fn visible_column(&self, position: usize) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| row.shown)
            .map(|row| row.cells.get(position).cloned().unwrap_or_default())
            .collect()
    }

    /// Last indicator reported for a header, with its in-progress flag.
    pub fn indicator(&self, header: usize) -> (SortState, bool) {
        self.indicators.get(&header).copied().unwrap_or_default()
    }

    pub fn page_label(&self) -> &str {
        &self.page_label
    }

    /// How many times the content-changed signal fired.
    pub fn content_changes(&self) -> usize {
        self.content_changes
    }

    /// Render the header row and the shown rows as aligned text.
    pub fn render_text(&self) -> String {
        let positions = self
            .headers
            .iter()
            .map(|header| header.span.max(1))
            .sum::<usize>()
            .max(self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0));

        let mut widths = vec![0; positions];
        for row in self.rows.iter().filter(|row| row.shown) {
            for (position, cell) in row.cells.iter().enumerate() {
                widths[position] = widths[position].max(cell.width());
            }
        }

        let labels: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let (state, in_progress) = self.indicator(idx);
                let cue = if in_progress { "…" } else { "" };
                format!("{}{}{}", header.label, state.marker(), cue)
            })
            .collect();

        // Widen the last covered cell when a header label is wider than its cells.
        let mut spans = Vec::with_capacity(self.headers.len());
        let mut start = 0;
        for (header, label) in self.headers.iter().zip(&labels) {
            let end = (start + header.span.max(1)).min(positions);
            let width = span_width(&widths[start..end]);
            if end > start && label.width() > width {
                widths[end - 1] += label.width() - width;
            }
            spans.push(start..end);
            start = end;
        }

        let header_line: Vec<String> = spans
            .into_iter()
            .zip(&labels)
            .map(|(span, label)| pad(label, span_width(&widths[span])))
            .collect();

        let mut lines = vec![header_line.join(" ").trim_end().to_string()];
        for row in self.rows.iter().filter(|row| row.shown) {
            let cells: Vec<String> = (0..positions)
                .map(|position| pad(row.cells.get(position).map_or("", String::as_str), widths[position]))
                .collect();
            lines.push(cells.join(" ").trim_end().to_string());
        }
        lines.join("\n")
    }
}

// Spanned cells are joined by single spaces.
fn span_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + widths.len().saturating_sub(1)
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

impl TableBody for MemoryTable {
    fn rows(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    fn is_shown(&self, row: RowId) -> bool {
        self.rows.iter().any(|r| r.id == row && r.shown)
    }

    fn cell_text(&self, row: RowId, position: usize) -> Option<String> {
        self.cells(row)
            .and_then(|cells| cells.get(position))
            .cloned()
    }

    fn set_visible(&mut self, row: RowId, visible: bool) {
        self.set_shown(row, visible);
    }

    fn move_row(&mut self, row: RowId, position: usize) {
        let Some(from) = self.rows.iter().position(|r| r.id == row) else {
            return;
        };
        let moved = self.rows.remove(from);
        let position = position.min(self.rows.len());
        self.rows.insert(position, moved);
    }

    fn show_sort_state(&mut self, header: usize, state: SortState, in_progress: bool) {
        self.indicators.insert(header, (state, in_progress));
    }

    fn content_changed(&mut self) {
        self.content_changes += 1;
    }
}

impl PagerView for MemoryTable {
    fn set_page_label(&mut self, label: &str) {
        self.page_label = label.to_string();
    }

    fn page_size_value(&self) -> String {
        self.page_size_value.clone()
    }

    fn set_page_size_value(&mut self, value: &str) {
        self.page_size_value = value.to_string();
    }
}
