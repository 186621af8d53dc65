//! Header cells, logical column ranges and the sort indicator.

use serde::{Deserialize, Serialize};

/// One cell of the table's header row.
///
/// # Examples
///
/// ```
/// use tableview::header::HeaderCell;
///
/// let headers = vec![
///     HeaderCell::new("Name"),
///     HeaderCell::new("Address").span(3),
///     HeaderCell::new("Notes").unsortable(),
/// ];
/// assert_eq!(headers[1].span, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    /// Header text
    pub label: String,
    /// Number of underlying cell positions this header covers
    pub span: usize,
    /// Whether clicking this header sorts the table
    pub sortable: bool,
}

impl HeaderCell {
    /// Create a sortable header covering one cell position.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            span: 1,
            sortable: true,
        }
    }

    /// Set the column span. A span of zero counts as one.
    pub fn span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Opt this header out of sorting.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Parse a declared column span, treating anything but a positive integer as 1.
pub fn parse_span(value: &str) -> usize {
    value.trim().parse::<usize>().ok().filter(|span| *span > 0).unwrap_or(1)
}

/// A logical column range `[start, start + span)` in cell positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnRange {
    pub start: usize,
    pub span: usize,
}

impl ColumnRange {
    pub fn new(start: usize, span: usize) -> Self {
        Self { start, span }
    }

    /// Cell positions covered by this range.
    pub fn positions(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.span
    }
}

/// Precomputed mapping from header position to logical column range.
///
/// Header spans decouple header order from cell order, so the mapping is built
/// once from the whole header row rather than from a clicked position:
///
/// ```text
/// header:  | A |     B (span 3)     | C |
/// cells:   | 0 |  1  |  2  |  3     | 4 |
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    ranges: Vec<Option<ColumnRange>>,
}

impl ColumnMap {
    /// Build the mapping. Non-sortable headers map to `None` but still consume
    /// their span.
    pub fn build(headers: &[HeaderCell]) -> Self {
        let mut start = 0;
        let ranges = headers
            .iter()
            .map(|header| {
                let span = header.span.max(1);
                let range = header.sortable.then(|| ColumnRange::new(start, span));
                start += span;
                range
            })
            .collect();
        Self { ranges }
    }

    /// Logical range of a sortable header.
    pub fn range(&self, header: usize) -> Option<ColumnRange> {
        self.ranges.get(header).copied().flatten()
    }

    /// Number of header cells.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Indices of the sortable headers, left to right.
    pub fn sortable_headers(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges
            .iter()
            .enumerate()
            .filter_map(|(idx, range)| range.map(|_| idx))
    }
}

/// Sort indicator of one header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortState {
    /// Whether this header is the active sort column.
    pub fn is_active(&self) -> bool {
        !matches!(self, SortState::Unsorted)
    }

    /// Short marker for text rendering.
    pub fn marker(&self) -> &'static str {
        match self {
            SortState::Unsorted => "",
            SortState::Ascending => "▲",
            SortState::Descending => "▼",
        }
    }
}
