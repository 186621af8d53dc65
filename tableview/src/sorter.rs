//! Sort engine: reorders the Row Collection by the text of one logical column.
//!
//! Sorting is two-phase. [`Sorter::activate`] updates the header indicators,
//! shows a "sorting" cue and schedules the request; [`Sorter::commit`] performs
//! the reorder once the delay has passed and emits
//! [`Notification::RowsReordered`]. The delay gives the surface a chance to paint
//! the cue before a potentially long reorder.

use std::cmp::Ordering;
use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;

use tokio::time::Instant;

use crate::body::{RowId, RowSet, TableBody};
use crate::compare::compare_text;
use crate::config::ActivationPolicy;
use crate::header::{ColumnMap, ColumnRange, HeaderCell, SortState};
use crate::notify::{Notification, Notifier};

/// Text of a row within a logical column range.
///
/// Covered cells are concatenated and the result trimmed. Positions past the
/// end of the row contribute nothing.
pub fn extract_text<B: TableBody + ?Sized>(body: &B, row: RowId, range: ColumnRange) -> String {
    let text: String = range
        .positions()
        .filter_map(|position| body.cell_text(row, position))
        .collect();
    text.trim().to_string()
}

/// Reorder the eligible rows of `body` by the text in `range`.
///
/// Each row's text is extracted once. The sort is stable, so rows with equal
/// keys keep their relative order. Excluded rows keep their absolute positions
/// and eligible rows fill the remaining slots in sorted order.
pub fn sort_body<B: TableBody + ?Sized>(
    body: &mut B,
    rows: &RowSet,
    range: ColumnRange,
    descending: bool,
) {
    let current = body.rows();
    let keyed: Vec<(String, RowId)> = current
        .iter()
        .filter(|row| !rows.is_excluded(**row))
        .map(|row| (extract_text(&*body, *row, range), *row))
        .collect();
    if keyed.is_empty() {
        return;
    }
    let keyed = merge_sort_by(keyed, &mut |a: &(String, RowId), b: &(String, RowId)| {
        compare_text(&a.0, &b.0, descending)
    });

    let mut sorted = keyed.into_iter().map(|(_, row)| row);
    let target: Vec<RowId> = current
        .iter()
        .map(|row| {
            if rows.is_excluded(*row) {
                *row
            } else {
                sorted.next().unwrap_or(*row)
            }
        })
        .collect();

    // Mirror the body's order so only rows that are out of place get moved.
    let mut order = current;
    let mut moved = 0;
    for (position, row) in target.iter().enumerate() {
        if order[position] == *row {
            continue;
        }
        if let Some(from) = order.iter().position(|r| r == row) {
            order.remove(from);
            order.insert(position, *row);
            body.move_row(*row, position);
            moved += 1;
        }
    }
    log::debug!(
        "[sort] columns {:?} {} moved {} rows",
        range.positions(),
        if descending { "desc" } else { "asc" },
        moved
    );
}

/// Stable top-down merge sort.
///
/// Mixed numeric and text keys are not totally ordered. This sort only asks
/// whether the right element is strictly less than the left one, so it never
/// panics on such a comparator and still returns a permutation.
fn merge_sort_by<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, cmp);
    let right = merge_sort_by(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => cmp(b, a) == Ordering::Less,
            _ => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// A requested sort waiting for its delay to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    /// Header that was activated.
    pub header: usize,
    /// Logical columns to sort by.
    pub range: ColumnRange,
    pub descending: bool,
    /// When the request may be committed.
    pub deadline: Instant,
    indicator: BTreeMap<usize, SortState>,
}

/// Sort engine.
///
/// Holds the precomputed column map and the tri-state indicator of every
/// sortable header. At most one header is ascending or descending at a time.
#[derive(Debug)]
pub struct Sorter {
    columns: ColumnMap,
    states: BTreeMap<usize, SortState>,
    committed: BTreeMap<usize, SortState>,
    pending: VecDeque<SortRequest>,
    delay: Duration,
    policy: ActivationPolicy,
    notifier: Notifier,
}

impl Sorter {
    /// Create a sorter for a header row. Every sortable header starts unsorted.
    pub fn new(
        headers: &[HeaderCell],
        delay: Duration,
        policy: ActivationPolicy,
        notifier: Notifier,
    ) -> Self {
        let columns = ColumnMap::build(headers);
        let states: BTreeMap<usize, SortState> = columns
            .sortable_headers()
            .map(|header| (header, SortState::Unsorted))
            .collect();
        log::debug!(
            "[sort] {} of {} headers sortable",
            states.len(),
            columns.len()
        );
        Self {
            columns,
            committed: states.clone(),
            states,
            pending: VecDeque::new(),
            delay,
            policy,
            notifier,
        }
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Indicator of one header. Non-sortable headers are always unsorted.
    pub fn state(&self, header: usize) -> SortState {
        self.states.get(&header).copied().unwrap_or_default()
    }

    /// The active header and its direction, if any.
    pub fn active(&self) -> Option<(usize, SortState)> {
        self.states
            .iter()
            .find(|(_, state)| state.is_active())
            .map(|(header, state)| (*header, *state))
    }

    /// Whether a sort is waiting to be committed.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &SortRequest> {
        self.pending.iter()
    }

    /// Deadline of the next request to commit.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.front().map(|request| request.deadline)
    }

    /// Activate a header: the sorting-requested phase.
    ///
    /// An ascending header turns descending; any other header turns ascending
    /// and every other header is reset. Returns false, changing nothing, for
    /// unknown or non-sortable headers.
    pub fn activate<B: TableBody + ?Sized>(&mut self, header: usize, body: &mut B) -> bool {
        let Some(range) = self.columns.range(header) else {
            log::trace!("[sort] header {} is not sortable", header);
            return false;
        };

        let descending = self.state(header) == SortState::Ascending;
        for (idx, state) in self.states.iter_mut() {
            *state = if *idx != header {
                SortState::Unsorted
            } else if descending {
                SortState::Descending
            } else {
                SortState::Ascending
            };
        }

        let request = SortRequest {
            header,
            range,
            descending,
            deadline: Instant::now() + self.delay,
            indicator: self.states.clone(),
        };
        match self.policy {
            ActivationPolicy::LatestWins => {
                if !self.pending.is_empty() {
                    log::debug!("[sort] replacing {} pending request(s)", self.pending.len());
                }
                self.pending.clear();
            }
            ActivationPolicy::Queue => {}
        }
        log::debug!(
            "[sort] requested header {} {}",
            header,
            if descending { "desc" } else { "asc" }
        );
        self.pending.push_back(request);
        self.show_states(body);
        true
    }

    /// Commit the oldest pending request: the sorting-committed phase.
    ///
    /// Reorders the rows, clears the cue and emits
    /// [`Notification::RowsReordered`]. Returns false if nothing was pending.
    pub fn commit<B: TableBody + ?Sized>(&mut self, rows: &RowSet, body: &mut B) -> bool {
        let Some(request) = self.pending.pop_front() else {
            return false;
        };
        sort_body(body, rows, request.range, request.descending);
        self.committed = request.indicator;
        self.show_states(body);
        self.notifier.notify(Notification::RowsReordered);
        true
    }

    /// Commit every request whose deadline is not after `now`.
    pub fn commit_due<B: TableBody + ?Sized>(
        &mut self,
        now: Instant,
        rows: &RowSet,
        body: &mut B,
    ) -> usize {
        let mut committed = 0;
        while self.deadline().is_some_and(|deadline| deadline <= now) {
            self.commit(rows, body);
            committed += 1;
        }
        committed
    }

    /// Drop all pending requests and restore the indicators of the last
    /// committed sort. Returns the number of dropped requests.
    pub fn cancel<B: TableBody + ?Sized>(&mut self, body: &mut B) -> usize {
        let dropped = self.pending.len();
        if dropped == 0 {
            return 0;
        }
        self.pending.clear();
        self.states = self.committed.clone();
        self.show_states(body);
        log::debug!("[sort] cancelled {} pending request(s)", dropped);
        dropped
    }

    fn show_states<B: TableBody + ?Sized>(&self, body: &mut B) {
        for (header, state) in &self.states {
            let in_progress = self.pending.iter().any(|request| request.header == *header);
            body.show_sort_state(*header, *state, in_progress);
        }
    }
}
