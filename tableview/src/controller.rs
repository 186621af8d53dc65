//! Composition of the sort and pagination engines over one table body.
//!
//! The controller owns the body and both engines but holds no logic of its
//! own beyond routing: user input goes to the engine it targets, and every
//! notification is drained into the pager before the input call returns. A
//! reorder is therefore never observable with a stale page window.
//!
//! # Known limitations
//!
//! A controller handles exactly one table body. Tables with several bodies
//! are not supported, and a table without a header row simply has nothing to
//! sort.
//!
//! # Example
//!
//! ```
//! use tableview::prelude::*;
//!
//! let mut table = MemoryTable::new(vec![HeaderCell::new("Name"), HeaderCell::new("Age")]);
//! for (name, age) in [("Ann", "31"), ("Bob", "27"), ("Cid", "45")] {
//!     table.push_row([name, age]);
//! }
//!
//! let headers = table.headers().to_vec();
//! let mut controller = TableController::new(table, &headers, TableConfig::default().page_size(2));
//! assert_eq!(controller.body().page_label(), "1/2");
//!
//! controller.pager_action(PagerAction::Next);
//! assert_eq!(controller.body().visible_column(0), vec!["Cid"]);
//! ```

use tokio::time::{Instant, sleep_until};

use crate::body::{PagerView, RowSet, TableBody};
use crate::config::TableConfig;
use crate::header::{HeaderCell, SortState};
use crate::layout::{PageSize, PagerLayout, TemplateRegistry};
use crate::notify::{self, Notification, NotificationQueue, Notifier};
use crate::pager::{DEFAULT_PAGE_SIZE, PageNav, PageState, Pager, parse_page_size};
use crate::sorter::Sorter;

/// Input from the pager controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerAction {
    First,
    Prev,
    Next,
    Last,
    /// The page-size selector changed to this raw value.
    SelectPageSize(String),
}

/// Sort and pagination over one table body.
#[derive(Debug)]
pub struct TableController<B: TableBody + PagerView> {
    body: B,
    rows: RowSet,
    sorter: Sorter,
    pager: Pager,
    layout: PagerLayout,
    config: TableConfig,
    notifier: Notifier,
    queue: NotificationQueue,
}

impl<B: TableBody + PagerView> TableController<B> {
    /// Set up both engines with the built-in pager layout templates only.
    pub fn new(body: B, headers: &[HeaderCell], config: TableConfig) -> Self {
        Self::with_templates(body, headers, config, &TemplateRegistry::new())
    }

    /// Set up both engines, resolving the configured layout template.
    ///
    /// Rows hidden at this point are excluded for the controller's lifetime.
    /// An unknown template falls back to the built-in layout.
    pub fn with_templates(
        mut body: B,
        headers: &[HeaderCell],
        config: TableConfig,
        templates: &TemplateRegistry,
    ) -> Self {
        let rows = RowSet::scan(&body);
        let (notifier, queue) = notify::channel();

        let layout = templates
            .resolve(config.template.as_deref())
            .unwrap_or_else(|e| {
                log::warn!("[table] {}, using built-in pager layout", e);
                PagerLayout::builtin()
            });

        let sorter = Sorter::new(
            headers,
            config.sort_delay_duration(),
            config.activation,
            notifier.clone(),
        );

        body.set_page_size_value(&config.default_page_size.to_string());
        let mut pager = Pager::new(parse_page_size(&body.page_size_value()));
        pager.init(&rows, &mut body);

        log::debug!(
            "[table] ready: {} rows, mount {:?}, page {}",
            pager.state().total_count,
            config.pager_mount,
            pager.state().label()
        );

        Self {
            body,
            rows,
            sorter,
            pager,
            layout,
            config,
            notifier,
            queue,
        }
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access to the body.
    ///
    /// After adding or removing rows, send [`Notification::RowSetChanged`]
    /// through [`notifier`](Self::notifier) and call [`dispatch`](Self::dispatch),
    /// or use [`rows_changed`](Self::rows_changed).
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn layout(&self) -> &PagerLayout {
        &self.layout
    }

    pub fn row_set(&self) -> &RowSet {
        &self.rows
    }

    pub fn page_state(&self) -> PageState {
        self.pager.state()
    }

    pub fn sort_state(&self, header: usize) -> SortState {
        self.sorter.state(header)
    }

    pub fn sorter(&self) -> &Sorter {
        &self.sorter
    }

    /// A sender for notifications about this table.
    pub fn notifier(&self) -> Notifier {
        self.notifier.clone()
    }

    /// Activate a header. Returns false for non-sortable headers.
    ///
    /// The reorder itself happens once the sort delay has passed, in
    /// [`commit_due`](Self::commit_due) or [`settle`](Self::settle).
    pub fn click_header(&mut self, header: usize) -> bool {
        self.sorter.activate(header, &mut self.body)
    }

    /// Cancel sorts that have not been committed yet.
    pub fn cancel_sort(&mut self) -> usize {
        self.sorter.cancel(&mut self.body)
    }

    /// Deadline of the next pending sort.
    pub fn sort_deadline(&self) -> Option<Instant> {
        self.sorter.deadline()
    }

    /// Commit the sorts that are due at `now` and bring the page window up to
    /// date. Returns the number of sorts committed.
    pub fn commit_due(&mut self, now: Instant) -> usize {
        let committed = self.sorter.commit_due(now, &self.rows, &mut self.body);
        self.dispatch();
        committed
    }

    /// Wait for every pending sort to be committed.
    pub async fn settle(&mut self) {
        while let Some(deadline) = self.sorter.deadline() {
            sleep_until(deadline).await;
            self.commit_due(Instant::now());
        }
    }

    /// Handle a pager control.
    pub fn pager_action(&mut self, action: PagerAction) {
        match action {
            PagerAction::First => self.navigate(PageNav::First),
            PagerAction::Prev => self.navigate(PageNav::Prev),
            PagerAction::Next => self.navigate(PageNav::Next),
            PagerAction::Last => self.navigate(PageNav::Last),
            PagerAction::SelectPageSize(value) => {
                let size = parse_page_size(&value);
                // Show the size in effect, not a rejected entry.
                let shown = value
                    .parse::<PageSize>()
                    .map(|size| size.to_string())
                    .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string());
                self.body.set_page_size_value(&shown);
                self.pager.set_page_size(size, &self.rows, &mut self.body);
            }
        }
        self.dispatch();
    }

    /// Jump straight to a page.
    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page, &self.rows, &mut self.body);
        self.dispatch();
    }

    fn navigate(&mut self, nav: PageNav) {
        self.pager.navigate(nav, &self.rows, &mut self.body);
    }

    /// Announce that rows were added or removed, and redraw.
    pub fn rows_changed(&mut self) {
        self.notifier.notify(Notification::RowSetChanged);
        self.dispatch();
    }

    /// Deliver every queued notification to the pager.
    ///
    /// Returns the number of notifications handled.
    pub fn dispatch(&mut self) -> usize {
        let mut handled = 0;
        while let Some(notification) = self.queue.try_next() {
            self.pager.handle(notification, &self.rows, &mut self.body);
            handled += 1;
        }
        handled
    }

    /// One-line text rendering of the pager bar.
    pub fn render_pager(&self) -> String {
        self.layout
            .render(&self.pager.state(), &self.config.page_size_options)
    }

    /// Give the body back.
    pub fn into_body(self) -> B {
        self.body
    }
}
