//! Sorting and pagination for row-oriented tables.
//!
//! Two engines work over one table body:
//! - the [`Sorter`](sorter::Sorter) reorders rows by the text of a column
//! - the [`Pager`](pager::Pager) shows one fixed-size window of rows
//!
//! They never call each other. The sorter emits
//! [`Notification::RowsReordered`](notify::Notification) after a reorder, external
//! code emits [`Notification::RowSetChanged`](notify::Notification) after adding or
//! removing rows, and the [`TableController`](controller::TableController) routes both
//! to the pager.

pub mod body;
pub mod compare;
pub mod config;
pub mod controller;
pub mod error;
pub mod header;
pub mod layout;
pub mod memory;
pub mod notify;
pub mod pager;
pub mod sorter;

pub use controller::TableController;

pub mod prelude {
    pub use crate::body::{PagerView, RowId, RowSet, TableBody};
    pub use crate::compare::{compare_text, locale_compare, parse_number};
    pub use crate::config::{ActivationPolicy, PagerMount, TableConfig};
    pub use crate::controller::{PagerAction, TableController};
    pub use crate::error::ConfigError;
    pub use crate::header::{ColumnMap, ColumnRange, HeaderCell, SortState};
    pub use crate::layout::{PageSize, PageSizeOption, PagerControl, PagerLayout, TemplateRegistry};
    pub use crate::memory::MemoryTable;
    pub use crate::notify::{Notification, NotificationQueue, Notifier};
    pub use crate::pager::{DEFAULT_PAGE_SIZE, PageNav, PageState, Pager, parse_page_size};
    pub use crate::sorter::{Sorter, extract_text, sort_body};
}
