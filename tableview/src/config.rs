//! Per-table configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::PageSizeOption;
use crate::pager::DEFAULT_PAGE_SIZE;

/// Delay between showing the "sorting" cue and reordering rows.
pub const DEFAULT_SORT_DELAY_MS: u64 = 50;

/// Where the pager controls are placed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagerMount {
    /// Immediately before the table.
    #[default]
    BeforeTable,
    /// Appended to the container with this identifier.
    Container(String),
}

/// What a header activation does while an earlier one is still pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationPolicy {
    /// The new request replaces the pending one and restarts the delay.
    #[default]
    LatestWins,
    /// Requests are committed one after another, each after its own delay.
    Queue,
}

/// Configuration read once when a table is set up.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use tableview::config::{PagerMount, TableConfig};
///
/// let config = TableConfig::from_json(r#"{ "pager_mount": { "container": "pager" } }"#).unwrap();
/// assert_eq!(config.pager_mount, PagerMount::Container("pager".into()));
/// assert_eq!(config.default_page_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Where the pager controls are placed.
    pub pager_mount: PagerMount,

    /// Identifier of a custom pager layout template (None = built-in layout).
    pub template: Option<String>,

    /// Options offered by the page-size selector.
    pub page_size_options: Vec<PageSizeOption>,

    /// Page size selected at startup.
    pub default_page_size: usize,

    /// Delay before a requested sort is committed, in milliseconds.
    pub sort_delay_ms: u64,

    /// Behavior for header activations that arrive during the delay.
    pub activation: ActivationPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            pager_mount: PagerMount::BeforeTable,
            template: None,
            page_size_options: PageSizeOption::builtin(),
            default_page_size: DEFAULT_PAGE_SIZE,
            sort_delay_ms: DEFAULT_SORT_DELAY_MS,
            activation: ActivationPolicy::LatestWins,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the declarative table attributes.
    ///
    /// `data-pager-id` selects a container for the pager and
    /// `data-pager-template-id` a custom layout template. Empty values and other
    /// attributes are ignored.
    pub fn from_attributes<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut config = Self::default();
        for (name, value) in attributes {
            if value.is_empty() {
                continue;
            }
            match name {
                "data-pager-id" => config.pager_mount = PagerMount::Container(value.to_string()),
                "data-pager-template-id" => config.template = Some(value.to_string()),
                _ => {}
            }
        }
        config
    }

    /// Place the pager in a container.
    pub fn mount(mut self, container: impl Into<String>) -> Self {
        self.pager_mount = PagerMount::Container(container.into());
        self
    }

    /// Use a custom layout template.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the page size selected at startup.
    pub fn page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Set the sort delay.
    pub fn sort_delay(mut self, delay: Duration) -> Self {
        self.sort_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the activation policy.
    pub fn activation(mut self, policy: ActivationPolicy) -> Self {
        self.activation = policy;
        self
    }

    /// The sort delay as a duration.
    pub fn sort_delay_duration(&self) -> Duration {
        Duration::from_millis(self.sort_delay_ms)
    }
}
