//! Pager widget layout: which controls exist, in what order, and how they read.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pager::PageState;

/// A page size choice: a fixed number of rows or every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PageSize {
    Rows(usize),
    All,
}

impl PageSize {
    /// Rows per page. `All` is unbounded.
    pub fn rows(&self) -> usize {
        match self {
            PageSize::Rows(rows) => *rows,
            PageSize::All => usize::MAX,
        }
    }
}

impl FromStr for PageSize {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        match trimmed.parse::<usize>() {
            Ok(rows) if rows > 0 => Ok(PageSize::Rows(rows)),
            _ => Err(ConfigError::InvalidPageSize(value.to_string())),
        }
    }
}

impl TryFrom<String> for PageSize {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageSize> for String {
    fn from(size: PageSize) -> Self {
        size.to_string()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Rows(rows) => write!(f, "{}", rows),
            PageSize::All => write!(f, "all"),
        }
    }
}

/// One entry of the page-size selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSizeOption {
    /// Text shown in the selector.
    pub label: String,
    /// Size selected by this option.
    pub size: PageSize,
}

impl PageSizeOption {
    pub fn new(label: impl Into<String>, size: PageSize) -> Self {
        Self {
            label: label.into(),
            size,
        }
    }

    /// The built-in option set: ×10, ×20, ×50 and All.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::new("×10", PageSize::Rows(10)),
            Self::new("×20", PageSize::Rows(20)),
            Self::new("×50", PageSize::Rows(50)),
            Self::new("All", PageSize::All),
        ]
    }
}

/// A control of the pager widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagerControl {
    First,
    Prev,
    /// Read-only "page/total" indicator
    Display,
    Next,
    Last,
    /// Page-size selector
    PageSize,
}

impl PagerControl {
    fn from_token(token: &str) -> Result<Self, ConfigError> {
        match token {
            "first" => Ok(PagerControl::First),
            "prev" => Ok(PagerControl::Prev),
            "display" => Ok(PagerControl::Display),
            "next" => Ok(PagerControl::Next),
            "last" => Ok(PagerControl::Last),
            "size" | "pagesize" => Ok(PagerControl::PageSize),
            other => Err(ConfigError::UnknownControl(other.to_string())),
        }
    }
}

/// Ordered list of pager controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerLayout {
    controls: Vec<PagerControl>,
}

impl Default for PagerLayout {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PagerLayout {
    /// First, previous, indicator, next, last, page size.
    pub fn builtin() -> Self {
        Self {
            controls: vec![
                PagerControl::First,
                PagerControl::Prev,
                PagerControl::Display,
                PagerControl::Next,
                PagerControl::Last,
                PagerControl::PageSize,
            ],
        }
    }

    /// Parse a template: control names separated by whitespace.
    ///
    /// ```
    /// use tableview::layout::{PagerControl, PagerLayout};
    ///
    /// let layout = PagerLayout::parse("prev display next").unwrap();
    /// assert_eq!(layout.controls(), &[PagerControl::Prev, PagerControl::Display, PagerControl::Next]);
    /// ```
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let controls = template
            .split_whitespace()
            .map(|token| PagerControl::from_token(&token.to_ascii_lowercase()))
            .collect::<Result<Vec<_>, _>>()?;
        if controls.is_empty() {
            return Err(ConfigError::EmptyTemplate);
        }
        Ok(Self { controls })
    }

    pub fn controls(&self) -> &[PagerControl] {
        &self.controls
    }

    /// Whether the layout contains a control.
    pub fn has(&self, control: PagerControl) -> bool {
        self.controls.contains(&control)
    }

    /// Render the pager bar as one line of text.
    pub fn render(&self, state: &PageState, options: &[PageSizeOption]) -> String {
        self.controls
            .iter()
            .map(|control| match control {
                PagerControl::First => "«".to_string(),
                PagerControl::Prev => "‹".to_string(),
                PagerControl::Display => format!("[{}]", state.label()),
                PagerControl::Next => "›".to_string(),
                PagerControl::Last => "»".to_string(),
                PagerControl::PageSize => options
                    .iter()
                    .find(|option| option.size.rows() == state.page_size)
                    .map(|option| option.label.clone())
                    .unwrap_or_else(|| format!("×{}", state.page_size)),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Named layout templates that a [`TableConfig`](crate::config::TableConfig)
/// may refer to.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, PagerLayout>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and register a template under `id`.
    pub fn register(&mut self, id: impl Into<String>, template: &str) -> Result<(), ConfigError> {
        let layout = PagerLayout::parse(template)?;
        self.templates.insert(id.into(), layout);
        Ok(())
    }

    /// Resolve an optional template id. `None` selects the built-in layout.
    pub fn resolve(&self, id: Option<&str>) -> Result<PagerLayout, ConfigError> {
        match id {
            None => Ok(PagerLayout::builtin()),
            Some(id) => self
                .templates
                .get(id)
                .cloned()
                .ok_or_else(|| ConfigError::UnknownTemplate(id.to_string())),
        }
    }
}
