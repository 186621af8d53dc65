//! Error types.

use thiserror::Error;

/// Errors raised while reading table configuration.
///
/// The engines themselves never fail: bad page numbers are clamped and bad page
/// sizes replaced. Only declarative input can be rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid table config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown pager control '{0}' in layout template")]
    UnknownControl(String),
    #[error("pager layout template is empty")]
    EmptyTemplate,
    #[error("pager layout template '{0}' is not registered")]
    UnknownTemplate(String),
    #[error("page size option '{0}' must be a positive number or 'all'")]
    InvalidPageSize(String),
}
