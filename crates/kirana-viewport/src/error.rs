use thiserror::Error;

use crate::dock::DockType;
use crate::event::EventCategory;

pub type ViewportResult<T> = Result<T, ViewportError>;

/// Result type returned by listener callbacks.
pub type ListenerResult = Result<(), ListenerError>;

/// Surface could not be attached.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttachError {
    #[error("surface handle is missing or null")]
    InvalidHandle,

    #[error("surface size is not available")]
    NoSize,

    #[error("dock `{0}` is not present in the window layout")]
    DockUnavailable(DockType),
}

impl AttachError {
    /// The surface may appear later (layout not built yet), attach can be retried.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        matches!(self, AttachError::DockUnavailable(_))
    }
}

/// A listener callback failed.
///
/// Callbacks construct it with [`ListenerError::new`]; the monitor fills in the
/// category before handing it back to the caller of the dispatch.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} listener failed: {message}", category_name(.category))]
pub struct ListenerError {
    pub category: Option<EventCategory>,
    pub message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            category: None,
            message: message.into(),
        }
    }

    #[inline]
    pub(crate) fn in_category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }
}

fn category_name(category: &Option<EventCategory>) -> &'static str {
    category.map_or("unknown", EventCategory::as_str)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BootstrapError {
    #[error("viewport surface is already closed")]
    SurfaceClosed,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Viewport-wide error used by host adapters.
#[derive(Debug, Error)]
pub enum ViewportError {
    #[error(transparent)]
    Attach(#[from] AttachError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("platform error: {0}")]
    Platform(String),
}
