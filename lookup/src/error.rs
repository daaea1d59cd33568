//! Error types for loading records, configuration and constructing the widget

use std::path::PathBuf;

use thiserror::Error;

/// A record that cannot enter the widget
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("record field `{0}` must be a non-empty string")]
    EmptyField(&'static str),

    #[error("record field `{field}` must be a string, got {found}")]
    WrongType { field: &'static str, found: String },

    #[error("record list must be a JSON array: {0}")]
    NotAList(String),
}

/// Invalid or unreadable widget configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("result limit must be at least 1")]
    InvalidResultLimit,
}

/// A [`Lookup`](crate::Lookup) that cannot be constructed
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no tokio runtime to run the debounce timer on: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
