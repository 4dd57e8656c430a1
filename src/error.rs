//! Error types for Legajo
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Category;

/// Result type alias for Legajo operations
pub type LegajoResult<T> = Result<T, LegajoError>;

/// Main error type for Legajo operations
#[derive(Error, Debug)]
pub enum LegajoError {
    /// Audit root does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A client folder (or the root) could not be listed
    #[error("cannot read {path}: {message}")]
    Enumeration { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Requirement list rejected while loading the catalog
    #[error("invalid {category} catalog: {message}")]
    InvalidCatalog { category: Category, message: String },

    /// Report sink could not persist the report
    #[error("report sink '{sink}' failed: {message}")]
    ReportSink { sink: String, message: String },

    /// Notification channel failure
    #[error("notification via '{channel}' failed: {message}")]
    Notification { channel: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
