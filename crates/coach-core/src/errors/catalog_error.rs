//! Question catalog errors.

use super::error_code::{self, CoachErrorCode};

/// Errors raised while loading the question catalog. Fatal at session
/// construction.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: String },

    #[error("Catalog parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    /// `record` is 1-based.
    #[error("Catalog record {record} is missing required field '{field}'")]
    MissingField { record: usize, field: String },

    #[error("Catalog contains no questions")]
    Empty,
}

impl CoachErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
