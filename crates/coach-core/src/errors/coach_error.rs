//! Top-level coach error.

use super::error_code::CoachErrorCode;
use super::{CatalogError, ConfigurationError, InvalidTransitionError};

/// Aggregates every coach error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid transition: {0}")]
    Transition(#[from] InvalidTransitionError),
}

impl CoachErrorCode for CoachError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Transition(e) => e.error_code(),
        }
    }
}

pub type CoachResult<T> = Result<T, CoachError>;
