//! Error handling for the coach.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod coach_error;
pub mod config_error;
pub mod error_code;
pub mod transition_error;

pub use catalog_error::CatalogError;
pub use coach_error::{CoachError, CoachResult};
pub use config_error::ConfigurationError;
pub use error_code::CoachErrorCode;
pub use transition_error::InvalidTransitionError;
