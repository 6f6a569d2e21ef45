//! # coach-core
//!
//! Foundation crate for the interview coach.
//! Defines languages, session state labels, errors, config, events, tracing,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod language;
pub mod state;
pub mod tracing;

pub use config::CoachConfig;
pub use errors::{
    CatalogError, CoachError, CoachErrorCode, CoachResult, ConfigurationError,
    InvalidTransitionError,
};
pub use language::Language;
pub use state::{SessionState, Transition};
