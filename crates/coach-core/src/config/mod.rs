//! Configuration system for the coach.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod coach_config;
pub mod content_config;
pub mod session_config;

pub use coach_config::{CoachConfig, ConfigOverrides};
pub use content_config::ContentConfig;
pub use session_config::SessionConfig;
