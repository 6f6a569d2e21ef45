//! Shared constants for the interview coach.

/// Coach version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default question catalog file name, relative to the project root.
pub const DEFAULT_CATALOG_FILE: &str = "questions.json";

/// Default feedback rule file name, relative to the project root.
pub const DEFAULT_RULES_FILE: &str = "feedback_rules.yaml";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "coach.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "COACH_LOG";

/// Filter used when `COACH_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "coach=info";

/// `strftime` format of the timestamp part of a session id.
pub const SESSION_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// Prefix of exported artifact names; the session id is appended.
pub const EXPORT_FILE_PREFIX: &str = "profile_summary";
