//! CoachErrorCode trait for presentation-layer error reporting.

/// Trait giving every coach error a stable, machine-readable code so a
/// presentation layer can branch on the kind of failure without matching
/// on message text.
pub trait CoachErrorCode {
    /// Returns the error code string (e.g., "CATALOG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const INVALID_TRANSITION: &str = "INVALID_TRANSITION";
