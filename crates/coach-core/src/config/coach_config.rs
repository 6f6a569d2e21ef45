//! Top-level coach configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ContentConfig, SessionConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigurationError;
use crate::language::Language;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`COACH_*`)
/// 3. Project config (`coach.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoachConfig {
    pub content: ContentConfig,
    pub session: SessionConfig,
}

/// Override values supplied by the host, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub catalog_path: Option<PathBuf>,
    pub rules_path: Option<PathBuf>,
    pub default_language: Option<String>,
}

impl CoachConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(
        root: &Path,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigurationError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        tracing::debug!(root = %root.display(), "coach config resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(toml_str).map_err(|e| ConfigurationError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CoachConfig) -> Result<(), ConfigurationError> {
        if let Some(ref code) = config.session.default_language {
            if Language::parse_str(code).is_none() {
                return Err(ConfigurationError::ValidationFailed {
                    field: "session.default_language".to_string(),
                    message: format!("unsupported language code '{code}'"),
                });
            }
        }
        if let Some(ref path) = config.content.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigurationError::ValidationFailed {
                    field: "content.catalog_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref path) = config.content.rules_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigurationError::ValidationFailed {
                    field: "content.rules_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CoachConfig, path: &Path) -> Result<(), ConfigurationError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: CoachConfig =
            toml::from_str(&content).map_err(|e| ConfigurationError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut CoachConfig, other: &CoachConfig) {
        if other.content.catalog_path.is_some() {
            base.content.catalog_path = other.content.catalog_path.clone();
        }
        if other.content.rules_path.is_some() {
            base.content.rules_path = other.content.rules_path.clone();
        }
        if other.session.default_language.is_some() {
            base.session.default_language = other.session.default_language.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Variables: `COACH_CATALOG_PATH`, `COACH_RULES_PATH`, `COACH_LANGUAGE`.
    fn apply_env_overrides(config: &mut CoachConfig) {
        if let Ok(val) = std::env::var("COACH_CATALOG_PATH") {
            config.content.catalog_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COACH_RULES_PATH") {
            config.content.rules_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COACH_LANGUAGE") {
            config.session.default_language = Some(val);
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut CoachConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.catalog_path {
            config.content.catalog_path = Some(v.clone());
        }
        if let Some(ref v) = overrides.rules_path {
            config.content.rules_path = Some(v.clone());
        }
        if let Some(ref v) = overrides.default_language {
            config.session.default_language = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string_pretty(self).map_err(|e| ConfigurationError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
