//! Loader for YAML rule files.

use std::path::Path;

use coach_core::ConfigurationError;

use super::definition::RuleFileDef;
use super::rule_set::RuleSet;

/// Loads and validates rule files.
pub struct RuleLoader;

impl RuleLoader {
    /// Load a rule set from a YAML string.
    pub fn load_from_str(yaml: &str) -> Result<RuleSet, ConfigurationError> {
        Self::parse(yaml, "<string>")
    }

    /// Load a rule set from a file path.
    pub fn load_from_file(path: &Path) -> Result<RuleSet, ConfigurationError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            })?;
        let rules = Self::parse(&content, &path.display().to_string())?;
        tracing::info!(path = %path.display(), rules = rules.len(), "feedback rules loaded");
        Ok(rules)
    }

    fn parse(yaml: &str, origin: &str) -> Result<RuleSet, ConfigurationError> {
        let def: RuleFileDef =
            serde_yaml::from_str(yaml).map_err(|e| ConfigurationError::ParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        RuleSet::from_definition(def)
    }
}
