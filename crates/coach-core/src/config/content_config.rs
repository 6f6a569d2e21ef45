//! Content configuration: where the catalog and rule files live.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CATALOG_FILE, DEFAULT_RULES_FILE};

/// Locations of the static inputs loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Question catalog (JSON). Default: `questions.json`.
    pub catalog_path: Option<PathBuf>,
    /// Feedback rules (YAML). Default: `feedback_rules.yaml`.
    pub rules_path: Option<PathBuf>,
}

impl ContentConfig {
    /// Returns the effective catalog path, relative paths joined onto `root`.
    pub fn effective_catalog_path(&self, root: &Path) -> PathBuf {
        resolve(root, self.catalog_path.as_deref(), DEFAULT_CATALOG_FILE)
    }

    /// Returns the effective rules path, relative paths joined onto `root`.
    pub fn effective_rules_path(&self, root: &Path) -> PathBuf {
        resolve(root, self.rules_path.as_deref(), DEFAULT_RULES_FILE)
    }
}

fn resolve(root: &Path, configured: Option<&Path>, default: &str) -> PathBuf {
    let path = configured.unwrap_or_else(|| Path::new(default));
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
