//! Loosely-typed rule file records, exactly as they appear on disk.
//! `RuleSet::from_definition` validates them into strong types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A whole rule file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleFileDef {
    #[serde(default)]
    pub rules: Vec<RuleDef>,
    pub default: Option<DefaultDef>,
}

/// One keyword rule. Feedback keys are raw language codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleDef {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub feedback: BTreeMap<String, String>,
}

/// The fallback record used when no rule matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultDef {
    pub feedback: Option<BTreeMap<String, String>>,
}
