//! Rule definitions, validated rule sets, and the rule file loader.

pub mod definition;
pub mod loader;
pub mod localized;
pub mod rule_set;

pub use definition::{DefaultDef, RuleDef, RuleFileDef};
pub use loader::RuleLoader;
pub use localized::LocalizedText;
pub use rule_set::{Rule, RuleSet};
