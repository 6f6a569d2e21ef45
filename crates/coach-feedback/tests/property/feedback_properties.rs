use coach_core::Language;
use coach_feedback::{match_feedback, FeedbackEngine, LocalizedText, Rule, RuleSet};
use proptest::prelude::*;

fn text(ja: &str, en: &str) -> LocalizedText {
    LocalizedText::new()
        .with(Language::Ja, ja)
        .with(Language::En, en)
}

fn rules() -> RuleSet {
    RuleSet::new(
        vec![
            Rule::new(["alpha"], text("first-ja", "first-en")),
            Rule::new(["beta"], text("second-ja", "second-en")),
        ],
        text("D", "E"),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn matching_is_deterministic(question in ".{0,120}") {
        let rules = rules();
        for language in Language::ALL {
            let first = match_feedback(&question, &rules, language);
            let second = match_feedback(&question, &rules, language);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn earlier_rule_wins_when_both_keywords_present(
        prefix in "[a-z ]{0,20}",
        middle in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        beta_first in any::<bool>(),
    ) {
        let question = if beta_first {
            format!("{prefix}beta{middle}alpha{suffix}")
        } else {
            format!("{prefix}alpha{middle}beta{suffix}")
        };
        let rules = rules();
        prop_assert_eq!(match_feedback(&question, &rules, Language::En), "first-en");
    }

    #[test]
    fn text_without_keywords_gets_default(question in "[0-9 ]{0,60}") {
        let engine = FeedbackEngine::new(rules());
        prop_assert_eq!(engine.evaluate(&question, Language::Ja), "D");
        prop_assert_eq!(engine.evaluate(&question, Language::En), "E");
    }
}
