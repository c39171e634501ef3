use super::ValidatorSelector;
use crate::ValidationRule;

/// Selects every rule.
///
/// Ruleset filtering is left to
/// [`RulesetValidatorSelector`](super::RulesetValidatorSelector).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultValidatorSelector;

impl ValidatorSelector for DefaultValidatorSelector {
    fn can_execute(&self, _rule: &dyn ValidationRule, _property_path: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::testing::TestRule;

    #[test]
    fn selects_rules_without_rulesets() {
        let rule = TestRule::for_property("Name");
        assert!(DefaultValidatorSelector.can_execute(&rule, "Name"));
    }

    #[test]
    fn selects_rules_in_named_rulesets() {
        let rule = TestRule::for_property("Name").in_sets(&["admin"]);
        assert!(DefaultValidatorSelector.can_execute(&rule, "Name"));
    }

    #[test]
    fn selects_model_level_rules() {
        let rule = TestRule::for_property("").in_sets(&["Default", "admin"]);
        assert!(DefaultValidatorSelector.can_execute(&rule, ""));
    }
}
