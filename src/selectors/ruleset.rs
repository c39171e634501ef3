use super::{DEFAULT_RULESET, ValidatorSelector, WILDCARD_RULESET};
use crate::ValidationRule;

/// Selects rules belonging to any of the requested rulesets.
///
/// Ruleset names compare case-insensitively. `*` selects everything;
/// `default` selects rules declared without a ruleset. An empty request only
/// selects rules without a ruleset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesetValidatorSelector {
    rule_sets: Vec<String>,
}

impl RulesetValidatorSelector {
    pub fn new(rule_sets: &[String]) -> Self {
        RulesetValidatorSelector { rule_sets: rule_sets.to_vec() }
    }

    pub fn rule_sets(&self) -> &[String] {
        &self.rule_sets
    }

    fn requests(&self, name: &str) -> bool {
        self.rule_sets.iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}

impl ValidatorSelector for RulesetValidatorSelector {
    fn can_execute(&self, rule: &dyn ValidationRule, _property_path: &str) -> bool {
        let rule_sets = rule.rule_sets();

        if rule_sets.is_empty() && (self.rule_sets.is_empty() || self.requests(DEFAULT_RULESET)) {
            return true;
        }
        if rule_sets.iter().any(|s| self.requests(s)) {
            return true;
        }
        self.requests(WILDCARD_RULESET)
    }
}
