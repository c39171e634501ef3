use super::{
    DefaultSelectorFactory, DefaultValidatorSelector, MemberNameSelectorFactory, MemberNameValidatorSelector,
    RulesetSelectorFactory, RulesetValidatorSelector, ValidatorSelector,
};
use crate::slot::Slot;
use std::fmt;
use std::sync::Arc;

/// The three overridable selector factories.
///
/// Writing `None` to a factory reverts it to the built-in; a read always
/// returns a callable factory.
pub struct ValidatorSelectorOptions {
    default_factory: Slot<DefaultSelectorFactory>,
    member_name_factory: Slot<MemberNameSelectorFactory>,
    ruleset_factory: Slot<RulesetSelectorFactory>,
}

impl Default for ValidatorSelectorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorSelectorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorSelectorOptions")
            .field("default_validator_selector_factory", &self.default_factory)
            .field("member_name_validator_selector_factory", &self.member_name_factory)
            .field("ruleset_validator_selector_factory", &self.ruleset_factory)
            .finish()
    }
}

impl ValidatorSelectorOptions {
    pub fn new() -> Self {
        ValidatorSelectorOptions {
            default_factory: Slot::new("default_validator_selector_factory", builtin_default_factory()),
            member_name_factory: Slot::new("member_name_validator_selector_factory", builtin_member_name_factory()),
            ruleset_factory: Slot::new("ruleset_validator_selector_factory", builtin_ruleset_factory()),
        }
    }

    /// Factory for the selector used when no selection criteria are given.
    pub fn default_validator_selector_factory(&self) -> DefaultSelectorFactory {
        self.default_factory.get()
    }

    pub fn set_default_validator_selector_factory(&self, factory: Option<DefaultSelectorFactory>) {
        self.default_factory.set(factory);
    }

    /// Factory for selectors restricted to property names.
    pub fn member_name_validator_selector_factory(&self) -> MemberNameSelectorFactory {
        self.member_name_factory.get()
    }

    pub fn set_member_name_validator_selector_factory(&self, factory: Option<MemberNameSelectorFactory>) {
        self.member_name_factory.set(factory);
    }

    /// Factory for selectors restricted to ruleset names.
    pub fn ruleset_validator_selector_factory(&self) -> RulesetSelectorFactory {
        self.ruleset_factory.get()
    }

    pub fn set_ruleset_validator_selector_factory(&self, factory: Option<RulesetSelectorFactory>) {
        self.ruleset_factory.set(factory);
    }

    /// Build a selector with the current default factory.
    pub fn default_selector(&self) -> Box<dyn ValidatorSelector> {
        (self.default_validator_selector_factory())()
    }

    /// Build a selector for `names` with the current member-name factory.
    pub fn member_name_selector(&self, names: &[String]) -> Box<dyn ValidatorSelector> {
        (self.member_name_validator_selector_factory())(names)
    }

    /// Build a selector for `rule_sets` with the current ruleset factory.
    pub fn ruleset_selector(&self, rule_sets: &[String]) -> Box<dyn ValidatorSelector> {
        (self.ruleset_validator_selector_factory())(rule_sets)
    }

    /// Revert every factory to its built-in.
    pub fn reset(&self) {
        self.default_factory.set(None);
        self.member_name_factory.set(None);
        self.ruleset_factory.set(None);
    }

    pub(crate) fn customized_slots(&self) -> Vec<&'static str> {
        [
            (self.default_factory.name(), self.default_factory.is_customized()),
            (self.member_name_factory.name(), self.member_name_factory.is_customized()),
            (self.ruleset_factory.name(), self.ruleset_factory.is_customized()),
        ]
        .into_iter()
        .filter_map(|(name, customized)| customized.then_some(name))
        .collect()
    }
}

fn builtin_default_factory() -> DefaultSelectorFactory {
    Arc::new(|| -> Box<dyn ValidatorSelector> { Box::new(DefaultValidatorSelector) })
}

fn builtin_member_name_factory() -> MemberNameSelectorFactory {
    Arc::new(|names: &[String]| -> Box<dyn ValidatorSelector> { Box::new(MemberNameValidatorSelector::new(names)) })
}

fn builtin_ruleset_factory() -> RulesetSelectorFactory {
    Arc::new(|rule_sets: &[String]| -> Box<dyn ValidatorSelector> {
        Box::new(RulesetValidatorSelector::new(rule_sets))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationRule;
    use crate::selectors::testing::{TestRule, names};

    #[derive(Debug)]
    struct Nothing;

    impl ValidatorSelector for Nothing {
        fn can_execute(&self, _rule: &dyn ValidationRule, _property_path: &str) -> bool {
            false
        }
    }

    fn nothing_by_default() -> DefaultSelectorFactory {
        Arc::new(|| -> Box<dyn ValidatorSelector> { Box::new(Nothing) })
    }

    fn nothing_by_names() -> MemberNameSelectorFactory {
        Arc::new(|_: &[String]| -> Box<dyn ValidatorSelector> { Box::new(Nothing) })
    }

    #[test]
    fn builtins_are_in_place_on_creation() {
        let registry = ValidatorSelectorOptions::new();
        let rule = TestRule::for_property("Name");

        assert!(registry.default_selector().can_execute(&rule, "Name"));
        assert!(registry.member_name_selector(&names(&["Name"])).can_execute(&rule, "Name"));
        assert!(registry.ruleset_selector(&names(&["default"])).can_execute(&rule, "Name"));
        assert!(registry.customized_slots().is_empty());
    }

    #[test]
    fn builtin_default_selector_runs_every_rule() {
        let selector = ValidatorSelectorOptions::new().default_selector();

        assert!(selector.can_execute(&TestRule::for_property("Name").in_sets(&["admin"]), "Name"));
        assert!(selector.can_execute(&TestRule::for_property("Name").in_sets(&["default"]), "Name"));
        assert!(selector.can_execute(&TestRule::for_property(""), ""));
    }

    #[test]
    fn custom_factory_replaces_builtin() {
        let registry = ValidatorSelectorOptions::new();
        registry.set_default_validator_selector_factory(Some(nothing_by_default()));

        let rule = TestRule::for_property("Name");
        assert!(!registry.default_selector().can_execute(&rule, "Name"));
        assert_eq!(registry.customized_slots(), vec!["default_validator_selector_factory"]);
    }

    #[test]
    fn clearing_member_name_factory_restores_builtin_selector() {
        let registry = ValidatorSelectorOptions::new();
        registry.set_member_name_validator_selector_factory(Some(nothing_by_names()));
        registry.set_member_name_validator_selector_factory(None);

        let input = names(&["Name", "Email"]);
        let selector = registry.member_name_selector(&input);
        let builtin = MemberNameValidatorSelector::new(&input);
        assert_eq!(format!("{selector:?}"), format!("{builtin:?}"));

        for path in ["Name", "Email", "Age", "Email.Domain"] {
            let rule = TestRule::for_property(path);
            assert_eq!(selector.can_execute(&rule, path), builtin.can_execute(&rule, path), "path {path}");
        }
    }

    #[test]
    fn clearing_ruleset_factory_restores_builtin_selector() {
        let registry = ValidatorSelectorOptions::new();
        registry.set_ruleset_validator_selector_factory(Some(nothing_by_names()));
        registry.set_ruleset_validator_selector_factory(None);

        let selector = registry.ruleset_selector(&names(&["admin"]));
        let builtin = RulesetValidatorSelector::new(&names(&["admin"]));
        assert_eq!(format!("{selector:?}"), format!("{builtin:?}"));
    }

    #[test]
    fn reset_reverts_every_factory() {
        let registry = ValidatorSelectorOptions::new();
        registry.set_default_validator_selector_factory(Some(nothing_by_default()));
        registry.set_ruleset_validator_selector_factory(Some(nothing_by_names()));
        registry.reset();
        assert!(registry.customized_slots().is_empty());
    }
}
