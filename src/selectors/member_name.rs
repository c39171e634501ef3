use super::ValidatorSelector;
use crate::ValidationRule;

/// Selects rules that target one of the named properties.
///
/// A name selects:
///
/// - the property itself (`Address`),
/// - anything nested below it (`Address.City`, `Orders[3]`),
/// - its ancestors, so the child validators that reach it still run
///   (`Address` for the name `Address.City`).
///
/// A name containing `[]` matches any collection index at that position:
/// `Orders[].Amount` selects `Orders[0].Amount` and `Orders[7].Amount`.
/// Model-level rules (no property path) are never selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberNameValidatorSelector {
    member_names: Vec<String>,
}

impl MemberNameValidatorSelector {
    pub fn new(member_names: &[String]) -> Self {
        MemberNameValidatorSelector { member_names: member_names.to_vec() }
    }

    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }
}

/// True when `path` is `parent` or nested below it.
fn covers(parent: &str, path: &str) -> bool {
    match path.strip_prefix(parent) {
        Some("") => true,
        Some(rest) => rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}

impl ValidatorSelector for MemberNameValidatorSelector {
    fn can_execute(&self, rule: &dyn ValidationRule, property_path: &str) -> bool {
        let path = if property_path.is_empty() { rule.property_path().unwrap_or_default() } else { property_path };
        if path.is_empty() {
            return false;
        }

        let normalized = regex!(r"\[[^\]]*\]").replace_all(path, "[]");
        self.member_names.iter().filter(|name| !name.is_empty()).any(|name| {
            let candidate = if name.contains("[]") { &*normalized } else { path };
            covers(name, candidate) || covers(candidate, name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::testing::{TestRule, names};

    fn selects(selector: &MemberNameValidatorSelector, path: &str) -> bool {
        selector.can_execute(&TestRule::for_property(path), path)
    }

    #[test]
    fn selects_named_properties_only() {
        let selector = MemberNameValidatorSelector::new(&names(&["Name", "Email"]));
        assert!(selects(&selector, "Name"));
        assert!(selects(&selector, "Email"));
        assert!(!selects(&selector, "Age"));
        assert!(!selects(&selector, "NameSuffix"));
    }

    #[test]
    fn selects_children_and_ancestors() {
        let selector = MemberNameValidatorSelector::new(&names(&["Address.City"]));
        assert!(selects(&selector, "Address"));
        assert!(selects(&selector, "Address.City"));
        assert!(selects(&selector, "Address.City.Code"));
        assert!(!selects(&selector, "Address.Street"));
    }

    #[test]
    fn wildcard_indexer_matches_any_element() {
        let selector = MemberNameValidatorSelector::new(&names(&["Orders[].Amount"]));
        assert!(selects(&selector, "Orders[0].Amount"));
        assert!(selects(&selector, "Orders[12].Amount"));
        assert!(selects(&selector, "Orders"));
        assert!(!selects(&selector, "Orders[0].Sku"));
    }

    #[test]
    fn concrete_indexer_matches_that_element() {
        let selector = MemberNameValidatorSelector::new(&names(&["Orders[1]"]));
        assert!(selects(&selector, "Orders[1].Amount"));
        assert!(!selects(&selector, "Orders[2].Amount"));
    }

    #[test]
    fn falls_back_to_rule_path_and_skips_model_rules() {
        let selector = MemberNameValidatorSelector::new(&names(&["Name"]));
        assert!(selector.can_execute(&TestRule::for_property("Name"), ""));
        assert!(!selector.can_execute(&TestRule::default(), ""));
    }

    #[test]
    fn empty_name_list_selects_nothing() {
        let selector = MemberNameValidatorSelector::new(&[]);
        assert!(!selects(&selector, "Name"));
    }
}
