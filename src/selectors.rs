//! Rule selection.
//!
//! A validator selector decides, per rule, whether the rule runs in the
//! current validation pass. The engine asks the options object for one of three
//! selectors depending on what the caller asked for:
//!
//! ```text
//! validate(instance)                 -> default factory()        -> DefaultValidatorSelector
//! validate(instance, properties=..)  -> member-name factory(names) -> MemberNameValidatorSelector
//! validate(instance, rulesets=..)    -> ruleset factory(names)   -> RulesetValidatorSelector
//! ```
//!
//! The factories are the extension point and live in
//! [`ValidatorSelectorOptions`]. The selectors in this module are what the
//! built-in factories construct; any custom factory may return its own
//! implementation instead.
//!
//! ## Responsibilities by module
//!
//! - `default.rs`: runs every rule.
//! - `member_name.rs`: runs rules targeting named properties (and their
//!   children / collection elements).
//! - `ruleset.rs`: runs rules in named rulesets, with `*` and `default`.
//! - `registry.rs`: the three overridable factories.

#[path = "selectors/default.rs"]
mod default;
#[path = "selectors/member_name.rs"]
mod member_name;
#[path = "selectors/registry.rs"]
mod registry;
#[path = "selectors/ruleset.rs"]
mod ruleset;

pub use default::DefaultValidatorSelector;
pub use member_name::MemberNameValidatorSelector;
pub use registry::ValidatorSelectorOptions;
pub use ruleset::RulesetValidatorSelector;

use crate::ValidationRule;
use std::fmt;
use std::sync::Arc;

/// Name of the implicit ruleset every rule without explicit rulesets is in.
pub(crate) const DEFAULT_RULESET: &str = "default";
/// Ruleset wildcard: select every rule.
pub(crate) const WILDCARD_RULESET: &str = "*";

/// Decides whether a rule runs in the current validation pass.
pub trait ValidatorSelector: Send + Sync + fmt::Debug {
    /// `property_path` is the full path of the property being validated in
    /// this pass (it differs from `rule.property_path()` inside collections and
    /// child validators).
    fn can_execute(&self, rule: &dyn ValidationRule, property_path: &str) -> bool;
}

/// Builds the selector used when no selection criteria are given.
pub type DefaultSelectorFactory = Arc<dyn Fn() -> Box<dyn ValidatorSelector> + Send + Sync>;

/// Builds a selector restricted to the given property names.
pub type MemberNameSelectorFactory = Arc<dyn Fn(&[String]) -> Box<dyn ValidatorSelector> + Send + Sync>;

/// Builds a selector restricted to the given ruleset names.
pub type RulesetSelectorFactory = Arc<dyn Fn(&[String]) -> Box<dyn ValidatorSelector> + Send + Sync>;
