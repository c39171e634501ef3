//! Flat, deprecated access to the global options.
//!
//! `LegacyOptions` keeps the older flat property surface alive. It stores
//! nothing: every getter and setter forwards to a [`ValidatorOptions`]
//! (normally the global one), and selector factories go through its
//! [`ValidatorSelectorOptions`](crate::ValidatorSelectorOptions). Delete this
//! module once callers have moved over.

#![allow(deprecated)]

use super::config::{
    DisplayNameResolver, ErrorCodeResolver, MessageFormatterFactory, PropertyNameResolver, ValidatorOptions,
};
use crate::error::Result;
use crate::messages::LanguageManager;
use crate::selectors::{DefaultSelectorFactory, MemberNameSelectorFactory, RulesetSelectorFactory};
use crate::CascadeMode;
use std::sync::Arc;

/// Flat pass-through view over [`ValidatorOptions`].
#[deprecated(note = "use `ValidatorOptions::global()` instead")]
#[derive(Debug, Clone, Copy)]
pub struct LegacyOptions<'a> {
    options: &'a ValidatorOptions,
}

impl LegacyOptions<'static> {
    /// Facade over the process-wide options.
    #[deprecated(note = "use `ValidatorOptions::global()` instead")]
    pub fn global() -> Self {
        LegacyOptions { options: ValidatorOptions::global() }
    }
}

impl<'a> LegacyOptions<'a> {
    /// Facade over a specific options instance.
    #[deprecated(note = "use `ValidatorOptions` directly instead")]
    pub fn new(options: &'a ValidatorOptions) -> Self {
        LegacyOptions { options }
    }

    #[deprecated(note = "use `ValidatorOptions::cascade_mode` instead")]
    pub fn cascade_mode(&self) -> CascadeMode {
        self.options.cascade_mode()
    }

    #[deprecated(note = "use `ValidatorOptions::set_cascade_mode` instead")]
    pub fn set_cascade_mode(&self, mode: CascadeMode) {
        self.options.set_cascade_mode(mode);
    }

    #[deprecated(note = "use `ValidatorOptions::property_chain_separator` instead")]
    pub fn property_chain_separator(&self) -> String {
        self.options.property_chain_separator()
    }

    #[deprecated(note = "use `ValidatorOptions::set_property_chain_separator` instead")]
    pub fn set_property_chain_separator(&self, separator: Option<&str>) {
        self.options.set_property_chain_separator(separator);
    }

    #[deprecated(note = "use `ValidatorOptions::language_manager` instead")]
    pub fn language_manager(&self) -> Arc<dyn LanguageManager> {
        self.options.language_manager()
    }

    #[deprecated(note = "use `ValidatorOptions::set_language_manager` instead")]
    pub fn set_language_manager(&self, manager: Option<Arc<dyn LanguageManager>>) -> Result<()> {
        self.options.set_language_manager(manager)
    }

    #[deprecated(note = "use `ValidatorOptions::validator_selectors` instead")]
    pub fn default_validator_selector_factory(&self) -> DefaultSelectorFactory {
        self.options.validator_selectors().default_validator_selector_factory()
    }

    #[deprecated(note = "use `ValidatorOptions::validator_selectors` instead")]
    pub fn set_default_validator_selector_factory(&self, factory: Option<DefaultSelectorFactory>) {
        self.options.validator_selectors().set_default_validator_selector_factory(factory);
    }

    #[deprecated(note = "use `ValidatorOptions::validator_selectors` instead")]
    pub fn member_name_validator_selector_factory(&self) -> MemberNameSelectorFactory {
        self.options.validator_selectors().member_name_validator_selector_factory()
    }

    #[deprecated(note = "use `ValidatorOptions::validator_selectors` instead")]
    pub fn set_member_name_validator_selector_factory(&self, factory: Option<MemberNameSelectorFactory>) {
        self.options.validator_selectors().set_member_name_validator_selector_factory(factory);
    }

    #[deprecated(note = "use `ValidatorOptions::validator_selectors` instead")]
    pub fn ruleset_validator_selector_factory(&self) -> RulesetSelectorFactory {
        self.options.validator_selectors().ruleset_validator_selector_factory()
    }

    #[deprecated(note = "use `ValidatorOptions::validator_selectors` instead")]
    pub fn set_ruleset_validator_selector_factory(&self, factory: Option<RulesetSelectorFactory>) {
        self.options.validator_selectors().set_ruleset_validator_selector_factory(factory);
    }

    #[deprecated(note = "use `ValidatorOptions::message_formatter_factory` instead")]
    pub fn message_formatter_factory(&self) -> MessageFormatterFactory {
        self.options.message_formatter_factory()
    }

    #[deprecated(note = "use `ValidatorOptions::set_message_formatter_factory` instead")]
    pub fn set_message_formatter_factory(&self, factory: Option<MessageFormatterFactory>) {
        self.options.set_message_formatter_factory(factory);
    }

    #[deprecated(note = "use `ValidatorOptions::property_name_resolver` instead")]
    pub fn property_name_resolver(&self) -> PropertyNameResolver {
        self.options.property_name_resolver()
    }

    #[deprecated(note = "use `ValidatorOptions::set_property_name_resolver` instead")]
    pub fn set_property_name_resolver(&self, resolver: Option<PropertyNameResolver>) {
        self.options.set_property_name_resolver(resolver);
    }

    #[deprecated(note = "use `ValidatorOptions::display_name_resolver` instead")]
    pub fn display_name_resolver(&self) -> DisplayNameResolver {
        self.options.display_name_resolver()
    }

    #[deprecated(note = "use `ValidatorOptions::set_display_name_resolver` instead")]
    pub fn set_display_name_resolver(&self, resolver: Option<DisplayNameResolver>) {
        self.options.set_display_name_resolver(resolver);
    }

    #[deprecated(note = "use `ValidatorOptions::disable_accessor_cache` instead")]
    pub fn disable_accessor_cache(&self) -> bool {
        self.options.disable_accessor_cache()
    }

    #[deprecated(note = "use `ValidatorOptions::set_disable_accessor_cache` instead")]
    pub fn set_disable_accessor_cache(&self, disable: bool) {
        self.options.set_disable_accessor_cache(disable);
    }

    #[deprecated(note = "use `ValidatorOptions::error_code_resolver` instead")]
    pub fn error_code_resolver(&self) -> ErrorCodeResolver {
        self.options.error_code_resolver()
    }

    #[deprecated(note = "use `ValidatorOptions::set_error_code_resolver` instead")]
    pub fn set_error_code_resolver(&self, resolver: Option<ErrorCodeResolver>) {
        self.options.set_error_code_resolver(resolver);
    }
}
