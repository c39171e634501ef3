//! Process-wide, pluggable defaults for a declarative validation library.
//!
//! The crate holds one long-lived [`ValidatorOptions`] object whose fields are
//! overridable slots: name resolvers, the message-formatter factory, the
//! error-code resolver and three rule-selector factories. Clearing a slot
//! (writing `None`) reverts it to a deterministic built-in, so a read always
//! yields something callable.
//!
//! ```
//! use std::sync::Arc;
//! use validator_options::{CascadeMode, PropertyValidator, ValidatorOptions};
//!
//! let options = ValidatorOptions::new();
//! options.set_cascade_mode(CascadeMode::Stop);
//! options.set_error_code_resolver(Some(Arc::new(|_: &dyn PropertyValidator| "E42".to_string())));
//! assert_eq!(options.cascade_mode(), CascadeMode::Stop);
//!
//! // Clearing the slot brings the built-in back.
//! options.set_error_code_resolver(None);
//! assert!(options.customized_slots().is_empty());
//! ```
//!
//! The rule-execution engine reads these settings at validation time; it lives
//! elsewhere and only the boundary types ([`TypeInfo`], [`MemberInfo`],
//! [`PropertyExpression`], [`PropertyValidator`], [`ValidationRule`]) are
//! defined here.

#[macro_use]
mod macros;
mod chain;
mod error;
mod messages;
mod options;
mod resolvers;
mod selectors;
mod slot;

pub use chain::PropertyChain;
pub use error::{OptionsError, Result};
pub use messages::{DefaultLanguageManager, LanguageManager, MessageFormatter};
#[allow(deprecated)]
pub use options::LegacyOptions;
pub use options::{
    DisplayNameResolver, ErrorCodeResolver, MessageFormatterFactory, PropertyNameResolver, ValidatorOptions,
};
pub use resolvers::{
    DisplayNameCache, DisplayNameRegistry, DisplayNameSource, default_error_code, default_property_name,
    short_type_name,
};
pub use selectors::{
    DefaultSelectorFactory, DefaultValidatorSelector, MemberNameSelectorFactory, MemberNameValidatorSelector,
    RulesetSelectorFactory, RulesetValidatorSelector, ValidatorSelector, ValidatorSelectorOptions,
};

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;

// --- Boundary types ---------------------------------------------------------

/// How a rule chain proceeds after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CascadeMode {
    /// Keep running the remaining validators in the chain.
    #[default]
    Continue,
    /// Stop the chain at the first failure.
    Stop,
}

impl CascadeMode {
    pub(crate) fn to_u8(self) -> u8 {
        match self {
            CascadeMode::Continue => 0,
            CascadeMode::Stop => 1,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            1 => CascadeMode::Stop,
            _ => CascadeMode::Continue,
        }
    }
}

/// Identity of the type that owns a validated member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeInfo { id: TypeId::of::<T>(), name: std::any::type_name::<T>() }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without module path or generic arguments.
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }
}

/// A named member (field or accessor) on some owner type.
///
/// This stands in for a reflection member descriptor: the name plus the type
/// that declares it. Two descriptors are the same member when both parts match,
/// which is what the display-name cache keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberInfo {
    declaring_type: TypeInfo,
    name: Cow<'static, str>,
}

impl MemberInfo {
    pub fn new(declaring_type: TypeInfo, name: impl Into<Cow<'static, str>>) -> Self {
        MemberInfo { declaring_type, name: name.into() }
    }

    /// Shorthand for `MemberInfo::new(TypeInfo::of::<T>(), name)`.
    pub fn of<T: ?Sized + 'static>(name: impl Into<Cow<'static, str>>) -> Self {
        MemberInfo::new(TypeInfo::of::<T>(), name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declaring_type(&self) -> TypeInfo {
        self.declaring_type
    }
}

impl fmt::Display for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type.short_name(), self.name)
    }
}

/// A property-access expression that can be flattened into a property chain.
///
/// Expression parsing belongs to the engine; this trait is the only thing the
/// resolvers need from it.
pub trait PropertyExpression {
    /// The chain of members the expression walks, or `None` when it is not a
    /// plain member access (method calls, arithmetic, ...).
    fn property_chain(&self) -> Option<PropertyChain>;
}

impl PropertyExpression for PropertyChain {
    fn property_chain(&self) -> Option<PropertyChain> {
        Some(self.clone())
    }
}

/// A single property validator (e.g. "not null", "length").
///
/// The default error code is the implementor's type name, so most
/// implementations need nothing beyond `impl PropertyValidator for X {}`.
pub trait PropertyValidator: Send + Sync {
    /// Fully qualified name of the concrete validator type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The part of a validation rule that selectors look at.
pub trait ValidationRule {
    /// Property path the rule targets, or `None` for model-level rules.
    fn property_path(&self) -> Option<&str>;

    /// Names of the rulesets the rule belongs to. Empty means the default set.
    fn rule_sets(&self) -> &[String];
}
