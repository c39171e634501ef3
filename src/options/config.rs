use crate::error::{OptionsError, Result};
use crate::messages::{DefaultLanguageManager, LanguageManager, MessageFormatter};
use crate::resolvers::{
    DisplayNameCache, DisplayNameRegistry, DisplayNameSource, default_error_code, default_property_name,
};
use crate::selectors::ValidatorSelectorOptions;
use crate::slot::Slot;
use crate::{CascadeMode, MemberInfo, PropertyExpression, PropertyValidator, TypeInfo};
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

static GLOBAL: Lazy<ValidatorOptions> = Lazy::new(ValidatorOptions::new);

/// Separator used between members of a property chain until configured.
pub(crate) const DEFAULT_PROPERTY_CHAIN_SEPARATOR: &str = ".";

/// Creates a fresh [`MessageFormatter`] for each failure message.
pub type MessageFormatterFactory = Arc<dyn Fn() -> MessageFormatter + Send + Sync>;

/// Resolves the name of a validated property from its owner type, member
/// descriptor and access expression. Any input may be absent; returning `None`
/// leaves the decision to the engine.
pub type PropertyNameResolver = Arc<
    dyn Fn(Option<&TypeInfo>, Option<&MemberInfo>, Option<&dyn PropertyExpression>) -> Option<String> + Send + Sync,
>;

/// Resolves the human-readable name of a validated property. Same inputs as
/// [`PropertyNameResolver`].
pub type DisplayNameResolver = PropertyNameResolver;

/// Derives the error code attached to a failure raised by a validator.
pub type ErrorCodeResolver = Arc<dyn Fn(&dyn PropertyValidator) -> String + Send + Sync>;

/// Process-wide validation defaults.
///
/// ```
/// use std::sync::Arc;
/// use validator_options::{MemberInfo, PropertyExpression, TypeInfo, ValidatorOptions};
///
/// struct Person;
///
/// let options = ValidatorOptions::new();
/// options.set_display_name_resolver(Some(Arc::new(
///     |_: Option<&TypeInfo>, member: Option<&MemberInfo>, _: Option<&dyn PropertyExpression>| {
///         member.map(|m| m.name().to_uppercase())
///     },
/// )));
///
/// let age = MemberInfo::of::<Person>("Age");
/// assert_eq!(options.resolve_display_name(None, Some(&age), None).as_deref(), Some("AGE"));
/// ```
pub struct ValidatorOptions {
    cascade_mode: AtomicU8,
    property_chain_separator: ArcSwap<String>,
    language_manager: ArcSwap<Arc<dyn LanguageManager>>,
    validator_selectors: ValidatorSelectorOptions,
    message_formatter_factory: Slot<MessageFormatterFactory>,
    property_name_resolver: Slot<PropertyNameResolver>,
    display_name_resolver: Slot<DisplayNameResolver>,
    display_names: Arc<DisplayNameCache>,
    display_name_registry: Option<Arc<DisplayNameRegistry>>,
    disable_accessor_cache: AtomicBool,
    error_code_resolver: Slot<ErrorCodeResolver>,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorOptions {
    /// The process-wide instance, created with [`ValidatorOptions::new`] on
    /// first access.
    pub fn global() -> &'static ValidatorOptions {
        &GLOBAL
    }

    /// Options with every field at its built-in default. Display names come
    /// from an empty [`DisplayNameRegistry`], reachable through
    /// [`ValidatorOptions::display_name_registry`].
    pub fn new() -> Self {
        let registry = Arc::new(DisplayNameRegistry::new());
        let mut options = Self::with_display_names(registry.clone());
        options.display_name_registry = Some(registry);
        options
    }

    /// Options whose built-in display-name resolver consults `source`.
    pub fn with_display_names(source: Arc<dyn DisplayNameSource>) -> Self {
        let display_names = Arc::new(DisplayNameCache::new(source));

        ValidatorOptions {
            cascade_mode: AtomicU8::new(CascadeMode::default().to_u8()),
            property_chain_separator: ArcSwap::from_pointee(DEFAULT_PROPERTY_CHAIN_SEPARATOR.to_string()),
            language_manager: ArcSwap::from_pointee(builtin_language_manager()),
            validator_selectors: ValidatorSelectorOptions::new(),
            message_formatter_factory: Slot::new("message_formatter_factory", builtin_message_formatter_factory()),
            property_name_resolver: Slot::new("property_name_resolver", builtin_property_name_resolver()),
            display_name_resolver: Slot::new("display_name_resolver", builtin_display_name_resolver(&display_names)),
            display_names,
            display_name_registry: None,
            disable_accessor_cache: AtomicBool::new(false),
            error_code_resolver: Slot::new("error_code_resolver", builtin_error_code_resolver()),
        }
    }

    // --- Cascade / separator / flags ----------------------------------------

    pub fn cascade_mode(&self) -> CascadeMode {
        CascadeMode::from_u8(self.cascade_mode.load(Ordering::Acquire))
    }

    pub fn set_cascade_mode(&self, mode: CascadeMode) {
        self.cascade_mode.store(mode.to_u8(), Ordering::Release);
        tracing::debug!(domain = "options", slot = "cascade_mode", mode = ?mode, "cascade mode set");
    }

    /// Separator placed between members when a property chain is rendered.
    pub fn property_chain_separator(&self) -> String {
        String::clone(&self.property_chain_separator.load())
    }

    /// `None` restores the default separator (`"."`).
    pub fn set_property_chain_separator(&self, separator: Option<&str>) {
        let customized = separator.is_some();
        let separator = separator.unwrap_or(DEFAULT_PROPERTY_CHAIN_SEPARATOR);
        self.property_chain_separator.store(Arc::new(separator.to_string()));
        slot_written!("property_chain_separator", customized);
    }

    /// When set, the engine compiles property accessors on every use instead of
    /// caching them.
    pub fn disable_accessor_cache(&self) -> bool {
        self.disable_accessor_cache.load(Ordering::Acquire)
    }

    pub fn set_disable_accessor_cache(&self, disable: bool) {
        self.disable_accessor_cache.store(disable, Ordering::Release);
        tracing::debug!(domain = "options", slot = "disable_accessor_cache", disable, "accessor cache toggled");
    }

    // --- Language manager ---------------------------------------------------

    pub fn language_manager(&self) -> Arc<dyn LanguageManager> {
        let current = self.language_manager.load();
        Arc::clone(&**current)
    }

    /// Replace the language manager.
    ///
    /// Unlike the function slots there is no silent fallback: `None` is
    /// rejected and the current manager is kept.
    pub fn set_language_manager(&self, manager: Option<Arc<dyn LanguageManager>>) -> Result<()> {
        let Some(manager) = manager else {
            tracing::warn!(domain = "options", slot = "language_manager", "rejected absent language manager");
            return Err(OptionsError::InvalidArgument { parameter: "language_manager" });
        };
        self.language_manager.store(Arc::new(manager));
        slot_written!("language_manager", true);
        Ok(())
    }

    // --- Selectors ----------------------------------------------------------

    /// Factories for the rule selectors.
    pub fn validator_selectors(&self) -> &ValidatorSelectorOptions {
        &self.validator_selectors
    }

    // --- Message formatter --------------------------------------------------

    pub fn message_formatter_factory(&self) -> MessageFormatterFactory {
        self.message_formatter_factory.get()
    }

    pub fn set_message_formatter_factory(&self, factory: Option<MessageFormatterFactory>) {
        self.message_formatter_factory.set(factory);
    }

    /// A new formatter from the current factory.
    pub fn create_message_formatter(&self) -> MessageFormatter {
        (self.message_formatter_factory())()
    }

    // --- Name resolvers -----------------------------------------------------

    pub fn property_name_resolver(&self) -> PropertyNameResolver {
        self.property_name_resolver.get()
    }

    pub fn set_property_name_resolver(&self, resolver: Option<PropertyNameResolver>) {
        self.property_name_resolver.set(resolver);
    }

    pub fn resolve_property_name(
        &self,
        owner: Option<&TypeInfo>,
        member: Option<&MemberInfo>,
        expression: Option<&dyn PropertyExpression>,
    ) -> Option<String> {
        (self.property_name_resolver())(owner, member, expression)
    }

    pub fn display_name_resolver(&self) -> DisplayNameResolver {
        self.display_name_resolver.get()
    }

    pub fn set_display_name_resolver(&self, resolver: Option<DisplayNameResolver>) {
        self.display_name_resolver.set(resolver);
    }

    pub fn resolve_display_name(
        &self,
        owner: Option<&TypeInfo>,
        member: Option<&MemberInfo>,
        expression: Option<&dyn PropertyExpression>,
    ) -> Option<String> {
        (self.display_name_resolver())(owner, member, expression)
    }

    /// Memo table behind the built-in display-name resolver.
    pub fn display_name_cache(&self) -> &DisplayNameCache {
        &self.display_names
    }

    /// Registry backing the built-in display-name resolver, for instances made
    /// with [`ValidatorOptions::new`]. Names registered after a member was first
    /// resolved need [`DisplayNameCache::clear`] to show up.
    pub fn display_name_registry(&self) -> Option<&DisplayNameRegistry> {
        self.display_name_registry.as_deref()
    }

    // --- Error codes --------------------------------------------------------

    pub fn error_code_resolver(&self) -> ErrorCodeResolver {
        self.error_code_resolver.get()
    }

    pub fn set_error_code_resolver(&self, resolver: Option<ErrorCodeResolver>) {
        self.error_code_resolver.set(resolver);
    }

    pub fn resolve_error_code(&self, validator: &dyn PropertyValidator) -> String {
        (self.error_code_resolver())(validator)
    }

    // --- Whole-object -------------------------------------------------------

    /// Put every field back to its built-in default and forget memoized
    /// display names. Registered display names are kept.
    pub fn reset(&self) {
        self.set_cascade_mode(CascadeMode::default());
        self.set_property_chain_separator(None);
        self.language_manager.store(Arc::new(builtin_language_manager()));
        self.validator_selectors.reset();
        self.message_formatter_factory.set(None);
        self.property_name_resolver.set(None);
        self.display_name_resolver.set(None);
        self.display_names.clear();
        self.set_disable_accessor_cache(false);
        self.error_code_resolver.set(None);
    }

    /// Names of the function slots currently holding a custom value.
    pub fn customized_slots(&self) -> Vec<&'static str> {
        let own = [
            &self.message_formatter_factory as &dyn SlotState,
            &self.property_name_resolver,
            &self.display_name_resolver,
            &self.error_code_resolver,
        ];
        let mut names: Vec<&'static str> =
            own.iter().filter(|slot| slot.is_customized()).map(|slot| slot.name()).collect();
        names.extend(self.validator_selectors.customized_slots());
        names
    }
}

/// Type-erased view used to list slots of different function types together.
trait SlotState {
    fn name(&self) -> &'static str;
    fn is_customized(&self) -> bool;
}

impl<T: Clone> SlotState for Slot<T> {
    fn name(&self) -> &'static str {
        Slot::name(self)
    }

    fn is_customized(&self) -> bool {
        Slot::is_customized(self)
    }
}

impl fmt::Debug for ValidatorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorOptions")
            .field("cascade_mode", &self.cascade_mode())
            .field("property_chain_separator", &self.property_chain_separator())
            .field("language_manager", &"<language manager>")
            .field("validator_selectors", &self.validator_selectors)
            .field("message_formatter_factory", &self.message_formatter_factory)
            .field("property_name_resolver", &self.property_name_resolver)
            .field("display_name_resolver", &self.display_name_resolver)
            .field("disable_accessor_cache", &self.disable_accessor_cache())
            .field("error_code_resolver", &self.error_code_resolver)
            .finish()
    }
}

// --- Built-ins ---------------------------------------------------------------

fn builtin_language_manager() -> Arc<dyn LanguageManager> {
    Arc::new(DefaultLanguageManager::new())
}

fn builtin_message_formatter_factory() -> MessageFormatterFactory {
    Arc::new(MessageFormatter::new)
}

fn builtin_property_name_resolver() -> PropertyNameResolver {
    Arc::new(default_property_name)
}

fn builtin_display_name_resolver(cache: &Arc<DisplayNameCache>) -> DisplayNameResolver {
    let cache = Arc::clone(cache);
    Arc::new(move |_: Option<&TypeInfo>, member: Option<&MemberInfo>, _: Option<&dyn PropertyExpression>| {
        cache.resolve(member)
    })
}

fn builtin_error_code_resolver() -> ErrorCodeResolver {
    Arc::new(default_error_code)
}
