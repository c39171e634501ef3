//! Message formatting and the language-manager boundary.
//!
//! `MessageFormatter` is what the built-in formatter factory produces: a bag of
//! placeholder values plus `build_message`, which substitutes `{Name}` tokens in
//! a template. A `{Name:format}` token is looked up by `Name`; the format suffix
//! is accepted and ignored. Unknown placeholders are left untouched so a
//! half-configured message still reads sensibly.
//!
//! `LanguageManager` is the message-catalog capability. The catalog proper is
//! an external concern; `DefaultLanguageManager` carries the English messages
//! for the common validators and lets callers add or override translations.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

// --- Formatter ---------------------------------------------------------------

/// Placeholder key for the display name of the property under validation.
pub(crate) const PROPERTY_NAME: &str = "PropertyName";
/// Placeholder key for the value that failed validation.
pub(crate) const PROPERTY_VALUE: &str = "PropertyValue";

/// Builds error messages by substituting named placeholders.
///
/// ```
/// use validator_options::MessageFormatter;
///
/// let mut formatter = MessageFormatter::new();
/// formatter.append_property_name("Email").append_argument("MaxLength", 64);
/// assert_eq!(
///     formatter.build_message("'{PropertyName}' must be at most {MaxLength} characters."),
///     "'Email' must be at most 64 characters."
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFormatter {
    placeholders: HashMap<String, String>,
}

impl MessageFormatter {
    pub fn new() -> Self {
        MessageFormatter { placeholders: HashMap::new() }
    }

    /// Add (or replace) a named placeholder value.
    pub fn append_argument(&mut self, name: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.placeholders.insert(name.into(), value.to_string());
        self
    }

    pub fn append_property_name(&mut self, name: impl fmt::Display) -> &mut Self {
        self.append_argument(PROPERTY_NAME, name)
    }

    pub fn append_property_value(&mut self, value: impl fmt::Display) -> &mut Self {
        self.append_argument(PROPERTY_VALUE, value)
    }

    pub fn placeholder_values(&self) -> &HashMap<String, String> {
        &self.placeholders
    }

    /// Drop every placeholder value so the formatter can be reused.
    pub fn reset(&mut self) {
        self.placeholders.clear();
    }

    /// Substitute placeholders in `template`.
    pub fn build_message(&self, template: &str) -> String {
        if self.placeholders.is_empty() {
            return template.to_string();
        }

        regex!(r"\{([^{}:]+)(?::[^{}]+)?\}")
            .replace_all(template, |caps: &regex::Captures<'_>| match self.placeholders.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

// --- Language manager --------------------------------------------------------

/// Culture used when nothing more specific is configured or found.
pub(crate) const FALLBACK_CULTURE: &str = "en";

/// Message-catalog capability used to look up default error messages.
pub trait LanguageManager: Send + Sync {
    /// Look up the message template for `key` in `culture` (or the manager's
    /// own culture when `None`). `None` means the catalog has no entry.
    fn get_string(&self, key: &str, culture: Option<&str>) -> Option<String>;

    /// Whether localization is active. A disabled manager answers in English.
    fn enabled(&self) -> bool {
        true
    }

    /// Culture forced for every lookup, if any.
    fn culture(&self) -> Option<String> {
        None
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("EmailValidator", "'{PropertyName}' is not a valid email address."),
    ("EmptyValidator", "'{PropertyName}' must be empty."),
    ("EqualValidator", "'{PropertyName}' must be equal to '{ComparisonValue}'."),
    ("GreaterThanValidator", "'{PropertyName}' must be greater than '{ComparisonValue}'."),
    (
        "LengthValidator",
        concat!(
            "'{PropertyName}' must be between {MinLength} and {MaxLength} characters. ",
            "You entered {TotalLength} characters.",
        ),
    ),
    ("LessThanValidator", "'{PropertyName}' must be less than '{ComparisonValue}'."),
    ("NotEmptyValidator", "'{PropertyName}' must not be empty."),
    ("NotEqualValidator", "'{PropertyName}' must not be equal to '{ComparisonValue}'."),
    ("NotNullValidator", "'{PropertyName}' must not be empty."),
    ("NullValidator", "'{PropertyName}' must be empty."),
    ("PredicateValidator", "The specified condition was not met for '{PropertyName}'."),
    ("RegularExpressionValidator", "'{PropertyName}' is not in the correct format."),
];

/// Built-in language manager: English messages plus caller-supplied
/// translations.
///
/// Lookups walk `culture` → parent culture (`fr-CA` → `fr`) → `en`, checking
/// added translations before the built-in English table at each step.
#[derive(Debug)]
pub struct DefaultLanguageManager {
    translations: RwLock<HashMap<(String, String), String>>,
    culture: RwLock<Option<String>>,
    enabled: AtomicBool,
}

impl Default for DefaultLanguageManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultLanguageManager {
    pub fn new() -> Self {
        DefaultLanguageManager {
            translations: RwLock::new(HashMap::new()),
            culture: RwLock::new(None),
            enabled: AtomicBool::new(true),
        }
    }

    /// Add or replace the message for `key` in `culture`.
    pub fn add_translation(&self, culture: impl Into<String>, key: impl Into<String>, message: impl Into<String>) {
        self.translations.write().insert((culture.into(), key.into()), message.into());
    }

    /// Remove every added translation; the English table stays.
    pub fn clear(&self) {
        self.translations.write().clear();
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    pub fn set_culture(&self, culture: Option<String>) {
        *self.culture.write() = culture;
    }

    fn lookup(&self, culture: &str, key: &str) -> Option<String> {
        if let Some(message) = self.translations.read().get(&(culture.to_string(), key.to_string())) {
            return Some(message.clone());
        }
        if culture == FALLBACK_CULTURE {
            return ENGLISH.iter().find(|(k, _)| *k == key).map(|(_, m)| m.to_string());
        }
        None
    }
}

impl LanguageManager for DefaultLanguageManager {
    fn get_string(&self, key: &str, culture: Option<&str>) -> Option<String> {
        let forced = self.culture();
        let culture = if self.enabled() {
            culture.or(forced.as_deref()).unwrap_or(FALLBACK_CULTURE)
        } else {
            FALLBACK_CULTURE
        };

        if let Some(message) = self.lookup(culture, key) {
            return Some(message);
        }
        if let Some(message) = culture.split_once('-').and_then(|(parent, _)| self.lookup(parent, key)) {
            return Some(message);
        }
        if culture != FALLBACK_CULTURE {
            return self.lookup(FALLBACK_CULTURE, key);
        }
        None
    }

    fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    fn culture(&self) -> Option<String> {
        self.culture.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_message_substitutes_known_placeholders() {
        let mut formatter = MessageFormatter::new();
        formatter.append_property_name("Age").append_property_value(-3);
        assert_eq!(formatter.build_message("{PropertyName} was {PropertyValue}"), "Age was -3");
    }

    #[test]
    fn build_message_keeps_unknown_and_ignores_format_suffix() {
        let mut formatter = MessageFormatter::new();
        formatter.append_argument("Total", 12.5);
        assert_eq!(formatter.build_message("{Total:0.00} of {Limit}"), "12.5 of {Limit}");
    }

    #[test]
    fn reset_clears_placeholders() {
        let mut formatter = MessageFormatter::new();
        formatter.append_property_name("Name");
        formatter.reset();
        assert!(formatter.placeholder_values().is_empty());
        assert_eq!(formatter.build_message("{PropertyName}"), "{PropertyName}");
    }

    #[test]
    fn english_messages_are_built_in() {
        let manager = DefaultLanguageManager::new();
        assert_eq!(
            manager.get_string("NotNullValidator", None).as_deref(),
            Some("'{PropertyName}' must not be empty.")
        );
        assert_eq!(manager.get_string("NoSuchValidator", None), None);
    }

    #[test]
    fn translations_fall_back_through_parent_culture() {
        let manager = DefaultLanguageManager::new();
        manager.add_translation("fr", "NotNullValidator", "'{PropertyName}' ne doit pas être vide.");

        assert_eq!(
            manager.get_string("NotNullValidator", Some("fr-CA")).as_deref(),
            Some("'{PropertyName}' ne doit pas être vide.")
        );
        // Missing in French, found in English.
        assert_eq!(
            manager.get_string("EmailValidator", Some("fr")).as_deref(),
            Some("'{PropertyName}' is not a valid email address.")
        );
    }

    #[test]
    fn disabled_manager_answers_in_english() {
        let manager = DefaultLanguageManager::new();
        manager.add_translation("de", "NotNullValidator", "'{PropertyName}' darf nicht leer sein.");
        manager.set_culture(Some("de".to_string()));
        assert_eq!(
            manager.get_string("NotNullValidator", None).as_deref(),
            Some("'{PropertyName}' darf nicht leer sein.")
        );

        manager.set_enabled(false);
        assert_eq!(
            manager.get_string("NotNullValidator", None).as_deref(),
            Some("'{PropertyName}' must not be empty.")
        );
    }
}
