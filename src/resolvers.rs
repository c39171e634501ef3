//! Built-in resolvers.
//!
//! These are the behaviors `ValidatorOptions` falls back to whenever a resolver
//! slot is unset:
//!
//! - [`default_property_name`]: chain from the access expression, else the
//!   member name, else `None`.
//! - [`DisplayNameCache`]: memoized display-name lookup through a
//!   [`DisplayNameSource`]. The source is consulted at most once per member,
//!   including members that turn out to have no display name.
//! - [`default_error_code`]: the validator's short type name.
//!
//! Member inspection is not done here. Display names come from whatever
//! `DisplayNameSource` the options object was built with; the default is a
//! [`DisplayNameRegistry`] that application code fills in at startup.

use crate::{MemberInfo, PropertyExpression, PropertyValidator, TypeInfo};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Strip the module path and generic arguments from a type name.
///
/// `my_app::rules::LengthValidator<alloc::string::String>` becomes
/// `LengthValidator`.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Default property-name resolution.
///
/// The owner type is accepted for signature parity with custom resolvers and
/// is not consulted.
pub fn default_property_name(
    _owner: Option<&TypeInfo>,
    member: Option<&MemberInfo>,
    expression: Option<&dyn PropertyExpression>,
) -> Option<String> {
    if let Some(chain) = expression.and_then(|e| e.property_chain()).filter(|c| !c.is_empty()) {
        return Some(chain.to_string());
    }
    member.map(|m| m.name().to_string())
}

/// Default error code: the concrete validator type's short name.
pub fn default_error_code(validator: &dyn PropertyValidator) -> String {
    short_type_name(validator.type_name()).to_string()
}

// --- Display names -----------------------------------------------------------

/// Capability that knows human-readable display names for members.
pub trait DisplayNameSource: Send + Sync {
    fn display_name(&self, member: &MemberInfo) -> Option<String>;
}

/// Display names registered by application code, keyed by member.
#[derive(Debug, Default)]
pub struct DisplayNameRegistry {
    names: RwLock<HashMap<MemberInfo, String>>,
}

impl DisplayNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `display_name` to `member`, replacing any earlier entry.
    ///
    /// Register names before the first validation run: a resolver that has
    /// already cached a member will keep answering with the cached value.
    pub fn register(&self, member: MemberInfo, display_name: impl Into<String>) {
        self.names.write().insert(member, display_name.into());
    }
}

impl DisplayNameSource for DisplayNameRegistry {
    fn display_name(&self, member: &MemberInfo) -> Option<String> {
        self.names.read().get(member).cloned()
    }
}

/// Memoizing front for a [`DisplayNameSource`].
///
/// Every member gets its own once-cell. The map lock is held only long enough
/// to find or insert that cell, so the source runs unlocked: a slow lookup
/// never stalls hits for other members, and a source may resolve other members
/// through the same cache.
pub struct DisplayNameCache {
    source: Arc<dyn DisplayNameSource>,
    cache: RwLock<HashMap<MemberInfo, Arc<OnceCell<Option<String>>>>>,
}

impl std::fmt::Debug for DisplayNameCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayNameCache")
            .field("source", &"<display name source>")
            .field("cached", &self.len())
            .finish()
    }
}

impl DisplayNameCache {
    pub fn new(source: Arc<dyn DisplayNameSource>) -> Self {
        DisplayNameCache { source, cache: RwLock::new(HashMap::new()) }
    }

    /// Display name for `member`, or `None` when no member is given or the
    /// source has none.
    ///
    /// Concurrent misses for the same member wait on that member's cell, so
    /// the source still sees each member once.
    pub fn resolve(&self, member: Option<&MemberInfo>) -> Option<String> {
        let member = member?;
        let cell = self.cell(member);
        cell.get_or_init(|| {
            tracing::trace!(domain = "options", member = %member, "display name cache miss");
            self.source.display_name(member)
        })
        .clone()
    }

    fn cell(&self, member: &MemberInfo) -> Arc<OnceCell<Option<String>>> {
        if let Some(cell) = self.cache.read().get(member) {
            return Arc::clone(cell);
        }
        Arc::clone(self.cache.write().entry(member.clone()).or_default())
    }

    /// Number of members resolved so far.
    pub fn len(&self) -> usize {
        self.cache.read().values().filter(|cell| cell.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every memoized lookup.
    ///
    /// Lookups already running finish against the cells they started with.
    pub fn clear(&self) {
        self.cache.write().clear();
    }
}
