//! Overridable slots.
//!
//! A `Slot` pairs an optional custom value with the built-in it replaces.
//! "Unset" is `None` in an `ArcSwapOption`, so clearing a slot is a plain store
//! and every read lands on either the custom value or the built-in. Stores and
//! loads are atomic per slot; readers never see a half-written value.

use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::Arc;

pub(crate) struct Slot<T> {
    name: &'static str,
    custom: ArcSwapOption<T>,
    builtin: T,
}

impl<T: Clone> Slot<T> {
    pub(crate) fn new(name: &'static str, builtin: T) -> Self {
        Slot { name, custom: ArcSwapOption::empty(), builtin }
    }

    /// Current value: the custom one if set, otherwise the built-in.
    pub(crate) fn get(&self) -> T {
        match self.custom.load().as_deref() {
            Some(custom) => custom.clone(),
            None => self.builtin.clone(),
        }
    }

    /// Store `value`; `None` reverts to the built-in.
    pub(crate) fn set(&self, value: Option<T>) {
        let customized = value.is_some();
        self.custom.store(value.map(Arc::new));
        slot_written!(self.name, customized);
    }

    pub(crate) fn is_customized(&self) -> bool {
        self.custom.load().is_some()
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.custom.load().is_some() { f.write_str("<custom function>") } else { f.write_str("<function>") }
    }
}
