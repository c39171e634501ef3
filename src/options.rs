//! The options registry.
//!
//! [`ValidatorOptions`] is the one object the validation engine reads its
//! defaults from. `ValidatorOptions::global()` hands out the process-wide
//! instance, built lazily on first access; `ValidatorOptions::new()` builds an
//! isolated one for tests or embedding.
//!
//! ## Write protocols
//!
//! Every function slot follows the same guarded write:
//!
//! ```text
//! set_x(Some(f))  -> reads return f
//! set_x(None)     -> reads return the built-in
//! ```
//!
//! The language manager is the exception: it has no safe stand-in, so
//! `set_language_manager(None)` fails with [`OptionsError::InvalidArgument`]
//! and the previous manager stays in place.
//!
//! ## Concurrency
//!
//! Each field is swapped atomically on its own. Nothing orders writes to
//! different fields; configure at startup, before validation traffic starts.
//!
//! ## Responsibilities by module
//!
//! - `config.rs`: `ValidatorOptions` and the resolver type aliases.
//! - `legacy.rs`: `LegacyOptions`, the deprecated flat facade.
//!
//! [`OptionsError::InvalidArgument`]: crate::OptionsError::InvalidArgument

#[path = "options/config.rs"]
mod config;
#[path = "options/legacy.rs"]
mod legacy;


pub use config::{
    DisplayNameResolver, ErrorCodeResolver, MessageFormatterFactory, PropertyNameResolver, ValidatorOptions,
};
#[allow(deprecated)]
pub use legacy::LegacyOptions;
