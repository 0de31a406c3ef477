//! Interface localization.
//!
//! # Responsibility
//! - Define the two supported interface locales.
//! - Resolve static UI strings by `locale x key`.
//!
//! # Invariants
//! - Localization never touches stored post or comment text.
//! - Lookups for a key missing in the active locale fall back to English.

pub mod locale;
pub mod messages;

pub use locale::{Locale, UnknownLocale};
pub use messages::{text, translate, Labels, MessageKey};
