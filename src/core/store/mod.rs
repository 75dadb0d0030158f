//! Message storage backends.
//!
//! A store only answers exact `(locale, key)` lookups. Fallback between
//! locales is applied on top of it by [`Translator`](crate::core::Translator),
//! so every backend shares the same resolution policy.

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::{MemoryStore, Record};

/// Raw translation text keyed by locale and message key.
pub trait MessageStore {
    /// Add a message for `(locale, key)`.
    fn register(&mut self, locale: &str, key: &str, message: &str);

    /// Exact lookup without any fallback.
    ///
    /// `None` means the pair is unknown. A registered empty message is
    /// `Some("")` and still counts as found.
    fn lookup(&self, locale: &str, key: &str) -> Option<&str>;
}
