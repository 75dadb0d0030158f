//! Locale resolution on top of a [`MessageStore`].

use std::path::PathBuf;

use super::{
    LoadError, Translatable,
    placeholder::substitute,
    store::{JsonStore, MemoryStore, MessageStore},
    translatable::object_override,
};

/// Translator backed by an in-memory record list.
pub type MemoryTranslator = Translator<MemoryStore>;

/// Translator backed by a directory of JSON files.
pub type JsonTranslator = Translator<JsonStore>;

/// Resolves messages for a locale, falling back to a fixed locale once.
///
/// # Examples
///
/// ```
/// use lingo::core::Translator;
///
/// let mut translator = Translator::in_memory("en");
/// translator.register("en", "welcome", "Hello {name}, welcome!");
///
/// assert_eq!(
///     translator.translate("en", "welcome", [("name", "John")]),
///     "Hello John, welcome!"
/// );
/// // No `de` entry, so the `en` message is used.
/// assert_eq!(translator.resolve("de", "welcome"), "Hello {name}, welcome!");
/// assert_eq!(translator.resolve("de", "missing"), "");
/// ```
#[derive(Debug, Clone)]
pub struct Translator<S> {
    fallback_locale: String,
    store: S,
}

impl Translator<MemoryStore> {
    pub fn in_memory(fallback_locale: impl Into<String>) -> Self {
        Self::with_store(fallback_locale, MemoryStore::new())
    }
}

impl Translator<JsonStore> {
    /// Load every translation file under `dir`.
    pub fn from_dir(
        fallback_locale: impl Into<String>,
        dir: impl Into<PathBuf>,
    ) -> Result<Self, LoadError> {
        Ok(Self::with_store(fallback_locale, JsonStore::open(dir)?))
    }

    /// Re-read the translation directory, keeping registered messages.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        self.store.load()
    }
}

impl<S: MessageStore> Translator<S> {
    pub fn with_store(fallback_locale: impl Into<String>, store: S) -> Self {
        Self {
            fallback_locale: fallback_locale.into(),
            store,
        }
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Register a message for `locale`. Placeholders use `{name}` syntax.
    pub fn register(&mut self, locale: &str, key: &str, message: &str) {
        self.store.register(locale, key, message);
    }

    /// Message for `(locale, key)`, or the fallback locale's message.
    ///
    /// Returns an empty string when neither exists.
    pub fn resolve(&self, locale: &str, key: &str) -> String {
        self.lookup(locale, key).unwrap_or_default().to_string()
    }

    /// Like [`resolve`](Self::resolve), but asks `object` first.
    ///
    /// A non-empty answer from the object is returned as is and the store is
    /// not consulted.
    pub fn resolve_struct(
        &self,
        object: Option<&dyn Translatable>,
        locale: &str,
        key: &str,
        field: &str,
    ) -> String {
        if let Some(message) = object_override(object, locale, key, field) {
            tracing::trace!(locale, key, field, "Using object translation");
            return message;
        }
        self.resolve(locale, key)
    }

    /// Resolve `(locale, key)` and fill in its placeholders.
    pub fn translate<I, K, V>(&self, locale: &str, key: &str, placeholders: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let message = self.lookup(locale, key).unwrap_or_default();
        substitute(message, placeholders)
    }

    /// Resolve through `object` like [`resolve_struct`](Self::resolve_struct)
    /// and fill in placeholders.
    pub fn translate_struct<I, K, V>(
        &self,
        object: Option<&dyn Translatable>,
        locale: &str,
        key: &str,
        field: &str,
        placeholders: I,
    ) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let message = self.resolve_struct(object, locale, key, field);
        substitute(&message, placeholders)
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(message) = self.store.lookup(locale, key) {
            return Some(message);
        }
        if locale == self.fallback_locale {
            return None;
        }
        tracing::trace!(
            locale,
            key,
            fallback = %self.fallback_locale,
            "Falling back to fallback locale"
        );
        self.store.lookup(&self.fallback_locale, key)
    }
}
