//! Lingo - a small i18n message store
//!
//! Lingo stores translation strings keyed by locale and message key,
//! resolves a message for a requested locale with a single fallback to a
//! default locale, and fills in `{name}` placeholders. Objects implementing
//! [`core::Translatable`] can override single fields ahead of the store.
//!
//! ```
//! use lingo::core::Translator;
//!
//! let mut translator = Translator::in_memory("en");
//! translator.register("en", "welcome", "Hello {name}, welcome!");
//! assert_eq!(
//!     translator.translate("fa", "welcome", [("name", "John")]),
//!     "Hello John, welcome!"
//! );
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Message stores, fallback resolution and placeholders

pub mod cli;
pub mod config;
pub mod core;
