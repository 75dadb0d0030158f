//! Translation core: message stores, locale fallback and placeholders.
//!
//! ## Module Structure
//!
//! - `store`: message backends (`MemoryStore`, `JsonStore`)
//! - `translator`: fallback resolution and translation entry points
//! - `translatable`: per-object overrides consulted before the store
//! - `placeholder`: `{name}` substitution

mod error;
pub mod placeholder;
pub mod store;
mod translatable;
mod translator;

pub use error::LoadError;
pub use store::{JsonStore, MemoryStore, MessageStore, Record};
pub use translatable::Translatable;
pub use translator::{JsonTranslator, MemoryTranslator, Translator};
