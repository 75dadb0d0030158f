/// Per-object translation overrides.
///
/// Implemented by values that carry their own wording for some fields, for
/// example a form model with custom validation messages. The translator asks
/// the object first and falls back to the shared store when it answers `None`
/// or an empty string.
///
/// Implementations are called on every struct-aware resolution and should be
/// cheap and side-effect free.
///
/// # Examples
///
/// ```
/// use lingo::core::Translatable;
///
/// struct Person;
///
/// impl Translatable for Person {
///     fn translation(&self, locale: &str, key: &str, field: &str) -> Option<String> {
///         match (locale, key, field) {
///             ("en", "required", "name") => Some("Name is required".to_string()),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(
///     Person.translation("en", "required", "name").as_deref(),
///     Some("Name is required")
/// );
/// ```
pub trait Translatable {
    fn translation(&self, locale: &str, key: &str, field: &str) -> Option<String>;
}

/// Ask `object` for an override, treating an empty answer as no override.
pub(crate) fn object_override(
    object: Option<&dyn Translatable>,
    locale: &str,
    key: &str,
    field: &str,
) -> Option<String> {
    object?
        .translation(locale, key, field)
        .filter(|message| !message.is_empty())
}
