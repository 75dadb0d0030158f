//! `{name}` placeholder handling for message templates.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a single `{name}` token; braces are not allowed inside the name.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Replace every `{name}` in `template` with the value mapped to `name`.
///
/// Each name gets a single replacement pass, so inserted values are not
/// re-scanned for their own placeholders by the same name. Tokens without a
/// mapping are left as they are, and mappings without a token are ignored.
///
/// # Examples
///
/// ```
/// use lingo::core::placeholder::substitute;
///
/// let message = substitute("Hello {name}, welcome!", [("name", "John")]);
/// assert_eq!(message, "Hello John, welcome!");
/// assert_eq!(substitute("Hi {who}", [("name", "John")]), "Hi {who}");
/// ```
pub fn substitute<I, K, V>(template: &str, placeholders: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut message = template.to_string();
    for (name, value) in placeholders {
        let token = format!("{{{}}}", name.as_ref());
        if message.contains(&token) {
            message = message.replace(&token, value.as_ref());
        }
    }
    message
}

/// Distinct placeholder names in `template`, in order of first occurrence.
pub fn placeholder_names(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
