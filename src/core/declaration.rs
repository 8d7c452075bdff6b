use super::traversal::KeySet;

/// Render the keys as a literal tuple type declaration.
///
/// ```
/// use apikeys::core::{KeySet, render_declaration};
///
/// let keys: KeySet = ["login", "logout"].into_iter().map(String::from).collect();
/// assert_eq!(
///     render_declaration(keys),
///     "declare const keys: ['login', 'logout']"
/// );
/// ```
pub fn render_declaration(keys: KeySet) -> String {
    let elements = keys
        .into_iter()
        .map(|key| format!("'{}'", key))
        .collect::<Vec<_>>()
        .join(", ");

    format!("declare const keys: [{}]", elements)
}
