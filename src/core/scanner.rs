use std::sync::LazyLock;

use regex::Regex;

/// A word/hyphen token followed by `:` and an opening brace, i.e. the key of
/// an object literal whose value is itself an object literal.
static OBJECT_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9A-Za-z_-]+)\s*:\s*\{").unwrap());

/// Lazily yield every key-like token in `source`.
///
/// This is a surface-syntax heuristic: quoted or computed keys are not seen,
/// and colon-brace sequences inside comments or strings are picked up.
/// Absent source yields nothing.
pub fn scan_keys(source: Option<&str>) -> impl Iterator<Item = &str> {
    source.into_iter().flat_map(|text| {
        OBJECT_KEY_REGEX
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .map(|key| key.as_str())
    })
}
