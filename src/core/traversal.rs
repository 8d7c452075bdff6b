use indexmap::IndexSet;
use regex::Regex;
use tracing::debug;

use super::{host::Compilation, scanner::scan_keys};

/// Unique keys in first-seen order.
pub type KeySet = IndexSet<String>;

/// Scan every module of every chunk and collect the keys of those whose
/// identifier matches `pattern`.
///
/// Each call starts from an empty set, so nothing carries over between builds.
pub fn collect_keys(compilation: &dyn Compilation, pattern: &Regex) -> KeySet {
    let mut keys = KeySet::new();

    for chunk in compilation.chunks() {
        for module in chunk.modules() {
            let id = module.identifier();
            if !pattern.is_match(id) {
                continue;
            }

            let before = keys.len();
            for key in scan_keys(module.original_source()) {
                if !keys.contains(key) {
                    keys.insert(key.to_string());
                }
            }
            debug!(module = id, new_keys = keys.len() - before, "scanned module");
        }
    }

    keys
}
