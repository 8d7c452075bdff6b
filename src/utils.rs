//! Common utility functions shared across the codebase.

use std::path::Path;

/// Turns a filesystem path into a module identifier.
///
/// Identifiers always use `/` so that configured path fragments such as
/// `/src/modules` match on every platform.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use apikeys::utils::to_module_id;
///
/// assert_eq!(to_module_id(Path::new("/app/src/apis.ts")), "/app/src/apis.ts");
/// ```
pub fn to_module_id(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
