use std::{fs, io, path::Path, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use super::error::ExtractError;

static ESCAPED_SPACES_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\ +").unwrap());

/// What [`write_if_changed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Drop escaped-space runs and every whitespace character.
fn normalize(content: &str) -> String {
    ESCAPED_SPACES_REGEX
        .replace_all(content, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

pub fn is_same_content(left: &str, right: &str) -> bool {
    normalize(left) == normalize(right)
}

/// Compare `content` with the file at `path`.
///
/// A file that cannot be read (missing, not UTF-8, permissions) counts as
/// different.
pub fn is_same_file(path: &Path, content: &str) -> bool {
    match fs::read_to_string(path) {
        Ok(existing) => is_same_content(content, &existing),
        Err(err) => {
            debug!(path = %path.display(), "treating output as changed: {}", err);
            false
        }
    }
}

/// Write `content` to `path` unless the file already holds the same content
/// modulo whitespace. Missing parent directories are created.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome, ExtractError> {
    if is_same_file(path, content) {
        debug!(path = %path.display(), "declaration unchanged, skipping write");
        return Ok(WriteOutcome::Unchanged);
    }

    let to_write_error = |source: io::Error| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, content).map_err(to_write_error)?;

    Ok(WriteOutcome::Written)
}
