//! Compilation backed by source files on disk.
//!
//! Every TypeScript file under the root becomes one module whose original
//! source is the file content itself. Useful when no bundler is involved, or to
//! regenerate the declaration from a clean checkout.

use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::DEFAULT_SKIPPED_DIRS;
use crate::core::{Chunk, Compilation, ExtractError, ModuleSource};
use crate::utils::to_module_id;

// Module patterns only ever accept `.ts` and `.tsx` identifiers.
const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx"];

#[derive(Debug)]
pub struct FileModule {
    id: String,
    source: Option<String>,
}

impl ModuleSource for FileModule {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn original_source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// A single-chunk compilation of every script file under a root directory.
#[derive(Debug)]
pub struct FsCompilation {
    context: PathBuf,
    modules: Vec<FileModule>,
}

fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

fn is_skipped_dir(name: &str) -> bool {
    DEFAULT_SKIPPED_DIRS.contains(&name)
}

impl FsCompilation {
    /// Walk `root` and read every script file not matched by `ignores`.
    ///
    /// A file that cannot be read stays in the compilation without source,
    /// like a module the host has no original content for. It contributes no
    /// keys and never fails the build.
    pub fn scan(root: &Path, ignores: &[String]) -> Result<Self, ExtractError> {
        if !root.is_dir() {
            return Err(ExtractError::MissingInput {
                path: root.to_path_buf(),
            });
        }

        let ignore_patterns: Vec<Pattern> = ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();

        let mut paths = Vec::new();

        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !entry.file_name().to_str().is_some_and(is_skipped_dir)
        });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!("skipping inaccessible path: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_script(path) {
                continue;
            }

            let path_str = path.to_string_lossy();
            if ignore_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }
            paths.push(path.to_path_buf());
        }

        let mut modules: Vec<FileModule> = paths
            .par_iter()
            .map(|path| {
                let source = fs::read_to_string(path)
                    .map_err(|e| debug!(path = %path.display(), "no source for module: {}", e))
                    .ok();
                FileModule {
                    id: to_module_id(path),
                    source,
                }
            })
            .collect();
        modules.sort_by(|a, b| a.id.cmp(&b.id));

        debug!(
            root = %root.display(),
            modules = modules.len(),
            "scanned source tree"
        );

        Ok(Self {
            context: root.to_path_buf(),
            modules,
        })
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

impl Chunk for FsCompilation {
    fn modules(&self) -> Box<dyn Iterator<Item = &dyn ModuleSource> + '_> {
        Box::new(self.modules.iter().map(|m| m as &dyn ModuleSource))
    }
}

impl Compilation for FsCompilation {
    fn context(&self) -> &Path {
        &self.context
    }

    fn chunks(&self) -> Box<dyn Iterator<Item = &dyn Chunk> + '_> {
        Box::new(std::iter::once(self as &dyn Chunk))
    }
}
