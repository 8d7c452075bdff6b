//! Compilation recovered from emitted source maps.
//!
//! Bundlers that emit `*.map` files embed the original sources in
//! `sourcesContent`. Each map file becomes one chunk and each
//! `sources[i]` / `sourcesContent[i]` pair one module, which is exactly the
//! shape the extractor needs after a build has already run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::core::{Chunk, Compilation, ExtractError, ModuleSource};

/// The subset of a source map (revision 3) the adapter reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSourceMap {
    #[serde(default)]
    source_root: Option<String>,
    #[serde(default)]
    sources: Vec<Option<String>>,
    #[serde(default)]
    sources_content: Vec<Option<String>>,
}

#[derive(Debug)]
pub struct MappedModule {
    id: String,
    source: Option<String>,
}

impl ModuleSource for MappedModule {
    fn identifier(&self) -> &str {
        &self.id
    }

    fn original_source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// Modules listed by one source map file.
#[derive(Debug)]
pub struct SourceMapChunk {
    pub file: PathBuf,
    modules: Vec<MappedModule>,
}

impl SourceMapChunk {
    fn parse(file: &Path, content: &str) -> serde_json::Result<Self> {
        let raw: RawSourceMap = serde_json::from_str(content)?;
        let source_root = raw.source_root.unwrap_or_default();
        let mut contents = raw.sources_content.into_iter();

        let modules = raw
            .sources
            .into_iter()
            .map(|source| MappedModule {
                id: join_source_root(&source_root, source.as_deref().unwrap_or_default()),
                source: contents.next().flatten(),
            })
            .collect();

        Ok(Self {
            file: file.to_path_buf(),
            modules,
        })
    }
}

impl Chunk for SourceMapChunk {
    fn modules(&self) -> Box<dyn Iterator<Item = &dyn ModuleSource> + '_> {
        Box::new(self.modules.iter().map(|m| m as &dyn ModuleSource))
    }
}

fn join_source_root(root: &str, source: &str) -> String {
    if root.is_empty() {
        source.to_string()
    } else {
        format!("{}/{}", root.trim_end_matches('/'), source)
    }
}

#[derive(Debug)]
pub struct SourceMapCompilation {
    context: PathBuf,
    chunks: Vec<SourceMapChunk>,
    errors: Vec<String>,
}

impl SourceMapCompilation {
    /// Load every `*.map` file under `maps_dir`.
    ///
    /// Maps that cannot be read or parsed are recorded as compilation errors.
    pub fn load(context: &Path, maps_dir: &Path) -> Result<Self, ExtractError> {
        if !maps_dir.is_dir() {
            return Err(ExtractError::MissingInput {
                path: maps_dir.to_path_buf(),
            });
        }

        let mut files: Vec<PathBuf> = WalkDir::new(maps_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "map"))
            .collect();
        files.sort();

        let parsed: Vec<Result<SourceMapChunk, String>> = files
            .par_iter()
            .map(|file| {
                let content = fs::read_to_string(file)
                    .map_err(|e| format!("{}: {}", file.display(), e))?;
                SourceMapChunk::parse(file, &content)
                    .map_err(|e| format!("{}: invalid source map: {}", file.display(), e))
            })
            .collect();

        let mut chunks = Vec::new();
        let mut errors = Vec::new();
        for result in parsed {
            match result {
                Ok(chunk) => chunks.push(chunk),
                Err(error) => errors.push(error),
            }
        }

        debug!(
            maps = chunks.len(),
            errors = errors.len(),
            "loaded source maps"
        );

        Ok(Self {
            context: context.to_path_buf(),
            chunks,
            errors,
        })
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

impl Compilation for SourceMapCompilation {
    fn context(&self) -> &Path {
        &self.context
    }

    fn chunks(&self) -> Box<dyn Iterator<Item = &dyn Chunk> + '_> {
        Box::new(self.chunks.iter().map(|c| c as &dyn Chunk))
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}
