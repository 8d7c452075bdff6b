//! The key extractor as a build plugin.
//!
//! [`ApiKeysPlugin`] taps two lifecycle hooks on a [`Compiler`]:
//!
//! - `emit`: scan the compilation, render the declaration and write it when
//!   it changed
//! - `done`: report (when verbose) that extraction paused on a failed build
//!
//! ```rust,no_run
//! use std::{path::PathBuf, sync::Arc};
//!
//! use apikeys::core::Compiler;
//! use apikeys::plugin::ApiKeysPlugin;
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let plugin = ApiKeysPlugin::new(Some(&json!({ "filename": "endpoints" })))?;
//! let mut compiler = Compiler::new(Some(PathBuf::from(".")));
//! compiler.apply(Arc::new(plugin));
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ConfigError, ExtractorConfig};
use crate::core::{
    BuildStats, Compilation, Compiler, EmittedDeclaration, ExtractError, KeySet, Plugin,
    collect_keys, is_same_file, module_pattern, render_declaration, write_if_changed,
};

pub const PLUGIN_NAME: &str = "apikeys-plugin";

/// Declaration content computed for one compilation, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDeclaration {
    pub path: PathBuf,
    pub keys: Vec<String>,
    pub content: String,
}

impl PreparedDeclaration {
    /// Whether the file on disk already matches, ignoring whitespace.
    pub fn is_up_to_date(&self) -> bool {
        is_same_file(&self.path, &self.content)
    }
}

#[derive(Debug, Clone)]
pub struct ApiKeysPlugin {
    config: ExtractorConfig,
    pattern: Regex,
}

impl ApiKeysPlugin {
    /// Build the plugin from a raw options value.
    ///
    /// Fails when `options` is present but not a plain object.
    pub fn new(options: Option<&Value>) -> Result<Self, ConfigError> {
        Self::from_config(ExtractorConfig::from_value(options)?)
    }

    pub fn from_config(config: ExtractorConfig) -> Result<Self, ConfigError> {
        let pattern = module_pattern(&config.paths, &config.filename)?;
        Ok(Self { config, pattern })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Keys of every matching module in `compilation`.
    pub fn extract(&self, compilation: &dyn Compilation) -> KeySet {
        collect_keys(compilation, &self.pattern)
    }

    /// Scan and render without touching the filesystem.
    ///
    /// The output path is resolved against the compilation's own context, so
    /// a host whose root moves between builds still writes to the right place.
    pub fn prepare(&self, compilation: &dyn Compilation) -> PreparedDeclaration {
        let path = self.config.resolve_output_path(compilation.context());
        let keys = self.extract(compilation);
        let key_list: Vec<String> = keys.iter().cloned().collect();
        let content = render_declaration(keys);

        PreparedDeclaration {
            path,
            keys: key_list,
            content,
        }
    }

    /// One full extraction pass: scan, render, write when changed.
    pub fn emit(
        &self,
        compilation: &dyn Compilation,
    ) -> Result<EmittedDeclaration, ExtractError> {
        let prepared = self.prepare(compilation);
        let outcome = write_if_changed(&prepared.path, &prepared.content)?;
        debug!(
            path = %prepared.path.display(),
            keys = prepared.keys.len(),
            ?outcome,
            "extraction pass finished"
        );

        Ok(EmittedDeclaration {
            path: prepared.path,
            keys: prepared.keys,
            outcome,
        })
    }

    fn done(&self, stats: &dyn BuildStats) {
        if stats.has_errors() && self.config.verbose {
            warn!("{}: pausing due to build errors", PLUGIN_NAME);
        }
    }
}

impl Plugin for ApiKeysPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn apply(self: Arc<Self>, compiler: &mut Compiler) {
        if compiler.context().is_none() {
            warn!(
                "{}: compiler context not defined. Plugin disabled...",
                PLUGIN_NAME
            );
            return;
        }

        if !self.config.paths.is_empty() {
            let plugin = Arc::clone(&self);
            compiler
                .hooks
                .tap_emit(PLUGIN_NAME, move |compilation| plugin.emit(compilation));
        }

        compiler
            .hooks
            .tap_done(PLUGIN_NAME, move |stats| self.done(stats));
    }
}
