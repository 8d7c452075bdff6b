use std::{env, path::PathBuf};

use anyhow::{Context as _, Result};

use super::args::CommonArgs;
use crate::{
    adapters::{FsCompilation, SourceMapCompilation},
    config::{CONFIG_FILE_NAME, ExtractorConfig, load_config},
    core::Compilation,
    plugin::ApiKeysPlugin,
};

/// Resolved inputs for one CLI build: where the project is, which options
/// apply, and where module sources come from.
pub struct BuildContext {
    pub config: ExtractorConfig,
    pub root_dir: PathBuf,
    pub maps_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl BuildContext {
    /// Load the config file for the root and apply command line overrides.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root = match &args.root {
            Some(root) => root.clone(),
            None => env::current_dir().context("Failed to read current directory")?,
        };
        let root_dir = root
            .canonicalize()
            .with_context(|| format!("Invalid root directory: {}", root.display()))?;

        let config_result = load_config(&root_dir)?;

        // In verbose mode, inform user if using default config
        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if !args.paths.is_empty() {
            config.paths = args.paths.clone();
        }
        if let Some(filename) = &args.filename {
            config.filename = filename.clone();
        }
        if let Some(output_path) = &args.output_path {
            config.output_path = output_path.clone();
        }
        if let Some(output_filename) = &args.output_filename {
            config.output_filename = output_filename.clone();
        }
        config.verbose |= args.verbose;

        let maps_dir = args.maps.as_ref().map(|dir| root_dir.join(dir));

        Ok(Self {
            config,
            root_dir,
            maps_dir,
            verbose: args.verbose,
        })
    }

    pub fn plugin(&self) -> Result<ApiKeysPlugin> {
        ApiKeysPlugin::from_config(self.config.clone()).context("Invalid extractor options")
    }

    /// Build the compilation from source maps when `--maps` was given,
    /// otherwise from the source tree under the root.
    pub fn load_compilation(&self) -> Result<Box<dyn Compilation>> {
        let compilation: Box<dyn Compilation> = match &self.maps_dir {
            Some(maps_dir) => Box::new(SourceMapCompilation::load(&self.root_dir, maps_dir)?),
            None => Box::new(FsCompilation::scan(&self.root_dir, &self.config.ignores)?),
        };
        Ok(compilation)
    }
}
