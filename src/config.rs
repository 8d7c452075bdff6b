use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".apikeysrc.json";

/// Directories the filesystem scanner never descends into.
pub const DEFAULT_SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "dist"];

/// Errors raised while normalizing extractor options.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{}", not_an_object_message(.found))]
    NotAnObject { found: &'static str },

    #[error("Invalid value for option '{option}': expected {expected}, found {found}")]
    InvalidOption {
        option: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to build module pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn not_an_object_message(found: &str) -> String {
    let mut message = format!("apikeys only accepts an options object, found {}.", found);
    let repository = env!("CARGO_PKG_REPOSITORY");
    if !repository.is_empty() {
        message.push_str(&format!(" See: {}", repository));
    }
    message
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolved extractor options.
///
/// Every field is filled either from the supplied record or from its default,
/// so the rest of the crate never deals with missing options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorConfig {
    /// Path fragments a module identifier must contain.
    pub paths: Vec<String>,
    /// Base name (without extension) of the files to scan.
    pub filename: String,
    /// Output directory, relative to the build root.
    pub output_path: String,
    pub output_filename: String,
    /// Print a warning when the build reports errors.
    pub verbose: bool,
    /// Glob patterns excluded from filesystem scans.
    pub ignores: Vec<String>,
}

fn default_paths() -> Vec<String> {
    ["/src/modules", "/src/components"].map(String::from).to_vec()
}

fn default_filename() -> String {
    "apis".to_string()
}

fn default_output_path() -> String {
    "/src/types/".to_string()
}

fn default_output_filename() -> String {
    "apis-keys.d.ts".to_string()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            filename: default_filename(),
            output_path: default_output_path(),
            output_filename: default_output_filename(),
            verbose: false,
            ignores: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Normalize a raw options value.
    ///
    /// `None` (or an explicit `null`) yields the defaults. Anything other than a
    /// JSON object is rejected. Recognized keys that are present override their
    /// default even when empty; `paths` falls back to the default when it is not
    /// an array.
    pub fn from_value(value: Option<&Value>) -> Result<Self, ConfigError> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Object(map)) => Self::from_map(map),
            Some(other) => Err(ConfigError::NotAnObject {
                found: json_type_name(other),
            }),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(Value::Array(items)) = map.get("paths") {
            config.paths = string_list("paths", items)?;
        }
        if let Some(value) = present(map, "filename") {
            config.filename = string_option("filename", value)?;
        }
        if let Some(value) = present(map, "outputPath") {
            config.output_path = string_option("outputPath", value)?;
        }
        if let Some(value) = present(map, "outputFilename") {
            config.output_filename = string_option("outputFilename", value)?;
        }
        if let Some(value) = present(map, "verbose") {
            config.verbose = value.as_bool().ok_or(ConfigError::InvalidOption {
                option: "verbose",
                expected: "a boolean",
                found: json_type_name(value),
            })?;
        }
        if let Some(value) = present(map, "ignores") {
            let Value::Array(items) = value else {
                return Err(ConfigError::InvalidOption {
                    option: "ignores",
                    expected: "an array of strings",
                    found: json_type_name(value),
                });
            };
            config.ignores = string_list("ignores", items)?;
        }

        Ok(config)
    }

    /// Validate glob patterns in `ignores`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// Where the declaration file lands for a given build root.
    ///
    /// Leading separators on the configured directory are ignored so that
    /// `/src/types/` stays relative to the root.
    pub fn resolve_output_path(&self, context: &Path) -> PathBuf {
        let output_dir = self.output_path.trim_start_matches(['/', '\\']);
        context.join(output_dir).join(&self.output_filename)
    }
}

/// Returns the value for `key` unless it is missing or `null`.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

fn string_option(option: &'static str, value: &Value) -> Result<String, ConfigError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or(ConfigError::InvalidOption {
            option,
            expected: "a string",
            found: json_type_name(value),
        })
}

fn string_list(option: &'static str, items: &[Value]) -> Result<Vec<String>, ConfigError> {
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or(ConfigError::InvalidOption {
                    option,
                    expected: "an array of strings",
                    found: json_type_name(item),
                })
        })
        .collect()
}

pub fn default_config_json() -> Result<String> {
    let config = ExtractorConfig::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: ExtractorConfig,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            let config = ExtractorConfig::from_value(Some(&value))
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: ExtractorConfig::default(),
            from_file: false,
        }),
    }
}
