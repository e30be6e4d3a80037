//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `api-model.toml` files
//! and merging with command-line arguments.

use std::path::{Path, PathBuf};

use api_model::{FileSelection, ReaderOptions, DEFAULT_INCLUDE};
use serde::Deserialize;

use crate::error::{CliResult, ConfigError};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "api-model.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input configuration.
    pub input: InputConfig,

    /// Output configuration.
    pub output: OutputConfig,

    /// Model extraction options.
    pub model: ModelConfig,
}

/// Input configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Root directory of the specification sources.
    pub dir: PathBuf,

    /// Regexes selecting the files that contribute to the model.
    pub include: Vec<String>,

    /// Whether to honor `.gitignore` files while scanning.
    pub respect_gitignore: bool,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for the generated model.
    pub dir: PathBuf,

    /// Output filename.
    pub file: String,

    /// Whether to pretty-print the JSON.
    pub pretty: bool,
}

/// Model extraction options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Copy documentation comments into the model.
    pub documentation: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            include: vec![DEFAULT_INCLUDE.to_string()],
            respect_gitignore: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
            file: "model.json".to_string(),
            pretty: true,
        }
    }
}

impl Config {
    /// Full path of the output file.
    pub fn output_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.file)
    }

    /// File selection built from the include patterns.
    pub fn selection(&self) -> Result<FileSelection, ConfigError> {
        Ok(FileSelection::new(&self.input.include)?)
    }

    pub fn reader_options(&self) -> ReaderOptions {
        ReaderOptions {
            documentation: self.model.documentation,
        }
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists there, returns default configuration. An
    /// explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::not_found(path.to_path_buf()).into());
                }
                path.to_path_buf()
            }
            None => {
                let default = PathBuf::from(CONFIG_FILENAME);
                if !default.exists() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref input) = args.input {
            config.input.dir = input.clone();
        }

        if !args.include.is_empty() {
            config.input.include = args.include.clone();
        }

        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref file) = args.output_file {
            config.output.file = file.clone();
        }

        if let Some(documentation) = args.documentation {
            config.model.documentation = documentation;
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# api-model configuration file

[input]
# Root directory of the specification sources
dir = "."

# Regular expressions selecting the files that contribute to the model.
# The bundled compiler declarations (paths containing "ntypescript") are always excluded.
include = ["\\.ts$"]

# Skip files ignored by .gitignore
respect_gitignore = true

[output]
# Output directory for the generated model
dir = "./generated"

# Output file name
file = "model.json"

# Pretty-print the JSON output
pretty = true

[model]
# Copy /** documentation comments */ into the model
documentation = false
"#
    }

    /// Write the default configuration file to `path`.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn init(path: &Path, force: bool) -> CliResult<()> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        std::fs::write(path, Self::default_config_content()).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Input directory override.
    pub input: Option<PathBuf>,

    /// Include pattern override (replaces the configured list when non-empty).
    pub include: Vec<String>,

    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Output filename override.
    pub output_file: Option<String>,

    /// Documentation override.
    pub documentation: Option<bool>,
}
