//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`GeneratorDefaults`] and [`ExtensionLayout`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--ext-path`, `--root-path`; applied by [`AppConfig::with_paths`])
//! 2. Environment variables (`WFP2_PATHS__EXT_PATH`, `WFP2_GENERATOR__AUTHOR`, ...)
//! 3. Config file (`--config FILE`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wfp2_core::application::{ExtensionLayout, GeneratorDefaults, Timestamp};

use crate::cli::{OutputFormat, PathArgs};

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "WFP2";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where extensions live.
    pub paths: PathsConfig,
    /// Values stamped into generated files.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Extension directory, `typo3conf/ext` below the project root.
    pub ext_path: PathBuf,
    /// Project root; `{generator.file}` is reported relative to it.
    pub root_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub name: String,
    pub author: String,
    /// strftime format of `{generator.date}`.
    pub date_format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// When set, a daily-rotated log file is written here as well.
    pub directory: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            ext_path: PathBuf::from("typo3conf").join("ext"),
            root_path: PathBuf::from("."),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let defaults = GeneratorDefaults::default();
        Self {
            name: defaults.name,
            author: defaults.author,
            date_format: defaults.date_format,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: OutputFormat::Auto,
        }
    }
}

impl AppConfig {
    /// Load configuration from the file and the environment over defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.  The
    /// default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, environment: Environment) -> anyhow::Result<Self> {
        Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(
                environment
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Apply `--ext-path` / `--root-path` on top of the loaded values.
    pub fn with_paths(mut self, paths: &PathArgs) -> Self {
        if let Some(ext_path) = &paths.ext_path {
            self.paths.ext_path = ext_path.clone();
        }
        if let Some(root_path) = &paths.root_path {
            self.paths.root_path = root_path.clone();
        }
        self
    }

    /// Extension layout for the configured paths.
    pub fn layout(&self) -> ExtensionLayout {
        ExtensionLayout::new(&self.paths.ext_path, &self.paths.root_path)
    }

    /// Render defaults for the configured generator identity.
    pub fn generator_defaults(&self) -> GeneratorDefaults {
        GeneratorDefaults {
            name: self.generator.name.clone(),
            author: self.generator.author.clone(),
            date_format: self.generator.date_format.clone(),
            timestamp: Timestamp::Now,
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.wfp2.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("de", "wfp2", "wfp2")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".wfp2.toml"))
    }
}
