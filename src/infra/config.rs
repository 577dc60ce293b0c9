//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. CONFIG_FILE environment variable
//! 3. Default: config/dev.toml

use crate::services::sanitizer::{PrepId, DEFAULT_SUBCHAR};
use anyhow::{bail, Context};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Output record format for normalized locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<path>\t<rack_slot>` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SanitizerConfig {
    /// Replacement for illegal identifier characters
    #[serde(default = "default_subchar")]
    pub subchar: String,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self { subchar: default_subchar() }
    }
}

fn default_subchar() -> String {
    DEFAULT_SUBCHAR.to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    prep_id: PrepId,
    output_format: OutputFormat,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prep_id: PrepId::default(),
            output_format: OutputFormat::Text,
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Determine config file path from the CLI value or environment
    pub fn resolve_config_path(cli: Option<&str>) -> String {
        if let Some(path) = cli {
            return path.to_string();
        }

        if let Ok(path) = env::var("CONFIG_FILE") {
            return path;
        }

        "config/dev.toml".to_string()
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let prep_id = parse_subchar(&toml_config.sanitizer.subchar)
            .with_context(|| format!("Invalid [sanitizer] section in {}", path.display()))?;

        Ok(Self {
            prep_id,
            output_format: toml_config.output.format,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries TOML file first, falls back to defaults
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                let reason = format!("{:#}", e);
                warn!(error = %reason, "config_fallback_to_defaults");
                Self::default()
            }
        }
    }

    pub fn prep_id(&self) -> PrepId {
        self.prep_id
    }

    pub fn subchar(&self) -> char {
        self.prep_id.subchar()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Builder method for tests to set the output format
    #[cfg(test)]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

fn parse_subchar(value: &str) -> anyhow::Result<PrepId> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PrepId::new(c),
        _ => bail!("subchar must be exactly one character, got {:?}", value),
    }
}
