//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use ukwac_core::{ConllFormat, ReaderConfig};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Corpus reading configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Corpus reading configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Column layout name (`wacky` or `conll-x`)
    pub columns: String,

    /// Reject blocks that end without `</text>`
    pub strict: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            columns: "wacky".to_string(),
            strict: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Load configuration from `path`, or defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

impl InputConfig {
    /// Resolve the column layout name
    pub fn column_format(&self) -> Result<ConllFormat> {
        ConllFormat::from_name(&self.columns)
            .ok_or_else(|| CliError::UnknownColumns(self.columns.clone()).into())
    }

    /// Reader configuration for the sentence stream
    pub fn reader_config(&self) -> ReaderConfig {
        if self.strict {
            ReaderConfig::strict()
        } else {
            ReaderConfig::lenient()
        }
    }
}
