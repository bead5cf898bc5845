//! YAML configuration file support for colorvars.
//!
//! A run is driven by one [`ColorVarsConfig`], built once at startup and
//! passed down explicitly. Every section is optional; omitted fields take
//! the same defaults as the library types.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # colorvars run configuration
//! version: "1.0"
//! name: "design tokens"
//!
//! format:
//!   version: 1
//!   indent: "  "
//!   normalize_commas: true
//!   blank_line_between_rules: true
//!   strip_comments: false
//!   sort_declarations: false
//!
//! dedup:
//!   var_prefix: "color"
//!   root_selector: ":root"
//!   emit_provenance: true
//! ```

use std::fs;
use std::path::Path;

use dedup::DedupConfig;
use serde::{Deserialize, Serialize};
use stylesheet::FormatConfig;
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for one colorvars run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ColorVarsConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Formatter settings applied before extraction and when printing
    #[serde(default)]
    pub format: FormatConfig,

    /// Naming and layout of generated custom properties
    #[serde(default)]
    pub dedup: DedupConfig,
}

impl ColorVarsConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ColorVarsConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.format
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("format: {err}")))?;
        self.dedup
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("dedup: {err}")))?;

        Ok(())
    }
}

impl Default for ColorVarsConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            format: FormatConfig::default(),
            dedup: DedupConfig::default(),
        }
    }
}
